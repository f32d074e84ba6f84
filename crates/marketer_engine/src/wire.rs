//! JSON bodies exchanged with the generation service.

use serde::{Deserialize, Serialize};

use crate::{GenerateReply, ScanReply};

#[derive(Debug, Serialize)]
pub(crate) struct ScanRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub keywords: &'a [String],
    pub length: u32,
}

/// Scan responses come in two shapes: a `sentences` list, or the reference
/// service's fixed `sentence30`/`sentence60`/`sentence90` fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScanResponse {
    Listed {
        keywords: Vec<String>,
        sentences: Vec<String>,
    },
    ByLength {
        keywords: Vec<String>,
        sentence30: String,
        sentence60: String,
        sentence90: String,
    },
}

impl From<ScanResponse> for ScanReply {
    fn from(response: ScanResponse) -> Self {
        match response {
            ScanResponse::Listed {
                keywords,
                sentences,
            } => ScanReply {
                keywords,
                sentences,
            },
            ScanResponse::ByLength {
                keywords,
                sentence30,
                sentence60,
                sentence90,
            } => ScanReply {
                keywords,
                sentences: vec![sentence30, sentence60, sentence90],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub sentence: String,
}

impl From<GenerateResponse> for GenerateReply {
    fn from(response: GenerateResponse) -> Self {
        GenerateReply {
            sentence: response.sentence,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_scan_body_maps_directly() {
        let body = r#"{"keywords":["a"],"sentences":["one","two"]}"#;
        let reply: ScanReply = serde_json::from_str::<ScanResponse>(body).unwrap().into();
        assert_eq!(reply.keywords, vec!["a"]);
        assert_eq!(reply.sentences, vec!["one", "two"]);
    }

    #[test]
    fn by_length_scan_body_keeps_length_order() {
        let body = r#"{"keywords":[],"sentence90":"long","sentence30":"short","sentence60":"mid"}"#;
        let reply: ScanReply = serde_json::from_str::<ScanResponse>(body).unwrap().into();
        assert_eq!(reply.sentences, vec!["short", "mid", "long"]);
    }

    #[test]
    fn mistyped_scan_body_is_rejected() {
        let body = r#"{"keywords":"a","sentences":["one"]}"#;
        assert!(serde_json::from_str::<ScanResponse>(body).is_err());
    }

    #[test]
    fn generate_request_serializes_length() {
        let keywords = vec!["k".to_string()];
        let json = serde_json::to_value(GenerateRequest {
            keywords: &keywords,
            length: 60,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"keywords": ["k"], "length": 60}));
    }
}
