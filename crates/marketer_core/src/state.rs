use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::view_model::{AppViewModel, SentenceRowView};
use crate::ScanOutcome;

/// Number of sentence slots shown before the first scan.
pub const SENTENCE_SLOTS: usize = 10;

/// Target sentence length sent with every regenerate request.
pub const GENERATE_LENGTH: u32 = 60;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    url: String,
    keywords: Vec<String>,
    sentences: Vec<String>,
    next_request_id: RequestId,
    in_flight: BTreeSet<RequestId>,
    latest_scan: Option<RequestId>,
    latest_regenerate: BTreeMap<usize, RequestId>,
    #[serde(skip)]
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url: String::new(),
            keywords: Vec::new(),
            sentences: vec![String::new(); SENTENCE_SLOTS],
            next_request_id: 1,
            in_flight: BTreeSet::new(),
            latest_scan: None,
            latest_regenerate: BTreeMap::new(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// True while at least one request is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url: self.url.clone(),
            keywords: self.keywords.clone(),
            sentences: self
                .sentences
                .iter()
                .enumerate()
                .map(|(slot, text)| SentenceRowView {
                    slot,
                    text: text.clone(),
                })
                .collect(),
            is_loading: self.is_loading(),
            in_flight: self.in_flight.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_scan(&mut self) -> RequestId {
        let request_id = self.allocate_request();
        self.latest_scan = Some(request_id);
        request_id
    }

    /// Starts a regenerate request for `slot`, or `None` if the slot is out of range.
    pub(crate) fn begin_regenerate(&mut self, slot: usize) -> Option<RequestId> {
        if slot >= self.sentences.len() {
            return None;
        }
        let request_id = self.allocate_request();
        self.latest_regenerate.insert(slot, request_id);
        Some(request_id)
    }

    /// Completes a scan request. Returns false if the response is stale.
    pub(crate) fn finish_scan(&mut self, request_id: RequestId) -> bool {
        self.complete_request(request_id);
        if self.latest_scan != Some(request_id) {
            return false;
        }
        self.latest_scan = None;
        true
    }

    /// Completes a regenerate request. Returns false if the response is stale.
    pub(crate) fn finish_regenerate(&mut self, request_id: RequestId, slot: usize) -> bool {
        self.complete_request(request_id);
        if self.latest_regenerate.get(&slot) != Some(&request_id) {
            return false;
        }
        self.latest_regenerate.remove(&slot);
        true
    }

    /// Replaces the results wholesale. Outstanding regenerates are superseded.
    pub(crate) fn apply_scan(&mut self, outcome: ScanOutcome) {
        self.latest_regenerate.clear();
        self.keywords = outcome.keywords;
        self.sentences = outcome.sentences;
        self.dirty = true;
    }

    pub(crate) fn replace_sentence(&mut self, slot: usize, sentence: String) -> bool {
        match self.sentences.get_mut(slot) {
            Some(existing) => {
                *existing = sentence;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    fn allocate_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.insert(request_id);
        self.dirty = true;
        request_id
    }

    fn complete_request(&mut self, request_id: RequestId) {
        if self.in_flight.remove(&request_id) {
            self.dirty = true;
        }
    }
}
