use std::fmt::Write;

use marketer_core::{AppViewModel, Notification};

use super::toasts::format_toast;

pub const TITLE: &str = "Keyword and Marketing Sentences Generator";

/// Renders the whole page as text. While a request is outstanding the result
/// lists are replaced by a processing indicator.
pub fn render<'a>(
    view: &AppViewModel,
    toasts: impl IntoIterator<Item = &'a Notification>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {TITLE} ===");
    let url = if view.url.is_empty() {
        "(enter website URL)"
    } else {
        view.url.as_str()
    };
    let _ = writeln!(out, "URL: {url}");

    if view.is_loading {
        let _ = writeln!(out, "Processing... ({} pending)", view.in_flight);
    } else {
        if !view.keywords.is_empty() {
            let _ = writeln!(out, "Keywords:");
            for (index, keyword) in view.keywords.iter().enumerate() {
                let _ = writeln!(out, "  {:>2}. {keyword}", index + 1);
            }
        }
        for row in &view.sentences {
            let _ = writeln!(out, "Sentence {}: {}", row.slot + 1, row.text);
        }
    }

    for toast in toasts {
        let _ = writeln!(out, "{}", format_toast(toast));
    }
    out
}
