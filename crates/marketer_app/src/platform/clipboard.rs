use arboard::Clipboard;
use marketer_logging::{marketer_debug, marketer_error, marketer_warn};

/// System clipboard access.
///
/// The handle is kept open for the life of the app: on X11 the copied text is
/// served by the process that owns the clipboard, so dropping it would lose
/// the contents.
#[derive(Default)]
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write failures are logged and otherwise ignored.
    pub fn set_text(&mut self, text: &str) {
        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(cb) => self.clipboard = Some(cb),
                Err(e) => {
                    marketer_warn!("Failed to initialize clipboard for copy: {}", e);
                    return;
                }
            }
        }
        if let Some(cb) = self.clipboard.as_mut() {
            match cb.set_text(text.to_owned()) {
                Ok(()) => marketer_debug!("Copied {} chars to clipboard", text.chars().count()),
                Err(e) => marketer_error!("Failed to set clipboard text: {}", e),
            }
        }
    }
}
