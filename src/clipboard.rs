//! Clipboard sink for share links.

use arboard::Clipboard;

/// Destination for copied share links.
pub trait LinkClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard, opened on first use.
///
/// Opening is deferred so that a headless session without a clipboard
/// still starts; the failure surfaces only when the user shares.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkClipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        if self.clipboard.is_none() {
            let opened =
                Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
            self.clipboard = Some(opened);
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Err("Clipboard unavailable".to_string());
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}
