/// Clipboard helpers (developer page UPI id)
use log::{error, info};

/// Copy text to the system clipboard. Returns true on success.
pub fn copy_to_clipboard(text: &str, context: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(_) => {
                info!("[Clipboard] Copied {} to clipboard", context);
                true
            }
            Err(e) => {
                error!("[Clipboard] Failed to copy {} to clipboard: {}", context, e);
                false
            }
        },
        Err(e) => {
            error!("[Clipboard] Failed to access clipboard: {}", e);
            false
        }
    }
}
