//! Clipboard write for the copy action.
//!
//! The write is fire-and-forget: the page shows its success notice without
//! waiting for the browser's promise. SSR paths no-op.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Write `text` to the system clipboard. Returns `false` when the clipboard
/// API is unavailable.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
