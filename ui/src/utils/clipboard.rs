//! Clipboard handling for the generated pay link.
//!
//! # Platform Support
//! * Native (Windows, macOS, Linux): via the arboard crate
//! * Web (WASM): via egui's output queue (the browser applies it at the
//!   end of the frame)

/// Copy `text` to the system clipboard.
///
/// Returns whether the copy succeeded; failures (e.g. no clipboard on a
/// headless session) are logged and otherwise ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_text(_ctx: &egui::Context, text: &str) -> bool {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_owned()) {
            Ok(()) => {
                log::debug!("pay link copied to clipboard");
                true
            }
            Err(e) => {
                log::warn!("Failed to write clipboard: {e}");
                false
            }
        },
        Err(e) => {
            log::warn!("Failed to access clipboard: {e}");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_text(ctx: &egui::Context, text: &str) -> bool {
    ctx.copy_text(text.to_owned());
    true
}
