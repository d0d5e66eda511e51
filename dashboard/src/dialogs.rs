//! confirmation and notification prompts

/// user-facing prompts the screen needs
///
/// injected so the screen logic runs without a browser.
pub trait Dialogs {
    /// blocking yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// blocking message, used for transport errors
    fn notify(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or(false),
            None => {
                log::warn!("no window, refusing confirmation: {}", message);
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show alert: {}", message);
        }
    }
}
