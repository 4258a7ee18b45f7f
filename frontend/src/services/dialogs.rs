use shared::Confirmation;

/// `window.confirm`. Anything but an explicit OK counts as "no".
pub struct BrowserConfirm;

impl Confirmation for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
