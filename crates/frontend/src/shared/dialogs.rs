//! Blocking browser dialogs (`alert`, `prompt`)

/// Show a modal alert; silently ignored outside a browser window
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask for a line of text; `None` when dismissed or unavailable
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok()?
}
