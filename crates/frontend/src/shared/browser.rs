//! Thin wrappers over `window.alert` / `window.confirm`.

/// Shows a blocking alert. Falls back to the console without a window.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(w) => {
            let _ = w.alert_with_message(message);
        }
        None => log::warn!("alert: {message}"),
    }
}

/// Asks the user to confirm; `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Standard delete guard.
pub fn confirm_delete(kind: &str, name: &str) -> bool {
    confirm(&format!("Delete {} \"{}\"? This cannot be undone.", kind.to_lowercase(), name))
}
