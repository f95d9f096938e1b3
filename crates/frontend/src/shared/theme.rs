//! Applies the colour theme picked on the settings page.

use contracts::domain::a008_settings::Theme;
use contracts::domain::common::Choice;
use web_sys::window;

/// Sets `data-theme` on `<body>` so the stylesheet can switch palettes.
pub fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.code());
    }
}

/// Matching thaw palette for the component library.
pub fn thaw_theme(theme: Theme) -> thaw::Theme {
    match theme {
        Theme::Light => thaw::Theme::light(),
        Theme::Dark => thaw::Theme::dark(),
    }
}
