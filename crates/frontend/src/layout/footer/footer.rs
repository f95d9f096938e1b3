use crate::shared::config::use_config;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let year = config.today().year();

    view! {
        <footer data-zone="footer" class="app-footer">
            <span>{format!("© {year} {}", config.app.footer_text)}</span>
        </footer>
    }
}
