use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::data::DataStore;
use crate::shared::theme::{apply_theme, thaw_theme};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let config = load_config();
    log::info!("{} starting", config.app.title);

    let store = DataStore::seeded();
    store
        .settings
        .update_untracked(|s| s.items_per_page = config.lists.default_page_size);
    provide_context(config);
    provide_context(store);

    // Follow the theme chosen on the settings page
    let initial = store.settings.with_untracked(|s| s.theme);
    let thaw_theme_signal = RwSignal::new(thaw_theme(initial));
    Effect::new(move |_| {
        let theme = store.settings.with(|s| s.theme);
        apply_theme(theme);
        thaw_theme_signal.set(thaw_theme(theme));
    });

    view! {
        <ConfigProvider theme=thaw_theme_signal>
            <AppRoutes />
        </ConfigProvider>
    }
}
