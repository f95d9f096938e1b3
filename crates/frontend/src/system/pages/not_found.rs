use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    Effect::new(move |_| log::warn!("no route for {}", location.pathname.get()));

    view! {
        <PageFrame page_id="system--not-found" category=PAGE_CAT_SYSTEM>
            <div class="not-found">
                <div class="not-found__icon">{icon("alert-circle")}</div>
                <h1 class="page__title">"Page not found"</h1>
                <p class="not-found__path">{path}</p>
                <a href="/" class="button button--primary">
                    {icon("home")}
                    " Back to dashboard"
                </a>
            </div>
        </PageFrame>
    }
}
