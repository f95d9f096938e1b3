//! Top navigation bar: sidebar toggle, title, unread counters, profile and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::config::use_config;
use crate::shared::data::use_store;
use crate::shared::icons::icon;
use contracts::domain::a003_chat::aggregate::total_unread;
use contracts::domain::a004_notification::aggregate::unread_count;
use leptos::prelude::*;

#[component]
fn CounterBadge(#[prop(into)] count: Signal<usize>) -> impl IntoView {
    move || {
        let n = count.get();
        (n > 0).then(|| view! { <span class="top-header__badge">{n}</span> })
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();
    let store = use_store();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let unread_notifications =
        Signal::derive(move || store.notifications.with(|n| unread_count(n.items())));
    let unread_messages =
        Signal::derive(move || store.conversations.with(|c| total_unread(c.items())));

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{config.app.title.clone()}</span>
            </div>

            <div class="top-header__actions">
                <a class="top-header__icon-btn" href="/chat" title="Messages">
                    {icon("message-square")}
                    <CounterBadge count=unread_messages />
                </a>

                <a class="top-header__icon-btn" href="/notifications" title="Notifications">
                    {icon("bell")}
                    <CounterBadge count=unread_notifications />
                </a>

                <a class="top-header__icon-btn" href="/settings" title="Settings">
                    {icon("settings")}
                </a>

                <a class="top-header__user" href="/profile" title="Profile">
                    <span class="top-header__avatar">
                        {move || store.profile.with(|p| p.initials())}
                    </span>
                    <span>{move || store.profile.with(|p| p.name.clone())}</span>
                </a>

                <a
                    class="top-header__icon-btn"
                    href="/login"
                    title="Log out"
                    on:click=move |_| log::info!("admin logged out")
                >
                    {icon("log-out")}
                </a>
            </div>
        </header>
    }
}
