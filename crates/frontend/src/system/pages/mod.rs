//! Screens rendered outside the shell: sign-in flow and not-found.

pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod signup;

use leptos::prelude::*;

/// Centered card used by every auth screen
#[component]
pub fn AuthBox(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    error: ReadSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Community Admin"</h1>
                <h2>{title}</h2>
                <p class="login-box__subtitle">{subtitle}</p>

                <Show when=move || error.get().is_some()>
                    <div class="error-message">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                {children()}
            </div>
        </div>
    }
}

/// Text input bound to a signal, in the auth form layout
#[component]
pub fn AuthField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
