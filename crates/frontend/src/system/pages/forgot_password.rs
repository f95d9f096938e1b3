use contracts::system::auth::ForgotPasswordForm;
use leptos::prelude::*;

use super::{AuthBox, AuthField};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let sent_to = RwSignal::new(None::<String>);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ForgotPasswordForm {
            email: email.get_untracked().trim().to_string(),
        };
        match form.validate() {
            Ok(()) => {
                set_error_message.set(None);
                log::info!("password reset link requested for {}", form.email);
                sent_to.set(Some(form.email));
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthBox
            title="Forgot password"
            subtitle="Enter your email and we will send you a reset link"
            error=error_message
        >
            <Show
                when=move || sent_to.get().is_some()
                fallback=move || view! {
                    <form on:submit=on_submit>
                        <AuthField id="email" label="Email" kind="email" value=email />
                        <button type="submit" class="btn-primary">"Send reset link"</button>
                    </form>
                }
            >
                <div class="success-message">
                    {move || format!("A reset link was sent to {}", sent_to.get().unwrap_or_default())}
                </div>
                <a class="btn-secondary" href="/reset-password">"I have a reset link"</a>
            </Show>

            <div class="login-info">
                <p><a href="/login">"Back to sign in"</a></p>
            </div>
        </AuthBox>
    }
}
