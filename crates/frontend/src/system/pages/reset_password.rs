use contracts::domain::a008_settings::MIN_PASSWORD_LEN;
use contracts::system::auth::ResetPasswordForm;
use leptos::prelude::*;

use super::{AuthBox, AuthField};
use crate::shared::browser::alert;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                set_error_message.set(None);
                password.set(String::new());
                confirm_password.set(String::new());
                log::info!("password reset submitted");
                alert("Password updated. Please sign in with the new password.");
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthBox
            title="Reset password"
            subtitle=format!("Choose a new password of at least {MIN_PASSWORD_LEN} characters")
            error=error_message
        >
            <form on:submit=on_submit>
                <AuthField id="password" label="New password" kind="password" value=password />
                <AuthField id="confirm-password" label="Confirm password" kind="password" value=confirm_password />
                <button type="submit" class="btn-primary">"Reset password"</button>
            </form>

            <div class="login-info">
                <p><a href="/login">"Back to sign in"</a></p>
            </div>
        </AuthBox>
    }
}
