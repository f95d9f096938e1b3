use contracts::system::auth::SignupForm;
use leptos::prelude::*;

use super::{AuthBox, AuthField};
use crate::shared::browser::alert;

#[component]
pub fn SignupPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                set_error_message.set(None);
                log::info!("signup submitted: {} <{}>", form.full_name, form.email);
                alert("Account created. You can now sign in.");
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthBox title="Create account" subtitle="Join the community administration team" error=error_message>
            <form on:submit=on_submit>
                <AuthField id="full-name" label="Full name" value=full_name />
                <AuthField id="email" label="Email" kind="email" value=email />
                <AuthField id="phone" label="Phone" kind="tel" value=phone />
                <AuthField id="password" label="Password" kind="password" value=password />
                <AuthField id="confirm-password" label="Confirm password" kind="password" value=confirm_password />

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || accept_terms.get()
                        on:change=move |ev| accept_terms.set(event_target_checked(&ev))
                    />
                    " I accept the terms and conditions"
                </label>

                <button type="submit" class="btn-primary">"Sign up"</button>
            </form>

            <div class="login-info">
                <p>"Already registered? " <a href="/login">"Sign in"</a></p>
            </div>
        </AuthBox>
    }
}
