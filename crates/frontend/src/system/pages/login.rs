use contracts::system::auth::LoginForm;
use leptos::prelude::*;

use super::{AuthBox, AuthField};
use crate::shared::browser::alert;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                set_error_message.set(None);
                log::info!("login submitted for {} (remember: {})", form.email, form.remember_me);
                alert(&format!("Signed in as {}", form.email));
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthBox title="Sign in" subtitle="Welcome back, please sign in to continue" error=error_message>
            <form on:submit=on_submit>
                <AuthField id="email" label="Email" kind="email" placeholder="admin@community.org" value=email />
                <AuthField id="password" label="Password" kind="password" value=password />

                <div class="form-row">
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        " Remember me"
                    </label>
                    <a href="/forgot-password">"Forgot password?"</a>
                </div>

                <button type="submit" class="btn-primary">"Sign in"</button>
            </form>

            <div class="login-info">
                <p>"No account yet? " <a href="/signup">"Create one"</a></p>
            </div>
        </AuthBox>
    }
}
