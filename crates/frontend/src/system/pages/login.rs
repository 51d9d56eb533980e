use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            session.toast().error("Email and password are required");
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            if let Err(e) = do_login(session, email, password).await {
                log::error!("login failed: {e}");
                session.toast().error("Login failed, check your credentials");
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=submit>
                <h1 class="login-card__title">"Travel Back Office"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <label class="login-card__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="name@company.com"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-card__field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary login-card__submit" disabled=busy>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
