use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};

/// Live wall clock shown in the header.
#[component]
fn SystemTime() -> impl IntoView {
    let (now, set_now) = signal(current_time_string());

    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                set_now.set(current_time_string());
            }
        });
    });

    view! { <span class="top-header__clock">{move || now.get()}</span> }
}

fn current_time_string() -> String {
    let date = js_sys::Date::new_0();
    let hours = date.get_hours();
    let minutes = date.get_minutes();
    let seconds = date.get_seconds();
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();

    let display_name = move || {
        session
            .state()
            .with(|s| s.user_info.as_ref().map(|u| u.full_name.clone().unwrap_or_else(|| u.email.clone())))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(session).await;
        });
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">"Travel Back Office"</div>
            <div class="top-header__right">
                <SystemTime />
                <span class="top-header__user">{display_name}</span>
                <button class="button button--ghost" on:click=on_logout>
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </header>
    }
}
