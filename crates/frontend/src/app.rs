use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts sit above the session so auth failures can surface too.
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
