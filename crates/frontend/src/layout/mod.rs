pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::toast::ToastHost;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Sidebar />
                <main class="app-content">{children()}</main>
            </div>
            <ToastHost />
        </div>
    }
}
