//! Permission gates for pages and action buttons.
//!
//! Every guard is bound to the explicit (menu, submenu) identity of the page
//! being rendered, and evaluates the session grid
//! through the deny-by-default checks in `contracts::system::permissions`.

use contracts::system::permissions::{can_perform, can_perform_in};
use leptos::prelude::*;

use super::context::use_session;

/// Component that requires authentication.
/// Shows fallback if not authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.state().get().access_token.is_some()
            fallback=|| view! { <div>"Not authenticated. Please login."</div> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only when the session grid grants `action` for the given
/// menu (and submenu, when the page lives under one). Hidden otherwise:
/// gated buttons disappear, they are not disabled.
#[component]
pub fn RouteGuard(
    /// Top-level menu the current page belongs to, e.g. "Setting"
    #[prop(into)]
    menu: String,
    /// Submenu for pages under a container menu, e.g. "Users"
    #[prop(optional, into)]
    submenu: Option<String>,
    /// Action key to check, e.g. "list", "create", "approve"
    #[prop(into)]
    action: String,
    /// Rendered when the action is denied; defaults to nothing
    #[prop(optional, into)]
    fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();

    let allowed = Memo::new(move |_| {
        let grid = session.state().with(|s| s.permissions.clone());
        match &submenu {
            Some(sub) => can_perform_in(&grid, &menu, sub, &action),
            None => can_perform(&grid, &menu, &action),
        }
    });

    view! {
        <Show when=move || allowed.get() fallback=move || fallback.run()>
            {children()}
        </Show>
    }
}

/// Page-level variant: same check as [`RouteGuard`] but with a visible
/// access-denied note, used as the outermost wrapper of each routed page.
#[component]
pub fn PageGuard(
    #[prop(into)] menu: String,
    #[prop(optional, into)] submenu: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let fallback = || {
        view! {
            <div class="page-denied">
                <h2>"Access denied"</h2>
                <p>"You do not have permission to view this page."</p>
            </div>
        }
    };

    match submenu {
        Some(sub) => view! {
            <RouteGuard menu=menu submenu=sub action="list" fallback=fallback>
                {children()}
            </RouteGuard>
        }
        .into_any(),
        None => view! {
            <RouteGuard menu=menu action="list" fallback=fallback>
                {children()}
            </RouteGuard>
        }
        .into_any(),
    }
}
