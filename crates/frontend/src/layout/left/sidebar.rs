//! Sidebar with collapsible menu groups.
//!
//! Static routes (Dashboard) always render; everything else is projected
//! from the session's permission grid, so a menu without a single listable
//! child never appears at all.

use contracts::system::permissions::{project, route_catalog, NavItem};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();

    // Recomputed whenever the grid changes (fetch completion, refresh).
    let nav_items = Memo::new(move |_| {
        let grid = session.state().with(|s| s.permissions.clone());
        project(&grid, route_catalog())
    });

    let expanded_groups = RwSignal::new(Vec::<String>::new());

    view! {
        <nav class="app-sidebar">
            <div class="app-sidebar__content">
                <A href="/" attr:class="app-sidebar__item">
                    {icon("layout-dashboard")}
                    <span>"Dashboard"</span>
                </A>
                <For
                    each=move || nav_items.get()
                    key=|item| item.title.clone()
                    children=move |item| {
                        view! { <SidebarGroup item=item expanded_groups=expanded_groups /> }
                    }
                />
            </div>
        </nav>
    }
}

#[component]
fn SidebarGroup(item: NavItem, expanded_groups: RwSignal<Vec<String>>) -> impl IntoView {
    let icon_name = item.icon.clone().unwrap_or_default();
    let has_children = !item.items.is_empty();

    if !has_children {
        return view! {
            <A href=item.url.clone() attr:class="app-sidebar__item">
                {icon(&icon_name)}
                <span>{item.title.clone()}</span>
            </A>
        }
        .into_any();
    }

    let title = item.title.clone();
    let title_for_expanded = title.clone();
    let title_for_click = title.clone();
    let is_expanded = move || expanded_groups.get().contains(&title_for_expanded);
    let is_expanded_chevron = is_expanded.clone();

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                on:click=move |_| {
                    let group = title_for_click.clone();
                    expanded_groups.update(|items| {
                        if let Some(pos) = items.iter().position(|x| x == &group) {
                            items.remove(pos);
                        } else {
                            items.push(group);
                        }
                    });
                }
            >
                {icon(&icon_name)}
                <span>{title}</span>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded_chevron
                >
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {item
                        .items
                        .clone()
                        .into_iter()
                        .map(|child| {
                            view! {
                                <A href=child.url.clone() attr:class="app-sidebar__item app-sidebar__item--child">
                                    <span>{child.title.clone()}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
