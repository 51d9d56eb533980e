use contracts::system::permissions::can_perform_in;
use leptos::prelude::*;

use crate::system::auth::context::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session
            .user_info()
            .and_then(|u| u.full_name)
            .unwrap_or_else(|| "there".to_string())
    };

    // Quick links mirror the sidebar: only listable areas show up.
    let quick_links = Memo::new(move |_| {
        let grid = session.state().with(|s| s.permissions.clone());
        let mut links = Vec::new();
        if can_perform_in(&grid, "Setting", "Users", "list") {
            links.push(("Users", "/setting/users"));
        }
        if can_perform_in(&grid, "Setting", "Roles", "list") {
            links.push(("Roles", "/setting/roles"));
        }
        links
    });

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">{move || format!("Welcome back, {}", greeting())}</h1>
            <p class="dashboard__subtitle">"Use the sidebar to navigate the back office."</p>
            <Show when=move || !quick_links.get().is_empty()>
                <div class="dashboard__quick-links">
                    <h2>"Quick links"</h2>
                    <ul>
                        <For
                            each=move || quick_links.get()
                            key=|(title, _)| *title
                            children=|(title, url)| {
                                view! {
                                    <li>
                                        <a href=url>{title}</a>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}
