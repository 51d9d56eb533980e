use contracts::shared::api::{DEFAULT_PAGE_NO, DEFAULT_PAGE_SIZE};
use contracts::system::departments::Department;
use contracts::system::roles::Role;
use contracts::system::users::{User, UserFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Button, Modal};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::guard::RouteGuard;
use crate::system::departments::api as departments_api;
use crate::system::roles::api as roles_api;
use crate::system::users::api;
use crate::system::users::ui::form::UserFormModal;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let toast = use_toast();

    let (users, set_users) = signal(Vec::<User>::new());
    let (total, set_total) = signal(0usize);
    let (total_pages, set_total_pages) = signal(1usize);
    let (page, set_page) = signal(DEFAULT_PAGE_NO);
    let (search, set_search) = signal(String::new());
    // Empty string means "no filter" for both selects.
    let (role_filter, set_role_filter) = signal(String::new());
    let (department_filter, set_department_filter) = signal(String::new());
    let (roles, set_roles) = signal(Vec::<Role>::new());
    let (departments, set_departments) = signal(Vec::<Department>::new());
    let (loading, set_loading) = signal(false);
    // Bumped to force a refetch after create/update/delete.
    let (version, set_version) = signal(0u32);

    let (editing, set_editing) = signal(Option::<User>::None);
    let (show_create, set_show_create) = signal(false);
    let (deleting, set_deleting) = signal(Option::<User>::None);

    // Filter option sources, loaded once.
    Effect::new(move |_| {
        spawn_local(async move {
            match roles_api::list_roles().await {
                Ok(list) => set_roles.set(list),
                Err(e) => log::error!("failed to load role filter options: {e}"),
            }
            match departments_api::list_departments().await {
                Ok(list) => set_departments.set(list),
                Err(e) => log::error!("failed to load department filter options: {e}"),
            }
        });
    });

    Effect::new(move |_| {
        version.track();
        let filter = UserFilter {
            search: Some(search.get()).filter(|s| !s.trim().is_empty()),
            role_id: Some(role_filter.get()).filter(|s| !s.is_empty()),
            department_id: Some(department_filter.get()).filter(|s| !s.is_empty()),
            page: page.get(),
            limit: DEFAULT_PAGE_SIZE,
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_users(&filter).await {
                Ok(result) => {
                    set_total.set(result.total);
                    set_total_pages.set(result.total_pages());
                    set_users.set(result.items);
                }
                Err(e) => {
                    log::error!("failed to load users: {e}");
                    toast.error("Failed to load users");
                }
            }
            set_loading.set(false);
        });
    });

    let confirm_delete = move |_| {
        let Some(user) = deleting.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_user(&user.id).await {
                Ok(()) => {
                    toast.success("User deleted");
                    set_deleting.set(None);
                    set_version.update(|v| *v += 1);
                }
                Err(e) => {
                    log::error!("failed to delete user {}: {e}", user.id);
                    toast.error("Failed to delete user");
                }
            }
        });
    };

    view! {
        <div class="page users-page">
            <div class="page__header">
                <h1>"Users"</h1>
                <RouteGuard menu="Setting" submenu="Users" action="create">
                    <Button on_click=Callback::new(move |_| set_show_create.set(true))>
                        {icon("plus-circle")}
                        <span>"New user"</span>
                    </Button>
                </RouteGuard>
            </div>

            <div class="page__filters">
                <input
                    type="search"
                    placeholder="Search by name, email or staff id"
                    prop:value=search
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(DEFAULT_PAGE_NO);
                    }
                />
                <select
                    prop:value=role_filter
                    on:change=move |ev| {
                        set_role_filter.set(event_target_value(&ev));
                        set_page.set(DEFAULT_PAGE_NO);
                    }
                >
                    <option value="">"All roles"</option>
                    <For
                        each=move || roles.get()
                        key=|role| role.id.clone()
                        children=|role: Role| {
                            view! { <option value=role.id.clone()>{role.role_name.clone()}</option> }
                        }
                    />
                </select>
                <select
                    prop:value=department_filter
                    on:change=move |ev| {
                        set_department_filter.set(event_target_value(&ev));
                        set_page.set(DEFAULT_PAGE_NO);
                    }
                >
                    <option value="">"All departments"</option>
                    <For
                        each=move || departments.get()
                        key=|dept| dept.id.clone()
                        children=|dept: Department| {
                            view! { <option value=dept.id.clone()>{dept.name.clone()}</option> }
                        }
                    />
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Staff ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id.clone()
                            children=move |user: User| {
                                let user_for_edit = user.clone();
                                let user_for_delete = user.clone();
                                view! {
                                    <tr>
                                        <td>{user.staff_id.clone()}</td>
                                        <td>{user.full_name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.role.role_name.clone()}</td>
                                        <td>{user.user_type.clone()}</td>
                                        <td>
                                            {if user.is_active { "Active" } else { "Inactive" }}
                                        </td>
                                        <td>{format_datetime(&user.created_at)}</td>
                                        <td class="data-table__actions">
                                            <RouteGuard menu="Setting" submenu="Users" action="edit">
                                                <Button
                                                    variant="secondary"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let user = user_for_edit.clone();
                                                        move |_| set_editing.set(Some(user.clone()))
                                                    })
                                                >
                                                    {icon("pen")}
                                                    <span>"Edit"</span>
                                                </Button>
                                            </RouteGuard>
                                            <RouteGuard menu="Setting" submenu="Users" action="delete">
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let user = user_for_delete.clone();
                                                        move |_| set_deleting.set(Some(user.clone()))
                                                    })
                                                >
                                                    {icon("trash")}
                                                    <span>"Delete"</span>
                                                </Button>
                                            </RouteGuard>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total
                on_page_change=Callback::new(move |p| set_page.set(p))
            />

            <Show when=move || show_create.get()>
                <UserFormModal
                    user=None
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_saved=Callback::new(move |_| {
                        set_show_create.set(false);
                        set_version.update(|v| *v += 1);
                    })
                />
            </Show>

            <Show when=move || editing.get().is_some()>
                <UserFormModal
                    user=editing.get_untracked()
                    on_close=Callback::new(move |_| set_editing.set(None))
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        set_version.update(|v| *v += 1);
                    })
                />
            </Show>

            <Show when=move || deleting.get().is_some()>
                <Modal
                    title="Delete user".to_string()
                    on_close=Callback::new(move |_| set_deleting.set(None))
                >
                    <p>
                        {move || {
                            deleting
                                .get()
                                .map(|u| format!("Delete user \"{}\"? This cannot be undone.", u.full_name))
                                .unwrap_or_default()
                        }}
                    </p>
                    <div class="modal-actions">
                        <Button variant="secondary" on_click=Callback::new(move |_| set_deleting.set(None))>
                            "Cancel"
                        </Button>
                        <Button on_click=Callback::new(confirm_delete)>"Delete"</Button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
