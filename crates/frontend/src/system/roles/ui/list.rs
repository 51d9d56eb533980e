use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Modal};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RouteGuard;
use crate::system::roles::api;
use crate::system::roles::ui::form::RoleFormModal;

#[component]
pub fn RolesListPage() -> impl IntoView {
    let toast = use_toast();
    let session = use_session();

    let (roles, set_roles) = signal(Vec::<Role>::new());
    let (loading, set_loading) = signal(false);
    let (version, set_version) = signal(0u32);

    let (editing, set_editing) = signal(Option::<Role>::None);
    let (show_create, set_show_create) = signal(false);
    let (deleting, set_deleting) = signal(Option::<Role>::None);

    Effect::new(move |_| {
        version.track();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_roles().await {
                Ok(list) => set_roles.set(list),
                Err(e) => {
                    log::error!("failed to load roles: {e}");
                    toast.error("Failed to load roles");
                }
            }
            set_loading.set(false);
        });
    });

    // Edit reloads the role first so the tree reconciles against the latest
    // persisted grid, not a stale row from the list response.
    let open_edit = move |id: String| {
        spawn_local(async move {
            match api::get_role(&id).await {
                Ok(role) => set_editing.set(Some(role)),
                Err(e) => {
                    log::error!("failed to load role {id}: {e}");
                    toast.error("Failed to load role");
                }
            }
        });
    };

    let confirm_delete = move |_| {
        let Some(role) = deleting.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_role(&role.id).await {
                Ok(()) => {
                    toast.success("Role deleted");
                    set_deleting.set(None);
                    set_version.update(|v| *v += 1);
                    // A deleted role may have been the principal's own.
                    session.refresh_permissions();
                }
                Err(e) => {
                    log::error!("failed to delete role {}: {e}", role.id);
                    toast.error("Failed to delete role");
                }
            }
        });
    };

    view! {
        <div class="page roles-page">
            <div class="page__header">
                <h1>"Roles"</h1>
                <RouteGuard menu="Setting" submenu="Roles" action="create">
                    <Button on_click=Callback::new(move |_| set_show_create.set(true))>
                        {icon("plus-circle")}
                        <span>"New role"</span>
                    </Button>
                </RouteGuard>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Code"</th>
                            <th>"Description"</th>
                            <th>"Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || roles.get()
                            key=|role| role.id.clone()
                            children=move |role: Role| {
                                let id_for_edit = role.id.clone();
                                let role_for_delete = role.clone();
                                view! {
                                    <tr>
                                        <td>{role.role_name.clone()}</td>
                                        <td>{role.role_code.clone()}</td>
                                        <td>{role.description.clone().unwrap_or_default()}</td>
                                        <td>{format_date(&role.updated_at)}</td>
                                        <td class="data-table__actions">
                                            <RouteGuard menu="Setting" submenu="Roles" action="edit">
                                                <Button
                                                    variant="secondary"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let id = id_for_edit.clone();
                                                        move |_| open_edit(id.clone())
                                                    })
                                                >
                                                    {icon("pen")}
                                                    <span>"Edit"</span>
                                                </Button>
                                            </RouteGuard>
                                            <RouteGuard menu="Setting" submenu="Roles" action="delete">
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let role = role_for_delete.clone();
                                                        move |_| set_deleting.set(Some(role.clone()))
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

            <Show when=move || show_create.get()>
                <RoleFormModal
                    role=None
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_saved=Callback::new(move |_| {
                        set_show_create.set(false);
                        set_version.update(|v| *v += 1);
                        session.refresh_permissions();
                    })
                />
            </Show>

            <Show when=move || editing.get().is_some()>
                <RoleFormModal
                    role=editing.get_untracked()
                    on_close=Callback::new(move |_| set_editing.set(None))
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        set_version.update(|v| *v += 1);
                        session.refresh_permissions();
                    })
                />
            </Show>

            <Show when=move || deleting.get().is_some()>
                <Modal
                    title="Delete role".to_string()
                    on_close=Callback::new(move |_| set_deleting.set(None))
                >
                    <p>
                        {move || {
                            deleting
                                .get()
                                .map(|r| format!("Delete role \"{}\"? Users assigned to it will lose access.", r.role_name))
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
