use contracts::system::permissions::{default_permission_grid, PermissionGrid, PermissionTree};
use contracts::system::roles::{CreateRoleDto, Role, UpdateRoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::permission_tree::PermissionTreeView;
use crate::shared::components::ui::{Button, Modal};
use crate::shared::toast::use_toast;
use crate::system::roles::api;

/// Create/edit form for a role. The permission tree is seeded from the
/// template grid reconciled with the role's persisted grid, so renamed or
/// removed menus from older saves are dropped and new menus show up
/// unchecked.
#[component]
pub fn RoleFormModal(
    role: Option<Role>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = role.is_some();

    let (role_name, set_role_name) =
        signal(role.as_ref().map(|r| r.role_name.clone()).unwrap_or_default());
    let (role_code, set_role_code) =
        signal(role.as_ref().map(|r| r.role_code.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        role.as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );
    let role_id = role.as_ref().map(|r| r.id.clone());

    let persisted = role.map(|r| r.permissions).unwrap_or_default();
    let tree = RwSignal::new(PermissionTree::initialize(
        &default_permission_grid(),
        &persisted,
    ));
    // Serialized grid, refreshed by the tree component after every toggle.
    let grid = RwSignal::new(tree.with_untracked(|t| t.to_grid()));

    let (saving, set_saving) = signal(false);

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        if role_name.get_untracked().trim().is_empty()
            || (!is_edit && role_code.get_untracked().trim().is_empty())
        {
            toast.error("Role name and code are required");
            return;
        }
        set_saving.set(true);

        let role_id = role_id.clone();
        spawn_local(async move {
            let description =
                Some(description.get_untracked()).filter(|d| !d.trim().is_empty());
            let permissions = grid.get_untracked();
            let result = match role_id {
                Some(id) => api::update_role(&UpdateRoleDto {
                    id,
                    role_name: role_name.get_untracked(),
                    description,
                    permissions,
                })
                .await
                .map(|_| ()),
                None => api::create_role(&CreateRoleDto {
                    role_name: role_name.get_untracked(),
                    role_code: role_code.get_untracked(),
                    description,
                    permissions,
                })
                .await
                .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toast.success("Role saved");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save role: {e}");
                    toast.error("Failed to save role");
                }
            }
            set_saving.set(false);
        });
    };

    let title = if is_edit { "Edit role" } else { "New role" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <div class="form role-form">
                <label class="form__field">
                    <span>"Role name"</span>
                    <input
                        prop:value=role_name
                        on:input=move |ev| set_role_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Role code"</span>
                    <input
                        prop:value=role_code
                        disabled=is_edit
                        on:input=move |ev| set_role_code.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Description"</span>
                    <textarea
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <PermissionTreeView
                    tree=tree
                    on_change=Callback::new(move |g: PermissionGrid| grid.set(g))
                />

                <div class="modal-actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        "Cancel"
                    </Button>
                    <Button disabled=saving on_click=Callback::new(save)>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
