use contracts::system::departments::Department;
use contracts::system::roles::Role;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, USER_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Modal};
use crate::shared::toast::use_toast;
use crate::system::departments::api as departments_api;
use crate::system::roles::api as roles_api;
use crate::system::users::api;

/// Create/edit form for a user. Pass `user=None` to create; the role and
/// department selects are loaded from their endpoints on mount.
#[component]
pub fn UserFormModal(
    user: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = user.is_some();

    let (staff_id, set_staff_id) =
        signal(user.as_ref().map(|u| u.staff_id.clone()).unwrap_or_default());
    let (email, set_email) = signal(user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (full_name, set_full_name) =
        signal(user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (user_type, set_user_type) = signal(
        user.as_ref()
            .map(|u| u.user_type.clone())
            .unwrap_or_else(|| "MAKER".to_string()),
    );
    let (role_id, set_role_id) =
        signal(user.as_ref().map(|u| u.role.id.clone()).unwrap_or_default());
    let (is_active, set_is_active) = signal(user.as_ref().map(|u| u.is_active).unwrap_or(true));
    let user_id = user.as_ref().map(|u| u.id.clone());
    // Empty string means "no department"; users are not required to have one.
    let (department_id, set_department_id) = signal(
        user.as_ref()
            .and_then(|u| u.department.as_ref().map(|d| d.id.clone()))
            .unwrap_or_default(),
    );

    let (roles, set_roles) = signal(Vec::<Role>::new());
    let (departments, set_departments) = signal(Vec::<Department>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match roles_api::list_roles().await {
                Ok(list) => set_roles.set(list),
                Err(e) => {
                    log::error!("failed to load roles for user form: {e}");
                    toast.error("Failed to load roles");
                }
            }
            match departments_api::list_departments().await {
                Ok(list) => set_departments.set(list),
                Err(e) => {
                    log::error!("failed to load departments for user form: {e}");
                    toast.error("Failed to load departments");
                }
            }
        });
    });

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        if full_name.get_untracked().trim().is_empty()
            || email.get_untracked().trim().is_empty()
            || role_id.get_untracked().is_empty()
        {
            toast.error("Name, email and role are required");
            return;
        }
        if !is_edit && password.get_untracked().is_empty() {
            toast.error("Password is required");
            return;
        }
        set_saving.set(true);

        let user_id = user_id.clone();
        spawn_local(async move {
            let department_id =
                Some(department_id.get_untracked()).filter(|d| !d.is_empty());
            let result = match user_id {
                Some(id) => api::update_user(&UpdateUserDto {
                    id,
                    email: email.get_untracked(),
                    full_name: full_name.get_untracked(),
                    user_type: user_type.get_untracked(),
                    role_id: role_id.get_untracked(),
                    department_id,
                    is_active: is_active.get_untracked(),
                })
                .await
                .map(|_| ()),
                None => api::create_user(&CreateUserDto {
                    staff_id: staff_id.get_untracked(),
                    email: email.get_untracked(),
                    full_name: full_name.get_untracked(),
                    password: password.get_untracked(),
                    user_type: user_type.get_untracked(),
                    role_id: role_id.get_untracked(),
                    department_id,
                })
                .await
                .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toast.success("User saved");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save user: {e}");
                    toast.error("Failed to save user");
                }
            }
            set_saving.set(false);
        });
    };

    let title = if is_edit { "Edit user" } else { "New user" };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <div class="form">
                <label class="form__field">
                    <span>"Staff ID"</span>
                    <input
                        prop:value=staff_id
                        disabled=is_edit
                        on:input=move |ev| set_staff_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Full name"</span>
                    <input
                        prop:value=full_name
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !is_edit>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label class="form__field">
                    <span>"User type"</span>
                    <select
                        prop:value=user_type
                        on:change=move |ev| set_user_type.set(event_target_value(&ev))
                    >
                        {USER_TYPES
                            .iter()
                            .map(|(code, label)| {
                                view! { <option value=*code>{*label}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    <span>"Role"</span>
                    <select
                        prop:value=role_id
                        on:change=move |ev| set_role_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a role"</option>
                        <For
                            each=move || roles.get()
                            key=|role| role.id.clone()
                            children=|role: Role| {
                                view! { <option value=role.id.clone()>{role.role_name.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <label class="form__field">
                    <span>"Department"</span>
                    <select
                        prop:value=department_id
                        on:change=move |ev| set_department_id.set(event_target_value(&ev))
                    >
                        <option value="">"No department"</option>
                        <For
                            each=move || departments.get()
                            key=|dept| dept.id.clone()
                            children=|dept: Department| {
                                view! { <option value=dept.id.clone()>{dept.name.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <Show when=move || is_edit>
                    <label class="form__field form__field--inline">
                        <input
                            type="checkbox"
                            prop:checked=is_active
                            on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                        />
                        <span>"Active"</span>
                    </label>
                </Show>
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
