//! Editable tri-state permission tree, shared by the role create/edit forms
//! and (read-only) by the role detail view.
//!
//! The component owns no permission state of its own: every checkbox reads
//! its checked/indeterminate status straight out of the [`PermissionTree`]
//! signal, and every toggle goes through the tree's own operations, so the
//! rendered state can never drift from what will be serialized on save.

use contracts::system::permissions::{PermissionGrid, PermissionTree};
use leptos::prelude::*;

use crate::shared::icons::icon;

use super::ui::TriStateCheckbox;

fn emit(on_change: Option<Callback<PermissionGrid>>, tree: RwSignal<PermissionTree>) {
    if let Some(callback) = on_change {
        callback.run(tree.with_untracked(|t| t.to_grid()));
    }
}

#[component]
pub fn PermissionTreeView(
    /// The editable tree; build it with `PermissionTree::initialize` before
    /// mounting the form.
    tree: RwSignal<PermissionTree>,
    /// Read-only mode for detail views
    #[prop(optional)]
    disabled: bool,
    /// Invoked with the serialized grid after every mutation
    #[prop(optional, into)]
    on_change: Option<Callback<PermissionGrid>>,
) -> impl IntoView {
    let menus = tree.with_untracked(|t| t.menus());
    // All menus start expanded, matching the role form's default.
    let expanded = RwSignal::new(
        menus
            .iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="permission-tree">
            <div class="permission-tree__header">
                <h3>"Permission Settings"</h3>
                <p>"Configure access permissions for each module"</p>
            </div>
            {menus
                .into_iter()
                .map(|(menu_name, is_container)| {
                    if is_container {
                        view! {
                            <ContainerMenuRow
                                tree=tree
                                menu_name=menu_name
                                expanded=expanded
                                disabled=disabled
                                on_change=on_change
                            />
                        }
                        .into_any()
                    } else {
                        view! {
                            <LeafMenuRow
                                tree=tree
                                menu_name=menu_name
                                disabled=disabled
                                on_change=on_change
                            />
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContainerMenuRow(
    tree: RwSignal<PermissionTree>,
    menu_name: String,
    expanded: RwSignal<Vec<String>>,
    disabled: bool,
    on_change: Option<Callback<PermissionGrid>>,
) -> impl IntoView {
    let sub_menus = tree.with_untracked(|t| t.sub_menu_names(&menu_name));
    let badge = sub_menus.len();

    let name_for_expand = menu_name.clone();
    let name_for_toggle = menu_name.clone();
    let name_for_checked = menu_name.clone();
    let name_for_indet = menu_name.clone();
    let name_for_select = menu_name.clone();

    let is_expanded = move || expanded.get().contains(&name_for_expand);
    let is_expanded_chevron = is_expanded.clone();
    let checked = Signal::derive(move || tree.with(|t| t.is_checked(&name_for_checked, None)));
    let indeterminate =
        Signal::derive(move || tree.with(|t| t.is_indeterminate(&name_for_indet, None)));

    view! {
        <div class="permission-tree__menu">
            <div class="permission-tree__menu-row">
                <button
                    type="button"
                    class="permission-tree__expander"
                    on:click=move |_| {
                        let name = name_for_toggle.clone();
                        expanded.update(|items| {
                            if let Some(pos) = items.iter().position(|x| x == &name) {
                                items.remove(pos);
                            } else {
                                items.push(name);
                            }
                        });
                    }
                >
                    {move || if is_expanded_chevron() { icon("chevron-down") } else { icon("chevron-right") }}
                </button>
                <TriStateCheckbox
                    label=menu_name.clone()
                    checked=checked
                    indeterminate=indeterminate
                    disabled=disabled
                    id=format!("menu-{menu_name}")
                    on_change=Callback::new(move |value: bool| {
                        tree.update(|t| t.select_all_in_menu(&name_for_select, value));
                        emit(on_change, tree);
                    })
                />
                <span class="permission-tree__badge">{badge}</span>
            </div>
            <Show when=is_expanded>
                <div class="permission-tree__sub-menus">
                    {sub_menus
                        .iter()
                        .map(|sub_name| {
                            view! {
                                <SubMenuRow
                                    tree=tree
                                    menu_name=menu_name.clone()
                                    sub_menu_name=sub_name.clone()
                                    disabled=disabled
                                    on_change=on_change
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SubMenuRow(
    tree: RwSignal<PermissionTree>,
    menu_name: String,
    sub_menu_name: String,
    disabled: bool,
    on_change: Option<Callback<PermissionGrid>>,
) -> impl IntoView {
    let actions =
        tree.with_untracked(|t| t.actions(&menu_name, Some(&sub_menu_name)));

    let menu_for_checked = menu_name.clone();
    let sub_for_checked = sub_menu_name.clone();
    let menu_for_indet = menu_name.clone();
    let sub_for_indet = sub_menu_name.clone();
    let menu_for_select = menu_name.clone();
    let sub_for_select = sub_menu_name.clone();

    let checked = Signal::derive(move || {
        tree.with(|t| t.is_checked(&menu_for_checked, Some(&sub_for_checked)))
    });
    let indeterminate = Signal::derive(move || {
        tree.with(|t| t.is_indeterminate(&menu_for_indet, Some(&sub_for_indet)))
    });

    view! {
        <div class="permission-tree__sub-menu">
            <TriStateCheckbox
                label=sub_menu_name.clone()
                checked=checked
                indeterminate=indeterminate
                disabled=disabled
                id=format!("submenu-{menu_name}-{sub_menu_name}")
                on_change=Callback::new(move |value: bool| {
                    tree.update(|t| {
                        t.select_all_in_sub_menu(&menu_for_select, &sub_for_select, value)
                    });
                    emit(on_change, tree);
                })
            />
            <ActionGrid
                tree=tree
                menu_name=menu_name.clone()
                sub_menu_name=Some(sub_menu_name.clone())
                actions=actions
                disabled=disabled
                on_change=on_change
            />
        </div>
    }
}

#[component]
fn LeafMenuRow(
    tree: RwSignal<PermissionTree>,
    menu_name: String,
    disabled: bool,
    on_change: Option<Callback<PermissionGrid>>,
) -> impl IntoView {
    let actions = tree.with_untracked(|t| t.actions(&menu_name, None));

    let name_for_checked = menu_name.clone();
    let name_for_indet = menu_name.clone();
    let name_for_select = menu_name.clone();

    let checked = Signal::derive(move || tree.with(|t| t.is_checked(&name_for_checked, None)));
    let indeterminate =
        Signal::derive(move || tree.with(|t| t.is_indeterminate(&name_for_indet, None)));

    view! {
        <div class="permission-tree__menu">
            <div class="permission-tree__menu-row">
                <TriStateCheckbox
                    label=menu_name.clone()
                    checked=checked
                    indeterminate=indeterminate
                    disabled=disabled
                    id=format!("menu-{menu_name}")
                    on_change=Callback::new(move |value: bool| {
                        tree.update(|t| t.select_all_in_menu(&name_for_select, value));
                        emit(on_change, tree);
                    })
                />
            </div>
            <ActionGrid
                tree=tree
                menu_name=menu_name.clone()
                sub_menu_name=None
                actions=actions
                disabled=disabled
                on_change=on_change
            />
        </div>
    }
}

/// One checkbox per action key, in template order.
#[component]
fn ActionGrid(
    tree: RwSignal<PermissionTree>,
    menu_name: String,
    sub_menu_name: Option<String>,
    actions: Vec<(String, bool)>,
    disabled: bool,
    on_change: Option<Callback<PermissionGrid>>,
) -> impl IntoView {
    view! {
        <div class="permission-tree__actions">
            {actions
                .into_iter()
                .map(|(action, _)| {
                    let menu = menu_name.clone();
                    let sub = sub_menu_name.clone();
                    let menu_for_toggle = menu_name.clone();
                    let sub_for_toggle = sub_menu_name.clone();
                    let action_for_toggle = action.clone();
                    let checked = Signal::derive(move || {
                        tree.with(|t| {
                            t.actions(&menu, sub.as_deref())
                                .iter()
                                .find(|(name, _)| name == &action)
                                .map(|(_, granted)| *granted)
                                .unwrap_or(false)
                        })
                    });
                    let label = action_for_toggle.clone();
                    let id = match &sub_for_toggle {
                        Some(sub) => format!("action-{menu_for_toggle}-{sub}-{label}"),
                        None => format!("action-{menu_for_toggle}-{label}"),
                    };
                    view! {
                        <TriStateCheckbox
                            label=label
                            checked=checked
                            disabled=disabled
                            id=id
                            on_change=Callback::new(move |value: bool| {
                                tree.update(|t| {
                                    t.toggle_action(
                                        &menu_for_toggle,
                                        sub_for_toggle.as_deref(),
                                        &action_for_toggle,
                                        value,
                                    )
                                });
                                emit(on_change, tree);
                            })
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
