//! Editable permission tree backing the role create/edit form.
//!
//! The tree is built from a template grid (which fixes the shape: menus,
//! submenus and their action-key sets) plus an optional persisted grid (which
//! supplies the current values). All checked/indeterminate answers are derived
//! from the leaf booleans on demand; nothing tri-state is ever stored.

use super::{ActionSet, Menu, MenuNode, PermissionGrid, SubMenu};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TreeMenu {
    Container {
        menu_name: String,
        sub_menus: Vec<TreeSubMenu>,
    },
    Leaf {
        menu_name: String,
        actions: ActionSet,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeSubMenu {
    menu_name: String,
    actions: ActionSet,
}

impl TreeMenu {
    fn menu_name(&self) -> &str {
        match self {
            TreeMenu::Container { menu_name, .. } | TreeMenu::Leaf { menu_name, .. } => menu_name,
        }
    }
}

/// Mutable permission state for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTree {
    menus: Vec<TreeMenu>,
}

impl PermissionTree {
    /// Build the tree from a template and a (possibly partial) persisted grid.
    ///
    /// The template is authoritative for shape: menus or submenus present only
    /// in `persisted` are ignored, and every action key comes from the
    /// template. The persisted grid is authoritative for values: a template
    /// node it does not mention starts out all-false. Runs in time linear in
    /// the template size.
    pub fn initialize(template: &PermissionGrid, persisted: &PermissionGrid) -> Self {
        let menus = template
            .iter()
            .map(|menu| {
                let saved = super::find_menu(persisted, &menu.menu_name);
                match menu.node() {
                    MenuNode::Container(subs) => TreeMenu::Container {
                        menu_name: menu.menu_name.clone(),
                        sub_menus: subs
                            .iter()
                            .map(|sub| TreeSubMenu {
                                menu_name: sub.menu_name.clone(),
                                actions: merge_actions(
                                    &sub.actions,
                                    saved
                                        .and_then(|m| m.find_sub_menu(&sub.menu_name))
                                        .map(|s| &s.actions),
                                ),
                            })
                            .collect(),
                    },
                    MenuNode::Leaf(actions) => TreeMenu::Leaf {
                        menu_name: menu.menu_name.clone(),
                        actions: merge_actions(actions, saved.and_then(|m| m.actions.as_ref())),
                    },
                }
            })
            .collect();
        PermissionTree { menus }
    }

    /// Tree with every flag false, for the create-role form.
    pub fn from_template(template: &PermissionGrid) -> Self {
        Self::initialize(template, &Vec::new())
    }

    /// Flip a single action flag. Unknown menu/submenu paths and action keys
    /// not present in the template shape are logged no-ops; they indicate a
    /// UI/template mismatch, not a runtime failure.
    pub fn toggle_action(
        &mut self,
        menu_name: &str,
        sub_menu_name: Option<&str>,
        action: &str,
        value: bool,
    ) {
        let Some(actions) = self.actions_mut(menu_name, sub_menu_name) else {
            log::warn!(
                "toggle_action: no node at ({menu_name}, {sub_menu_name:?}) in permission tree"
            );
            return;
        };
        if !actions.set(action, value) {
            log::warn!("toggle_action: '{action}' is not an action of ({menu_name}, {sub_menu_name:?})");
        }
    }

    /// Set every action flag of one submenu, for the submenu "select all"
    /// checkbox.
    pub fn select_all_in_sub_menu(&mut self, menu_name: &str, sub_menu_name: &str, value: bool) {
        match self.actions_mut(menu_name, Some(sub_menu_name)) {
            Some(actions) => actions.set_all(value),
            None => log::warn!(
                "select_all_in_sub_menu: no submenu '{sub_menu_name}' under '{menu_name}'"
            ),
        }
    }

    /// Set every action flag under a menu. For a container this runs the
    /// submenu select-all on every child; for a leaf it sets the menu's own
    /// action set. Either branch leaves every affected leaf fully determined.
    pub fn select_all_in_menu(&mut self, menu_name: &str, value: bool) {
        match self.find_menu_mut(menu_name) {
            Some(TreeMenu::Container { sub_menus, .. }) => {
                for sub in sub_menus {
                    sub.actions.set_all(value);
                }
            }
            Some(TreeMenu::Leaf { actions, .. }) => actions.set_all(value),
            None => log::warn!("select_all_in_menu: no menu '{menu_name}' in permission tree"),
        }
    }

    /// True iff every action flag in scope is granted. Scope is one submenu
    /// when `sub_menu_name` is given, otherwise the whole menu. An empty
    /// action set counts as checked: with nothing to grant, everything is.
    pub fn is_checked(&self, menu_name: &str, sub_menu_name: Option<&str>) -> bool {
        match (self.find_menu(menu_name), sub_menu_name) {
            (Some(TreeMenu::Container { sub_menus, .. }), Some(sub_name)) => sub_menus
                .iter()
                .find(|sub| sub.menu_name == sub_name)
                .is_some_and(|sub| sub.actions.all_granted()),
            (Some(TreeMenu::Container { sub_menus, .. }), None) => {
                sub_menus.iter().all(|sub| sub.actions.all_granted())
            }
            (Some(TreeMenu::Leaf { actions, .. }), _) => actions.all_granted(),
            (None, _) => false,
        }
    }

    /// True iff the scope is not fully checked but at least one flag within
    /// it is granted: the third checkbox state, distinct from both checked
    /// and unchecked.
    pub fn is_indeterminate(&self, menu_name: &str, sub_menu_name: Option<&str>) -> bool {
        !self.is_checked(menu_name, sub_menu_name)
            && self.any_granted(menu_name, sub_menu_name)
    }

    fn any_granted(&self, menu_name: &str, sub_menu_name: Option<&str>) -> bool {
        match (self.find_menu(menu_name), sub_menu_name) {
            (Some(TreeMenu::Container { sub_menus, .. }), Some(sub_name)) => sub_menus
                .iter()
                .find(|sub| sub.menu_name == sub_name)
                .is_some_and(|sub| sub.actions.any_granted()),
            (Some(TreeMenu::Container { sub_menus, .. }), None) => {
                sub_menus.iter().any(|sub| sub.actions.any_granted())
            }
            (Some(TreeMenu::Leaf { actions, .. }), _) => actions.any_granted(),
            (None, _) => false,
        }
    }

    /// Menu names in template order, with a container flag for the renderer.
    pub fn menus(&self) -> Vec<(String, bool)> {
        self.menus
            .iter()
            .map(|menu| {
                (
                    menu.menu_name().to_string(),
                    matches!(menu, TreeMenu::Container { .. }),
                )
            })
            .collect()
    }

    pub fn sub_menu_names(&self, menu_name: &str) -> Vec<String> {
        match self.find_menu(menu_name) {
            Some(TreeMenu::Container { sub_menus, .. }) => {
                sub_menus.iter().map(|sub| sub.menu_name.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Action names and current values for one leaf, in template order.
    pub fn actions(&self, menu_name: &str, sub_menu_name: Option<&str>) -> Vec<(String, bool)> {
        self.actions_ref(menu_name, sub_menu_name)
            .map(|actions| {
                actions
                    .0
                    .iter()
                    .map(|(name, granted)| (name.clone(), *granted))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Serialize back to the wire shape. Structural inverse of
    /// [`PermissionTree::initialize`]: feeding the result back in with the
    /// same template reproduces this tree.
    pub fn to_grid(&self) -> PermissionGrid {
        self.menus
            .iter()
            .map(|menu| match menu {
                TreeMenu::Container {
                    menu_name,
                    sub_menus,
                } => Menu::container(
                    menu_name,
                    sub_menus
                        .iter()
                        .map(|sub| SubMenu {
                            menu_name: sub.menu_name.clone(),
                            actions: sub.actions.clone(),
                        })
                        .collect(),
                ),
                TreeMenu::Leaf { menu_name, actions } => Menu::leaf(menu_name, actions.clone()),
            })
            .collect()
    }

    fn find_menu(&self, menu_name: &str) -> Option<&TreeMenu> {
        self.menus.iter().find(|menu| menu.menu_name() == menu_name)
    }

    fn find_menu_mut(&mut self, menu_name: &str) -> Option<&mut TreeMenu> {
        self.menus
            .iter_mut()
            .find(|menu| menu.menu_name() == menu_name)
    }

    fn actions_ref(&self, menu_name: &str, sub_menu_name: Option<&str>) -> Option<&ActionSet> {
        match (self.find_menu(menu_name)?, sub_menu_name) {
            (TreeMenu::Container { sub_menus, .. }, Some(sub_name)) => sub_menus
                .iter()
                .find(|sub| sub.menu_name == sub_name)
                .map(|sub| &sub.actions),
            (TreeMenu::Leaf { actions, .. }, None) => Some(actions),
            _ => None,
        }
    }

    fn actions_mut(&mut self, menu_name: &str, sub_menu_name: Option<&str>) -> Option<&mut ActionSet> {
        match (self.find_menu_mut(menu_name)?, sub_menu_name) {
            (TreeMenu::Container { sub_menus, .. }, Some(sub_name)) => sub_menus
                .iter_mut()
                .find(|sub| sub.menu_name == sub_name)
                .map(|sub| &mut sub.actions),
            (TreeMenu::Leaf { actions, .. }, None) => Some(actions),
            _ => None,
        }
    }
}

/// Template keys with persisted values where present, false otherwise.
/// Keys that only exist in the persisted grid are dropped.
fn merge_actions(template: &ActionSet, persisted: Option<&ActionSet>) -> ActionSet {
    ActionSet(
        template
            .keys()
            .map(|key| {
                let value = persisted.map(|saved| saved.get(key)).unwrap_or(false);
                (key.to_string(), value)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::super::default_permission_grid;
    use super::*;

    fn travel_template() -> PermissionGrid {
        vec![
            Menu::container(
                "Travel",
                vec![
                    SubMenu {
                        menu_name: "Hotels".to_string(),
                        actions: ActionSet::from([
                            ("create", false),
                            ("edit", false),
                            ("list", false),
                        ]),
                    },
                    SubMenu {
                        menu_name: "Flights".to_string(),
                        actions: ActionSet::from([
                            ("create", false),
                            ("edit", false),
                            ("list", false),
                        ]),
                    },
                ],
            ),
            Menu::leaf(
                "Permissions",
                ActionSet::from([("create", false), ("list", false)]),
            ),
        ]
    }

    #[test]
    fn initialize_takes_shape_from_template_and_values_from_persisted() {
        let template = travel_template();
        // Persisted grid: partial, plus a menu the template does not know.
        let persisted: PermissionGrid = vec![
            Menu::container(
                "Travel",
                vec![SubMenu {
                    menu_name: "Hotels".to_string(),
                    actions: ActionSet::from([("create", true), ("stale_key", true)]),
                }],
            ),
            Menu::leaf("Ghost", ActionSet::from([("list", true)])),
        ];

        let tree = PermissionTree::initialize(&template, &persisted);

        assert!(tree.actions("Travel", Some("Hotels")).contains(&("create".to_string(), true)));
        // Missing persisted nodes come up all-false.
        assert!(!tree.any_granted("Travel", Some("Flights")));
        // Template is authoritative: no ghost menu, no stale key.
        assert!(tree.find_menu("Ghost").is_none());
        assert!(!tree
            .actions("Travel", Some("Hotels"))
            .iter()
            .any(|(name, _)| name == "stale_key"));
    }

    #[test]
    fn tri_state_on_leaf() {
        let template = travel_template();
        let mut tree = PermissionTree::from_template(&template);

        // all false: neither checked nor indeterminate
        assert!(!tree.is_checked("Permissions", None));
        assert!(!tree.is_indeterminate("Permissions", None));

        tree.toggle_action("Permissions", None, "create", true);
        assert!(!tree.is_checked("Permissions", None));
        assert!(tree.is_indeterminate("Permissions", None));

        tree.toggle_action("Permissions", None, "list", true);
        assert!(tree.is_checked("Permissions", None));
        assert!(!tree.is_indeterminate("Permissions", None));
    }

    #[test]
    fn select_all_in_sub_menu_propagates_upward() {
        let template = travel_template();
        let mut tree = PermissionTree::from_template(&template);

        tree.select_all_in_sub_menu("Travel", "Hotels", true);

        assert!(tree.is_checked("Travel", Some("Hotels")));
        assert!(!tree.is_checked("Travel", Some("Flights")));
        assert!(tree.is_indeterminate("Travel", None));
        assert!(!tree.is_checked("Travel", None));

        tree.select_all_in_sub_menu("Travel", "Flights", true);
        assert!(tree.is_checked("Travel", None));
        assert!(!tree.is_indeterminate("Travel", None));
    }

    #[test]
    fn select_all_in_menu_branches_on_node_kind() {
        let template = travel_template();
        let mut tree = PermissionTree::from_template(&template);

        // leaf: sets its own action set
        tree.select_all_in_menu("Permissions", true);
        assert!(tree.is_checked("Permissions", None));

        // container: sets every action of every submenu
        tree.select_all_in_menu("Travel", true);
        assert!(tree.is_checked("Travel", Some("Hotels")));
        assert!(tree.is_checked("Travel", Some("Flights")));
        assert!(tree.is_checked("Travel", None));

        tree.select_all_in_menu("Travel", false);
        assert!(!tree.any_granted("Travel", None));
        assert!(!tree.is_indeterminate("Travel", None));
    }

    #[test]
    fn unknown_action_toggle_is_a_no_op() {
        let template = travel_template();
        let mut tree = PermissionTree::from_template(&template);
        let before = tree.to_grid();

        tree.toggle_action("Permissions", None, "nonexistent_action", true);
        tree.toggle_action("Nowhere", None, "create", true);
        tree.toggle_action("Travel", Some("Nowhere"), "create", true);

        assert_eq!(tree.to_grid(), before);
    }

    #[test]
    fn round_trips_through_grid() {
        let template = travel_template();
        let mut tree = PermissionTree::from_template(&template);
        tree.select_all_in_sub_menu("Travel", "Hotels", true);
        tree.toggle_action("Permissions", None, "list", true);

        let grid = tree.to_grid();
        let rebuilt = PermissionTree::initialize(&template, &grid);
        assert_eq!(rebuilt, tree);
        assert_eq!(rebuilt.to_grid(), grid);
    }

    #[test]
    fn round_trips_default_catalog_grid() {
        let template = default_permission_grid();
        let tree = PermissionTree::initialize(&template, &template);
        assert_eq!(tree.to_grid(), template);
    }

    #[test]
    fn empty_action_set_counts_as_checked() {
        let template: PermissionGrid = vec![Menu::leaf("Void", ActionSet::default())];
        let tree = PermissionTree::from_template(&template);
        assert!(tree.is_checked("Void", None));
        assert!(!tree.is_indeterminate("Void", None));
    }
}
