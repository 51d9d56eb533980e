//! Access-gate checks over a permission grid.
//!
//! Every function here is deny-by-default: a missing menu, submenu or action
//! key evaluates to `false`, so an empty or malformed grid locks the UI down
//! rather than opening it up. Menu names match case-sensitively.

use super::{find_menu, MenuNode, PermissionGrid};

/// Does the grid grant `action` under `menu_name`?
///
/// For a leaf menu this reads the menu's own action set. For a container it
/// asks whether any submenu grants the action; call sites that gate a
/// specific page use [`can_perform_in`] with that page's own submenu name.
pub fn can_perform(grid: &PermissionGrid, menu_name: &str, action: &str) -> bool {
    match find_menu(grid, menu_name).map(|menu| menu.node()) {
        Some(MenuNode::Leaf(actions)) => actions.get(action),
        Some(MenuNode::Container(subs)) => subs.iter().any(|sub| sub.actions.get(action)),
        None => false,
    }
}

/// Does the grid grant `action` for the named submenu under `menu_name`?
pub fn can_perform_in(
    grid: &PermissionGrid,
    menu_name: &str,
    sub_menu_name: &str,
    action: &str,
) -> bool {
    find_menu(grid, menu_name)
        .and_then(|menu| menu.find_sub_menu(sub_menu_name))
        .is_some_and(|sub| sub.actions.get(action))
}

/// Navigation visibility: `list` granted on the menu itself or on at least
/// one of its submenus. A menu with zero listable children is omitted from
/// navigation entirely, not rendered disabled.
pub fn can_list(grid: &PermissionGrid, menu_name: &str) -> bool {
    can_perform(grid, menu_name, "list")
}

#[cfg(test)]
mod tests {
    use super::super::{ActionSet, Menu, SubMenu};
    use super::*;

    fn grid() -> PermissionGrid {
        vec![
            Menu::container(
                "Travel",
                vec![
                    SubMenu {
                        menu_name: "Hotels".to_string(),
                        actions: ActionSet::from([("list", true), ("delete", false)]),
                    },
                    SubMenu {
                        menu_name: "Flights".to_string(),
                        actions: ActionSet::from([("list", false), ("delete", true)]),
                    },
                ],
            ),
            Menu::leaf("Permissions", ActionSet::from([("list", true), ("create", false)])),
        ]
    }

    #[test]
    fn default_deny_on_empty_grid() {
        let empty: PermissionGrid = Vec::new();
        assert!(!can_perform(&empty, "Users", "delete"));
        assert!(!can_perform_in(&empty, "Setting", "Users", "delete"));
        assert!(!can_list(&empty, "Users"));
    }

    #[test]
    fn leaf_menu_reads_own_actions() {
        let grid = grid();
        assert!(can_perform(&grid, "Permissions", "list"));
        assert!(!can_perform(&grid, "Permissions", "create"));
        // absent action key: deny
        assert!(!can_perform(&grid, "Permissions", "approve"));
    }

    #[test]
    fn container_menu_grants_if_any_submenu_does() {
        let grid = grid();
        assert!(can_perform(&grid, "Travel", "list"));
        assert!(can_perform(&grid, "Travel", "delete"));
        assert!(!can_perform(&grid, "Travel", "approve"));
    }

    #[test]
    fn submenu_gate_is_scoped_to_the_named_submenu() {
        let grid = grid();
        assert!(can_perform_in(&grid, "Travel", "Hotels", "list"));
        assert!(!can_perform_in(&grid, "Travel", "Hotels", "delete"));
        assert!(can_perform_in(&grid, "Travel", "Flights", "delete"));
        assert!(!can_perform_in(&grid, "Travel", "Nowhere", "list"));
    }

    #[test]
    fn menu_names_match_case_sensitively() {
        let grid = grid();
        assert!(!can_perform(&grid, "travel", "list"));
        assert!(!can_perform_in(&grid, "Travel", "hotels", "list"));
    }
}
