//! Static catalogs: the template permission grid (the full set of menus,
//! submenus and action keys the portal knows about) and the route descriptors
//! the sidebar pulls icons from.

use super::{ActionSet, Menu, PermissionGrid, RouteDescriptor, SubMenu};

/// Conventional action vocabulary. Individual menus carry a subset of these;
/// the set is open and the engine never assumes a fixed list.
pub const PERMISSION_ACTIONS: &[&str] = &[
    "create", "edit", "delete", "list", "read", "approve", "reject",
];

fn crud_actions() -> ActionSet {
    ActionSet::from([
        ("create", false),
        ("delete", false),
        ("edit", false),
        ("list", false),
        ("read", false),
    ])
}

fn booking_actions() -> ActionSet {
    ActionSet::from([
        ("create", false),
        ("delete", false),
        ("edit", false),
        ("list", false),
        ("read", false),
        ("approve", false),
        ("reject", false),
    ])
}

fn sub_menu(name: &str, actions: ActionSet) -> SubMenu {
    SubMenu {
        menu_name: name.to_string(),
        actions,
    }
}

/// The template grid: every menu/submenu/action the system defines, all
/// flags false. Role forms start from this shape and persisted grids are
/// reconciled against it.
pub fn default_permission_grid() -> PermissionGrid {
    vec![
        Menu::container(
            "Setting",
            vec![
                sub_menu("Users", crud_actions()),
                sub_menu("Roles", crud_actions()),
                sub_menu("Departments", crud_actions()),
                sub_menu("Permissions", crud_actions()),
            ],
        ),
        Menu::container(
            "Travel",
            vec![
                sub_menu("Hotels", crud_actions()),
                sub_menu("Hotel Bookings", booking_actions()),
                sub_menu("Flights", crud_actions()),
                sub_menu("Flight Bookings", booking_actions()),
            ],
        ),
    ]
}

/// Routes the navigation projector matches against to recover icons. May be
/// a superset or subset of any particular grid.
pub fn route_catalog() -> &'static [RouteDescriptor] {
    &[
        RouteDescriptor {
            title: "Dashboard",
            url: "/",
            icon: "layout-dashboard",
        },
        RouteDescriptor {
            title: "Travel",
            url: "#",
            icon: "plane",
        },
        RouteDescriptor {
            title: "Setting",
            url: "#",
            icon: "user-cog",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::super::MenuNode;
    use super::*;

    #[test]
    fn template_flags_start_false() {
        for menu in default_permission_grid() {
            match menu.node() {
                MenuNode::Container(subs) => {
                    for sub in subs {
                        assert!(!sub.actions.any_granted(), "{}", sub.menu_name);
                    }
                }
                MenuNode::Leaf(actions) => assert!(!actions.any_granted()),
            }
        }
    }

    #[test]
    fn bookings_carry_the_approval_actions() {
        let grid = default_permission_grid();
        let travel = super::super::find_menu(&grid, "Travel").unwrap();
        let bookings = travel.find_sub_menu("Hotel Bookings").unwrap();
        assert!(bookings.actions.keys().any(|k| k == "approve"));
        assert!(bookings.actions.keys().any(|k| k == "reject"));
        let hotels = travel.find_sub_menu("Hotels").unwrap();
        assert!(!hotels.actions.keys().any(|k| k == "approve"));
    }
}
