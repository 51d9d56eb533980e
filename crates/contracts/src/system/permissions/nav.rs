//! Projection of a permission grid onto the sidebar menu tree.

use super::{MenuNode, PermissionGrid, SubMenu};

/// Static catalog entry. The catalog only contributes icons; membership and
/// ordering of the rendered navigation come from the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// A rendered sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub items: Vec<NavItem>,
}

/// Derive the URL slug for a menu name: lowercase, whitespace runs become a
/// single hyphen ("Hotel Bookings" -> "hotel-bookings").
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Build the visible navigation tree for a principal's grid.
///
/// A menu survives iff `list` is granted on it or on at least one of its
/// submenus; surviving containers keep only their listable submenus. Output
/// order follows the grid. Icons are recovered from the catalog by
/// case-insensitive title match; a menu without a catalog entry is still
/// shown, without an icon. Pure function, recomputed whenever the grid
/// changes.
pub fn project(grid: &PermissionGrid, catalog: &[RouteDescriptor]) -> Vec<NavItem> {
    grid.iter()
        .filter_map(|menu| {
            let menu_slug = slug(&menu.menu_name);
            let icon = catalog
                .iter()
                .find(|route| route.title.eq_ignore_ascii_case(&menu.menu_name))
                .map(|route| route.icon.to_string());
            match menu.node() {
                MenuNode::Container(subs) => {
                    let items = project_sub_menus(&menu_slug, subs);
                    if items.is_empty() {
                        return None;
                    }
                    Some(NavItem {
                        title: menu.menu_name.clone(),
                        url: format!("/{menu_slug}"),
                        icon,
                        items,
                    })
                }
                MenuNode::Leaf(actions) => {
                    if !actions.get("list") {
                        return None;
                    }
                    Some(NavItem {
                        title: menu.menu_name.clone(),
                        url: format!("/{menu_slug}"),
                        icon,
                        items: Vec::new(),
                    })
                }
            }
        })
        .collect()
}

fn project_sub_menus(menu_slug: &str, subs: &[SubMenu]) -> Vec<NavItem> {
    subs.iter()
        .filter(|sub| sub.actions.get("list"))
        .map(|sub| NavItem {
            title: sub.menu_name.clone(),
            url: format!("/{menu_slug}/{}", slug(&sub.menu_name)),
            icon: None,
            items: Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::{route_catalog, ActionSet, Menu};
    use super::*;

    fn sub(name: &str, list: bool) -> SubMenu {
        SubMenu {
            menu_name: name.to_string(),
            actions: ActionSet::from([("list", list), ("read", false)]),
        }
    }

    #[test]
    fn slugs_lowercase_and_hyphenate() {
        assert_eq!(slug("Hotel Bookings"), "hotel-bookings");
        assert_eq!(slug("Setting"), "setting");
    }

    #[test]
    fn menus_without_listable_children_are_omitted() {
        let grid: PermissionGrid = vec![
            Menu::container("Travel", vec![sub("Hotels", false), sub("Flights", false)]),
            Menu::leaf("Departments", ActionSet::from([("list", false), ("read", true)])),
        ];
        assert!(project(&grid, route_catalog()).is_empty());
    }

    #[test]
    fn surviving_container_keeps_only_listable_submenus() {
        let grid: PermissionGrid = vec![Menu::container(
            "Travel",
            vec![
                sub("Hotels", true),
                sub("Hotel Bookings", false),
                sub("Flights", false),
                sub("Flight Bookings", false),
            ],
        )];

        let nav = project(&grid, route_catalog());
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].title, "Travel");
        assert_eq!(nav[0].url, "/travel");
        let children: Vec<_> = nav[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(children, vec!["Hotels"]);
        assert_eq!(nav[0].items[0].url, "/travel/hotels");
    }

    #[test]
    fn order_follows_grid_not_catalog() {
        let grid: PermissionGrid = vec![
            Menu::leaf("Zeta", ActionSet::from([("list", true)])),
            Menu::container("Travel", vec![sub("Hotels", true)]),
        ];
        let nav = project(&grid, route_catalog());
        let titles: Vec<_> = nav.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Zeta", "Travel"]);
    }

    #[test]
    fn icon_comes_from_catalog_case_insensitively_and_may_be_absent() {
        let grid: PermissionGrid = vec![
            Menu::leaf("travel", ActionSet::from([("list", true)])),
            Menu::leaf("Unknown Menu", ActionSet::from([("list", true)])),
        ];
        let nav = project(&grid, route_catalog());
        assert!(nav[0].icon.is_some());
        assert!(nav[1].icon.is_none());
    }
}
