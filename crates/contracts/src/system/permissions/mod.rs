//! Permission grid exchanged with the backend and consumed by the UI.
//!
//! The grid is a sequence of menus. A menu is either a *container* (has
//! submenus and no direct actions) or a *leaf* (has direct actions and no
//! submenus). The wire format expresses this with two optional fields; the
//! [`MenuNode`] type makes the distinction explicit for everything built on
//! top of it.

mod catalog;
mod gate;
mod nav;
mod tree;

pub use catalog::{default_permission_grid, route_catalog, PERMISSION_ACTIONS};
pub use gate::{can_list, can_perform, can_perform_in};
pub use nav::{project, NavItem, RouteDescriptor};
pub use tree::PermissionTree;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open mapping of action name to granted flag.
///
/// The key set is supplied by the template grid and differs per menu (bookings
/// carry `approve`/`reject`, plain entities do not), so this is a map keyed by
/// string rather than a closed enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet(pub BTreeMap<String, bool>);

impl ActionSet {
    pub fn get(&self, action: &str) -> bool {
        self.0.get(action).copied().unwrap_or(false)
    }

    /// Set a single flag. Keys not present in the set are left untouched:
    /// the template fixes the key set at construction and toggles only flip
    /// existing booleans.
    pub fn set(&mut self, action: &str, value: bool) -> bool {
        match self.0.get_mut(action) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn set_all(&mut self, value: bool) {
        for flag in self.0.values_mut() {
            *flag = value;
        }
    }

    /// True iff every flag is set. Vacuously true for an empty set.
    pub fn all_granted(&self) -> bool {
        self.0.values().all(|granted| *granted)
    }

    pub fn any_granted(&self) -> bool {
        self.0.values().any(|granted| *granted)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ActionSet {
    fn from(pairs: [(&str, bool); N]) -> Self {
        ActionSet(
            pairs
                .into_iter()
                .map(|(name, granted)| (name.to_string(), granted))
                .collect(),
        )
    }
}

/// Second-level grid node. Always a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMenu {
    pub menu_name: String,
    pub actions: ActionSet,
}

/// Top-level grid node as it travels over the wire.
///
/// Exactly one of `sub_menus` / `actions` is expected to be populated;
/// [`Menu::node`] resolves the malformed cases instead of trusting the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub menu_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_menus: Option<Vec<SubMenu>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionSet>,
}

impl Menu {
    pub fn container(name: &str, sub_menus: Vec<SubMenu>) -> Self {
        Menu {
            menu_name: name.to_string(),
            sub_menus: Some(sub_menus),
            actions: None,
        }
    }

    pub fn leaf(name: &str, actions: ActionSet) -> Self {
        Menu {
            menu_name: name.to_string(),
            sub_menus: None,
            actions: Some(actions),
        }
    }

    /// Resolve the container-vs-leaf shape, normalizing malformed input.
    ///
    /// Both fields populated: the `sub_menus` interpretation wins. Neither
    /// populated: treated as a leaf with no actions. Either way a warning is
    /// logged and rendering proceeds.
    pub fn node(&self) -> MenuNode<'_> {
        match (&self.sub_menus, &self.actions) {
            (Some(subs), None) => MenuNode::Container(subs),
            (None, Some(actions)) => MenuNode::Leaf(actions),
            (Some(subs), Some(_)) => {
                log::warn!(
                    "menu '{}' has both subMenus and actions; using subMenus",
                    self.menu_name
                );
                MenuNode::Container(subs)
            }
            (None, None) => {
                log::warn!(
                    "menu '{}' has neither subMenus nor actions; treating as empty leaf",
                    self.menu_name
                );
                MenuNode::Leaf(EMPTY_ACTIONS.get_or_init(ActionSet::default))
            }
        }
    }

    pub fn find_sub_menu(&self, name: &str) -> Option<&SubMenu> {
        self.sub_menus
            .as_ref()?
            .iter()
            .find(|sub| sub.menu_name == name)
    }
}

static EMPTY_ACTIONS: std::sync::OnceLock<ActionSet> = std::sync::OnceLock::new();

/// Resolved shape of a [`Menu`].
#[derive(Debug, Clone, Copy)]
pub enum MenuNode<'a> {
    Container(&'a [SubMenu]),
    Leaf(&'a ActionSet),
}

/// The full grid, ordered as the backend returned it. Order is authoritative
/// for navigation; menu names are unique within their containment level.
pub type PermissionGrid = Vec<Menu>;

/// Look up a top-level menu by exact (case-sensitive) name.
pub fn find_menu<'a>(grid: &'a PermissionGrid, menu_name: &str) -> Option<&'a Menu> {
    grid.iter().find(|menu| menu.menu_name == menu_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_set_toggles_only_existing_keys() {
        let mut actions = ActionSet::from([("create", false), ("list", true)]);
        assert!(actions.set("create", true));
        assert!(!actions.set("approve", true));
        assert!(actions.get("create"));
        assert!(!actions.get("approve"));
        assert_eq!(actions.keys().count(), 2);
    }

    #[test]
    fn empty_action_set_is_vacuously_granted() {
        let actions = ActionSet::default();
        assert!(actions.all_granted());
        assert!(!actions.any_granted());
    }

    #[test]
    fn menu_with_both_shapes_resolves_to_container() {
        let menu = Menu {
            menu_name: "Broken".to_string(),
            sub_menus: Some(vec![SubMenu {
                menu_name: "Child".to_string(),
                actions: ActionSet::from([("list", true)]),
            }]),
            actions: Some(ActionSet::from([("list", false)])),
        };
        assert!(matches!(menu.node(), MenuNode::Container(subs) if subs.len() == 1));
    }

    #[test]
    fn menu_with_neither_shape_resolves_to_empty_leaf() {
        let menu = Menu {
            menu_name: "Empty".to_string(),
            sub_menus: None,
            actions: None,
        };
        assert!(matches!(menu.node(), MenuNode::Leaf(actions) if actions.is_empty()));
    }

    #[test]
    fn grid_round_trips_through_json() {
        let grid: PermissionGrid = vec![
            Menu::container(
                "Travel",
                vec![SubMenu {
                    menu_name: "Hotels".to_string(),
                    actions: ActionSet::from([("create", true), ("list", false)]),
                }],
            ),
            Menu::leaf("Reports", ActionSet::from([("read", true)])),
        ];
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains("\"menuName\":\"Travel\""));
        assert!(json.contains("\"subMenus\""));
        let back: PermissionGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
