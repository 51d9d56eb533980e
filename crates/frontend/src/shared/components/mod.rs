pub mod pagination_controls;
pub mod permission_tree;
pub mod ui;
