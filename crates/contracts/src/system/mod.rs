pub mod auth;
pub mod departments;
pub mod permissions;
pub mod roles;
pub mod users;
