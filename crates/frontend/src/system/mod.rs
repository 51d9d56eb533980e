pub mod auth;
pub mod departments;
pub mod pages;
pub mod roles;
pub mod users;
