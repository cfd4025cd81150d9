pub mod about;
pub mod auth;
pub mod courses;
pub mod playground;
