pub mod auth;
pub mod businesses;
pub mod documents;
pub mod home;
pub mod regular_contents;
pub mod users;
