pub mod client;
pub mod models;
pub mod api;

pub use client::PlaceholderClient;
pub use models::{Album, Photo, User, index_users};
