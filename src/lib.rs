pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use error::RosterError;
pub use models::user::User;
pub use store::UserStore;

#[cfg(test)]
mod tests;
