use async_trait::async_trait;

use crate::error::RosterError;
use crate::models::user::User;

pub mod postgres;

/// Access to the external `users` table. A single store handle is built at
/// startup and injected into the router as shared state; handlers never
/// reach for a global.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, RosterError>;

    /// `NotFound` when no row matches.
    async fn get_user(&self, id: i32) -> Result<User, RosterError>;

    /// Inserts a row and returns the store-assigned id.
    async fn create_user(&self, name: &str, email: &str) -> Result<i32, RosterError>;

    /// Overwrites name and email in place. `NotFound` when zero rows
    /// were affected.
    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<(), RosterError>;

    /// `NotFound` when zero rows were affected, so a repeated delete of
    /// the same id reports the row as gone.
    async fn delete_user(&self, id: i32) -> Result<(), RosterError>;
}
