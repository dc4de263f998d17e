use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the external `users` table. The id is assigned by the store on
/// insert; this service never generates one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}
