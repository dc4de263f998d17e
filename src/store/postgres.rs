use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::error::RosterError;
use crate::models::user::User;
use crate::store::UserStore;

/// Postgres-backed store. Pooling is sqlx's own; this type adds nothing
/// beyond the five statements the service issues.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connects eagerly so that an unreachable store fails startup rather
    /// than the first request.
    pub async fn connect(database_url: &str) -> Result<Self, RosterError> {
        let pool = PgPoolOptions::new().connect(database_url).await?;
        info!("connected to user store");
        Ok(Self { pool })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get_user(&self, id: i32) -> Result<User, RosterError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RosterError::NotFound)
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<i32, RosterError> {
        let id = sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<(), RosterError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RosterError::NotFound);
        }
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> Result<(), RosterError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RosterError::NotFound);
        }
        Ok(())
    }
}
