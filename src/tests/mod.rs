
use async_trait::async_trait;
use axum::Router;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::api;
use crate::error::RosterError;
use crate::models::user::User;
use crate::store::UserStore;

/// In-memory stand-in for the Postgres store with the same not-found
/// semantics: zero matching rows, never a driver sentinel.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    rows: BTreeMap<i32, User>,
    next_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, RosterError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get_user(&self, id: i32) -> Result<User, RosterError> {
        let inner = self.inner.lock().unwrap();
        inner.rows.get(&id).cloned().ok_or(RosterError::NotFound)
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<i32, RosterError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            User {
                id,
                name: name.to_string(),
                email: email.to_string(),
            },
        );
        Ok(id)
    }

    async fn update_user(&self, id: i32, name: &str, email: &str) -> Result<(), RosterError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(user) => {
                user.name = name.to_string();
                user.email = email.to_string();
                Ok(())
            }
            None => Err(RosterError::NotFound),
        }
    }

    async fn delete_user(&self, id: i32) -> Result<(), RosterError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RosterError::NotFound),
        }
    }
}

pub fn test_app(store: Arc<MemoryStore>) -> Router {
    api::router(store)
}
