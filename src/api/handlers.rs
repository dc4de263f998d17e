use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use crate::api::models::{MessageResponse, UpsertUserRequest};
use crate::error::RosterError;
use crate::models::user::User;
use crate::store::UserStore;

pub async fn list_users(
    State(store): State<Arc<dyn UserStore>>,
) -> Result<Json<Vec<User>>, RosterError> {
    let users = store.list_users().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(store): State<Arc<dyn UserStore>>,
    Path(id): Path<i32>,
) -> Result<Json<User>, RosterError> {
    let user = store.get_user(id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(store): State<Arc<dyn UserStore>>,
    body: Result<Json<UpsertUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), RosterError> {
    let Json(req) = body.map_err(|e| RosterError::InvalidBody(e.body_text()))?;
    let id = store.create_user(&req.name, &req.email).await?;
    let user = User {
        id,
        name: req.name,
        email: req.email,
    };
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(store): State<Arc<dyn UserStore>>,
    Path(id): Path<i32>,
    body: Result<Json<UpsertUserRequest>, JsonRejection>,
) -> Result<Json<User>, RosterError> {
    let Json(req) = body.map_err(|e| RosterError::InvalidBody(e.body_text()))?;
    store.update_user(id, &req.name, &req.email).await?;
    // Echo the submitted values; the row is not re-read after the update.
    let user = User {
        id,
        name: req.name,
        email: req.email,
    };
    Ok(Json(user))
}

pub async fn delete_user(
    State(store): State<Arc<dyn UserStore>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, RosterError> {
    store.delete_user(id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
