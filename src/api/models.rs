use serde::{Deserialize, Serialize};

/// Write payload for create and update. An `id` in the body is ignored:
/// the store assigns it on create and the path id wins on update.
#[derive(Deserialize)]
pub struct UpsertUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
