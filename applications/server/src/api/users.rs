/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use roster_core::{CreateUserRequest, RosterError, User, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Path ids must be integers; anything else is rejected before the store is touched
fn parse_id(raw: &str) -> Result<UserId> {
    raw.parse::<UserId>().map_err(|_| ServerError::InvalidId)
}

/// POST /users
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let Json(req) = payload?;

    req.validate().map_err(|e| {
        tracing::debug!(field = e.field, "Rejected user: {}", e.reason);
        RosterError::from(e)
    })?;

    let user = app_state.store.create(req).map_err(|e| {
        if e.is_conflict() {
            tracing::warn!("User creation conflict: {}", e);
        }
        e
    })?;

    tracing::info!(id = user.id, username = %user.username, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// GET /users
pub async fn list_users(State(app_state): State<AppState>) -> Json<UsersResponse> {
    let users = app_state.store.list();
    let count = users.len();
    Json(UsersResponse { users, count })
}

/// GET /users/:id
pub async fn get_user(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let Path(raw) = path?;
    let id = parse_id(&raw)?;
    let user = app_state.store.get(id)?;
    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let Path(raw) = path?;
    let id = parse_id(&raw)?;
    app_state.store.delete(id)?;

    tracing::info!(id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
