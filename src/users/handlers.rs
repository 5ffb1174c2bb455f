use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};

use crate::{
    state::AppState,
    users::{
        dto::{CreateUserRequest, ErrorResponse, MessageResponse, UpdateUserRequest, UserResponse},
        model::{NewUser, UserPatch},
        password::hash_password,
        store::StoreError,
    },
};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/:id", put(update_user).delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.store.list().await.map_err(store_error)?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Some((name, email, password)) = payload.into_required() else {
        warn!("create user rejected: missing required fields");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing required fields".into(),
            }),
        ));
    };

    let hash = hash_password(&password).map_err(internal)?;
    let user = state
        .store
        .insert(NewUser {
            name,
            email,
            password_hash: hash,
            joined_on: OffsetDateTime::now_utc(),
        })
        .await
        .map_err(store_error)?;

    info!(user_id = user.id, email = %user.email, "user created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User added successfully!".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut patch = UserPatch {
        name: payload.name,
        email: payload.email,
        password_hash: None,
    };
    if let Some(password) = payload.password {
        patch.password_hash = Some(hash_password(&password).map_err(internal)?);
    }

    state.store.update(id, patch).await.map_err(store_error)?;

    info!(user_id = id, "user updated");
    Ok(Json(MessageResponse {
        message: "User updated successfully!".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(id).await.map_err(store_error)?;

    info!(user_id = id, "user deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully!".into(),
    }))
}

fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "User not found".into(),
            }),
        ),
        StoreError::DuplicateEmail => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Email already registered".into(),
            }),
        ),
        StoreError::Other(e) => {
            error!(error = %e, "store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        }
    }
}

fn internal(e: anyhow::Error) -> ApiError {
    error!(error = %e, "internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
