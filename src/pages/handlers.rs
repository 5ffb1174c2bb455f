use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Router,
};
use time::OffsetDateTime;
use tracing::{error, info, instrument};

use crate::{
    pages::{
        dto::{FlashParams, UserForm},
        views,
    },
    state::AppState,
    users::{
        model::{NewUser, UserPatch},
        password::hash_password,
        store::StoreError,
    },
};

type PageError = (StatusCode, Html<String>);

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_user_page).post(add_user))
        .route("/update/:id", get(edit_user_page).post(edit_user))
        .route("/delete/:id", get(delete_user_page).post(delete_user))
}

#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Result<Html<String>, PageError> {
    let users = state.store.list().await.map_err(store_error)?;
    Ok(Html(views::user_list(&users, params.flash.as_deref())))
}

pub async fn add_user_page() -> Html<String> {
    Html(views::add_form())
}

#[instrument(skip(state, form))]
pub async fn add_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, PageError> {
    let hash = hash_password(&form.password).map_err(internal)?;
    let user = state
        .store
        .insert(NewUser {
            name: form.name,
            email: form.email,
            password_hash: hash,
            joined_on: OffsetDateTime::now_utc(),
        })
        .await
        .map_err(store_error)?;

    info!(user_id = user.id, "user added via form");
    Ok(Redirect::to("/?flash=User+added+successfully!"))
}

#[instrument(skip(state))]
pub async fn edit_user_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = state.store.get(id).await.map_err(store_error)?;
    Ok(Html(views::edit_form(&user)))
}

#[instrument(skip(state, form))]
pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, PageError> {
    // An empty password field keeps the stored hash.
    let password_hash = if form.password.is_empty() {
        None
    } else {
        Some(hash_password(&form.password).map_err(internal)?)
    };
    let patch = UserPatch {
        name: Some(form.name),
        email: Some(form.email),
        password_hash,
    };

    state.store.update(id, patch).await.map_err(store_error)?;

    info!(user_id = id, "user updated via form");
    Ok(Redirect::to("/?flash=User+updated+successfully!"))
}

/// The destructive action is behind a POST; GET only renders a
/// confirmation page for the user about to be removed.
#[instrument(skip(state))]
pub async fn delete_user_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let user = state.store.get(id).await.map_err(store_error)?;
    Ok(Html(views::confirm_delete(&user)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    state.store.delete(id).await.map_err(store_error)?;

    info!(user_id = id, "user deleted via form");
    Ok(Redirect::to("/?flash=User+deleted+successfully!"))
}

fn store_error(e: StoreError) -> PageError {
    match e {
        StoreError::NotFound => (StatusCode::NOT_FOUND, Html(views::not_found())),
        StoreError::DuplicateEmail => (
            StatusCode::CONFLICT,
            Html(views::error_page("Email already registered")),
        ),
        StoreError::Other(e) => {
            error!(error = %e, "store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::error_page("Something went wrong")),
            )
        }
    }
}

fn internal(e: anyhow::Error) -> PageError {
    error!(error = %e, "internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::error_page("Something went wrong")),
    )
}
