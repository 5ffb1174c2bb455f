use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 hash, not exposed in JSON
    #[serde(with = "time::serde::rfc3339")]
    pub joined_on: OffsetDateTime,
}

/// Fields for a new user row. The password is already hashed by the time
/// this struct exists.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub joined_on: OffsetDateTime,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
