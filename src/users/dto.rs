use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::users::model::User;

/// Request body for POST /api/users. All three fields are required; they are
/// optional here so the handler can answer a missing field with the API's
/// 400 body instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// Returns (name, email, password) when all are present and non-empty.
    pub fn into_required(self) -> Option<(String, String, String)> {
        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password))
                if !name.is_empty() && !email.is_empty() && !password.is_empty() =>
            {
                Some((name, email, password))
            }
            _ => None,
        }
    }
}

/// Request body for PUT /api/users/{id}: a partial patch, only supplied
/// fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public projection of a user. There is no password field here, so no
/// serialization path can leak the credential.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub joined_on: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            joined_on: user.joined_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
