use async_trait::async_trait;
use thiserror::Error;

use crate::users::model::{NewUser, User, UserPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Durable storage for user records. Every mutating operation is a single
/// statement, committed before it returns.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in primary-key order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn get(&self, id: i64) -> Result<User, StoreError>;

    /// Assigns a fresh id and returns the stored row.
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;

    /// Applies the present fields of `patch`; absent fields keep their
    /// stored values.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
