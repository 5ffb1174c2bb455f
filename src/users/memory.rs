use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::users::model::{NewUser, User, UserPatch};
use crate::users::store::{StoreError, UserStore};

/// In-memory [`UserStore`] with the same contract as the Postgres one,
/// including duplicate-email rejection. Backs tests and `AppState::in_memory`.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::DuplicateEmail);
        }
        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            joined_on: new.joined_on,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(email) = &patch.email {
            if inner.users.values().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        let user = inner.users.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(hash) = patch.password_hash {
            user.password_hash = hash;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.users.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
