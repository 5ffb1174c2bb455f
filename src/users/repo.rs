use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::model::{NewUser, User, UserPatch};
use crate::users::store::{StoreError, UserStore};

/// Postgres-backed [`UserStore`].
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, joined_on
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, joined_on
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        user.ok_or(StoreError::NotFound)
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, joined_on)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, joined_on
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(new.joined_on)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash)
            WHERE id = $1
            RETURNING id, name, email, password_hash, joined_on
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        user.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn map_sqlx(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Other(e.into())
}
