//! User repository implementation.
//!
//! Each method is its own unit of work: a pooled connection is acquired
//! for the duration of the call and released on every exit path.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// List all users in store order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user; the store assigns the ID
    async fn insert(&self, new_user: NewUser) -> AppResult<User>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over SeaORM
// The connection is held in an `Arc` because `DatabaseConnection` is not
// `Clone` when SeaORM's `mock` feature is enabled in test builds.
pub struct UserStore {
    db: std::sync::Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: impl Into<std::sync::Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(new_user.username),
            slug: Set(new_user.slug),
            firstname: Set(new_user.firstname),
            lastname: Set(new_user.lastname),
            age: Set(new_user.age),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        // An all-unset payload changes nothing; skip the round trip
        if changes.is_empty() {
            return Ok(User::from(user));
        }

        let mut active: ActiveModel = user.into();

        // Explicit field-by-field merge: unset fields stay untouched.
        // Slug is deliberately not recomputed on username change.
        if let Some(username) = changes.username {
            active.username = Set(username);
        }
        if let Some(firstname) = changes.firstname {
            active.firstname = Set(Some(firstname));
        }
        if let Some(lastname) = changes.lastname {
            active.lastname = Set(Some(lastname));
        }
        if let Some(age) = changes.age {
            active.age = Set(Some(age));
        }

        let model = active.update(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
