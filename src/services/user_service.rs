//! User service - Handles user-related business logic.
//!
//! The service owns the request-to-persistence mapping: it computes the
//! slug at creation time and delegates storage to the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, NewUser, SlugGenerator, UpdateUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in store order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Create a new user; the slug is derived from the username
    async fn create_user(&self, payload: CreateUser) -> AppResult<User>;

    /// Apply a partial update; unset fields are left untouched
    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    slug_gen: Arc<dyn SlugGenerator>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, slug_gen: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slug_gen }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, payload: CreateUser) -> AppResult<User> {
        let slug = self.slug_gen.slugify(&payload.username);
        let new_user = NewUser::from_payload(payload, slug);
        self.repo.insert(new_user).await
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        self.repo.update(id, changes).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
