//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, immutable after creation
    #[schema(example = 1)]
    pub id: i64,
    /// Username the record was created with
    #[schema(example = "alice")]
    pub username: String,
    /// URL-safe identifier derived from `username` at creation time
    #[schema(example = "alice")]
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Alice")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Smith")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 30)]
    pub age: Option<i32>,
}

/// User creation payload.
///
/// `slug` is intentionally absent: it is computed by the service,
/// never accepted from callers.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Username (required)
    #[schema(example = "alice")]
    pub username: String,
    /// First name
    #[schema(example = "Alice")]
    pub firstname: Option<String>,
    /// Last name
    #[schema(example = "Smith")]
    pub lastname: Option<String>,
    /// Age in years
    #[schema(example = 30)]
    pub age: Option<i32>,
}

/// Fully specified new user, ready for insertion.
///
/// Produced by the service layer after slug computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub slug: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
}

impl NewUser {
    /// Combine a creation payload with its computed slug
    pub fn from_payload(payload: CreateUser, slug: String) -> Self {
        Self {
            username: payload.username,
            slug,
            firstname: payload.firstname,
            lastname: payload.lastname,
            age: payload.age,
        }
    }
}

/// Partial update payload.
///
/// Each field is optional; `None` means "leave untouched". Fields are
/// merged explicitly, one by one, in the repository. Note that `slug`
/// is not updatable and stays as computed at creation, even when
/// `username` changes.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New username
    #[schema(example = "alice2")]
    pub username: Option<String>,
    /// New first name
    #[schema(example = "Alice")]
    pub firstname: Option<String>,
    /// New last name
    #[schema(example = "Smith")]
    pub lastname: Option<String>,
    /// New age
    #[schema(example = 31)]
    pub age: Option<i32>,
}

impl UpdateUser {
    /// True when no field is set, i.e. the update is a no-op
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.age.is_none()
    }
}
