//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod slug;
pub mod user;

pub use slug::{AsciiSlugGenerator, SlugGenerator};
pub use user::{CreateUser, NewUser, UpdateUser, User};
