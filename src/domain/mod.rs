//! Domain layer: entities and repository interfaces.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or HTTP code.
//! Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
