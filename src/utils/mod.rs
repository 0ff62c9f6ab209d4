//! Utility functions shared across layers.
//!
//! - [`short_id`] - Deterministic short identifier derivation

pub mod short_id;
