//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory animal collection.
//! - Delegate bulk persistence to repository implementations.

pub mod registry_service;
