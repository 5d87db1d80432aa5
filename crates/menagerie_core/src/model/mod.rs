//! Animal domain model.
//!
//! # Responsibility
//! - Define the closed set of animal variants and their fixed behavior.
//! - Enforce record invariants at construction time.
//!
//! # Invariants
//! - An `Animal` can only be built through validating constructors.
//! - Records are immutable once created.

pub mod animal;
pub mod vocabulary;
