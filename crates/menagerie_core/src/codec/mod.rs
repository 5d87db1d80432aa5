//! Persisted text format for the animal collection.
//!
//! # Responsibility
//! - Map the in-memory collection to/from pretty-printed JSON.
//! - Keep wire naming (`$type`, `Name`, `Age`, ...) out of the domain model.
//!
//! # Invariants
//! - Decoding only produces animals through validating constructors.
//! - A document either decodes completely or fails; no partial results.

pub mod animal_json;
