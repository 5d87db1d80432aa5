//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by the registry.
//! - Isolate file access and wire format details from the service layer.
//!
//! # Invariants
//! - Load and save always operate on the full collection.
//! - Repositories never keep a reference to a collection after returning.

pub mod animal_repo;
