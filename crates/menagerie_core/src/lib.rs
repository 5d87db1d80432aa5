//! Core domain logic for Menagerie.
//! This crate owns the animal model, its persisted format and the registry.

pub mod codec;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::animal_json::{decode_animals, encode_animals, CodecError, CodecResult};
pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::animal::{
    seed_animals, Animal, AnimalKind, AnimalValidationError, Capability, Species,
};
pub use model::vocabulary::{Vocabulary, SILENCE, UNKNOWN_WORD};
pub use repo::animal_repo::{
    AnimalRepository, InMemoryAnimalRepository, JsonFileAnimalRepository, RepoError, RepoResult,
};
pub use service::registry_service::{AnimalRegistry, ServiceError, ServiceResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
