//! Animal registry service.
//!
//! # Responsibility
//! - Hold the ordered animal collection for the lifetime of the registry.
//! - Provide add/list/sound entry points for the presentation shell.
//! - Delegate whole-collection load/save to an `AnimalRepository`.
//!
//! # Invariants
//! - Insertion order is preserved; names need not be unique.
//! - A failed `load` leaves the current collection untouched.
//! - The registry is single-threaded; concurrent callers must hold an
//!   external lock around it.

use crate::model::animal::Animal;
use crate::repo::animal_repo::{AnimalRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Registry-level error.
#[derive(Debug)]
pub enum ServiceError {
    InvalidArgument(&'static str),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(name) => write!(f, "invalid argument: {name} is required"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// In-memory animal registry backed by a repository.
pub struct AnimalRegistry<R: AnimalRepository> {
    repo: R,
    animals: Vec<Animal>,
}

impl<R: AnimalRepository> AnimalRegistry<R> {
    /// Creates an empty registry; nothing is loaded until `load` is called.
    pub fn new(repo: R) -> Self {
        Self::with_animals(repo, Vec::new())
    }

    /// Creates a registry that starts with `animals`.
    pub fn with_animals(repo: R, animals: Vec<Animal>) -> Self {
        Self { repo, animals }
    }

    /// Appends one animal to the end of the collection.
    pub fn add(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// Appends an animal handed over by a caller that may have none.
    ///
    /// # Errors
    /// - `InvalidArgument` when `animal` is `None`.
    pub fn try_add(&mut self, animal: Option<Animal>) -> ServiceResult<()> {
        let animal = animal.ok_or(ServiceError::InvalidArgument("animal"))?;
        self.add(animal);
        Ok(())
    }

    /// Returns the collection in insertion order.
    pub fn list(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Yields `"<species> <name>: <sound>"` for each animal, in order.
    ///
    /// Lines are formatted lazily and recomputed on every call.
    pub fn make_all_sounds(&self) -> impl Iterator<Item = String> + '_ {
        self.animals.iter().map(|animal| {
            format!(
                "{} {}: {}",
                animal.species(),
                animal.name(),
                animal.make_sound()
            )
        })
    }

    /// Persists the current collection through the repository.
    pub fn save(&self) -> ServiceResult<()> {
        self.repo.save(&self.animals)?;
        Ok(())
    }

    /// Replaces the collection with what the repository holds.
    ///
    /// Unsaved additions are discarded on success. On failure the current
    /// collection is kept as is.
    pub fn load(&mut self) -> ServiceResult<()> {
        self.animals = self.repo.load()?;
        Ok(())
    }

    /// Returns the backing repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimalRegistry, ServiceError};
    use crate::model::animal::Animal;
    use crate::repo::animal_repo::InMemoryAnimalRepository;

    #[test]
    fn try_add_rejects_missing_animal() {
        let mut registry = AnimalRegistry::new(InMemoryAnimalRepository::new());

        let err = registry.try_add(None).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument("animal")));
        assert!(registry.is_empty());

        registry
            .try_add(Some(Animal::snake("Kaa", 7, false).unwrap()))
            .unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn make_all_sounds_is_restartable() {
        let mut registry = AnimalRegistry::new(InMemoryAnimalRepository::new());
        registry.add(Animal::lion("Simba", 5, true).unwrap());

        let first: Vec<String> = registry.make_all_sounds().collect();
        registry.add(Animal::lion("Nala", 4, false).unwrap());
        let second: Vec<String> = registry.make_all_sounds().collect();

        assert_eq!(first, ["Lion Simba: Roar"]);
        assert_eq!(second, ["Lion Simba: Roar", "Lion Nala: Roar"]);
    }
}
