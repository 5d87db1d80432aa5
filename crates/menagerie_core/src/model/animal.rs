//! Animal record and its variants.
//!
//! # Responsibility
//! - Define the shared record shape (`name`, `age`) and per-kind fields.
//! - Dispatch species, sound and capabilities on the closed variant set.
//!
//! # Invariants
//! - `name` is trimmed and non-empty.
//! - `age` is a non-negative integer that fits in `u32`.
//! - Parrot vocabulary is always normalized (see [`Vocabulary`]).

use crate::model::vocabulary::Vocabulary;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction-time validation failures for [`Animal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimalValidationError {
    EmptyName,
    NegativeAge(i64),
    AgeOutOfRange(i64),
}

impl Display for AnimalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::NegativeAge(age) => write!(f, "age cannot be negative, got {age}"),
            Self::AgeOutOfRange(age) => write!(f, "age {age} is out of range"),
        }
    }
}

impl AnimalValidationError {
    /// Stable machine-readable code; carries no record values.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::NegativeAge(_) => "negative_age",
            Self::AgeOutOfRange(_) => "age_out_of_range",
        }
    }
}

impl Error for AnimalValidationError {}

/// Identifies which variant a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Lion,
    Parrot,
    Snake,
}

impl Species {
    /// Display name, e.g. `Lion`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lion => "Lion",
            Self::Parrot => "Parrot",
            Self::Snake => "Snake",
        }
    }

    /// Characteristic sound for this species.
    pub fn sound(self) -> &'static str {
        match self {
            Self::Lion => "Roar",
            Self::Parrot => "Squawk",
            Self::Snake => "Hiss",
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Demonstration-only behaviors an animal may support.
///
/// Capabilities carry no persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Feed,
    Fly,
}

/// Variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimalKind {
    Lion { is_alpha: bool },
    Parrot { vocabulary: Vocabulary },
    Snake { is_venomous: bool },
}

impl AnimalKind {
    pub fn species(&self) -> Species {
        match self {
            Self::Lion { .. } => Species::Lion,
            Self::Parrot { .. } => Species::Parrot,
            Self::Snake { .. } => Species::Snake,
        }
    }
}

/// One registered animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    age: u32,
    kind: AnimalKind,
}

impl Animal {
    /// Creates an animal after validating the shared fields.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace-only.
    /// - `NegativeAge` when `age < 0`.
    /// - `AgeOutOfRange` when `age` does not fit in `u32`.
    pub fn new(
        name: impl AsRef<str>,
        age: i64,
        kind: AnimalKind,
    ) -> Result<Self, AnimalValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(AnimalValidationError::EmptyName);
        }
        if age < 0 {
            return Err(AnimalValidationError::NegativeAge(age));
        }
        let age = u32::try_from(age).map_err(|_| AnimalValidationError::AgeOutOfRange(age))?;

        Ok(Self {
            name: name.to_string(),
            age,
            kind,
        })
    }

    pub fn lion(
        name: impl AsRef<str>,
        age: i64,
        is_alpha: bool,
    ) -> Result<Self, AnimalValidationError> {
        Self::new(name, age, AnimalKind::Lion { is_alpha })
    }

    /// Creates a parrot; `vocabulary` is normalized on the way in.
    pub fn parrot<I, S>(
        name: impl AsRef<str>,
        age: i64,
        vocabulary: I,
    ) -> Result<Self, AnimalValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            name,
            age,
            AnimalKind::Parrot {
                vocabulary: Vocabulary::new(vocabulary),
            },
        )
    }

    pub fn snake(
        name: impl AsRef<str>,
        age: i64,
        is_venomous: bool,
    ) -> Result<Self, AnimalValidationError> {
        Self::new(name, age, AnimalKind::Snake { is_venomous })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn kind(&self) -> &AnimalKind {
        &self.kind
    }

    pub fn species(&self) -> Species {
        self.kind.species()
    }

    pub fn make_sound(&self) -> &'static str {
        self.species().sound()
    }

    /// Returns the parrot vocabulary, or `None` for other species.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        match &self.kind {
            AnimalKind::Parrot { vocabulary } => Some(vocabulary),
            _ => None,
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self.kind {
            AnimalKind::Parrot { .. } => &[Capability::Feed, Capability::Fly],
            AnimalKind::Lion { .. } | AnimalKind::Snake { .. } => &[Capability::Feed],
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}', age {}", self.species(), self.name, self.age)
    }
}

/// Sample collection used to bootstrap an empty store.
pub fn seed_animals() -> Result<Vec<Animal>, AnimalValidationError> {
    Ok(vec![
        Animal::lion("Simba", 5, true)?,
        Animal::parrot("Polly", 2, ["Hello", "Cracker"])?,
        Animal::snake("Nagini", 4, true)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::{Animal, AnimalValidationError, Capability};

    #[test]
    fn new_trims_name() {
        let lion = Animal::lion("  Simba  ", 5, true).unwrap();
        assert_eq!(lion.name(), "Simba");
    }

    #[test]
    fn age_above_u32_is_rejected() {
        let err = Animal::snake("Kaa", i64::from(u32::MAX) + 1, false).unwrap_err();
        assert!(matches!(err, AnimalValidationError::AgeOutOfRange(_)));
    }

    #[test]
    fn only_parrots_fly() {
        let parrot = Animal::parrot("Polly", 2, ["Hello"]).unwrap();
        let snake = Animal::snake("Nagini", 4, true).unwrap();

        assert!(parrot.supports(Capability::Fly));
        assert!(!snake.supports(Capability::Fly));
        assert!(snake.supports(Capability::Feed));
    }
}
