//! JSON codec for animal collections.
//!
//! Each record is an object discriminated by `$type` (`lion|parrot|snake`)
//! carrying `Name`, `Age` and the variant-specific field.

use crate::model::animal::{Animal, AnimalKind, AnimalValidationError};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Malformed or unrecognized persisted structure.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
    InvalidRecord {
        index: usize,
        source: AnimalValidationError,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed animal document: {err}"),
            Self::InvalidRecord { index, source } => {
                write!(f, "invalid animal record at index {index}: {source}")
            }
        }
    }
}

impl CodecError {
    /// Metadata-only description for log lines.
    ///
    /// Unlike `Display`, this never includes values taken from the document.
    pub fn log_fields(&self) -> String {
        match self {
            Self::Json(err) => {
                let category = match err.classify() {
                    Category::Io => "io",
                    Category::Syntax => "syntax",
                    Category::Data => "data",
                    Category::Eof => "eof",
                };
                format!(
                    "category={} line={} column={}",
                    category,
                    err.line(),
                    err.column()
                )
            }
            Self::InvalidRecord { index, source } => {
                format!("category=validation index={} reason={}", index, source.code())
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Wire shape of one record. Variant order of fields is the output order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "$type", rename_all = "lowercase")]
enum AnimalRecord {
    Lion {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Age")]
        age: i64,
        #[serde(rename = "IsAlpha")]
        is_alpha: bool,
    },
    Parrot {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Age")]
        age: i64,
        #[serde(rename = "Vocabulary")]
        vocabulary: Vec<String>,
    },
    Snake {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Age")]
        age: i64,
        #[serde(rename = "IsVenomous")]
        is_venomous: bool,
    },
}

impl From<&Animal> for AnimalRecord {
    fn from(animal: &Animal) -> Self {
        let name = animal.name().to_string();
        let age = i64::from(animal.age());
        match animal.kind() {
            AnimalKind::Lion { is_alpha } => Self::Lion {
                name,
                age,
                is_alpha: *is_alpha,
            },
            AnimalKind::Parrot { vocabulary } => Self::Parrot {
                name,
                age,
                vocabulary: vocabulary.as_slice().to_vec(),
            },
            AnimalKind::Snake { is_venomous } => Self::Snake {
                name,
                age,
                is_venomous: *is_venomous,
            },
        }
    }
}

impl AnimalRecord {
    fn into_animal(self) -> Result<Animal, AnimalValidationError> {
        match self {
            AnimalRecord::Lion {
                name,
                age,
                is_alpha,
            } => Animal::lion(name, age, is_alpha),
            AnimalRecord::Parrot {
                name,
                age,
                vocabulary,
            } => Animal::parrot(name, age, vocabulary),
            AnimalRecord::Snake {
                name,
                age,
                is_venomous,
            } => Animal::snake(name, age, is_venomous),
        }
    }
}

/// Encodes the collection as a pretty-printed JSON array.
pub fn encode_animals(animals: &[Animal]) -> CodecResult<String> {
    let records: Vec<AnimalRecord> = animals.iter().map(AnimalRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Decodes a JSON array produced by [`encode_animals`].
///
/// # Errors
/// - `Json` for syntax errors, a missing or unknown `$type`, and missing or
///   mistyped fields.
/// - `InvalidRecord` when a record fails animal validation.
pub fn decode_animals(text: &str) -> CodecResult<Vec<Animal>> {
    let records: Vec<AnimalRecord> = serde_json::from_str(text)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_animal()
                .map_err(|source| CodecError::InvalidRecord { index, source })
        })
        .collect()
}
