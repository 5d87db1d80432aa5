//! Animal repository contracts and storage implementations.
//!
//! # Responsibility
//! - Provide `load`/`save` over a single backing document.
//! - Translate filesystem and codec failures into `RepoError`.
//!
//! # Invariants
//! - A missing backing document loads as an empty collection.
//! - `save` overwrites the previous document in one write; it is not atomic.

use crate::codec::animal_json::{decode_animals, encode_animals, CodecError};
use crate::model::animal::Animal;
use log::{error, info};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for animal persistence.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Format(CodecError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Format(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        Self::Format(value)
    }
}

/// Repository interface for whole-collection persistence.
pub trait AnimalRepository {
    /// Reads the full collection; empty when nothing was stored yet.
    fn load(&self) -> RepoResult<Vec<Animal>>;
    /// Replaces the stored collection with `animals`.
    fn save(&self, animals: &[Animal]) -> RepoResult<()>;
}

/// JSON-file-backed animal repository.
#[derive(Debug, Clone)]
pub struct JsonFileAnimalRepository {
    path: PathBuf,
}

impl JsonFileAnimalRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AnimalRepository for JsonFileAnimalRepository {
    fn load(&self) -> RepoResult<Vec<Animal>> {
        let started_at = Instant::now();
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=repo status=ok count=0 reason=missing_file");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=read_failed io_kind={:?}",
                    err.kind()
                );
                return Err(self.io_error(err));
            }
        };

        match decode_animals(&text) {
            Ok(animals) => {
                info!(
                    "event=store_load module=repo status=ok count={} duration_ms={}",
                    animals.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(animals)
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=decode_failed {}",
                    err.log_fields()
                );
                Err(err.into())
            }
        }
    }

    fn save(&self, animals: &[Animal]) -> RepoResult<()> {
        let started_at = Instant::now();
        // Encode first so a codec failure never truncates the existing file.
        let text = encode_animals(animals)?;

        if let Err(err) = fs::write(&self.path, text) {
            error!(
                "event=store_save module=repo status=error error_code=write_failed io_kind={:?}",
                err.kind()
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=store_save module=repo status=ok count={} duration_ms={}",
            animals.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

/// In-memory repository holding one encoded document.
///
/// Goes through the same codec as the file repository, so it can stand in
/// for it in service tests, including malformed-document cases.
#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    document: RefCell<Option<String>>,
}

impl InMemoryAnimalRepository {
    /// Creates a repository with nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with a raw document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
        }
    }

    /// Returns a copy of the currently stored document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl AnimalRepository for InMemoryAnimalRepository {
    fn load(&self) -> RepoResult<Vec<Animal>> {
        match self.document.borrow().as_deref() {
            Some(text) => Ok(decode_animals(text)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, animals: &[Animal]) -> RepoResult<()> {
        let text = encode_animals(animals)?;
        self.document.replace(Some(text));
        Ok(())
    }
}

impl<R: AnimalRepository + ?Sized> AnimalRepository for &R {
    fn load(&self) -> RepoResult<Vec<Animal>> {
        (**self).load()
    }

    fn save(&self, animals: &[Animal]) -> RepoResult<()> {
        (**self).save(animals)
    }
}
