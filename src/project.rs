//! Project snapshots and the JSON-backed store behind the persistence port.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;
use crate::loads::ApplianceLoad;
use crate::sizing::SizingResults;

/// Deep copy of the working state at one moment: loads, parameters, and the
/// results computed from them. Never aliases live state.
///
/// Every field is optional on the wire so that partially-shaped persisted
/// records merge onto defaults instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Appliance loads at save time.
    #[serde(default)]
    pub loads: Vec<ApplianceLoad>,
    /// System parameters at save time.
    #[serde(default)]
    pub params: SystemConfig,
    /// Results at save time; absent in records predating the field.
    #[serde(default)]
    pub results: Option<SizingResults>,
}

impl Snapshot {
    /// Captures the current working state.
    pub fn capture(
        loads: &[ApplianceLoad],
        params: &SystemConfig,
        results: &SizingResults,
    ) -> Self {
        Self {
            loads: loads.to_vec(),
            params: params.clone(),
            results: Some(results.clone()),
        }
    }
}

/// A saved project: an immutable-at-save-time snapshot plus identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier.
    pub id: u64,
    /// User-chosen name.
    pub name: String,
    /// RFC 3339 save timestamp.
    pub saved_at: String,
    /// The captured state.
    pub snapshot: Snapshot,
}

/// Store failure. Callers report these and continue with in-memory state;
/// a broken store never blocks a calculation.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying filesystem failure.
    Io(io::Error),
    /// The persisted document is not valid JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store I/O error: {e}"),
            Self::Parse(e) => write!(f, "store contains invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Persistence port the presentation layer hands to the core.
///
/// The engine itself never touches storage; it is re-run after a load has
/// been merged into the working state.
pub trait ProjectStore {
    /// Saves a named snapshot and returns the assigned project id.
    fn save_project(&mut self, name: &str, snapshot: Snapshot) -> Result<u64, StoreError>;

    /// All saved projects, oldest first.
    fn projects(&self) -> Result<Vec<Project>, StoreError>;

    /// Loads one project by id, or `None` if absent.
    fn load_project(&self, id: u64) -> Result<Option<Project>, StoreError>;

    /// Persists the current working state opportunistically.
    fn save_workspace(&mut self, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Restores the last working state, or `None` if never saved.
    fn load_workspace(&self) -> Result<Option<Snapshot>, StoreError>;
}

/// On-disk document holding all persisted state in one JSON file.
///
/// Unknown fields are ignored and missing ones default, so documents written
/// by older or newer versions still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    workspace: Option<Snapshot>,
}

/// Single-file JSON project store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path. The file is created
    /// on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<StoreDocument, StoreError> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ProjectStore for JsonFileStore {
    fn save_project(&mut self, name: &str, snapshot: Snapshot) -> Result<u64, StoreError> {
        let mut doc = self.read_document()?;
        let id = doc.projects.iter().map(|p| p.id + 1).max().unwrap_or(1);
        doc.projects.push(Project {
            id,
            name: name.to_string(),
            saved_at: Utc::now().to_rfc3339(),
            snapshot,
        });
        self.write_document(&doc)?;
        Ok(id)
    }

    fn projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.read_document()?.projects)
    }

    fn load_project(&self, id: u64) -> Result<Option<Project>, StoreError> {
        Ok(self
            .read_document()?
            .projects
            .into_iter()
            .find(|p| p.id == id))
    }

    fn save_workspace(&mut self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let mut doc = self.read_document()?;
        doc.workspace = Some(snapshot.clone());
        self.write_document(&doc)
    }

    fn load_workspace(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.read_document()?.workspace)
    }
}
