use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{DietError, Result};

/// Durable store of named meal selections.
///
/// The backing file is a pretty-printed JSON object mapping selection
/// names to ordered meal-name lists. Every mutation rewrites the whole
/// file through a temp file in the same directory, so a crash mid-write
/// leaves the previous contents intact. Single writer assumed; the last
/// process to write wins.
#[derive(Debug)]
pub struct SelectionStore {
    path: PathBuf,
    selections: BTreeMap<String, Vec<String>>,
}

impl SelectionStore {
    /// Open the store at `path`. A missing file is a fresh, empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let selections = match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(DietError::Io(e)),
        };
        Ok(Self {
            path: path.to_path_buf(),
            selections,
        })
    }

    /// Save `meals` under `name`, overwriting any previous selection of
    /// that name. An empty list is rejected before anything is written.
    pub fn save(&mut self, name: &str, meals: Vec<String>) -> Result<()> {
        if meals.is_empty() {
            return Err(DietError::EmptySelection);
        }
        self.selections.insert(name.to_string(), meals);
        self.write()
    }

    /// Remove the selection named `name`. An unknown name leaves the
    /// store and its file untouched.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.selections.remove(name).is_none() {
            return Err(DietError::SelectionNotFound(name.to_string()));
        }
        self.write()
    }

    pub fn get(&self, name: &str) -> Option<&Vec<String>> {
        self.selections.get(name)
    }

    /// Selection names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.selections.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    fn write(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.selections)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(&self.path)
            .map_err(|e| DietError::Io(e.error))?;
        Ok(())
    }
}
