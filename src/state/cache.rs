use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{DietError, Result};
use crate::models::MealCatalog;
use crate::parser::{ParseOptions, load_catalog};

/// Identity of the sheet file's content at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceStamp {
    modified: SystemTime,
    len: u64,
}

impl SourceStamp {
    fn read(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path)
            .map_err(|e| DietError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        let modified = meta
            .modified()
            .map_err(|e| DietError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            modified,
            len: meta.len(),
        })
    }
}

#[derive(Debug)]
struct CacheEntry {
    path: PathBuf,
    stamp: SourceStamp,
    catalog: MealCatalog,
}

/// Holds the last parsed catalog and re-parses only when the sheet's
/// path or on-disk stamp changes.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entry: Option<CacheEntry>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the catalog for `path`, re-parsing if the cached entry
    /// belongs to another path or the file changed since it was read.
    /// A failed reload leaves the cache empty rather than serving the
    /// previous catalog.
    pub fn load(&mut self, path: &Path, options: &ParseOptions) -> Result<&MealCatalog> {
        let stamp = match SourceStamp::read(path) {
            Ok(stamp) => stamp,
            Err(e) => {
                self.entry = None;
                return Err(e);
            }
        };

        if let Some(entry) = self.entry.take() {
            if entry.path == path && entry.stamp == stamp {
                return Ok(&self.entry.insert(entry).catalog);
            }
        }

        let catalog = load_catalog(path, options)?;
        let entry = CacheEntry {
            path: path.to_path_buf(),
            stamp,
            catalog,
        };
        Ok(&self.entry.insert(entry).catalog)
    }

    /// Drop the cached entry; the next `load` re-parses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_warm(&self) -> bool {
        self.entry.is_some()
    }
}
