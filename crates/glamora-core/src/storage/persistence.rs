//! JSON state persistence
//!
//! Each entity class is mirrored to its own file under the data directory:
//!
//! - `products.json`
//! - `posts.json`
//! - `testimonials.json`
//! - `leads.json`
//! - `settings.json`
//! - `faqs.json`
//!
//! Files carry no version field and no migration path; a stored shape is
//! trusted as-is. Writes are atomic (write to temp file, then rename) so a
//! file is never left partially written.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::storage::{StorageError, StorageResult};

/// The six persisted entity classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Products,
    Posts,
    Testimonials,
    Leads,
    Settings,
    Faqs,
}

impl StorageKey {
    /// All keys, in persistence order
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Products,
        StorageKey::Posts,
        StorageKey::Testimonials,
        StorageKey::Leads,
        StorageKey::Settings,
        StorageKey::Faqs,
    ];

    /// File name for this key
    pub fn file_name(&self) -> &'static str {
        match self {
            StorageKey::Products => "products.json",
            StorageKey::Posts => "posts.json",
            StorageKey::Testimonials => "testimonials.json",
            StorageKey::Leads => "leads.json",
            StorageKey::Settings => "settings.json",
            StorageKey::Faqs => "faqs.json",
        }
    }
}

/// Persistence handler for the store's state files
pub struct JsonPersistence {
    config: Config,
}

impl JsonPersistence {
    /// Create a persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the state file for a key
    pub fn path(&self, key: StorageKey) -> PathBuf {
        self.config.data_dir.join(key.file_name())
    }

    /// Check whether any state has been persisted yet
    pub fn exists(&self, key: StorageKey) -> bool {
        self.path(key).exists()
    }

    /// Load the persisted value for a key.
    ///
    /// Returns `Ok(None)` when the file doesn't exist. A file that exists
    /// but fails to parse is logged and treated the same as absent, so the
    /// caller falls back to seed data either way.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> StorageResult<Option<T>> {
        let path = self.path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;

        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unreadable state file {:?}: {}", path, e);
                Ok(None)
            }
        }
    }

    /// Persist a value for a key using an atomic write
    pub fn save<T: Serialize>(&self, key: StorageKey, value: &T) -> StorageResult<()> {
        let path = self.path(key);

        let json = serde_json::to_string_pretty(value).map_err(|source| {
            StorageError::Serialize {
                path: path.clone(),
                source,
            }
        })?;

        atomic_write(&path, json.as_bytes())
    }

    /// Delete all persisted state files
    pub fn wipe(&self) -> StorageResult<()> {
        for key in StorageKey::ALL {
            let path = self.path(key);
            if path.exists() {
                fs::remove_file(&path).map_err(|source| StorageError::Delete {
                    path: path.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");

    let mut file = File::create(&temp_path).map_err(|source| StorageError::Write {
        path: temp_path.clone(),
        source,
    })?;

    file.write_all(data).map_err(|source| StorageError::Write {
        path: temp_path.clone(),
        source,
    })?;

    file.sync_all().map_err(|source| StorageError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::seed;
    use tempfile::TempDir;

    fn test_persistence(temp_dir: &TempDir) -> JsonPersistence {
        JsonPersistence::new(Config {
            data_dir: temp_dir.path().to_path_buf(),
        })
    }

    #[test]
    fn test_load_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = test_persistence(&temp_dir);

        let loaded: Option<Vec<Product>> = persistence.load(StorageKey::Products).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = test_persistence(&temp_dir);

        let products = seed::products();
        persistence.save(StorageKey::Products, &products).unwrap();
        assert!(persistence.exists(StorageKey::Products));

        let loaded: Vec<Product> = persistence.load(StorageKey::Products).unwrap().unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_corrupt_file_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = test_persistence(&temp_dir);

        let path = persistence.path(StorageKey::Products);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not valid json").unwrap();

        let loaded: Option<Vec<Product>> = persistence.load(StorageKey::Products).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_each_key_has_its_own_file() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = test_persistence(&temp_dir);

        let names: Vec<_> = StorageKey::ALL.iter().map(|k| k.file_name()).collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }

        persistence
            .save(StorageKey::Faqs, &seed::faqs())
            .unwrap();
        assert!(persistence.exists(StorageKey::Faqs));
        assert!(!persistence.exists(StorageKey::Products));
    }

    #[test]
    fn test_wipe_removes_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = test_persistence(&temp_dir);

        persistence.save(StorageKey::Products, &seed::products()).unwrap();
        persistence.save(StorageKey::Faqs, &seed::faqs()).unwrap();

        persistence.wipe().unwrap();

        for key in StorageKey::ALL {
            assert!(!persistence.exists(key));
        }
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = test_persistence(&temp_dir);

        persistence
            .save(StorageKey::Settings, &seed::default_settings())
            .unwrap();

        let tmp = persistence
            .path(StorageKey::Settings)
            .with_extension("json.tmp");
        assert!(!tmp.exists());
    }

    #[test]
    fn test_save_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(Config {
            data_dir: temp_dir.path().join("nested").join("glamora"),
        });

        persistence.save(StorageKey::Posts, &seed::posts()).unwrap();
        assert!(persistence.exists(StorageKey::Posts));
    }
}
