// crates/gazetteer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (file lookup, decompression, binary cache)
//! and delegates to the JSON parser for the two reference tables:
//!
//! - `names.json`: district -> upazilas
//! - `union_names.json`: upazila -> unions
//!
//! Either file may also be shipped gzipped (`*.json.gz`, feature `compact`).
//! A bincode cache of the built index is written next to the district table
//! and reused while both sources exist, are older than it, and are the ones
//! it was built from.

use crate::error::{GazetteerError, Result};
use crate::model::Gazetteer;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

mod binary;
mod common_io;
#[cfg(feature = "json")]
mod json;

pub use common_io::{get_cache_path, is_cache_fresh, open_stream};

/// Environment variable that overrides [`Gazetteer::default_data_dir`].
pub const DATA_DIR_ENV: &str = "GAZETTEER_DATA_DIR";
pub const DISTRICTS_FILE: &str = "names.json";
pub const UNIONS_FILE: &str = "union_names.json";
pub const CACHE_SUFFIX: &str = "gazetteer.bin";

static GAZETTEER_CACHE: OnceCell<Gazetteer> = OnceCell::new();

/// Loads a [`Gazetteer`] from a pair of reference tables.
///
/// ```no_run
/// use gazetteer_core::GazetteerLoader;
///
/// let gazetteer = GazetteerLoader::from_dir("data").cache(false).load()?;
/// println!("{} districts", gazetteer.all_districts().len());
/// # Ok::<(), gazetteer_core::GazetteerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GazetteerLoader {
    districts: PathBuf,
    unions: PathBuf,
    cache: bool,
}

impl GazetteerLoader {
    pub fn new(districts: impl Into<PathBuf>, unions: impl Into<PathBuf>) -> Self {
        Self {
            districts: districts.into(),
            unions: unions.into(),
            cache: true,
        }
    }

    /// Uses `names.json` and `union_names.json` in `dir`, falling back to
    /// their `.gz` variants when the plain files are absent.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(locate(dir, DISTRICTS_FILE), locate(dir, UNIONS_FILE))
    }

    /// Enables or disables the binary cache (on by default).
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    pub fn districts_path(&self) -> &Path {
        &self.districts
    }

    pub fn unions_path(&self) -> &Path {
        &self.unions
    }

    pub fn cache_path(&self) -> PathBuf {
        get_cache_path(&self.districts, CACHE_SUFFIX)
    }

    /// **Smart Load:** uses a fresh binary cache built from these same
    /// tables if there is one, otherwise parses the JSON tables and (best
    /// effort) refreshes the cache.
    pub fn load(&self) -> Result<Gazetteer> {
        let cache_path = self.cache_path();
        let sources = [self.districts.as_path(), self.unions.as_path()];

        if self.cache && is_cache_fresh(&cache_path, &sources) {
            match binary::read_cache(&cache_path, &sources) {
                Ok(gazetteer) => {
                    log::debug!("loaded gazetteer from cache {}", cache_path.display());
                    return Ok(gazetteer);
                }
                Err(e) => log::warn!(
                    "ignoring unusable cache {}: {e}",
                    cache_path.display()
                ),
            }
        }

        let gazetteer = self.load_sources()?;

        if self.cache {
            if let Err(e) = binary::write_cache(&cache_path, &gazetteer, &sources) {
                log::debug!("could not write cache {}: {e}", cache_path.display());
            }
        }

        Ok(gazetteer)
    }

    #[cfg(feature = "json")]
    fn load_sources(&self) -> Result<Gazetteer> {
        log::debug!(
            "building gazetteer from {} and {}",
            self.districts.display(),
            self.unions.display()
        );
        let districts = json::read_table(&self.districts)?;
        let unions = json::read_table(&self.unions)?;
        Ok(Gazetteer::from_tables(districts, unions))
    }

    #[cfg(not(feature = "json"))]
    fn load_sources(&self) -> Result<Gazetteer> {
        Err(GazetteerError::InvalidData(format!(
            "cannot parse {}: the 'json' feature is disabled",
            self.districts.display()
        )))
    }
}

fn locate(dir: &Path, file: &str) -> PathBuf {
    let plain = dir.join(file);
    if plain.exists() {
        return plain;
    }
    let gz = dir.join(format!("{file}.gz"));
    if gz.exists() {
        gz
    } else {
        plain
    }
}

impl Gazetteer {
    /// `$GAZETTEER_DATA_DIR` if set, otherwise the `data/` directory bundled
    /// with this crate.
    pub fn default_data_dir() -> PathBuf {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        }
    }

    /// Loads the default dataset once per process and hands out clones.
    pub fn load() -> Result<Self> {
        GAZETTEER_CACHE
            .get_or_try_init(|| Self::load_from_dir(Self::default_data_dir()))
            .cloned()
    }

    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(GazetteerError::NotFound(format!(
                "data directory {} does not exist",
                dir.display()
            )));
        }
        GazetteerLoader::from_dir(dir).load()
    }
}
