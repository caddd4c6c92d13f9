// crates/gazetteer-core/src/loader/binary.rs
use crate::error::{GazetteerError, Result};
use crate::model::Gazetteer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Loader cache layout: the source tables the index was built from,
/// followed by the index. Field order matches [`CachedGazetteer`].
#[derive(Serialize)]
struct CacheEntry<'a> {
    sources: Vec<&'a Path>,
    gazetteer: &'a Gazetteer,
}

#[derive(Deserialize)]
struct CachedGazetteer {
    sources: Vec<PathBuf>,
    gazetteer: Gazetteer,
}

/// Writes `gazetteer` to `path` together with the tables it was built from.
pub(super) fn write_cache(path: &Path, gazetteer: &Gazetteer, sources: &[&Path]) -> Result<()> {
    let entry = CacheEntry {
        sources: sources.to_vec(),
        gazetteer,
    };
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, &entry)?;
    writer.flush()?;
    Ok(())
}

/// Reads a cache written by [`write_cache`], rejecting it unless it was
/// built from exactly `sources`.
pub(super) fn read_cache(path: &Path, sources: &[&Path]) -> Result<Gazetteer> {
    let file = File::open(path)?;
    let cached: CachedGazetteer = bincode::deserialize_from(BufReader::new(file))?;
    if !cached.sources.iter().map(PathBuf::as_path).eq(sources.iter().copied()) {
        return Err(GazetteerError::InvalidData(format!(
            "{} was built from {:?}",
            path.display(),
            cached.sources
        )));
    }
    Ok(cached.gazetteer)
}

impl Gazetteer {
    /// Writes the built index as bincode.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads an index previously written by [`Gazetteer::save_as`].
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(bincode::deserialize_from(BufReader::new(file))?)
    }
}
