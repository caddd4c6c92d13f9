// crates/gazetteer-core/src/loader/common_io.rs
use crate::error::{GazetteerError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GazetteerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GazetteerError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `names.json` -> `names.json.<suffix>`, in the same directory.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// `true` if `cache` exists and every source exists and is not newer.
pub fn is_cache_fresh(cache: &Path, sources: &[&Path]) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    sources.iter().all(|source| {
        match fs::metadata(source).and_then(|m| m.modified()) {
            Ok(source_time) => source_time <= cache_time,
            Err(_) => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/names.json"), "gazetteer.bin");
        assert_eq!(p, Path::new("/data/names.json.gazetteer.bin"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, GazetteerError::NotFound(_)));
    }

    #[test]
    fn missing_cache_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_cache_fresh(&dir.path().join("nope.bin"), &[]));
    }

    #[test]
    fn missing_source_makes_cache_stale() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("names.json");
        let cache = dir.path().join("names.json.gazetteer.bin");
        fs::write(&source, "{}").unwrap();
        fs::write(&cache, "").unwrap();
        assert!(is_cache_fresh(&cache, &[&source]));
        assert!(!is_cache_fresh(&cache, &[&source, &dir.path().join("gone.json")]));
    }

    #[test]
    fn reads_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        fs::write(&path, "{}").unwrap();
        let mut s = String::new();
        open_stream(&path).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "{}");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzipped_files() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(br#"{"a": []}"#).unwrap();
        enc.finish().unwrap();

        let mut s = String::new();
        open_stream(&path).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, r#"{"a": []}"#);
    }
}
