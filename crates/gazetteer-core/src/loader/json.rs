// crates/gazetteer-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::{GazetteerError, Result};
use crate::model::Gazetteer;
use crate::raw::RawTable;
use std::io::Read;
use std::path::Path;

/// Parses one reference table, transparently gunzipping `*.gz` files.
pub(super) fn read_table(path: &Path) -> Result<RawTable> {
    let reader = common_io::open_stream(path)?;
    parse_table(reader).map_err(|e| match e {
        GazetteerError::Json(err) => GazetteerError::InvalidData(format!(
            "{} is not a name -> [names] table: {err}",
            path.display()
        )),
        other => other,
    })
}

fn parse_table<R: Read>(reader: R) -> Result<RawTable> {
    Ok(serde_json::from_reader(reader)?)
}

impl Gazetteer {
    /// Builds a gazetteer from the two reference tables given as JSON text.
    ///
    /// ```rust
    /// use gazetteer_core::Gazetteer;
    ///
    /// let g = Gazetteer::from_json_str(
    ///     r#"{"চট্টগ্রাম": ["পটিয়া", "আনোয়ারা"]}"#,
    ///     r#"{"পটিয়া": ["বালুচর"]}"#,
    /// )?;
    /// assert_eq!(g.district_of_upazila("পটিয়া"), Some("চট্টগ্রাম"));
    /// # Ok::<(), gazetteer_core::GazetteerError>(())
    /// ```
    pub fn from_json_str(districts: &str, unions: &str) -> Result<Self> {
        let districts: RawTable = serde_json::from_str(districts)?;
        let unions: RawTable = serde_json::from_str(unions)?;
        Ok(Self::from_tables(districts, unions))
    }

    /// Same as [`Gazetteer::from_json_str`] for arbitrary readers.
    pub fn from_json_readers<D: Read, U: Read>(districts: D, unions: U) -> Result<Self> {
        Ok(Self::from_tables(parse_table(districts)?, parse_table(unions)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_strings() {
        let g = Gazetteer::from_json_str(r#"{"A": ["a1", "a2"]}"#, r#"{"a1": ["u1"]}"#).unwrap();
        assert_eq!(g.all_districts(), ["A"]);
        assert_eq!(g.upazila_of_union("u1"), Some("a1"));
    }

    #[test]
    fn builds_from_readers() {
        let g = Gazetteer::from_json_readers(&br#"{"A": ["a1"]}"#[..], &b"{}"[..]).unwrap();
        assert_eq!(g.all_upazilas(), ["a1"]);
        assert!(g.all_unions().is_empty());
    }

    #[test]
    fn malformed_table_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, r#"{"A": "a1"}"#).unwrap();
        assert!(matches!(read_table(&path), Err(GazetteerError::InvalidData(_))));
    }
}
