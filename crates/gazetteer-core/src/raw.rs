// crates/gazetteer-core/src/raw.rs
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One hierarchical reference table: parent name -> ordered child names.
///
/// The reference data ships as JSON objects such as
/// `{"চট্টগ্রাম": ["পটিয়া", "আনোয়ারা"]}`. Entry order matters: it is the
/// iteration order of every search list built from the table, and fuzzy
/// ties go to the first candidate seen. A plain `HashMap` would lose it,
/// so the table deserializes into a `Vec` of pairs.
///
/// Duplicate keys are kept as separate entries; the index built from them
/// lets the later one win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub entries: Vec<(String, Vec<String>)>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(parent, children)` pairs, mostly for tests and
    /// synthetic gazetteers.
    pub fn from_pairs<P, C, I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(parent, children)| {
                (
                    parent.into(),
                    children.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn push(&mut self, parent: impl Into<String>, children: Vec<String>) {
        self.entries.push((parent.into(), children));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(parent, children)| (parent.as_str(), children.as_slice()))
    }
}

impl Serialize for RawTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (parent, children) in &self.entries {
            map.serialize_entry(parent, children)?;
        }
        map.end()
    }
}

struct RawTableVisitor;

impl<'de> Visitor<'de> for RawTableVisitor {
    type Value = RawTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping a place name to a list of child place names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawTable, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((parent, children)) = access.next_entry::<String, Vec<String>>()? {
            entries.push((parent, children));
        }
        Ok(RawTable { entries })
    }
}

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawTableVisitor)
    }
}
