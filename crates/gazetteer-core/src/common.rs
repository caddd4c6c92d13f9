// crates/gazetteer-core/src/common.rs
//! Small shared types used by the index, the matcher and the loader.
use crate::error::GazetteerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simple aggregate statistics for a gazetteer.
///
/// Counts are of distinct names in the flat search lists, so an upazila
/// listed under two districts is counted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub districts: usize,
    pub upazilas: usize,
    pub unions: usize,
}

/// One of the three nested administrative levels, broadest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    District,
    Upazila,
    Union,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::District, Level::Upazila, Level::Union];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::District => "district",
            Level::Upazila => "upazila",
            Level::Union => "union",
        }
    }

    /// The level directly above this one, if any.
    pub fn parent(&self) -> Option<Level> {
        match self {
            Level::District => None,
            Level::Upazila => Some(Level::District),
            Level::Union => Some(Level::Upazila),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = GazetteerError;

    /// Accepts `district`, `upazila` and `union` in any case, plus the
    /// transliterated spellings `zila`/`zilla` (district) and `upazilla`, and
    /// `thana`, an older name for an upazila.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "district" | "zila" | "zilla" => Ok(Level::District),
            "upazila" | "upazilla" | "thana" => Ok(Level::Upazila),
            "union" => Ok(Level::Union),
            _ => Err(GazetteerError::UnknownLevel(s.to_string())),
        }
    }
}

/// A child name that the reference data lists under more than one parent.
///
/// The reverse index keeps the last parent seen (`parent`); the one it
/// replaced is kept here so the data can be fixed at the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipConflict {
    /// Level of the duplicated child name.
    pub level: Level,
    pub name: String,
    pub previous_parent: String,
    pub parent: String,
}

impl fmt::Display for OwnershipConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} listed under both {:?} and {:?}; keeping {:?}",
            self.level, self.name, self.previous_parent, self.parent, self.parent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!("district".parse::<Level>().unwrap(), Level::District);
        assert_eq!(" Upazila ".parse::<Level>().unwrap(), Level::Upazila);
        assert_eq!("thana".parse::<Level>().unwrap(), Level::Upazila);
        assert_eq!("UNION".parse::<Level>().unwrap(), Level::Union);
        assert_eq!("zila".parse::<Level>().unwrap(), Level::District);
        assert_eq!("Zilla".parse::<Level>().unwrap(), Level::District);
        assert_eq!("upazilla".parse::<Level>().unwrap(), Level::Upazila);
        assert!(matches!(
            "village".parse::<Level>(),
            Err(GazetteerError::UnknownLevel(_))
        ));
    }

    #[test]
    fn level_display_round_trips() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn parent_levels() {
        assert_eq!(Level::District.parent(), None);
        assert_eq!(Level::Upazila.parent(), Some(Level::District));
        assert_eq!(Level::Union.parent(), Some(Level::Upazila));
    }
}
