//! gazetteer-core prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::{GazetteerStats, Level, OwnershipConflict};
pub use crate::error::{GazetteerError, Result};
pub use crate::loader::GazetteerLoader;
pub use crate::matcher::{match_candidates, MatchKind, MatchResult, MATCH_THRESHOLD};
pub use crate::model::Gazetteer;
pub use crate::raw::RawTable;
pub use crate::resolve::{LocationQuery, ResolvedLocation, Resolver};
pub use crate::similarity::{levenshtein, similarity};
pub use crate::text::normalize;
