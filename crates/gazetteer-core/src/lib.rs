// crates/gazetteer-core/src/lib.rs
//! # gazetteer-core
//!
//! Reconciles free-form place names (district, upazila, union) against a
//! fixed Bangladeshi gazetteer. Names arrive from speech transcription and
//! LLM extraction, so they are often misspelled or carry filler words such
//! as "জেলা" or "উপজেলা".
//!
//! The [`Gazetteer`] is built once from two reference tables and then only
//! read. Matching and resolution are pure functions over it and never fail:
//! when nothing clears the similarity threshold the original input is passed
//! through unchanged.
//!
//! ```rust
//! use gazetteer_core::{Gazetteer, RawTable};
//!
//! let districts = RawTable::from_pairs([("চট্টগ্রাম", vec!["পটিয়া", "আনোয়ারা"])]);
//! let unions = RawTable::from_pairs([("পটিয়া", vec!["বালুচর"])]);
//! let gazetteer = Gazetteer::from_tables(districts, unions);
//!
//! let resolved = gazetteer.resolve_location(None, None, Some("বালুচর"));
//! assert_eq!(resolved.upazila.as_deref(), Some("পটিয়া"));
//! assert_eq!(resolved.district.as_deref(), Some("চট্টগ্রাম"));
//! ```

pub mod common;
pub mod error;
pub mod loader; // The public loader
pub mod matcher; // Level Matcher
pub mod model; // The gazetteer index
pub mod prelude;
pub mod raw;
pub mod resolve; // Location Resolver
pub mod similarity;
pub mod text; // Normalizer

// Re-exports
pub use crate::common::{GazetteerStats, Level, OwnershipConflict};
pub use crate::error::{GazetteerError, Result};
pub use crate::loader::GazetteerLoader;
pub use crate::matcher::{match_candidates, MatchKind, MatchResult, MATCH_THRESHOLD};
pub use crate::model::Gazetteer;
pub use crate::raw::RawTable;
pub use crate::resolve::{LocationQuery, ResolvedLocation, Resolver};
pub use crate::similarity::{levenshtein, similarity};
pub use crate::text::normalize;
