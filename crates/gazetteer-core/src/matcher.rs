// crates/gazetteer-core/src/matcher.rs
//! Single-level fuzzy matching against a list of canonical names.
use crate::model::Gazetteer;
use crate::similarity::similarity;
use crate::text::normalize;
use serde::{Deserialize, Serialize};

pub use crate::common::Level;

/// Minimum similarity for a fuzzy candidate to be accepted (inclusive).
pub const MATCH_THRESHOLD: f64 = 0.5;

/// How a [`MatchResult`] came about.
///
/// `score` alone cannot tell "no input" from "nothing close enough"; both
/// are `0.0`. Callers that need the difference read this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// Input was empty.
    NoInput,
    /// Input is literally one of the candidates.
    Exact,
    /// Input equals a candidate after [`normalize`].
    Normalized,
    /// Best edit-distance candidate, at or above the threshold.
    Fuzzy,
    /// Nothing cleared the threshold (or there were no candidates); the
    /// input is passed through.
    NoMatch,
}

/// Outcome of matching one input string at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Canonical gazetteer name, or the original input when nothing matched.
    pub matched: String,
    /// `1.0` for exact and normalized-exact matches, the similarity for
    /// fuzzy matches, `0.0` otherwise.
    pub score: f64,
    /// The input exactly as received.
    pub original: String,
    pub kind: MatchKind,
}

impl MatchResult {
    fn no_input() -> Self {
        Self {
            matched: String::new(),
            score: 0.0,
            original: String::new(),
            kind: MatchKind::NoInput,
        }
    }

    fn found(candidate: &str, score: f64, input: &str, kind: MatchKind) -> Self {
        Self {
            matched: candidate.to_string(),
            score,
            original: input.to_string(),
            kind,
        }
    }

    fn passthrough(input: &str) -> Self {
        Self {
            matched: input.to_string(),
            score: 0.0,
            original: input.to_string(),
            kind: MatchKind::NoMatch,
        }
    }

    /// `true` for exact, normalized and above-threshold fuzzy matches.
    pub fn is_confident(&self) -> bool {
        self.score > 0.0
    }
}

/// Matches `input` against `candidates` with the default threshold.
///
/// Steps, in order:
/// 1. empty input -> `NoInput`, score 0;
/// 2. literal equality with a candidate -> score 1;
/// 3. equality after [`normalize`] on both sides -> score 1;
/// 4. best [`similarity`] over normalized forms, first candidate wins ties;
/// 5. accepted if `>= MATCH_THRESHOLD`, else the input is passed through
///    with score 0.
pub fn match_candidates<S: AsRef<str>>(input: &str, candidates: &[S]) -> MatchResult {
    match_candidates_with_threshold(input, candidates, MATCH_THRESHOLD)
}

/// [`match_candidates`] with a caller-chosen acceptance threshold.
pub fn match_candidates_with_threshold<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    threshold: f64,
) -> MatchResult {
    if input.is_empty() {
        return MatchResult::no_input();
    }

    if candidates.iter().any(|c| c.as_ref() == input) {
        return MatchResult::found(input, 1.0, input, MatchKind::Exact);
    }

    let normalized_input = normalize(input);
    let normalized: Vec<String> = candidates.iter().map(|c| normalize(c.as_ref())).collect();

    if let Some(i) = normalized.iter().position(|c| *c == normalized_input) {
        return MatchResult::found(candidates[i].as_ref(), 1.0, input, MatchKind::Normalized);
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in normalized.iter().enumerate() {
        let score = similarity(&normalized_input, candidate);
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((i, score));
        }
    }

    match best {
        Some((i, score)) if score >= threshold => {
            log::trace!(
                "fuzzy match {:?} -> {:?} ({score:.3})",
                input,
                candidates[i].as_ref()
            );
            MatchResult::found(candidates[i].as_ref(), score, input, MatchKind::Fuzzy)
        }
        _ => {
            log::trace!("no candidate for {:?} cleared {threshold}", input);
            MatchResult::passthrough(input)
        }
    }
}

impl Gazetteer {
    /// Matches `input` at `level`, searching only the children of `parent`
    /// when that parent is known (see [`Gazetteer::search_space`]).
    pub fn match_level(&self, level: Level, input: &str, parent: Option<&str>) -> MatchResult {
        match_candidates(input, self.search_space(level, parent))
    }

    /// [`Gazetteer::match_level`] with a caller-chosen threshold.
    pub fn match_level_with_threshold(
        &self,
        level: Level,
        input: &str,
        parent: Option<&str>,
        threshold: f64,
    ) -> MatchResult {
        match_candidates_with_threshold(input, self.search_space(level, parent), threshold)
    }

    pub fn match_district(&self, input: &str) -> MatchResult {
        self.match_level(Level::District, input, None)
    }

    pub fn match_upazila(&self, input: &str, district: Option<&str>) -> MatchResult {
        self.match_level(Level::Upazila, input, district)
    }

    pub fn match_union(&self, input: &str, upazila: Option<&str>) -> MatchResult {
        self.match_level(Level::Union, input, upazila)
    }
}
