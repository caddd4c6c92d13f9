// crates/gazetteer-core/src/resolve.rs
//! Three-level location resolution with context propagation.
//!
//! Respondents often name only the smallest unit they know ("my union is
//! Baluchar") and skip the larger ones. The resolver walks the levels top
//! down: a resolved parent narrows the search for its children, and a
//! confident child match fills in missing ancestors through the reverse
//! maps.
use crate::matcher::{Level, MatchResult, MATCH_THRESHOLD};
use crate::model::Gazetteer;
use serde::{Deserialize, Serialize};

/// Resolver output. A field is `None` only when no input was given for it
/// and nothing could be inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upazila: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union: Option<String>,
}

impl ResolvedLocation {
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.upazila.is_none() && self.union.is_none()
    }

    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::District => self.district.as_deref(),
            Level::Upazila => self.upazila.as_deref(),
            Level::Union => self.union.as_deref(),
        }
    }
}

/// Raw location fields as extracted from a conversation, before matching.
///
/// Deserializes from the extraction record; other fields of the record are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upazila: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union: Option<String>,
}

impl LocationQuery {
    pub fn new(district: Option<&str>, upazila: Option<&str>, union: Option<&str>) -> Self {
        Self {
            district: district.map(str::to_string),
            upazila: upazila.map(str::to_string),
            union: union.map(str::to_string),
        }
    }

    /// `true` if at least one field is present and non-empty.
    pub fn has_location(&self) -> bool {
        [&self.district, &self.upazila, &self.union]
            .into_iter()
            .any(|f| f.as_deref().is_some_and(|s| !s.is_empty()))
    }

    /// Overwrites each field for which the resolver produced a value and
    /// leaves the others untouched.
    pub fn apply(&mut self, resolved: &ResolvedLocation) {
        let fields = [
            (&mut self.district, &resolved.district),
            (&mut self.upazila, &resolved.upazila),
            (&mut self.union, &resolved.union),
        ];
        for (field, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                *field = Some(value.to_string());
            }
        }
    }
}

/// A [`Gazetteer`] borrowed together with a matching threshold.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    gazetteer: &'g Gazetteer,
    threshold: f64,
}

impl<'g> Resolver<'g> {
    pub fn new(gazetteer: &'g Gazetteer) -> Self {
        Self {
            gazetteer,
            threshold: MATCH_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn match_level(&self, level: Level, input: &str, parent: Option<&str>) -> MatchResult {
        self.gazetteer
            .match_level_with_threshold(level, input, parent, self.threshold)
    }

    /// Resolves up to three raw names. Empty strings count as absent.
    ///
    /// 1. A district is matched against all districts.
    /// 2. An upazila is matched within the resolved district's upazilas when
    ///    that district is known, otherwise against all upazilas. Without a
    ///    district, a confident upazila match supplies one.
    /// 3. A union is matched the same way under the resolved upazila.
    ///    Without an upazila, a confident union match supplies it, and the
    ///    district too if that is still missing.
    pub fn resolve_location(
        &self,
        district: Option<&str>,
        upazila: Option<&str>,
        union: Option<&str>,
    ) -> ResolvedLocation {
        let district = district.filter(|s| !s.is_empty());
        let upazila = upazila.filter(|s| !s.is_empty());
        let union = union.filter(|s| !s.is_empty());
        let g = self.gazetteer;

        let mut out = ResolvedLocation::default();

        if let Some(input) = district {
            let m = self.match_level(Level::District, input, None);
            out.district = Some(or_input(m.matched, input));
        }

        if let Some(input) = upazila {
            let m = self.match_level(Level::Upazila, input, out.district.as_deref());
            let confident = m.is_confident();
            out.upazila = Some(or_input(m.matched, input));

            if out.district.is_none() && confident {
                out.district = out
                    .upazila
                    .as_deref()
                    .and_then(|u| g.district_of_upazila(u))
                    .map(str::to_string);
            }
        }

        if let Some(input) = union {
            let m = self.match_level(Level::Union, input, out.upazila.as_deref());
            let confident = m.is_confident();
            out.union = Some(or_input(m.matched, input));

            if out.upazila.is_none() && confident {
                let inferred = out.union.as_deref().and_then(|n| g.upazila_of_union(n));
                if let Some(upazila) = inferred {
                    if out.district.is_none() {
                        out.district = g.district_of_upazila(upazila).map(str::to_string);
                    }
                    out.upazila = Some(upazila.to_string());
                }
            }
        }

        log::debug!(
            "resolved ({:?}, {:?}, {:?}) -> {:?}",
            district,
            upazila,
            union,
            out
        );
        out
    }

    pub fn resolve(&self, query: &LocationQuery) -> ResolvedLocation {
        self.resolve_location(
            query.district.as_deref(),
            query.upazila.as_deref(),
            query.union.as_deref(),
        )
    }
}

fn or_input(matched: String, input: &str) -> String {
    if matched.is_empty() {
        input.to_string()
    } else {
        matched
    }
}

impl Gazetteer {
    /// A [`Resolver`] over this gazetteer with the default threshold.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }

    /// See [`Resolver::resolve_location`].
    pub fn resolve_location(
        &self,
        district: Option<&str>,
        upazila: Option<&str>,
        union: Option<&str>,
    ) -> ResolvedLocation {
        self.resolver().resolve_location(district, upazila, union)
    }

    pub fn resolve(&self, query: &LocationQuery) -> ResolvedLocation {
        self.resolver().resolve(query)
    }
}
