//! JSON Lines batch resolution of extraction records.
//!
//! Each input line is one record produced by the data-extraction step, e.g.
//! `{"name": "...", "district": "ঢাকা জেলা", "union": "আশুলিয়া", "lossAmount": 5000}`.
//! The `district`, `upazila` and `union` fields are replaced by their
//! resolved forms (inferred ancestors are added); every other field is
//! passed through untouched.
use anyhow::{bail, Context};
use gazetteer_core::{Level, LocationQuery, Resolver};
use serde_json::{Map, Value};
use std::io::{BufRead, Write};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub records: usize,
    pub with_location: usize,
    pub changed: usize,
}

pub fn process<R: BufRead, W: Write>(
    resolver: &Resolver<'_>,
    reader: R,
    mut writer: W,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let mut record: Value = serde_json::from_str(&line)
            .with_context(|| format!("line {line_no} is not valid JSON"))?;
        let Some(fields) = record.as_object_mut() else {
            bail!("line {line_no} is not a JSON object");
        };

        summary.records += 1;
        if query_from(fields).has_location() {
            summary.with_location += 1;
        }
        if resolve_record(resolver, fields) {
            summary.changed += 1;
        }

        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(summary)
}

/// Resolves the location fields of one record in place. Returns `true` if
/// any field was changed or added.
///
/// Only string, `null` or missing fields are written; a location field
/// holding some other JSON value is neither read nor replaced.
fn resolve_record(resolver: &Resolver<'_>, fields: &mut Map<String, Value>) -> bool {
    let mut query = query_from(fields);
    if !query.has_location() {
        return false;
    }

    let before = query.clone();
    query.apply(&resolver.resolve(&before));
    if query == before {
        return false;
    }

    let resolved = [
        (Level::District, query.district),
        (Level::Upazila, query.upazila),
        (Level::Union, query.union),
    ];
    let mut changed = false;
    for (level, value) in resolved {
        let Some(value) = value else { continue };
        let key = level.as_str();
        let writable = match fields.get(key) {
            None | Some(Value::Null) => true,
            Some(Value::String(old)) => *old != value,
            Some(_) => false,
        };
        if writable {
            fields.insert(key.to_string(), Value::String(value));
            changed = true;
        }
    }
    changed
}

fn query_from(fields: &Map<String, Value>) -> LocationQuery {
    let text = |level: Level| {
        fields
            .get(level.as_str())
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    LocationQuery {
        district: text(Level::District),
        upazila: text(Level::Upazila),
        union: text(Level::Union),
    }
}
