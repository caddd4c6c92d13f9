//! gazetteer: command-line interface for gazetteer-core
//!
//! This binary matches free-form Bangladeshi place names against a
//! district / upazila / union gazetteer from your terminal. It supports
//! printing basic statistics, listing the hierarchy, matching a single name
//! at one level, resolving a partial location triple, validating exact
//! names, and batch-resolving JSON Lines extraction records.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ gazetteer stats
//!
//! - List the upazilas of a district
//!   $ gazetteer upazilas চট্টগ্রাম
//!
//! - Match one misspelled upazila inside a district
//!   $ gazetteer match upazila পটিয়া --parent চট্টগ্রাম
//!
//! - Resolve a union alone (upazila and district are inferred)
//!   $ gazetteer resolve --union বালুচর --json
//!
//! - Resolve every record of an extraction dump
//!   $ gazetteer batch records.jsonl > resolved.jsonl
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample tables bundled with `gazetteer-core`
//! (or `$GAZETTEER_DATA_DIR`) and caches a binary index next to them. Use
//! `--data-dir <dir>` or `--districts <file> --unions <file>` to point at a
//! full dataset, and `--no-cache` to skip the cache.
mod args;
mod batch;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use gazetteer_core::{Gazetteer, GazetteerLoader, Level};
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let gazetteer = load_gazetteer(&args)?;
    let resolver = gazetteer.resolver().with_threshold(args.threshold);

    match args.command {
        Commands::Stats => {
            let stats = gazetteer.stats();
            println!("Gazetteer statistics:");
            println!("  Districts: {}", stats.districts);
            println!("  Upazilas: {}", stats.upazilas);
            println!("  Unions: {}", stats.unions);
            println!("  Ownership conflicts: {}", gazetteer.conflicts().len());
            for conflict in gazetteer.conflicts() {
                println!("    - {conflict}");
            }
        }

        Commands::Districts => {
            for d in gazetteer.all_districts() {
                println!("{d}");
            }
        }

        Commands::Upazilas { district } => {
            let upazilas = gazetteer.upazilas_for_district(&district);
            if let Some(note) = empty_listing_note(&gazetteer, Level::District, &district) {
                eprintln!("{note}");
            }
            for u in upazilas {
                println!("{u}");
            }
        }

        Commands::Unions { upazila } => {
            let unions = gazetteer.unions_for_upazila(&upazila);
            if let Some(note) = empty_listing_note(&gazetteer, Level::Upazila, &upazila) {
                eprintln!("{note}");
            }
            for u in unions {
                println!("{u}");
            }
        }

        Commands::Match {
            level,
            input,
            parent,
            json,
        } => {
            let m = gazetteer.match_level_with_threshold(
                level,
                &input,
                parent.as_deref(),
                args.threshold,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&m)?);
            } else {
                println!("{} ({level})", m.matched);
                println!("  score: {:.3}", m.score);
                println!("  kind: {:?}", m.kind);
                if m.is_confident() {
                    if let Some(owner) = gazetteer.parent_of(level, &m.matched) {
                        println!("  belongs to: {owner}");
                    }
                }
            }
        }

        Commands::Resolve {
            district,
            upazila,
            union,
            json,
        } => {
            let resolved = resolver.resolve_location(
                district.as_deref(),
                upazila.as_deref(),
                union.as_deref(),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else if resolved.is_empty() {
                println!("Nothing to resolve");
            } else {
                for level in Level::ALL {
                    if let Some(name) = resolved.get(level) {
                        println!("{level}: {name}");
                    }
                }
            }
        }

        Commands::Validate {
            level,
            name,
            parent,
        } => {
            if gazetteer.is_valid(level, &name, parent.as_deref()) {
                println!("valid {level}: {name}");
            } else {
                println!("invalid {level}: {name}");
                std::process::exit(1);
            }
        }

        Commands::Batch { input } => {
            let stdout = io::stdout().lock();
            let summary = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("opening {}", path.display()))?;
                    batch::process(&resolver, BufReader::new(file), stdout)?
                }
                None => batch::process(&resolver, io::stdin().lock(), stdout)?,
            };
            log::info!(
                "{} records, {} with a location, {} changed",
                summary.records,
                summary.with_location,
                summary.changed
            );
        }
    }

    Ok(())
}

/// Why listing the children of `name` printed nothing, if it did.
fn empty_listing_note(gazetteer: &Gazetteer, level: Level, name: &str) -> Option<String> {
    let has_children = gazetteer
        .children(level, name)
        .is_some_and(|children| !children.is_empty());
    if has_children {
        None
    } else if gazetteer.is_valid(level, name, None) {
        Some(format!("{level} {name} has no entries one level down"))
    } else {
        Some(format!("{level} {name} not found"))
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn load_gazetteer(args: &CliArgs) -> anyhow::Result<Gazetteer> {
    let loader = match (&args.districts, &args.unions) {
        (Some(districts), Some(unions)) => GazetteerLoader::new(districts, unions),
        _ => {
            let dir = args
                .data_dir
                .clone()
                .unwrap_or_else(Gazetteer::default_data_dir);
            GazetteerLoader::from_dir(dir)
        }
    };
    let loader = loader.cache(!args.no_cache);

    loader.load().with_context(|| {
        format!(
            "loading gazetteer from {} and {}",
            loader.districts_path().display(),
            loader.unions_path().display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazetteer_core::RawTable;

    fn gazetteer() -> Gazetteer {
        Gazetteer::from_tables(
            RawTable::from_pairs([("ঢাকা", vec!["সাভার"]), ("খালি", Vec::new())]),
            RawTable::from_pairs([("সাভার", vec!["আশুলিয়া"])]),
        )
    }

    #[test]
    fn listing_note_tells_empty_from_unknown() {
        let g = gazetteer();
        assert_eq!(empty_listing_note(&g, Level::District, "ঢাকা"), None);
        assert_eq!(
            empty_listing_note(&g, Level::District, "খালি").as_deref(),
            Some("district খালি has no entries one level down")
        );
        assert_eq!(
            empty_listing_note(&g, Level::District, "Atlantis").as_deref(),
            Some("district Atlantis not found")
        );
    }

    #[test]
    fn listing_note_for_upazilas() {
        let g = gazetteer();
        assert_eq!(empty_listing_note(&g, Level::Upazila, "সাভার"), None);
        assert!(empty_listing_note(&g, Level::Upazila, "সাভার ")
            .is_some_and(|note| note.ends_with("not found")));
    }
}
