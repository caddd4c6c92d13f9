//! Basic usage example for gazetteer-rs
//!
//! This example demonstrates how to:
//! - Load the bundled gazetteer (and its binary cache)
//! - Walk the district -> upazila -> union hierarchy
//! - Match misspelled names at a single level
//! - Resolve a full location triple

use gazetteer_core::prelude::*;

fn main() -> Result<()> {
    println!("=== gazetteer-rs Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let gazetteer = Gazetteer::load()?;
    let stats = gazetteer.stats();
    println!(
        "✓ Loaded {} districts, {} upazilas, {} unions\n",
        stats.districts, stats.upazilas, stats.unions
    );

    // Example 1: hierarchy
    println!("--- Example 1: Browse the hierarchy ---");
    for district in gazetteer.all_districts().iter().take(3) {
        let upazilas = gazetteer.upazilas_for_district(district);
        println!("{district}: {} upazilas", upazilas.len());
        for upazila in upazilas.iter().take(3) {
            println!("  {upazila} ({} unions)", gazetteer.unions_for_upazila(upazila).len());
        }
    }
    println!();

    // Example 2: single-level matching
    println!("--- Example 2: Match one name ---");
    let inputs = [
        (Level::District, "ঢাকা"),
        (Level::District, "চট্টগ্রাম জেলা"),
        (Level::Upazila, "পটয়িা"),
        (Level::Union, "বালুচর ইউনিয়ন"),
    ];
    for (level, input) in inputs {
        let m = gazetteer.match_level(level, input, None);
        println!(
            "{level:>8}: {input} -> {} (score {:.2}, {:?})",
            m.matched, m.score, m.kind
        );
    }
    println!();

    // Example 3: full resolution
    println!("--- Example 3: Resolve a location ---");
    let resolved = gazetteer.resolve_location(
        Some("চট্টগ্রাম"),
        Some("পটয়িা উপজেলা"),
        Some("বালুচর"),
    );
    for level in Level::ALL {
        println!("{level:>8}: {}", resolved.get(level).unwrap_or("-"));
    }
    println!();

    // Example 4: the second load is served from the process-wide cell
    println!("--- Example 4: Cached load ---");
    let again = Gazetteer::load()?;
    println!("✓ Same data: {}", again.all_unions() == gazetteer.all_unions());

    Ok(())
}
