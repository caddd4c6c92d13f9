//! Error handling example for gazetteer-rs
//!
//! This example demonstrates load errors and the "no match" edge cases

use gazetteer_core::prelude::*;

fn main() -> Result<()> {
    println!("=== gazetteer-rs Error Handling Example ===\n");

    // Example 1: missing data directory
    println!("--- Example 1: Loading from a missing directory ---");
    match Gazetteer::load_from_dir("/definitely/not/here") {
        Ok(g) => println!("  unexpectedly loaded {} districts", g.stats().districts),
        Err(GazetteerError::NotFound(what)) => println!("  ✗ not found: {what}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: malformed tables
    println!("--- Example 2: Malformed tables ---");
    match Gazetteer::from_json_str(r#"["ঢাকা"]"#, "{}") {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: unknown level names
    println!("--- Example 3: Parsing level names ---");
    for name in ["district", "thana", "village"] {
        match name.parse::<Level>() {
            Ok(level) => println!("  {name} -> {level}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    let gazetteer = Gazetteer::load()?;

    // Example 4: inputs that do not match
    println!("--- Example 4: Inputs without a confident match ---");
    for input in ["", "Atlantis", "   "] {
        let m = gazetteer.match_district(input);
        println!(
            "  {input:?}: matched {:?}, score {:.2}, {:?}",
            m.matched, m.score, m.kind
        );
    }
    println!();

    // Example 5: unmatched names pass through untouched
    println!("--- Example 5: Passthrough ---");
    let resolved = gazetteer.resolve_location(Some("Atlantis"), None, None);
    println!("  district: {:?}", resolved.district);
    println!("  upazila:  {:?}", resolved.upazila);

    Ok(())
}
