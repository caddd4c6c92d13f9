//! Partial input example for gazetteer-rs
//!
//! Respondents rarely name all three levels. This example shows how missing
//! ancestors are inferred and how extraction records are updated in place.

use gazetteer_core::prelude::*;

fn main() -> Result<()> {
    println!("=== gazetteer-rs Partial Input Example ===\n");

    let gazetteer = Gazetteer::load()?;
    let resolver = gazetteer.resolver();

    // Example 1: only a union
    println!("--- Example 1: Union only ---");
    let r = resolver.resolve_location(None, None, Some("বালুচর"));
    println!("  {r:?}\n");

    // Example 2: only a misspelled upazila
    println!("--- Example 2: Misspelled upazila only ---");
    let r = resolver.resolve_location(None, Some("পটয়িা"), None);
    println!("  {r:?}\n");

    // Example 3: updating an extraction record
    println!("--- Example 3: Apply to an extraction record ---");
    let mut query = LocationQuery::new(Some("ঢাকা জেলা"), None, Some("আশুলিয়া"));
    println!("  before: {query:?}");
    let resolved = resolver.resolve(&query);
    query.apply(&resolved);
    println!("  after:  {query:?}\n");

    // Example 4: a stricter threshold keeps weak guesses out
    println!("--- Example 4: Threshold ---");
    for threshold in [MATCH_THRESHOLD, 0.8] {
        let r = resolver
            .with_threshold(threshold)
            .resolve_location(None, Some("পটয়িা"), None);
        println!("  threshold {threshold}: {:?} / {:?}", r.upazila, r.district);
    }

    Ok(())
}
