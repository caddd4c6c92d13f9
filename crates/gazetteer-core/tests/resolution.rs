//! End-to-end behaviour of the matcher and resolver on small synthetic
//! gazetteers.
use gazetteer_core::prelude::*;

fn chattogram() -> Gazetteer {
    Gazetteer::from_json_str(
        r#"{"চট্টগ্রাম": ["পটিয়া", "আনোয়ারা"]}"#,
        r#"{"পটিয়া": ["বালুচর"]}"#,
    )
    .unwrap()
}

#[test]
fn typo_in_upazila_resolves_and_infers_district() {
    let g = chattogram();
    // "পটিয়া" with the vowel sign moved after "য়"
    let typo = "\u{9aa}\u{99f}\u{9af}\u{9bc}\u{9bf}\u{9be}";
    let r = g.resolve_location(None, Some(typo), None);
    assert_eq!(
        r,
        ResolvedLocation {
            district: Some("চট্টগ্রাম".to_string()),
            upazila: Some("পটিয়া".to_string()),
            union: None,
        }
    );
}

#[test]
fn typo_scores_above_threshold() {
    let g = chattogram();
    let typo = "\u{9aa}\u{99f}\u{9af}\u{9bc}\u{9bf}\u{9be}";
    let m = g.match_upazila(typo, None);
    assert_eq!(m.kind, MatchKind::Fuzzy);
    assert!(m.score > MATCH_THRESHOLD && m.score < 1.0);
    assert_eq!(m.original, typo);
}

#[test]
fn union_alone_fills_upazila_and_district() {
    let r = chattogram().resolve_location(None, None, Some("বালুচর"));
    assert_eq!(r.union.as_deref(), Some("বালুচর"));
    assert_eq!(r.upazila.as_deref(), Some("পটিয়া"));
    assert_eq!(r.district.as_deref(), Some("চট্টগ্রাম"));
}

#[test]
fn union_with_filler_word_still_infers_ancestors() {
    let r = chattogram().resolve_location(None, None, Some("বালুচর ইউনিয়ন"));
    assert_eq!(r.union.as_deref(), Some("বালুচর"));
    assert_eq!(r.district.as_deref(), Some("চট্টগ্রাম"));
}

#[test]
fn garbage_district_passes_through() {
    let r = chattogram().resolve_location(Some("Atlantis"), None, None);
    assert_eq!(
        r,
        ResolvedLocation {
            district: Some("Atlantis".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn district_constraint_beats_better_global_match() {
    let g = Gazetteer::from_tables(
        RawTable::from_pairs([
            ("District A", vec!["Kotalipara", "Kotchandpur"]),
            ("District B", vec!["Kotalipura"]),
        ]),
        RawTable::new(),
    );
    let input = "Kotalipura";

    // globally the exact name under District B wins
    assert_eq!(g.match_upazila(input, None).matched, "Kotalipura");

    let r = g.resolve_location(Some("District A"), Some(input), None);
    assert_eq!(r.district.as_deref(), Some("District A"));
    assert_eq!(r.upazila.as_deref(), Some("Kotalipara"));
}

#[test]
fn misspelled_district_still_constrains_upazila() {
    let g = Gazetteer::from_tables(
        RawTable::from_pairs([
            ("Gopalganj", vec!["Kotalipara"]),
            ("Jhenaidah", vec!["Kotchandpur"]),
        ]),
        RawTable::new(),
    );
    let r = g.resolve_location(Some("Gopalgonj"), Some("Kot"), None);
    assert_eq!(r.district.as_deref(), Some("Gopalganj"));
    // "Kot" is too short to clear 0.5 against either upazila, so it
    // passes through even inside the constrained list
    assert_eq!(r.upazila.as_deref(), Some("Kot"));
}

#[test]
fn threshold_boundary_is_inclusive() {
    let g = Gazetteer::from_tables(
        RawTable::from_pairs([("ab", Vec::<&str>::new())]),
        RawTable::new(),
    );

    // one substitution in two chars: exactly 0.5
    let at = g.match_district("ax");
    assert_eq!(at.matched, "ab");
    assert_eq!(at.score, 0.5);

    // one substitution plus one insertion over three chars: 1/3
    let below = g.match_district("axy");
    assert_eq!(below.matched, "axy");
    assert_eq!(below.score, 0.0);
    assert_eq!(below.kind, MatchKind::NoMatch);
}

#[test]
fn every_canonical_name_is_exact() {
    let g = GazetteerLoader::from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
        .cache(false)
        .load()
        .unwrap();
    for level in Level::ALL {
        for name in g.candidates(level) {
            let m = g.match_level(level, name, None);
            assert_eq!(m.matched, *name, "{level} {name}");
            assert_eq!(m.score, 1.0);
            assert_eq!(m.kind, MatchKind::Exact);
        }
    }
}

#[test]
fn resolver_is_shareable_across_threads() {
    let g = std::sync::Arc::new(chattogram());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let g = std::sync::Arc::clone(&g);
            std::thread::spawn(move || g.resolve_location(None, None, Some("বালুচর")))
        })
        .collect();
    for handle in handles {
        let r = handle.join().unwrap();
        assert_eq!(r.district.as_deref(), Some("চট্টগ্রাম"));
    }
}
