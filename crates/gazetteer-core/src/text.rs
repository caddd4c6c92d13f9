// crates/gazetteer-core/src/text.rs

/// Administrative filler words that respondents (and the extraction model)
/// attach to place names: district, upazila, thana, sadar and union.
///
/// Each appears as a trailing suffix and as a leading prefix. Within each
/// group "উপজেলা" comes before "জেলা", since the latter is a substring of
/// the former and would otherwise leave a dangling "উপ".
pub const FILLER_TOKENS: [&str; 10] = [
    // suffix forms: "<name> জেলা"
    " উপজেলা",
    " জেলা",
    " থানা",
    " সদর",
    " ইউনিয়ন",
    // prefix forms: "জেলা <name>"
    "উপজেলা ",
    "জেলা ",
    "থানা ",
    "সদর ",
    "ইউনিয়ন ",
];

/// Strips administrative filler words and collapses whitespace.
///
/// Every occurrence of a [`FILLER_TOKENS`] entry is replaced by a single
/// space rather than deleted, so removing a word in the middle of a name
/// does not glue its neighbours together. There is no case folding or
/// transliteration.
///
/// ```rust
/// use gazetteer_core::normalize;
///
/// assert_eq!(normalize("ঢাকা জেলা"), "ঢাকা");
/// assert_eq!(normalize("  ঢাকা  "), "ঢাকা");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut normalized = text.trim().to_string();
    if normalized.is_empty() {
        return normalized;
    }

    for token in FILLER_TOKENS {
        if normalized.contains(token) {
            normalized = normalized.replace(token, " ");
        }
    }

    collapse_whitespace(&normalized)
}

/// Collapses every run of (Unicode) whitespace into one ASCII space and
/// trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_district_suffix() {
        assert_eq!(normalize("ঢাকা জেলা"), "ঢাকা");
    }

    #[test]
    fn trims_outer_whitespace() {
        assert_eq!(normalize("  ঢাকা  "), "ঢাকা");
        assert_eq!(normalize("\tঢাকা\n"), "ঢাকা");
    }

    #[test]
    fn strips_prefix_forms() {
        assert_eq!(normalize("জেলা ঢাকা"), "ঢাকা");
        assert_eq!(normalize("উপজেলা পটিয়া"), "পটিয়া");
        assert_eq!(normalize("ইউনিয়ন বালুচর"), "বালুচর");
    }

    #[test]
    fn upazila_is_not_cut_down_to_upa() {
        assert_eq!(normalize("পটিয়া উপজেলা"), "পটিয়া");
        assert_eq!(normalize("উপজেলা পটিয়া"), "পটিয়া");
    }

    #[test]
    fn strips_thana_and_sadar() {
        assert_eq!(normalize("কোতোয়ালী থানা"), "কোতোয়ালী");
        assert_eq!(normalize("কুমিল্লা সদর"), "কুমিল্লা");
    }

    #[test]
    fn medial_filler_does_not_fuse_words() {
        assert_eq!(normalize("চর ইউনিয়ন পাড়া"), "চর পাড়া");
    }

    #[test]
    fn strips_every_occurrence() {
        assert_eq!(normalize("ঢাকা জেলা সদর জেলা"), "ঢাকা");
    }

    #[test]
    fn bare_filler_word_is_kept() {
        // no surrounding space, so neither the suffix nor the prefix form applies
        assert_eq!(normalize("জেলা"), "জেলা");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(normalize("চর   ফ্যাশন"), "চর ফ্যাশন");
        assert_eq!(collapse_whitespace(" a \t b  c "), "a b c");
    }

    #[test]
    fn leaves_latin_case_alone() {
        assert_eq!(normalize("Dhaka"), "Dhaka");
        assert_ne!(normalize("Dhaka"), normalize("dhaka"));
    }
}
