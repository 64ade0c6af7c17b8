/// Normalizes a search term by stripping surrounding whitespace and
/// decomposing it into Unicode Normalization Form D.
///
/// ```
/// use gameimpact::normalization::normalize_term;
/// assert_eq!(normalize_term(" h\u{ef} "), "hi\u{308}");
/// ```
pub fn normalize_term(term: impl AsRef<str>) -> String {
    use unicode_normalization::UnicodeNormalization;

    term.as_ref().trim().nfd().to_string()
}

/// Produces the form used for case-insensitive comparisons: the
/// normalized term, lowercased.
///
/// ```
/// use gameimpact::normalization::fold_case;
/// assert_eq!(fold_case("  Éco "), fold_case("éCO"));
/// ```
pub fn fold_case(s: impl AsRef<str>) -> String {
    normalize_term(s).to_lowercase()
}

/// Whether `haystack` contains `needle`, ignoring case and Unicode
/// composition. An empty needle is contained in everything.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_case(haystack).contains(folded_needle)
}
