//! Search-term normalisation.
//!
//! Users spell product names several ways (superscripts pasted from the
//! website, HTML markup, older brand names). Before the terms are sent
//! upstream, every entry of [`SEARCH_QUERY_REPLACEMENTS`] is applied in order,
//! each replacing only the first occurrence of its key.

/// Ordered `(find, replace)` pairs. Later entries see the output of earlier
/// ones.
pub const SEARCH_QUERY_REPLACEMENTS: &[(&str, &str)] = &[
    ("o²S²PARC", "o2S2PARC"),
    ("o<sup>2</sup>S<sup>2</sup>PARC", "o2S2PARC"),
    ("oSPARC", "o2S2PARC"),
    ("DAT-Core", "Datcore"),
];

/// Apply [`SEARCH_QUERY_REPLACEMENTS`] to `terms`.
///
/// Absent and empty terms are returned unchanged.
pub fn replace_terms(terms: Option<&str>) -> Option<String> {
    match terms {
        Some(t) if !t.is_empty() => Some(replace_with(t, SEARCH_QUERY_REPLACEMENTS)),
        other => other.map(str::to_owned),
    }
}

/// Apply an arbitrary replacement table with the same first-occurrence
/// semantics as [`replace_terms`].
pub fn replace_with(terms: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(terms.to_owned(), |acc, (find, replace)| {
            acc.replacen(find, replace, 1)
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
