//! Static UI catalogs: where the two search types live and how results can be
//! sorted.

use serde::Serialize;

/// Ordering used when the caller does not pick one.
pub const DEFAULT_SORT_ORDER: &str = "fields.name";

/// A navigation target for the search-type switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchType {
    pub label: &'static str,
    pub path: &'static str,
}

/// A selectable ordering. `sort_order` is a field path understood upstream;
/// a leading `-` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOption {
    pub label: &'static str,
    pub id: &'static str,
    pub sort_order: &'static str,
}

pub const TOOLS: SearchType = SearchType {
    label: "Tools",
    path: "/tools-and-resources/tools",
};

pub const RESOURCES: SearchType = SearchType {
    label: "Resources",
    path: "/tools-and-resources/resources",
};

// The ids are spelled the way the UI sends them.
pub const ALPHABETICAL: SortOption = SortOption {
    label: "A-Z",
    id: "alphabatical",
    sort_order: DEFAULT_SORT_ORDER,
};

pub const REVERSE_ALPHABETICAL: SortOption = SortOption {
    label: "Z-A",
    id: "reverseAlphabatical",
    sort_order: "-fields.name",
};

pub static SEARCH_TYPES: [SearchType; 2] = [TOOLS, RESOURCES];

pub static SORT_OPTIONS: [SortOption; 2] = [ALPHABETICAL, REVERSE_ALPHABETICAL];

static SORT_OPTIONS_BY_ID: phf::Map<&'static str, SortOption> = phf::phf_map! {
    "alphabatical" => ALPHABETICAL,
    "reverseAlphabatical" => REVERSE_ALPHABETICAL,
};

/// Look up a sort option by its UI id.
pub fn sort_option(id: &str) -> Option<&'static SortOption> {
    SORT_OPTIONS_BY_ID.get(id)
}

pub fn search_type_for_path(path: &str) -> Option<&'static SearchType> {
    let path = path.trim_end_matches('/');
    SEARCH_TYPES.iter().find(|t| t.path == path)
}

/// Resolve user input to a sort order.
///
/// Accepts a sort option id (`alphabatical`), its label (`Z-A`) or a field
/// path (`-fields.name`). Anything else is passed through unchanged so that
/// orderings not in the catalog still reach the API.
pub fn resolve_sort_order(input: &str) -> &str {
    if let Some(option) = sort_option(input) {
        return option.sort_order;
    }
    match SORT_OPTIONS
        .iter()
        .find(|o| o.label.eq_ignore_ascii_case(input))
    {
        Some(option) => option.sort_order,
        None => {
            if !SORT_OPTIONS.iter().any(|o| o.sort_order == input) {
                tracing::warn!(sort = input, "sort order not in catalog, passing through");
            }
            input
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
