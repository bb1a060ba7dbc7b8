//! resfind-core — query building for the tools & resources catalog.
//!
//! This crate holds everything that does not talk to the network: the shared
//! request and response types, the static UI catalogs, the search-term
//! replacement table and the query builder that turns a [`ResourceQuery`]
//! into the wire-level [`EntryQuery`].
//!
//! # Pipeline
//!
//! ```text
//! ResourceQuery ──► terms::replace_terms ──► query::build_entry_query ──► EntryQuery
//!                                                                          │
//!                                        (resfind-delivery) EntrySource ◄──┘
//! ```

pub mod catalog;
pub mod config;
pub mod query;
pub mod terms;
pub mod types;

pub use catalog::{SearchType, SortOption, SEARCH_TYPES, SORT_OPTIONS};
pub use query::{build_entry_query, EntryQuery};
pub use types::{Entry, EntryCollection, ResourceQuery, TypeTag, UnknownTypeTag};
