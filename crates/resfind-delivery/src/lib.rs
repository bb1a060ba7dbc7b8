//! resfind-delivery — talks to the content repository.
//!
//! [`fetch_resources`] is the one entry point the rest of the program uses:
//! it builds the [`EntryQuery`](resfind_core::EntryQuery) for a
//! [`ResourceQuery`], hands it to an [`EntrySource`] and returns whatever comes
//! back. Failures are logged and turned into an empty collection.

pub mod client;
pub mod error;

pub use client::{DeliveryClient, EntrySource};
pub use error::DeliveryError;

use resfind_core::{build_entry_query, EntryCollection, ResourceQuery};

/// Run a resource search, surfacing upstream failures to the caller.
///
/// # Errors
/// Returns whatever the [`EntrySource`] returned.
pub async fn try_fetch_resources<S: EntrySource>(
    source: &S,
    content_type_id: &str,
    query: &ResourceQuery,
) -> Result<EntryCollection, DeliveryError> {
    let entry_query = build_entry_query(content_type_id, query);
    source.get_entries(&entry_query).await
}

/// Run a resource search.
///
/// Any upstream failure is logged and returned as
/// [`EntryCollection::default()`], which callers cannot tell apart from a
/// search that matched nothing.
pub async fn fetch_resources<S: EntrySource>(
    source: &S,
    content_type_id: &str,
    query: &ResourceQuery,
) -> EntryCollection {
    match try_fetch_resources(source, content_type_id, query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(error = %e, transient = e.is_transient(), "resource search failed");
            EntryCollection::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
