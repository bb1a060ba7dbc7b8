//! Query builder — maps a [`ResourceQuery`] onto the filter object the
//! content repository understands.
//!
//! The field paths in [`EntryQuery`] are the wire contract with the Content
//! Delivery API and must not change.

use serde::Serialize;

use crate::catalog::DEFAULT_SORT_ORDER;
use crate::terms::replace_terms;
use crate::types::{ResourceQuery, TypeTag};

/// The outbound filter for one entries request.
///
/// `None` fields are left out of the request entirely. The two tag flags are
/// only ever `Some(true)` or `None`: sending `false` would exclude every entry
/// that lacks the flag instead of not filtering on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryQuery {
    pub content_type: String,
    pub order: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(
        rename = "fields.resourceType[in]",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_type_in: Option<Vec<String>>,
    #[serde(
        rename = "fields.developedBySparc",
        skip_serializing_if = "Option::is_none"
    )]
    pub developed_by_sparc: Option<bool>,
    #[serde(rename = "fields.codeathon", skip_serializing_if = "Option::is_none")]
    pub codeathon: Option<bool>,
    #[serde(rename = "fields.category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "fields.program[in]", skip_serializing_if = "Option::is_none")]
    pub program_in: Option<Vec<String>>,
}

impl EntryQuery {
    /// Render as query-string pairs, in a stable order.
    ///
    /// List filters are comma-joined, which is how the `[in]` operator takes
    /// multiple values.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("content_type", self.content_type.clone()),
            ("order", self.order.clone()),
        ];
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(types) = &self.resource_type_in {
            params.push(("fields.resourceType[in]", types.join(",")));
        }
        if let Some(flag) = self.developed_by_sparc {
            params.push((TypeTag::DevelopedBySparc.field_path(), flag.to_string()));
        }
        if let Some(flag) = self.codeathon {
            params.push((TypeTag::Codeathon.field_path(), flag.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("fields.category", category.clone()));
        }
        if let Some(programs) = &self.program_in {
            params.push(("fields.program[in]", programs.join(",")));
        }
        params
    }
}

/// `Some(true)` when `tag` is requested, `None` otherwise. Never `Some(false)`.
pub fn tag_flag(query: &ResourceQuery, tag: TypeTag) -> Option<bool> {
    query.has_tag(tag).then_some(true)
}

/// An empty list filters on nothing, so it is dropped like an absent one.
fn non_empty(values: Option<&[String]>) -> Option<Vec<String>> {
    values.filter(|v| !v.is_empty()).map(<[String]>::to_vec)
}

/// Build the entries request for `content_type_id` from the inbound query.
pub fn build_entry_query(content_type_id: &str, query: &ResourceQuery) -> EntryQuery {
    let order = match query.sort_order.as_deref() {
        Some(order) if !order.is_empty() => order.to_owned(),
        _ => DEFAULT_SORT_ORDER.to_owned(),
    };

    let entry_query = EntryQuery {
        content_type: content_type_id.to_owned(),
        order,
        query: replace_terms(query.terms.as_deref()),
        limit: query.limit,
        skip: query.skip,
        resource_type_in: non_empty(query.resource_types.as_deref()),
        developed_by_sparc: tag_flag(query, TypeTag::DevelopedBySparc),
        codeathon: tag_flag(query, TypeTag::Codeathon),
        category: query.category.clone(),
        program_in: non_empty(query.funding_programs.as_deref()),
    };
    tracing::debug!(?entry_query, "built entry query");
    entry_query
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
