//! Core types for resfind-core.
//!
//! The inbound [`ResourceQuery`], the closed set of [`TypeTag`]s and the
//! response envelope returned by the content repository
//! ([`EntryCollection`] and its borrowed [`Entry`] view).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ResourceQuery
// ---------------------------------------------------------------------------

/// The eight inbound search parameters.
///
/// Every field is optional. `None` (or an empty list) means "do not filter on
/// this", never "filter for nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuery {
    /// Matched against `fields.resourceType` with the `[in]` operator.
    pub resource_types: Option<Vec<String>>,
    /// Matched against `fields.program` with the `[in]` operator.
    pub funding_programs: Option<Vec<String>>,
    /// Value for `fields.category`; this is how tools are told apart from
    /// other resources.
    pub category: Option<String>,
    /// Free-text search terms, before replacement.
    pub terms: Option<String>,
    /// Field-path ordering, e.g. `fields.name` or `-fields.name`.
    pub sort_order: Option<String>,
    /// Content sub-tags. Only the ones recognised by [`TypeTag`] matter.
    pub type_tags: Vec<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_types
            .get_or_insert_with(Vec::new)
            .push(resource_type.into());
        self
    }

    pub fn funding_program(mut self, program: impl Into<String>) -> Self {
        self.funding_programs
            .get_or_insert_with(Vec::new)
            .push(program.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }

    pub fn type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tags.push(tag.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// `true` if `tag` appears verbatim in [`type_tags`](Self::type_tags).
    pub fn has_tag(&self, tag: TypeTag) -> bool {
        self.type_tags.iter().any(|t| t == tag.as_str())
    }
}

// ---------------------------------------------------------------------------
// TypeTag
// ---------------------------------------------------------------------------

/// Content sub-tags that map onto separate boolean fields upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    DevelopedBySparc,
    Codeathon,
}

static TYPE_TAGS: phf::Map<&'static str, TypeTag> = phf::phf_map! {
    "developedBySparc" => TypeTag::DevelopedBySparc,
    "codeathon" => TypeTag::Codeathon,
};

impl TypeTag {
    pub const ALL: [TypeTag; 2] = [TypeTag::DevelopedBySparc, TypeTag::Codeathon];

    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::DevelopedBySparc => "developedBySparc",
            TypeTag::Codeathon => "codeathon",
        }
    }

    /// The boolean field this tag filters on.
    pub const fn field_path(self) -> &'static str {
        match self {
            TypeTag::DevelopedBySparc => "fields.developedBySparc",
            TypeTag::Codeathon => "fields.codeathon",
        }
    }

    /// Case-sensitive lookup; tags are compared exactly as the UI sends them.
    pub fn lookup(tag: &str) -> Option<TypeTag> {
        TYPE_TAGS.get(tag).copied()
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`TypeTag`] names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag {0:?} (expected one of: {tags})", tags = known_tags())]
pub struct UnknownTypeTag(pub String);

fn known_tags() -> String {
    TypeTag::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::str::FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::lookup(s).ok_or_else(|| UnknownTypeTag(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// A page of entries exactly as the content repository returned it.
///
/// The body is kept as the raw JSON object so nothing the API sends (`errors`,
/// `includes`, entry `metadata`, `sys` details, timestamp formatting) is lost
/// on the way to the caller. [`EntryCollection::default`] is the empty object
/// `{}`, which is what callers receive when the upstream call fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection(JsonMap);

impl EntryCollection {
    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }

    pub fn into_map(self) -> JsonMap {
        self.0
    }

    /// `true` for the empty object, i.e. the value returned both for "zero
    /// results" and "request failed".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> Option<u64> {
        self.0.get("total").and_then(serde_json::Value::as_u64)
    }

    pub fn skip(&self) -> Option<u64> {
        self.0.get("skip").and_then(serde_json::Value::as_u64)
    }

    pub fn limit(&self) -> Option<u64> {
        self.0.get("limit").and_then(serde_json::Value::as_u64)
    }

    /// Entries in `items`. Anything in the array that is not an object is
    /// skipped.
    pub fn items(&self) -> impl Iterator<Item = Entry<'_>> {
        self.0
            .get("items")
            .and_then(serde_json::Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|item| item.as_object().map(Entry))
    }
}

impl From<JsonMap> for EntryCollection {
    fn from(map: JsonMap) -> Self {
        Self(map)
    }
}

/// Read-only view of one content record inside an [`EntryCollection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a>(&'a JsonMap);

impl<'a> Entry<'a> {
    /// `sys.id`, if the entry has one.
    pub fn id(&self) -> Option<&'a str> {
        self.sys()
            .and_then(|sys| sys.get("id"))
            .and_then(serde_json::Value::as_str)
    }

    pub fn sys(&self) -> Option<&'a JsonMap> {
        self.0.get("sys").and_then(serde_json::Value::as_object)
    }

    pub fn field(&self, key: &str) -> Option<&'a serde_json::Value> {
        self.0
            .get("fields")
            .and_then(serde_json::Value::as_object)
            .and_then(|fields| fields.get(key))
    }

    /// Convenience accessor for string fields such as `name`.
    pub fn field_str(&self, key: &str) -> Option<&'a str> {
        self.field(key).and_then(serde_json::Value::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
