//! Test builders — ergonomic constructors for delivery payloads and clients.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use resfind_delivery::DeliveryClient;
use std::time::Duration;

pub const TEST_SPACE: &str = "space1";
pub const TEST_ENVIRONMENT: &str = "master";
pub const TEST_TOKEN: &str = "test-delivery-token";
pub const RESOURCE_CONTENT_TYPE: &str = "resource";

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for entry JSON as the Content Delivery API returns it.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::new("r1", "o2S2PARC")
///     .resource_type("Software")
///     .developed_by_sparc()
///     .build();
/// ```
pub struct EntryBuilder {
    id: String,
    created_at: chrono::DateTime<chrono::Utc>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl EntryBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("name".to_string(), serde_json::Value::String(name.into()));
        Self {
            id: id.into(),
            created_at: chrono::Utc::now(),
            fields,
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn resource_type(self, resource_type: &str) -> Self {
        self.field("resourceType", serde_json::json!([resource_type]))
    }

    pub fn program(self, program: &str) -> Self {
        self.field("program", serde_json::json!([program]))
    }

    pub fn developed_by_sparc(self) -> Self {
        self.field("developedBySparc", true)
    }

    pub fn codeathon(self) -> Self {
        self.field("codeathon", true)
    }

    pub fn build(self) -> serde_json::Value {
        let ts = self
            .created_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        serde_json::json!({
            "sys": {
                "id": self.id,
                "type": "Entry",
                "createdAt": ts,
                "updatedAt": ts,
                "contentType": { "sys": { "type": "Link", "linkType": "ContentType", "id": RESOURCE_CONTENT_TYPE } }
            },
            "fields": self.fields,
        })
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A client pointed at a fake API, with a short timeout.
pub fn test_client(base_url: &str) -> DeliveryClient {
    DeliveryClient::new(
        base_url,
        TEST_SPACE,
        TEST_ENVIRONMENT,
        TEST_TOKEN,
        Duration::from_secs(5),
    )
    .expect("test client must build")
}
