//! Mapping from provider records to the public response shape

use crate::types::{WhoisRecord, WhoisResponse};

/// Normalize a record into the public response.
///
/// Values are passed through untouched; absent fields become empty strings.
pub fn normalize(record: WhoisRecord) -> WhoisResponse {
    WhoisResponse {
        domain: record.domain_name.unwrap_or_default(),
        created: record.creation_date.unwrap_or_default(),
        expires: record.expiration_date.unwrap_or_default(),
        registrar: record.registrar.unwrap_or_default(),
        status: record.status.unwrap_or_default(),
    }
}

impl From<WhoisRecord> for WhoisResponse {
    fn from(record: WhoisRecord) -> Self {
        normalize(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_record() {
        let record = WhoisRecord::complete(
            "example.com",
            "1995-08-14T00:00:00Z",
            "2025-08-13T00:00:00Z",
            "Internet Assigned Numbers Authority",
            "Active",
        );

        let response = normalize(record);
        assert_eq!(response.domain, "example.com");
        assert_eq!(response.created, "1995-08-14T00:00:00Z");
        assert_eq!(response.expires, "2025-08-13T00:00:00Z");
        assert_eq!(response.registrar, "Internet Assigned Numbers Authority");
        assert_eq!(response.status, "Active");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let record = WhoisRecord {
            domain_name: Some("example.org".to_string()),
            registrar: Some("Public Interest Registry".to_string()),
            ..Default::default()
        };

        let response = WhoisResponse::from(record);
        assert_eq!(response.domain, "example.org");
        assert_eq!(response.created, "");
        assert_eq!(response.expires, "");
        assert_eq!(response.status, "");

        assert_eq!(normalize(WhoisRecord::default()), WhoisResponse::default());
    }

    #[test]
    fn test_dates_are_not_interpreted() {
        let record = WhoisRecord {
            creation_date: Some("sometime in 1997".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(record).created, "sometime in 1997");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(normalize(WhoisRecord::default())).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["created", "domain", "expires", "registrar", "status"]);
        assert!(object.values().all(|v| v.as_str() == Some("")));
    }
}
