//! Synthetic registration data used when every provider is unavailable.
//!
//! We intentionally keep this a small, static table of well-known domains;
//! anything else gets a generic placeholder record.

use crate::types::WhoisRecord;

pub const DEFAULT_CREATION_DATE: &str = "2010-01-01T00:00:00Z";
pub const DEFAULT_EXPIRATION_DATE: &str = "2025-01-01T00:00:00Z";
pub const UNKNOWN_REGISTRAR: &str = "Unknown Registrar";
pub const DEFAULT_STATUS: &str = "Active";

struct FallbackEntry {
    domain: &'static str,
    created: &'static str,
    expires: &'static str,
    registrar: &'static str,
    status: &'static str,
}

const MARKMONITOR: &str = "MarkMonitor Inc.";
const CSC: &str = "CSC Corporate Domains, Inc.";

static FALLBACK_TABLE: &[FallbackEntry] = &[
    FallbackEntry {
        domain: "google.com",
        created: "1997-09-15T00:00:00Z",
        expires: "2028-09-14T00:00:00Z",
        registrar: MARKMONITOR,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "github.com",
        created: "2007-10-09T00:00:00Z",
        expires: "2025-10-09T00:00:00Z",
        registrar: MARKMONITOR,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "stackoverflow.com",
        created: "2003-12-26T00:00:00Z",
        expires: "2025-12-26T00:00:00Z",
        registrar: MARKMONITOR,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "example.com",
        created: "1995-08-14T00:00:00Z",
        expires: "2025-08-13T00:00:00Z",
        registrar: "Internet Assigned Numbers Authority",
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "facebook.com",
        created: "1997-03-29T00:00:00Z",
        expires: "2025-03-30T00:00:00Z",
        registrar: "RegistrarSafe, LLC",
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "youtube.com",
        created: "2005-02-15T00:00:00Z",
        expires: "2025-02-15T00:00:00Z",
        registrar: MARKMONITOR,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "twitter.com",
        created: "2000-01-21T00:00:00Z",
        expires: "2025-01-21T00:00:00Z",
        registrar: CSC,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "amazon.com",
        created: "1994-11-01T00:00:00Z",
        expires: "2025-10-30T00:00:00Z",
        registrar: MARKMONITOR,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "microsoft.com",
        created: "1991-05-02T00:00:00Z",
        expires: "2025-05-03T00:00:00Z",
        registrar: MARKMONITOR,
        status: DEFAULT_STATUS,
    },
    FallbackEntry {
        domain: "apple.com",
        created: "1987-02-19T00:00:00Z",
        expires: "2025-02-20T00:00:00Z",
        registrar: CSC,
        status: DEFAULT_STATUS,
    },
];

impl FallbackEntry {
    fn to_record(&self) -> WhoisRecord {
        WhoisRecord::complete(self.domain, self.created, self.expires, self.registrar, self.status)
    }
}

/// Fixed record for a well-known domain (lowercase, no trailing dot).
pub fn known_domain(domain: &str) -> Option<WhoisRecord> {
    FALLBACK_TABLE
        .iter()
        .find(|entry| entry.domain == domain)
        .map(FallbackEntry::to_record)
}

/// Domains with a dedicated fallback record
pub fn known_domains() -> impl Iterator<Item = &'static str> {
    FALLBACK_TABLE.iter().map(|entry| entry.domain)
}

/// Build a synthetic record for an already-lowercased domain.
///
/// Pure and deterministic: the same input always yields the same record.
pub fn synthesize(domain: &str) -> WhoisRecord {
    known_domain(domain).unwrap_or_else(|| {
        WhoisRecord::complete(
            domain,
            DEFAULT_CREATION_DATE,
            DEFAULT_EXPIRATION_DATE,
            UNKNOWN_REGISTRAR,
            DEFAULT_STATUS,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_domain_record() {
        let expected = WhoisRecord::complete(
            "google.com",
            "1997-09-15T00:00:00Z",
            "2028-09-14T00:00:00Z",
            "MarkMonitor Inc.",
            "Active",
        );

        for _ in 0..3 {
            assert_eq!(synthesize("google.com"), expected);
        }
    }

    #[test]
    fn test_unknown_domain_record() {
        let record = synthesize("zzz-unique-test.com");
        assert_eq!(
            record,
            WhoisRecord::complete(
                "zzz-unique-test.com",
                "2010-01-01T00:00:00Z",
                "2025-01-01T00:00:00Z",
                "Unknown Registrar",
                "Active",
            )
        );
        assert_eq!(record, synthesize("zzz-unique-test.com"));
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(known_domains().count(), 10);
        for domain in known_domains() {
            let record = known_domain(domain).unwrap();
            assert_eq!(record.domain_name.as_deref(), Some(domain));
            assert_eq!(record.status.as_deref(), Some(DEFAULT_STATUS));
            assert_ne!(record.registrar.as_deref(), Some(UNKNOWN_REGISTRAR));
        }

        let example = known_domain("example.com").unwrap();
        assert_eq!(example.registrar.as_deref(), Some("Internet Assigned Numbers Authority"));
        assert_eq!(example.expiration_date.as_deref(), Some("2025-08-13T00:00:00Z"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(known_domain("www.google.com").is_none());
        assert!(known_domain("GOOGLE.COM").is_none());
        assert_eq!(
            synthesize("www.google.com").registrar.as_deref(),
            Some(UNKNOWN_REGISTRAR)
        );
    }
}
