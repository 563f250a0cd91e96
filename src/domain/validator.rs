//! Domain name validation utilities

use crate::error::{Result, WhoisProxyError};
use regex::Regex;

/// Labels of letters, digits, hyphens and dots, then a dot and an
/// alphabetic TLD of at least two characters.
const DOMAIN_PATTERN: &str = r"^[a-z0-9.-]+\.[a-z]{2,}$";

/// Domain name validator
pub struct DomainValidator {
    pattern: Regex,
}

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(DOMAIN_PATTERN)
            .map_err(|e| WhoisProxyError::internal(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Validate a domain name.
    ///
    /// Input is trimmed and lowercased first; anything that still does not
    /// look like a domain is rejected with `Invalid domain format`.
    pub fn validate(&self, domain: &str) -> Result<ValidatedDomain> {
        let domain = self.normalize(domain);

        if !self.pattern.is_match(&domain) {
            tracing::debug!(domain = %domain, "Rejected malformed domain");
            return Err(WhoisProxyError::invalid_domain());
        }

        // The pattern guarantees at least one dot.
        let (name, tld) = domain
            .rsplit_once('.')
            .map(|(name, tld)| (name.to_string(), tld.to_string()))
            .ok_or_else(WhoisProxyError::invalid_domain)?;

        Ok(ValidatedDomain {
            name,
            tld,
            full_domain: domain,
        })
    }

    /// Check if domain looks like a valid format
    pub fn is_valid_format(&self, domain: &str) -> bool {
        self.validate(domain).is_ok()
    }

    /// Normalize domain name
    pub fn normalize(&self, domain: &str) -> String {
        domain.trim().to_lowercase()
    }
}

/// A domain that passed validation (trimmed and lowercased)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedDomain {
    pub name: String,
    pub tld: String,
    full_domain: String,
}

impl ValidatedDomain {
    /// Get the full domain name
    pub fn as_str(&self) -> &str {
        &self.full_domain
    }
}

impl std::fmt::Display for ValidatedDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn validator() -> DomainValidator {
        DomainValidator::new().unwrap()
    }

    #[test]
    fn test_basic_validation() {
        let validator = validator();

        assert_ok!(validator.validate("example.com"));
        assert_ok!(validator.validate("sub.example.com"));
        assert_ok!(validator.validate("test-domain.org"));
        assert_ok!(validator.validate("xn--bcher-kva.example"));

        assert_err!(validator.validate(""));
        assert_err!(validator.validate("not a domain"));
        assert_err!(validator.validate("noTLD"));
        assert_err!(validator.validate("example.c"));
        assert_err!(validator.validate("example.c0m"));
        assert_err!(validator.validate("exa_mple.com"));
    }

    #[test]
    fn test_normalization() {
        let validator = validator();

        let domain = validator.validate("  ExAmple.COM \n").unwrap();
        assert_eq!(domain.as_str(), "example.com");
        assert_eq!(domain.name, "example");
        assert_eq!(domain.tld, "com");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = validator();

        for input in ["Google.com", " sub.Example.org ", "a-b.c-d.io"] {
            let first = validator.validate(input).unwrap();
            let second = validator.validate(first.as_str()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rejection_message() {
        let err = validator().validate("not a domain").unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.public_message(), "Invalid domain format");
    }

    #[test]
    fn test_subdomain_split() {
        let domain = validator().validate("deep.sub.example.co").unwrap();
        assert_eq!(domain.name, "deep.sub.example");
        assert_eq!(domain.tld, "co");
        assert!(validator().is_valid_format("deep.sub.example.co"));
    }
}
