//! Vanity URL options.

use serde::{Deserialize, Serialize};

/// Optional override of the tenant's custom admin-endpoint host.
///
/// Purely a request-shaping parameter: when no override is set (the
/// default) the transport uses the tenant's standard admin host. Passed
/// by value to every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanityUrlOptions {
    /// The vanity host to use instead of the default admin host.
    vanity_url: Option<String>,
}

impl VanityUrlOptions {
    /// No override: use the tenant's default admin host.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Overrides the admin host with a tenant-custom domain.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            vanity_url: Some(url.into()),
        }
    }

    /// Returns the configured override, if any.
    #[must_use]
    pub fn vanity_url(&self) -> Option<&str> {
        self.vanity_url.as_deref()
    }

    /// Resolves the effective host: the override when set, otherwise the
    /// supplied default.
    #[must_use]
    pub fn host_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.vanity_url.as_deref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_no_override() {
        let options = VanityUrlOptions::none();
        assert!(options.vanity_url().is_none());
        assert_eq!(options.host_or("admin.example.com"), "admin.example.com");
    }

    #[test]
    fn override_wins() {
        let options = VanityUrlOptions::with_url("admin.contoso.example");
        assert_eq!(options.vanity_url(), Some("admin.contoso.example"));
        assert_eq!(options.host_or("admin.example.com"), "admin.contoso.example");
    }
}
