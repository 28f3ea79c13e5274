//! Credential configuration for the authentication provider.
//!
//! Configuration is supplied once at initialization and is immutable
//! afterward; rotating the certificate or the authority requires building
//! a new provider from a new configuration.
//!
//! Fields with defaults can be omitted when loading from environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Client identifier of the SDK's registered multi-tenant application,
/// used when the configuration does not name one.
pub const DEFAULT_CLIENT_ID: &str = "9a8b7c6d-1e2f-4a3b-8c4d-5e6f7a8b9c0d";

/// Tenant identifier selecting the multi-tenant "organizations" authority.
///
/// A configured tenant identifier equal to this value (compared
/// case-insensitively) selects the multi-tenant authority instead of a
/// tenant-specific one.
pub const MULTI_TENANT_TENANT_ID: &str = "organizations";

/// Tenant identifier used when the configuration does not name one.
pub const DEFAULT_TENANT_ID: &str = MULTI_TENANT_TENANT_ID;

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

fn default_tenant_id() -> String {
    DEFAULT_TENANT_ID.to_string()
}

fn default_authority_host() -> String {
    "https://login.microsoftonline.com".to_string()
}

fn default_store_location() -> StoreLocation {
    StoreLocation::CurrentUser
}

/// Which certificate store root to search.
///
/// The platform store is mapped onto a directory convention: each store is
/// a directory of PEM files (one certificate plus its RSA private key per
/// file) under the location's root. An explicit
/// [`ProviderConfig::store_root`] overrides the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreLocation {
    /// The calling user's store, rooted at `$HOME/.certstore`.
    CurrentUser,
    /// The machine-wide store, rooted at `/etc/certstore`.
    LocalMachine,
}

impl StoreLocation {
    /// Returns the root directory for this store location.
    #[must_use]
    pub fn root_dir(&self) -> PathBuf {
        match self {
            Self::CurrentUser => std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(".certstore"),
            Self::LocalMachine => PathBuf::from("/etc/certstore"),
        }
    }
}

/// Reference to a certificate in a local certificate store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateStoreReference {
    /// The store (directory) name, e.g. "my".
    pub store_name: String,
    /// Which store root to search. Default: the current user's store.
    #[serde(default = "default_store_location")]
    pub store_location: StoreLocation,
    /// SHA-1 thumbprint of the certificate, hex, compared
    /// case-insensitively.
    pub thumbprint: String,
}

impl CertificateStoreReference {
    /// Creates a reference to a certificate in the current user's store.
    #[must_use]
    pub fn new(store_name: impl Into<String>, thumbprint: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            store_location: StoreLocation::CurrentUser,
            thumbprint: thumbprint.into(),
        }
    }

    /// Returns the directory holding this store's certificates,
    /// honouring a root override when one is configured.
    #[must_use]
    pub fn store_dir(&self, root_override: Option<&Path>) -> PathBuf {
        let root = match root_override {
            Some(root) => root.to_path_buf(),
            None => self.store_location.root_dir(),
        };
        root.join(&self.store_name)
    }
}

/// Configuration for the certificate authentication provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The client (application) identifier.
    /// Default: [`DEFAULT_CLIENT_ID`].
    #[serde(default = "default_client_id")]
    client_id: String,
    /// The tenant identifier, or the multi-tenant sentinel.
    /// Default: [`DEFAULT_TENANT_ID`].
    #[serde(default = "default_tenant_id")]
    tenant_id: String,
    /// Base URL of the identity authority.
    /// Default: "https://login.microsoftonline.com".
    #[serde(default = "default_authority_host")]
    authority_host: String,
    /// Overrides the store location's root directory.
    #[serde(default)]
    store_root: Option<PathBuf>,
    /// Reference to the certificate credential. Required for
    /// initialization; absence is a configuration error surfaced there.
    #[serde(default)]
    certificate: Option<CertificateStoreReference>,
}

impl ProviderConfig {
    /// Creates a configuration with defaults for everything but the
    /// certificate reference.
    #[must_use]
    pub fn new(certificate: CertificateStoreReference) -> Self {
        Self {
            client_id: default_client_id(),
            tenant_id: default_tenant_id(),
            authority_host: default_authority_host(),
            store_root: None,
            certificate: Some(certificate),
        }
    }

    /// Creates a configuration builder for more customization.
    #[must_use]
    pub fn builder(certificate: CertificateStoreReference) -> ProviderConfigBuilder {
        ProviderConfigBuilder::new(certificate)
    }

    /// Creates a configuration with no certificate reference.
    ///
    /// Initialization from such a configuration always fails with a
    /// configuration error; this exists for callers that assemble the
    /// certificate reference later.
    #[must_use]
    pub fn without_certificate() -> Self {
        Self {
            client_id: default_client_id(),
            tenant_id: default_tenant_id(),
            authority_host: default_authority_host(),
            store_root: None,
            certificate: None,
        }
    }

    /// Loads configuration from `TENANT_ADMIN`-prefixed environment
    /// variables (e.g. `TENANT_ADMIN__TENANT_ID`,
    /// `TENANT_ADMIN__CERTIFICATE__THUMBPRINT`).
    ///
    /// # Errors
    ///
    /// Returns an error if present configuration values are invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("TENANT_ADMIN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the tenant identifier.
    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Returns the authority host.
    #[must_use]
    pub fn authority_host(&self) -> &str {
        &self.authority_host
    }

    /// Returns the store root override, if any.
    #[must_use]
    pub fn store_root(&self) -> Option<&Path> {
        self.store_root.as_deref()
    }

    /// Returns the certificate reference, if any.
    #[must_use]
    pub fn certificate(&self) -> Option<&CertificateStoreReference> {
        self.certificate.as_ref()
    }

    /// Returns true when the tenant identifier is the multi-tenant
    /// sentinel (case-insensitive).
    #[must_use]
    pub fn is_multi_tenant(&self) -> bool {
        self.tenant_id.eq_ignore_ascii_case(MULTI_TENANT_TENANT_ID)
    }

    /// Returns the authority URL the confidential client is bound to:
    /// the multi-tenant "organizations" authority for the sentinel tenant
    /// identifier, a tenant-specific authority otherwise.
    #[must_use]
    pub fn authority_url(&self) -> String {
        let host = self.authority_host.trim_end_matches('/');
        if self.is_multi_tenant() {
            format!("{host}/{MULTI_TENANT_TENANT_ID}")
        } else {
            format!("{host}/{}", self.tenant_id)
        }
    }
}

/// Builder for `ProviderConfig`.
#[derive(Debug)]
pub struct ProviderConfigBuilder {
    client_id: String,
    tenant_id: String,
    authority_host: String,
    store_root: Option<PathBuf>,
    certificate: CertificateStoreReference,
}

impl ProviderConfigBuilder {
    /// Creates a new builder with the required certificate reference.
    #[must_use]
    pub fn new(certificate: CertificateStoreReference) -> Self {
        Self {
            client_id: default_client_id(),
            tenant_id: default_tenant_id(),
            authority_host: default_authority_host(),
            store_root: None,
            certificate,
        }
    }

    /// Sets the client identifier.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Sets the tenant identifier.
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = tenant_id.into();
        self
    }

    /// Sets the authority host.
    #[must_use]
    pub fn authority_host(mut self, host: impl Into<String>) -> Self {
        self.authority_host = host.into();
        self
    }

    /// Overrides the certificate store root directory.
    #[must_use]
    pub fn store_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.store_root = Some(root.into());
        self
    }

    /// Builds the `ProviderConfig`.
    #[must_use]
    pub fn build(self) -> ProviderConfig {
        ProviderConfig {
            client_id: self.client_id,
            tenant_id: self.tenant_id,
            authority_host: self.authority_host,
            store_root: self.store_root,
            certificate: Some(self.certificate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CertificateStoreReference {
        CertificateStoreReference::new("my", "AABBCCDD")
    }

    #[test]
    fn new_config_has_defaults() {
        let config = ProviderConfig::new(reference());
        assert_eq!(config.client_id(), DEFAULT_CLIENT_ID);
        assert_eq!(config.tenant_id(), DEFAULT_TENANT_ID);
        assert_eq!(config.authority_host(), "https://login.microsoftonline.com");
        assert!(config.store_root().is_none());
        assert!(config.certificate().is_some());
    }

    #[test]
    fn default_tenant_selects_multi_tenant_authority() {
        let config = ProviderConfig::new(reference());
        assert!(config.is_multi_tenant());
        assert_eq!(
            config.authority_url(),
            "https://login.microsoftonline.com/organizations"
        );
    }

    #[test]
    fn sentinel_comparison_is_case_insensitive() {
        let config = ProviderConfig::builder(reference())
            .tenant_id("ORGANIZATIONS")
            .build();
        assert!(config.is_multi_tenant());
        assert_eq!(
            config.authority_url(),
            "https://login.microsoftonline.com/organizations"
        );
    }

    #[test]
    fn named_tenant_selects_tenant_authority() {
        let config = ProviderConfig::builder(reference())
            .tenant_id("contoso.example")
            .build();
        assert!(!config.is_multi_tenant());
        assert_eq!(
            config.authority_url(),
            "https://login.microsoftonline.com/contoso.example"
        );
    }

    #[test]
    fn authority_host_trailing_slash_is_tolerated() {
        let config = ProviderConfig::builder(reference())
            .authority_host("https://login.example.com/")
            .tenant_id("contoso.example")
            .build();
        assert_eq!(config.authority_url(), "https://login.example.com/contoso.example");
    }

    #[test]
    fn builder_allows_customization() {
        let config = ProviderConfig::builder(reference())
            .client_id("11111111-2222-3333-4444-555555555555")
            .tenant_id("contoso.example")
            .store_root("/tmp/certs")
            .build();
        assert_eq!(config.client_id(), "11111111-2222-3333-4444-555555555555");
        assert_eq!(config.tenant_id(), "contoso.example");
        assert_eq!(config.store_root(), Some(Path::new("/tmp/certs")));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{
            "certificate": {
                "store_name": "my",
                "thumbprint": "AABBCCDD"
            }
        }"#;

        let config: ProviderConfig = serde_json::from_str(json).expect("deserialize");

        assert_eq!(config.client_id(), DEFAULT_CLIENT_ID);
        assert_eq!(config.tenant_id(), DEFAULT_TENANT_ID);
        let certificate = config.certificate().expect("certificate present");
        assert_eq!(certificate.store_location, StoreLocation::CurrentUser);
        assert_eq!(certificate.thumbprint, "AABBCCDD");
    }

    #[test]
    fn config_without_certificate_deserializes() {
        let config: ProviderConfig = serde_json::from_str("{}").expect("deserialize");
        assert!(config.certificate().is_none());
    }

    #[test]
    fn from_env_reads_prefixed_variables() {
        // Process-global environment; this is the only test touching
        // these variables.
        unsafe {
            std::env::set_var("TENANT_ADMIN__TENANT_ID", "contoso.example");
            std::env::set_var("TENANT_ADMIN__CERTIFICATE__STORE_NAME", "my");
            std::env::set_var("TENANT_ADMIN__CERTIFICATE__THUMBPRINT", "AABBCCDD");
        }

        let config = ProviderConfig::from_env().expect("loads from environment");

        unsafe {
            std::env::remove_var("TENANT_ADMIN__TENANT_ID");
            std::env::remove_var("TENANT_ADMIN__CERTIFICATE__STORE_NAME");
            std::env::remove_var("TENANT_ADMIN__CERTIFICATE__THUMBPRINT");
        }

        assert_eq!(config.tenant_id(), "contoso.example");
        assert_eq!(config.client_id(), DEFAULT_CLIENT_ID);
        let certificate = config.certificate().expect("certificate present");
        assert_eq!(certificate.store_name, "my");
        assert_eq!(certificate.thumbprint, "AABBCCDD");
        assert_eq!(certificate.store_location, StoreLocation::CurrentUser);
    }

    #[test]
    fn store_dir_honours_override() {
        let reference = reference();
        assert_eq!(
            reference.store_dir(Some(Path::new("/tmp/store-root"))),
            PathBuf::from("/tmp/store-root/my")
        );
    }

    #[test]
    fn store_dir_uses_location_root() {
        let reference = CertificateStoreReference {
            store_name: "web".to_string(),
            store_location: StoreLocation::LocalMachine,
            thumbprint: "AABB".to_string(),
        };
        assert_eq!(reference.store_dir(None), PathBuf::from("/etc/certstore/web"));
    }
}
