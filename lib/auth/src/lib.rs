//! Certificate-based authentication for tenant-admin.
//!
//! This crate provides:
//! - Credential configuration (`ProviderConfig`, `CertificateStoreReference`)
//! - Certificate store lookup by SHA-1 thumbprint (`LoadedCertificate`)
//! - Token acquisition through the client credentials grant with a signed
//!   client assertion (`ConfidentialClient`, `TokenCredential`)
//! - Request authentication (`CertificateAuthenticationProvider`)
//!
//! # Authority Model
//!
//! The provider targets one tenant of the identity authority. The tenant
//! identifier `"organizations"` (compared case-insensitively) selects the
//! multi-tenant authority; any other value selects that tenant's own
//! authority. The authority is fixed at initialization.
//!
//! # Example
//!
//! ```no_run
//! use tenant_admin_auth::{
//!     CertificateAuthenticationProvider, CertificateStoreReference, ProviderConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = ProviderConfig::builder(CertificateStoreReference::new(
//!     "my",
//!     "C8619342DC0A72BED9D7F35D7807E28125B750AC",
//! ))
//! .tenant_id("contoso.example")
//! .build();
//!
//! let provider = CertificateAuthenticationProvider::initialize(&config)?;
//!
//! let resource = reqwest::Url::parse("https://graph.example.com/v1.0/me")?;
//! let mut request = reqwest::Client::new().get(resource.clone()).build()?;
//! provider.authenticate_request(&resource, &mut request).await?;
//! # Ok(())
//! # }
//! ```

pub mod certificate;
pub mod config;
pub mod credential;
pub mod error;
pub mod provider;

#[cfg(test)]
mod testutil;

pub use certificate::{LoadedCertificate, load_from_store, sha1_thumbprint};
pub use config::{
    CertificateStoreReference, DEFAULT_CLIENT_ID, DEFAULT_TENANT_ID, MULTI_TENANT_TENANT_ID,
    ProviderConfig, ProviderConfigBuilder, StoreLocation,
};
pub use credential::{AccessToken, ConfidentialClient, TokenCredential};
pub use error::{ProviderConfigError, TokenError};
pub use provider::CertificateAuthenticationProvider;
