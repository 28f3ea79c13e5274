//! Certificate-based authentication provider.
//!
//! The provider is the piece client code holds onto: it owns a
//! [`TokenCredential`] built from the configured certificate, derives the
//! default scope for a resource, and stamps `Authorization` headers onto
//! outbound requests. A provider that exists is always ready to use;
//! every configuration and certificate failure is surfaced by
//! [`CertificateAuthenticationProvider::initialize`] before one is handed
//! out.

use crate::certificate::load_from_store;
use crate::config::ProviderConfig;
use crate::credential::{AccessToken, ConfidentialClient, TokenCredential};
use crate::error::{ProviderConfigError, TokenError};
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use rootcause::prelude::Report;
use std::sync::Arc;

/// Authenticates outbound requests with bearer tokens acquired through a
/// certificate credential.
pub struct CertificateAuthenticationProvider {
    credential: Arc<dyn TokenCredential>,
    client_id: String,
    tenant_id: String,
}

impl std::fmt::Debug for CertificateAuthenticationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateAuthenticationProvider")
            .field("client_id", &self.client_id)
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}

impl CertificateAuthenticationProvider {
    /// Builds a provider from configuration: validates the certificate
    /// reference, loads the certificate from its store, and constructs
    /// the confidential client.
    ///
    /// The certificate reference and its thumbprint are validated before
    /// any store access.
    ///
    /// # Errors
    ///
    /// Returns `MissingCertificate` when the configuration has no
    /// certificate reference, `EmptyThumbprint` when the reference's
    /// thumbprint is empty or blank, and the store or certificate errors
    /// from [`load_from_store`] and [`ConfidentialClient::new`].
    pub fn initialize(config: &ProviderConfig) -> Result<Self, Report<ProviderConfigError>> {
        let reference = config
            .certificate()
            .ok_or(ProviderConfigError::MissingCertificate)?;
        if reference.thumbprint.trim().is_empty() {
            return Err(ProviderConfigError::EmptyThumbprint.into());
        }

        let certificate = load_from_store(reference, config.store_root())?;
        let credential =
            ConfidentialClient::new(config.client_id(), &config.authority_url(), &certificate)?;

        tracing::info!(
            client_id = %config.client_id(),
            tenant_id = %config.tenant_id(),
            thumbprint = %certificate.thumbprint(),
            "certificate authentication provider initialized"
        );

        Ok(Self {
            credential: Arc::new(credential),
            client_id: config.client_id().to_string(),
            tenant_id: config.tenant_id().to_string(),
        })
    }

    /// Builds a provider around an existing credential.
    #[must_use]
    pub fn with_credential(
        credential: Arc<dyn TokenCredential>,
        client_id: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            credential,
            client_id: client_id.into(),
            tenant_id: tenant_id.into(),
        }
    }

    /// Returns the client identifier this provider authenticates as.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the tenant identifier this provider targets.
    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Derives the default `.default` scope for a resource URL.
    ///
    /// The scope is `{scheme}://{host}/.default`, with the port included
    /// when the URL carries one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the URL has no host.
    pub fn default_scope(resource: &Url) -> Result<String, Report<TokenError>> {
        let host = resource.host_str().ok_or_else(|| TokenError::InvalidArgument {
            argument: "resource",
            details: format!("resource URL '{resource}' has no host"),
        })?;
        let authority = match resource.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(format!("{}://{}/.default", resource.scheme(), authority))
    }

    /// Acquires an access token for the resource's default scope.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a host-less resource URL, and token
    /// acquisition failures unchanged.
    pub async fn access_token(&self, resource: &Url) -> Result<AccessToken, Report<TokenError>> {
        let scope = Self::default_scope(resource)?;
        self.access_token_for_scopes(resource, &[scope]).await
    }

    /// Acquires an access token for explicit scopes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the resource URL has no host or
    /// `scopes` is empty, and token acquisition failures unchanged.
    pub async fn access_token_for_scopes(
        &self,
        resource: &Url,
        scopes: &[String],
    ) -> Result<AccessToken, Report<TokenError>> {
        if resource.host_str().is_none() {
            return Err(TokenError::InvalidArgument {
                argument: "resource",
                details: format!("resource URL '{resource}' has no host"),
            }
            .into());
        }
        if scopes.is_empty() {
            return Err(TokenError::InvalidArgument {
                argument: "scopes",
                details: "scope list is empty".to_string(),
            }
            .into());
        }

        let token = self.credential.acquire_token(scopes).await?;

        tracing::info!(
            resource = %resource,
            scopes = %scopes.join(", "),
            "access token acquired"
        );

        Ok(token)
    }

    /// Acquires a token for the resource and sets the request's
    /// `Authorization` header to `Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns the token acquisition failure unchanged; the request is
    /// left without an `Authorization` header on failure.
    pub async fn authenticate_request(
        &self,
        resource: &Url,
        request: &mut reqwest::Request,
    ) -> Result<(), Report<TokenError>> {
        let token = self.access_token(resource).await?;
        let header =
            HeaderValue::from_str(&format!("Bearer {}", token.secret())).map_err(|e| {
                TokenError::Endpoint {
                    details: format!("token is not a valid header value: {e}"),
                }
            })?;
        request.headers_mut().insert(AUTHORIZATION, header);
        Ok(())
    }
}
