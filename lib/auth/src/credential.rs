//! Token acquisition.
//!
//! [`TokenCredential`] is the narrow capability the provider depends on:
//! supply scopes, receive a bearer token or a failure. The concrete
//! [`ConfidentialClient`] implements it with the OAuth 2.0 client
//! credentials grant, proving the application's identity through a JWT
//! client assertion signed with the certificate's private key
//! (RFC 7523). Tokens are cached until shortly before expiry; concurrent
//! acquisitions are serialized on the cache lock.

use crate::certificate::LoadedCertificate;
use crate::error::{ProviderConfigError, TokenError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use oauth2::basic::BasicClient;
use oauth2::{AuthType, ClientId, Scope, TokenResponse, TokenUrl};
use rootcause::prelude::Report;
use serde::Serialize;
use tokio::sync::Mutex;

/// Client assertion type for JWT-bearer client authentication.
const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// Validity window of a freshly signed client assertion.
const ASSERTION_VALIDITY_SECONDS: i64 = 600;

/// Cached tokens are considered expired this long before their actual
/// expiry, so a token is never handed out mid-flight to a rejection.
const CACHE_EXPIRY_SKEW_SECONDS: i64 = 30;

/// A bearer access token returned by a credential.
#[derive(Debug, Clone)]
pub struct AccessToken {
    secret: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates an access token.
    #[must_use]
    pub fn new(secret: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            secret: secret.into(),
            expires_at,
        }
    }

    /// Returns the token string.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the expiry instant, when the issuer reported one.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

/// The opaque token-acquisition capability the provider is built on.
///
/// Implementations own whatever caching, locking, and protocol work
/// token acquisition needs; callers see only "scopes in, token or
/// failure out". Failures must be surfaced unchanged, with no retry.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    /// Acquires a bearer token for the given scopes.
    ///
    /// # Errors
    ///
    /// Returns the underlying acquisition failure unchanged.
    async fn acquire_token(&self, scopes: &[String]) -> Result<AccessToken, Report<TokenError>>;
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    aud: &'a str,
    iss: &'a str,
    sub: &'a str,
    jti: String,
    iat: i64,
    nbf: i64,
    exp: i64,
}

#[derive(Clone)]
struct CachedToken {
    secret: String,
    expires_at: DateTime<Utc>,
}

/// A confidential client application bound to one certificate and one
/// authority.
///
/// Constructed once during provider initialization and reused for the
/// provider's lifetime; rotating the certificate or authority requires a
/// new instance.
pub struct ConfidentialClient {
    client_id: String,
    token_endpoint: String,
    encoding_key: EncodingKey,
    assertion_header: Header,
    cache: Mutex<Option<CachedToken>>,
}

impl ConfidentialClient {
    /// Builds a confidential client from a loaded certificate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCertificate` when the private key cannot back an
    /// RS256 signer.
    pub fn new(
        client_id: impl Into<String>,
        authority_url: &str,
        certificate: &LoadedCertificate,
    ) -> Result<Self, Report<ProviderConfigError>> {
        let encoding_key = EncodingKey::from_rsa_pem(certificate.private_key_pem()).map_err(
            |e| ProviderConfigError::InvalidCertificate {
                details: format!("private key does not support RS256 signing: {e}"),
            },
        )?;

        let mut assertion_header = Header::new(Algorithm::RS256);
        assertion_header.x5t = Some(certificate.x5t().to_string());

        Ok(Self {
            client_id: client_id.into(),
            token_endpoint: format!("{}/oauth2/v2.0/token", authority_url.trim_end_matches('/')),
            encoding_key,
            assertion_header,
            cache: Mutex::new(None),
        })
    }

    /// Returns the token endpoint this client exchanges against.
    #[must_use]
    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }

    /// Signs a client assertion proving this application's identity to
    /// the token endpoint.
    fn build_client_assertion(&self, now: DateTime<Utc>) -> Result<String, Report<TokenError>> {
        let issued_at = now.timestamp();
        let claims = AssertionClaims {
            aud: &self.token_endpoint,
            iss: &self.client_id,
            sub: &self.client_id,
            jti: ulid::Ulid::new().to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at + ASSERTION_VALIDITY_SECONDS,
        };

        jsonwebtoken::encode(&self.assertion_header, &claims, &self.encoding_key).map_err(|e| {
            TokenError::AssertionSigning {
                details: e.to_string(),
            }
            .into()
        })
    }

    #[cfg(test)]
    async fn seed_cache(&self, secret: &str, expires_at: DateTime<Utc>) {
        *self.cache.lock().await = Some(CachedToken {
            secret: secret.to_string(),
            expires_at,
        });
    }
}

#[async_trait]
impl TokenCredential for ConfidentialClient {
    async fn acquire_token(&self, scopes: &[String]) -> Result<AccessToken, Report<TokenError>> {
        let mut cache = self.cache.lock().await;
        let now = Utc::now();
        if let Some(cached) = cache.as_ref()
            && cached.expires_at > now + Duration::seconds(CACHE_EXPIRY_SKEW_SECONDS)
        {
            return Ok(AccessToken::new(cached.secret.clone(), Some(cached.expires_at)));
        }

        let assertion = self.build_client_assertion(now)?;

        let token_url =
            TokenUrl::new(self.token_endpoint.clone()).map_err(|e| TokenError::Endpoint {
                details: format!("invalid token endpoint: {e}"),
            })?;

        let client = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_auth_type(AuthType::RequestBody)
            .set_token_uri(token_url);

        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| TokenError::Endpoint {
                details: format!("failed to create HTTP client: {e}"),
            })?;

        let mut token_request = client.exchange_client_credentials();
        for scope in scopes {
            token_request = token_request.add_scope(Scope::new(scope.clone()));
        }

        let token_response = token_request
            .add_extra_param("client_assertion_type", CLIENT_ASSERTION_TYPE)
            .add_extra_param("client_assertion", assertion)
            .request_async(&http_client)
            .await
            .map_err(|e| TokenError::Endpoint {
                details: e.to_string(),
            })?;

        let secret = token_response.access_token().secret().clone();
        let expires_at = token_response
            .expires_in()
            .and_then(|d| Duration::from_std(d).ok())
            .map(|d| now + d);

        if let Some(expires_at) = expires_at {
            *cache = Some(CachedToken {
                secret: secret.clone(),
                expires_at,
            });
        }

        Ok(AccessToken::new(secret, expires_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::load_from_store;
    use crate::config::CertificateStoreReference;
    use crate::testutil::{TEST_THUMBPRINT, TEST_X5T, write_test_store};
    use base64::Engine;

    fn fixture_certificate() -> LoadedCertificate {
        let root = tempfile::tempdir().expect("create temp store");
        write_test_store(root.path(), "my");
        let reference = CertificateStoreReference::new("my", TEST_THUMBPRINT);
        load_from_store(&reference, Some(root.path())).expect("fixture loads")
    }

    fn fixture_client() -> ConfidentialClient {
        ConfidentialClient::new(
            "11111111-2222-3333-4444-555555555555",
            "https://login.microsoftonline.com/organizations",
            &fixture_certificate(),
        )
        .expect("client builds")
    }

    fn decode_segment(segment: &str) -> serde_json::Value {
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(segment)
            .expect("valid base64url");
        serde_json::from_slice(&bytes).expect("valid JSON")
    }

    #[test]
    fn token_endpoint_derives_from_authority() {
        let client = fixture_client();
        assert_eq!(
            client.token_endpoint(),
            "https://login.microsoftonline.com/organizations/oauth2/v2.0/token"
        );
    }

    #[test]
    fn assertion_header_names_the_certificate() {
        let client = fixture_client();
        let assertion = client.build_client_assertion(Utc::now()).expect("signs");

        let parts: Vec<&str> = assertion.split('.').collect();
        assert_eq!(parts.len(), 3, "assertion is a signed JWT");

        let header = decode_segment(parts[0]);
        assert_eq!(header["alg"], "RS256");
        assert_eq!(header["x5t"], TEST_X5T);
    }

    #[test]
    fn assertion_claims_identify_the_application() {
        let client = fixture_client();
        let now = Utc::now();
        let assertion = client.build_client_assertion(now).expect("signs");

        let claims = decode_segment(assertion.split('.').nth(1).unwrap());
        assert_eq!(claims["iss"], "11111111-2222-3333-4444-555555555555");
        assert_eq!(claims["sub"], "11111111-2222-3333-4444-555555555555");
        assert_eq!(
            claims["aud"],
            "https://login.microsoftonline.com/organizations/oauth2/v2.0/token"
        );
        assert_eq!(claims["iat"], claims["nbf"]);
        assert_eq!(
            claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(),
            ASSERTION_VALIDITY_SECONDS
        );
    }

    #[test]
    fn assertions_carry_unique_identifiers() {
        let client = fixture_client();
        let now = Utc::now();
        let first = client.build_client_assertion(now).expect("signs");
        let second = client.build_client_assertion(now).expect("signs");

        let jti_first = decode_segment(first.split('.').nth(1).unwrap())["jti"].clone();
        let jti_second = decode_segment(second.split('.').nth(1).unwrap())["jti"].clone();
        assert_ne!(jti_first, jti_second);
    }

    #[tokio::test]
    async fn unexpired_cached_token_is_reused() {
        let client = fixture_client();
        client
            .seed_cache("cached-token", Utc::now() + Duration::hours(1))
            .await;

        let token = client
            .acquire_token(&["https://graph.example.com/.default".to_string()])
            .await
            .expect("cache hit needs no endpoint");
        assert_eq!(token.secret(), "cached-token");
    }

    #[test]
    fn access_token_accessors() {
        let expiry = Utc::now() + Duration::minutes(5);
        let token = AccessToken::new("secret-1", Some(expiry));
        assert_eq!(token.secret(), "secret-1");
        assert_eq!(token.expires_at(), Some(expiry));
    }
}
