//! Error types for the authentication provider.
//!
//! Errors are split by phase:
//! - `ProviderConfigError`: initialization failures (configuration,
//!   certificate loading). Fatal, surfaced immediately, never retried.
//! - `TokenError`: per-operation failures (argument validation, assertion
//!   signing, identity-provider errors). Identity-provider failures are
//!   re-raised to the caller without retry or suppression.

use std::fmt;

/// Errors raised while initializing the authentication provider.
#[derive(Debug)]
pub enum ProviderConfigError {
    /// No certificate reference was supplied in the configuration.
    MissingCertificate,
    /// The certificate reference carries an empty thumbprint.
    EmptyThumbprint,
    /// The certificate store could not be read.
    StoreUnavailable {
        /// The store directory that was inspected.
        store: String,
        /// Error details.
        details: String,
    },
    /// No certificate with the requested thumbprint exists in the store.
    CertificateNotFound {
        /// The store directory that was inspected.
        store: String,
        /// The thumbprint that was looked up.
        thumbprint: String,
    },
    /// The certificate or its private key could not be used.
    InvalidCertificate {
        /// Error details.
        details: String,
    },
}

impl fmt::Display for ProviderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCertificate => {
                write!(f, "certificate options are missing from the configuration")
            }
            Self::EmptyThumbprint => {
                write!(f, "certificate thumbprint is empty")
            }
            Self::StoreUnavailable { store, details } => {
                write!(f, "certificate store '{}' is unavailable: {}", store, details)
            }
            Self::CertificateNotFound { store, thumbprint } => {
                write!(
                    f,
                    "no certificate with thumbprint '{}' in store '{}'",
                    thumbprint, store
                )
            }
            Self::InvalidCertificate { details } => {
                write!(f, "certificate is unusable: {}", details)
            }
        }
    }
}

impl std::error::Error for ProviderConfigError {}

/// Errors raised while acquiring tokens or authenticating requests.
#[derive(Debug)]
pub enum TokenError {
    /// An argument failed validation before any token request was made.
    InvalidArgument {
        /// The argument that was rejected.
        argument: &'static str,
        /// Error details.
        details: String,
    },
    /// The client assertion could not be signed.
    AssertionSigning {
        /// Error details.
        details: String,
    },
    /// The identity provider's token endpoint reported a failure.
    Endpoint {
        /// Error details.
        details: String,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, details } => {
                write!(f, "invalid argument '{}': {}", argument, details)
            }
            Self::AssertionSigning { details } => {
                write!(f, "failed to sign client assertion: {}", details)
            }
            Self::Endpoint { details } => {
                write!(f, "token request failed: {}", details)
            }
        }
    }
}

impl std::error::Error for TokenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_certificate_display() {
        let err = ProviderConfigError::MissingCertificate;
        assert!(err.to_string().contains("certificate options"));
    }

    #[test]
    fn empty_thumbprint_display() {
        let err = ProviderConfigError::EmptyThumbprint;
        assert!(err.to_string().contains("thumbprint"));
    }

    #[test]
    fn certificate_not_found_display() {
        let err = ProviderConfigError::CertificateNotFound {
            store: "/home/user/.certstore/my".to_string(),
            thumbprint: "AABBCC".to_string(),
        };
        assert!(err.to_string().contains("AABBCC"));
        assert!(err.to_string().contains(".certstore/my"));
    }

    #[test]
    fn invalid_argument_display() {
        let err = TokenError::InvalidArgument {
            argument: "scopes",
            details: "scope list is empty".to_string(),
        };
        assert!(err.to_string().contains("scopes"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn endpoint_display() {
        let err = TokenError::Endpoint {
            details: "authority unreachable".to_string(),
        };
        assert!(err.to_string().contains("authority unreachable"));
    }
}
