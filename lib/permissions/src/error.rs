//! Permission operation error types.

use std::fmt;
use tenant_admin_core::{PermissionGrantId, PermissionRequestId};

/// Errors surfaced by implementations of the permission operations.
///
/// The contract performs no retry, pagination, or rate-limit handling;
/// transport-level failures are reported as-is through the `Transport`
/// and `Remote` variants.
#[derive(Debug)]
pub enum GrantError {
    /// No pending request with the given identifier.
    RequestNotFound {
        /// The request that was looked up.
        request_id: PermissionRequestId,
    },
    /// No grant with the given identifier.
    GrantNotFound {
        /// The grant that was looked up.
        grant_id: PermissionGrantId,
    },
    /// The grant exists but does not include the scope being revoked.
    ScopeNotGranted {
        /// The grant that was inspected.
        grant_id: PermissionGrantId,
        /// The scope that was not present.
        scope: String,
    },
    /// The admin endpoint could not be reached.
    Transport {
        /// Error details.
        details: String,
    },
    /// The admin endpoint rejected the operation.
    Remote {
        /// HTTP status reported by the endpoint.
        status: u16,
        /// Error details.
        details: String,
    },
}

impl fmt::Display for GrantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestNotFound { request_id } => {
                write!(f, "permission request '{}' not found", request_id)
            }
            Self::GrantNotFound { grant_id } => {
                write!(f, "permission grant '{}' not found", grant_id)
            }
            Self::ScopeNotGranted { grant_id, scope } => {
                write!(f, "scope '{}' is not granted on '{}'", scope, grant_id)
            }
            Self::Transport { details } => {
                write!(f, "failed to reach the admin endpoint: {}", details)
            }
            Self::Remote { status, details } => {
                write!(f, "admin endpoint rejected the operation ({}): {}", status, details)
            }
        }
    }
}

impl std::error::Error for GrantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_not_found_display() {
        let err = GrantError::RequestNotFound {
            request_id: PermissionRequestId::new("req_1"),
        };
        assert!(err.to_string().contains("req_1"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn scope_not_granted_display() {
        let err = GrantError::ScopeNotGranted {
            grant_id: PermissionGrantId::new("grant_1"),
            scope: "Mail.Read".to_string(),
        };
        assert!(err.to_string().contains("Mail.Read"));
        assert!(err.to_string().contains("grant_1"));
    }

    #[test]
    fn remote_display_includes_status() {
        let err = GrantError::Remote {
            status: 429,
            details: "throttled".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("throttled"));
    }
}
