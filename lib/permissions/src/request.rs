//! Pending permission requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use tenant_admin_core::PermissionRequestId;

/// A pending ask for scopes on a resource, awaiting approval or denial.
///
/// Requests are created externally (by an application registration flow)
/// and consumed by the approve/deny operations; once acted on they leave
/// the tenant's pending set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    /// Identifier of the pending request.
    id: PermissionRequestId,
    /// The resource the scopes are requested against.
    resource: String,
    /// The requested scopes.
    scopes: Vec<String>,
}

impl PermissionRequest {
    /// Creates a pending request snapshot.
    #[must_use]
    pub fn new(
        id: PermissionRequestId,
        resource: impl Into<String>,
        scopes: Vec<String>,
    ) -> Self {
        Self {
            id,
            resource: resource.into(),
            scopes,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> &PermissionRequestId {
        &self.id
    }

    /// Returns the resource the request targets.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the requested scopes.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

impl fmt::Display for PermissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} ({})", self.id, self.resource, self.scopes.join(", "))
    }
}
