//! Permission grant types.
//!
//! A grant records the tenant's consent binding one or more scopes to the
//! service principal for a resource. The current form carries the stable
//! grant identifier needed for scope-level revocation; the legacy form
//! ([`GrantSummary`]) predates stable identifiers and only names the
//! resource and scopes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tenant_admin_core::PermissionGrantId;

/// A recorded permission grant on the tenant's service principal.
///
/// Owned by the remote tenant; instances held by the client are transient
/// snapshots. The identifier is stable for the grant's lifetime and is the
/// key for scope-level revocation and full deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// Stable identifier assigned by the remote service.
    id: PermissionGrantId,
    /// The resource (API surface) the scopes are granted against.
    resource: String,
    /// The granted scopes. Never empty: a grant whose last scope is
    /// removed ceases to exist.
    scopes: Vec<String>,
}

impl PermissionGrant {
    /// Creates a grant snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `scopes` is empty; a scopeless grant is unrepresentable.
    #[must_use]
    pub fn new(
        id: PermissionGrantId,
        resource: impl Into<String>,
        scopes: Vec<String>,
    ) -> Self {
        assert!(!scopes.is_empty(), "a permission grant must carry at least one scope");
        Self {
            id,
            resource: resource.into(),
            scopes,
        }
    }

    /// Returns the stable grant identifier.
    #[must_use]
    pub fn id(&self) -> &PermissionGrantId {
        &self.id
    }

    /// Returns the resource the grant applies to.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the granted scopes.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Returns true if the grant includes the given scope.
    #[must_use]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Returns a copy of this grant with the given scope removed.
    ///
    /// Returns `None` when removing the scope would leave the grant empty:
    /// a grant without scopes no longer exists. Scopes not present in the
    /// grant are ignored; check [`has_scope`](Self::has_scope) first when
    /// that distinction matters.
    #[must_use]
    pub fn without_scope(&self, scope: &str) -> Option<Self> {
        let remaining: Vec<String> = self
            .scopes
            .iter()
            .filter(|s| s.as_str() != scope)
            .cloned()
            .collect();
        if remaining.is_empty() {
            return None;
        }
        Some(Self {
            id: self.id.clone(),
            resource: self.resource.clone(),
            scopes: remaining,
        })
    }
}

impl fmt::Display for PermissionGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} ({})", self.id, self.resource, self.scopes.join(", "))
    }
}

/// Legacy grant shape: resource and scopes without the stable identifier.
///
/// Superseded by [`PermissionGrant`]; produced only by the deprecated
/// operation aliases for callers that have not migrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantSummary {
    /// The resource the grant applies to.
    pub resource: String,
    /// The granted scopes.
    pub scopes: Vec<String>,
}

impl From<PermissionGrant> for GrantSummary {
    fn from(grant: PermissionGrant) -> Self {
        Self {
            resource: grant.resource,
            scopes: grant.scopes,
        }
    }
}
