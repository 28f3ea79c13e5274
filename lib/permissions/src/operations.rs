//! The permission-grant operations contract.
//!
//! Implementations call the tenant's remote admin endpoint; this module
//! defines only the contract. The versioned operations are authoritative
//! and required; the legacy names survive as deprecated forwarders so the
//! whole legacy surface can eventually be removed without behavior loss.

use crate::error::GrantError;
use crate::grant::{GrantSummary, PermissionGrant};
use crate::options::VanityUrlOptions;
use crate::principal::ServicePrincipalProperties;
use crate::request::PermissionRequest;
use async_trait::async_trait;
use rootcause::prelude::Report;
use tenant_admin_core::{PermissionGrantId, PermissionRequestId, ServicePrincipalObjectId};

/// Operations over the tenant service principal's permission grants.
///
/// Every operation accepts [`VanityUrlOptions`] by value to optionally
/// redirect the call at a tenant-custom admin domain. All operations are
/// asynchronous; there are no blocking forms. Retry, pagination, and
/// rate-limit handling belong to the transport implementing this trait.
#[async_trait]
pub trait ServicePrincipalPermissions: Send + Sync {
    /// Lists the permission requests currently awaiting approval or
    /// denial.
    async fn pending_requests(
        &self,
        options: VanityUrlOptions,
    ) -> Result<Vec<PermissionRequest>, Report<GrantError>>;

    /// Approves a pending permission request, returning the resulting
    /// grant. The request leaves the pending set.
    async fn approve_request(
        &self,
        request_id: &PermissionRequestId,
        options: VanityUrlOptions,
    ) -> Result<PermissionGrant, Report<GrantError>>;

    /// Denies a pending permission request. The request leaves the
    /// pending set without producing a grant.
    async fn deny_request(
        &self,
        request_id: &PermissionRequestId,
        options: VanityUrlOptions,
    ) -> Result<(), Report<GrantError>>;

    /// Enables or disables the tenant's service principal, returning its
    /// resulting properties.
    async fn set_service_principal_enabled(
        &self,
        enabled: bool,
        options: VanityUrlOptions,
    ) -> Result<ServicePrincipalProperties, Report<GrantError>>;

    /// Lists all currently recorded grants.
    async fn granted_permissions(
        &self,
        options: VanityUrlOptions,
    ) -> Result<Vec<PermissionGrant>, Report<GrantError>>;

    /// Adds a grant for a (resource, scope) pair, returning the resulting
    /// grant.
    async fn add_grant(
        &self,
        resource: &str,
        scope: &str,
        options: VanityUrlOptions,
    ) -> Result<PermissionGrant, Report<GrantError>>;

    /// Revokes a single scope from an existing grant.
    ///
    /// Returns the updated grant, or `None` when the grant's last scope
    /// was removed: the grant no longer exists in that case.
    async fn revoke_scope(
        &self,
        grant_id: &PermissionGrantId,
        scope: &str,
        options: VanityUrlOptions,
    ) -> Result<Option<PermissionGrant>, Report<GrantError>>;

    /// Deletes an entire grant with all its scopes.
    async fn delete_grant(
        &self,
        grant_id: &PermissionGrantId,
        options: VanityUrlOptions,
    ) -> Result<(), Report<GrantError>>;

    /// Revokes an entire grant by its object identifier.
    #[deprecated(note = "revoke by grant identifier with `delete_grant` instead")]
    async fn revoke_grant_by_object_id(
        &self,
        object_id: &ServicePrincipalObjectId,
        options: VanityUrlOptions,
    ) -> Result<(), Report<GrantError>>;

    /// Enables the tenant's service principal.
    async fn enable_service_principal(
        &self,
        options: VanityUrlOptions,
    ) -> Result<ServicePrincipalProperties, Report<GrantError>> {
        self.set_service_principal_enabled(true, options).await
    }

    /// Disables the tenant's service principal.
    async fn disable_service_principal(
        &self,
        options: VanityUrlOptions,
    ) -> Result<ServicePrincipalProperties, Report<GrantError>> {
        self.set_service_principal_enabled(false, options).await
    }

    /// Lists pending permission requests.
    #[deprecated(note = "use `pending_requests`")]
    async fn list_permission_requests(
        &self,
        options: VanityUrlOptions,
    ) -> Result<Vec<PermissionRequest>, Report<GrantError>> {
        self.pending_requests(options).await
    }

    /// Approves a pending permission request, returning the legacy grant
    /// shape.
    #[deprecated(note = "use `approve_request`, which returns the grant identifier")]
    async fn approve_permission_request(
        &self,
        request_id: &PermissionRequestId,
        options: VanityUrlOptions,
    ) -> Result<GrantSummary, Report<GrantError>> {
        let grant = self.approve_request(request_id, options).await?;
        Ok(grant.into())
    }

    /// Denies a pending permission request.
    #[deprecated(note = "use `deny_request`")]
    async fn deny_permission_request(
        &self,
        request_id: &PermissionRequestId,
        options: VanityUrlOptions,
    ) -> Result<(), Report<GrantError>> {
        self.deny_request(request_id, options).await
    }

    /// Lists all recorded grants in the legacy shape.
    #[deprecated(note = "use `granted_permissions`, which returns grant identifiers")]
    async fn list_grants(
        &self,
        options: VanityUrlOptions,
    ) -> Result<Vec<GrantSummary>, Report<GrantError>> {
        let grants = self.granted_permissions(options).await?;
        Ok(grants.into_iter().map(GrantSummary::from).collect())
    }

    /// Adds a grant for a (resource, scope) pair, returning the legacy
    /// grant shape.
    #[deprecated(note = "use `add_grant`, which returns the grant identifier")]
    async fn add_permission(
        &self,
        resource: &str,
        scope: &str,
        options: VanityUrlOptions,
    ) -> Result<GrantSummary, Report<GrantError>> {
        let grant = self.add_grant(resource, scope, options).await?;
        Ok(grant.into())
    }
}
