//! Service principal permission-grant operations for the tenant-admin SDK.
//!
//! This crate defines the contract for managing the OAuth permission grants
//! recorded against a tenant's service principal:
//! - Pending request handling (`PermissionRequest`, approve/deny)
//! - Grant management (`PermissionGrant`, add/revoke/delete)
//! - Service principal enablement (`ServicePrincipalProperties`)
//!
//! The [`ServicePrincipalPermissions`] trait is a contract only: the remote
//! admin endpoint's request and response shapes belong to whatever HTTP
//! transport implements it. Grants and requests are owned by the remote
//! tenant; the types here are transient client-side representations.
//!
//! # Example
//!
//! ```
//! use tenant_admin_core::PermissionGrantId;
//! use tenant_admin_permissions::PermissionGrant;
//!
//! let grant = PermissionGrant::new(
//!     PermissionGrantId::new("grant_1"),
//!     "https://graph.example.com",
//!     vec!["User.Read".to_string(), "Mail.Read".to_string()],
//! );
//!
//! // Removing one of two scopes leaves a usable grant...
//! let narrowed = grant.without_scope("Mail.Read").expect("grant survives");
//! assert_eq!(narrowed.scopes(), ["User.Read"]);
//!
//! // ...removing the last scope means the grant no longer exists.
//! assert!(narrowed.without_scope("User.Read").is_none());
//! ```

pub mod error;
pub mod grant;
pub mod operations;
pub mod options;
pub mod principal;
pub mod request;

pub use error::GrantError;
pub use grant::{GrantSummary, PermissionGrant};
pub use operations::ServicePrincipalPermissions;
pub use options::VanityUrlOptions;
pub use principal::ServicePrincipalProperties;
pub use request::PermissionRequest;
