//! Service principal properties.

use serde::{Deserialize, Serialize};
use tenant_admin_core::ServicePrincipalObjectId;

/// Properties of the tenant's service principal as reported after an
/// enable or disable operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrincipalProperties {
    /// Object identifier of the service principal.
    pub object_id: ServicePrincipalObjectId,
    /// Display name registered for the principal, if any.
    pub display_name: Option<String>,
    /// Whether the principal is currently enabled.
    pub enabled: bool,
}

impl ServicePrincipalProperties {
    /// Creates a properties snapshot.
    #[must_use]
    pub fn new(object_id: ServicePrincipalObjectId, enabled: bool) -> Self {
        Self {
            object_id,
            display_name: None,
            enabled,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_builder() {
        let props = ServicePrincipalProperties::new(
            ServicePrincipalObjectId::new("sp_1"),
            true,
        )
        .with_display_name("Tenant Admin Add-in");

        assert!(props.enabled);
        assert_eq!(props.display_name.as_deref(), Some("Tenant Admin Add-in"));
        assert_eq!(props.object_id.as_str(), "sp_1");
    }
}
