//! Strongly-typed identifiers for remote-owned objects.
//!
//! Every identifier in this SDK is assigned by the remote tenant and is
//! opaque to the client: the client only receives, stores, and echoes these
//! values back in later calls. The newtypes exist so a grant identifier can
//! never be passed where a request identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an identifier from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of identifier that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate a strongly-typed wrapper around a remote-assigned
/// identifier string.
macro_rules! define_remote_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier received from the remote service.
            ///
            /// # Panics
            ///
            /// Panics if the identifier is empty. Values obtained from the
            /// remote service are never empty; use [`FromStr`] for input
            /// that has not been validated.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                let id = id.into();
                assert!(
                    !id.trim().is_empty(),
                    concat!(stringify!($name), " must not be empty")
                );
                Self(id)
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(ParseIdError {
                        id_type: stringify!($name),
                        reason: "identifier is empty".to_string(),
                    });
                }
                Ok(Self(s.to_string()))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_remote_id!(
    /// Stable identifier of a permission grant, usable for scope-level
    /// revocation and full-grant deletion.
    PermissionGrantId
);

define_remote_id!(
    /// Identifier of a pending permission request awaiting approval or
    /// denial.
    PermissionRequestId
);

define_remote_id!(
    /// Object identifier of a recorded grant, used by the legacy
    /// whole-grant revocation operation.
    ServicePrincipalObjectId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_id_round_trips() {
        let id = PermissionGrantId::new("grant-42");
        assert_eq!(id.as_str(), "grant-42");
        assert_eq!(id.to_string(), "grant-42");
    }

    #[test]
    fn parse_accepts_non_empty() {
        let id: PermissionRequestId = "req_7".parse().expect("should parse");
        assert_eq!(id.as_str(), "req_7");
    }

    #[test]
    fn parse_rejects_empty() {
        let result: Result<PermissionGrantId, _> = "".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "PermissionGrantId");
    }

    #[test]
    fn parse_rejects_blank() {
        let result: Result<ServicePrincipalObjectId, _> = "   ".parse();
        assert!(result.is_err());
    }

    #[test]
    #[should_panic]
    fn new_panics_on_empty() {
        let _ = PermissionGrantId::new("");
    }

    #[test]
    fn id_equality() {
        let a = PermissionGrantId::new("g1");
        let b = PermissionGrantId::new("g1");
        assert_eq!(a, b);
    }

    #[test]
    fn id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(PermissionGrantId::new("g1"));
        set.insert(PermissionGrantId::new("g2"));
        set.insert(PermissionGrantId::new("g1")); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = PermissionRequestId::new("req_9");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"req_9\"");
        let parsed: PermissionRequestId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
