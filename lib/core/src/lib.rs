//! Core types for the tenant-admin SDK.
//!
//! This crate provides the strongly-typed identifiers for remote-owned
//! objects (grants, requests, service principals). The identifiers wrap
//! the opaque strings the remote tenant assigns; the SDK never mints
//! them, it only round-trips them.

pub mod id;

pub use id::{ParseIdError, PermissionGrantId, PermissionRequestId, ServicePrincipalObjectId};
