//! Role-based access control and route resolution for the talentgate UI shell.
//!
//! This crate provides:
//!
//! - **Role** / **PermissionSet**: the closed role set and the capabilities each carries
//! - **RouteRegistry**: every protected area and the roles allowed into it
//! - **AccessResolver**: accessibility of paths and menu listings per role
//! - **default_route**: the declared landing page per role
//! - **RouteGuard**: the per-navigation decision (render, redirect, deny)
//!
//! # Architecture
//!
//! ```text
//! SessionProvider ──► Principal ──► RouteGuard ──► AccessDecision
//!                                       │
//!                     ┌─────────────────┼──────────────────┐
//!                     ▼                 ▼                  ▼
//!               AccessResolver    default_route     permissions_for
//!                     │
//!                     ▼
//!               RouteRegistry
//! ```
//!
//! Everything here is pure and allocation-light; decisions can be taken
//! from any thread without coordination.
//!
//! # Example
//!
//! ```
//! use talentgate_policy::{AccessDecision, Principal, Role, RouteGuard};
//!
//! let guard = RouteGuard::standard();
//! let candidate = Principal::authenticated(Role::Candidate);
//!
//! assert!(guard.check(&candidate, "/jobs/42").is_render());
//! assert_eq!(
//!     guard.check(&candidate, "/candidates"),
//!     AccessDecision::redirect("/jobs"),
//! );
//! ```

mod default_route;
mod error;
mod fingerprint;
mod guard;
mod permission;
mod resolver;
mod role;
mod route;
mod validate;

pub use default_route::{declared_default_route, default_route, LOGIN_PATH, ROOT_PATH};
pub use error::PolicyError;
pub use fingerprint::PolicyFingerprint;
pub use guard::{AccessDecision, DenyReason, Principal, RouteGuard};
pub use permission::{permissions_for, permissions_for_name, PermissionFlags, PermissionSet};
pub use resolver::{accessible_routes, is_accessible, normalize_path, AccessResolver};
pub use role::Role;
pub use route::{RouteEntry, RouteRegistry};
pub use validate::validate_registry;
