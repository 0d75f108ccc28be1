//! Landing page per role.
//!
//! The table is declared, not derived from the registry. The invariant
//! checker confirms every declared route is accessible to its role.

use crate::role::Role;

pub const LOGIN_PATH: &str = "/login";

/// Ambiguous entry point; always resolved through [`default_route`].
pub const ROOT_PATH: &str = "/";

/// The declared landing page for an authenticated role.
pub fn declared_default_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard",
        Role::Recruiter => "/dashboard",
        Role::DomainExpert => "/jobs",
        Role::Candidate => "/jobs",
    }
}

/// Where a principal lands after login or on `/`. No role means `/login`.
pub fn default_route(role: Option<Role>) -> &'static str {
    match role {
        Some(role) => declared_default_route(role),
        None => LOGIN_PATH,
    }
}
