//! Policy configuration errors.
//!
//! These describe a malformed policy table, not a denied navigation.
//! Navigation outcomes are always an [`AccessDecision`](crate::AccessDecision).

use crate::role::Role;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Role string outside the closed set.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Route that no role may enter.
    #[error("route {0} has no allowed roles")]
    EmptyAllowedRoles(&'static str),

    #[error("route {0} is registered more than once")]
    DuplicatePath(&'static str),

    /// Path must be absolute and carry no trailing slash.
    #[error("route path {0:?} is not a normalized absolute path")]
    InvalidPath(&'static str),

    #[error("route {path} names unknown menu parent {parent}")]
    UnknownMenuParent {
        path: &'static str,
        parent: &'static str,
    },

    /// Menu parents must be top-level menu items.
    #[error("route {path} names nested route {parent} as its menu parent")]
    NestedMenuParent {
        path: &'static str,
        parent: &'static str,
    },

    /// Declared landing page the role cannot enter (redirect loop).
    #[error("default route {path} for role {role} is not accessible to that role")]
    DefaultRouteUnreachable { role: Role, path: &'static str },
}

impl PolicyError {
    /// Check if this error concerns a single registry entry.
    pub fn is_entry_error(&self) -> bool {
        matches!(
            self,
            PolicyError::EmptyAllowedRoles(_)
                | PolicyError::DuplicatePath(_)
                | PolicyError::InvalidPath(_)
                | PolicyError::UnknownMenuParent { .. }
                | PolicyError::NestedMenuParent { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            PolicyError::UnknownRole("owner".to_string()),
            PolicyError::EmptyAllowedRoles("/jobs"),
            PolicyError::DuplicatePath("/jobs"),
            PolicyError::InvalidPath("jobs/"),
            PolicyError::UnknownMenuParent {
                path: "/a",
                parent: "/b",
            },
            PolicyError::NestedMenuParent {
                path: "/a",
                parent: "/b",
            },
            PolicyError::DefaultRouteUnreachable {
                role: Role::Candidate,
                path: "/dashboard",
            },
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn entry_errors() {
        assert!(PolicyError::EmptyAllowedRoles("/x").is_entry_error());
        assert!(!PolicyError::UnknownRole("x".into()).is_entry_error());

        let loop_err = PolicyError::DefaultRouteUnreachable {
            role: Role::Admin,
            path: "/dashboard",
        };
        assert!(!loop_err.is_entry_error());
        assert!(loop_err.to_string().contains("admin"));
    }
}
