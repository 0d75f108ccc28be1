//! Invariant checker for route tables.
//!
//! A table that fails here is a configuration bug. Run it in tests and at
//! startup of tooling; the guard itself never calls it.

use crate::default_route::{declared_default_route, LOGIN_PATH};
use crate::error::PolicyError;
use crate::resolver::{has_relative_segment, AccessResolver};
use crate::role::Role;
use crate::route::RouteRegistry;
use std::collections::HashSet;

/// Check every entry and every role's landing page, collecting all violations.
pub fn validate_registry(registry: &RouteRegistry) -> Result<(), Vec<PolicyError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for entry in registry.all_entries() {
        if !entry.path.starts_with('/')
            || entry.path.len() < 2
            || entry.path.ends_with('/')
            || has_relative_segment(entry.path)
        {
            errors.push(PolicyError::InvalidPath(entry.path));
        }

        if entry.allowed_roles.is_empty() {
            errors.push(PolicyError::EmptyAllowedRoles(entry.path));
        }

        if !seen.insert(entry.path) {
            errors.push(PolicyError::DuplicatePath(entry.path));
        }

        if let Some(parent) = entry.menu_parent {
            match registry.get(parent) {
                None => errors.push(PolicyError::UnknownMenuParent {
                    path: entry.path,
                    parent,
                }),
                Some(parent_entry) if !parent_entry.is_menu_item() => {
                    errors.push(PolicyError::NestedMenuParent {
                        path: entry.path,
                        parent,
                    })
                }
                Some(_) => {}
            }
        }
    }

    let resolver = AccessResolver::new(*registry);
    for role in Role::ALL {
        let path = declared_default_route(role);
        if path != LOGIN_PATH && !resolver.is_accessible(role, path) {
            errors.push(PolicyError::DefaultRouteUnreachable { role, path });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
