//! Role-to-route accessibility.
//!
//! A requested path belongs to the registry entry whose path equals it or is
//! a segment-aligned prefix of it, so `/jobs/42/edit` is judged by `/jobs`.
//! Paths that match no entry are accessible to nobody, and so are paths
//! carrying `.`, `..` or empty segments. The browser would resolve those
//! elsewhere than their literal prefix suggests.

use crate::role::Role;
use crate::route::{RouteEntry, RouteRegistry};

/// Strip query and fragment and drop a trailing slash.
///
/// Empty input becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether any segment is empty, `.` or `..`, percent-encoded dots included.
pub(crate) fn has_relative_segment(path: &str) -> bool {
    path.split('/').skip(1).any(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded.is_empty() || decoded == "." || decoded == ".."
    })
}

fn path_within(path: &str, area: &str) -> bool {
    match path.strip_prefix(area) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Read-only view answering accessibility questions over a registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessResolver {
    registry: RouteRegistry,
}

impl AccessResolver {
    pub const fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }

    pub const fn standard() -> Self {
        Self::new(RouteRegistry::standard())
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Registry entry governing `path`, most specific first.
    pub fn matched_entry(&self, path: &str) -> Option<&'static RouteEntry> {
        let path = normalize_path(path);
        if has_relative_segment(path) {
            return None;
        }
        self.registry
            .all_entries()
            .iter()
            .filter(|entry| path_within(path, entry.path))
            .max_by_key(|entry| entry.path.len())
    }

    /// Whether `role` may enter `path`.
    pub fn is_accessible(&self, role: Role, path: &str) -> bool {
        self.matched_entry(path)
            .map(|entry| entry.allows(role))
            .unwrap_or(false)
    }

    /// Every entry `role` may enter, in registry order.
    pub fn accessible_routes(&self, role: Role) -> Vec<&'static RouteEntry> {
        self.registry
            .all_entries()
            .iter()
            .filter(|entry| entry.allows(role))
            .collect()
    }

    /// Accessible entries that appear as menu items.
    pub fn menu_entries(&self, role: Role) -> Vec<&'static RouteEntry> {
        self.accessible_routes(role)
            .into_iter()
            .filter(|entry| entry.is_menu_item())
            .collect()
    }

    /// Menu item to highlight while `path` is open.
    ///
    /// Presentation only: nested screens such as `/candidate-matching`
    /// highlight their parent area. Never use this for gating.
    pub fn active_menu_path(&self, path: &str) -> Option<&'static str> {
        self.matched_entry(path)
            .map(|entry| entry.menu_parent.unwrap_or(entry.path))
    }
}

/// [`AccessResolver::is_accessible`] over the standard registry.
pub fn is_accessible(role: Role, path: &str) -> bool {
    AccessResolver::standard().is_accessible(role, path)
}

/// [`AccessResolver::accessible_routes`] over the standard registry.
pub fn accessible_routes(role: Role) -> Vec<&'static RouteEntry> {
    AccessResolver::standard().accessible_routes(role)
}
