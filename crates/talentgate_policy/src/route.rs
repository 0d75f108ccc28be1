//! Protected application areas and the roles allowed into them.

use crate::error::PolicyError;
use crate::role::Role;
use serde::Serialize;

/// A protected application area.
///
/// `label`, `icon` and `menu_parent` are display metadata; access decisions
/// read only `path` and `allowed_roles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Absolute path, no trailing slash. Nested resources live under it.
    pub path: &'static str,
    /// Roles that may enter. Never empty in a valid registry.
    pub allowed_roles: &'static [Role],
    pub label: &'static str,
    pub icon: &'static str,
    /// Menu item highlighted while this route is open. Entries with a
    /// parent are reached from within another area and are not menu items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_parent: Option<&'static str>,
}

impl RouteEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    pub fn is_menu_item(&self) -> bool {
        self.menu_parent.is_none()
    }
}

const STAFF: &[Role] = &[Role::Recruiter, Role::DomainExpert, Role::Admin];
const EVERYONE: &[Role] = &[
    Role::Recruiter,
    Role::DomainExpert,
    Role::Admin,
    Role::Candidate,
];
const RECRUITING: &[Role] = &[Role::Recruiter, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const CANDIDATE_ONLY: &[Role] = &[Role::Candidate];

const fn area(
    path: &'static str,
    allowed_roles: &'static [Role],
    label: &'static str,
    icon: &'static str,
) -> RouteEntry {
    RouteEntry {
        path,
        allowed_roles,
        label,
        icon,
        menu_parent: None,
    }
}

const fn nested(
    path: &'static str,
    allowed_roles: &'static [Role],
    label: &'static str,
    icon: &'static str,
    parent: &'static str,
) -> RouteEntry {
    RouteEntry {
        path,
        allowed_roles,
        label,
        icon,
        menu_parent: Some(parent),
    }
}

/// Every protected area, in menu order.
static STANDARD_ROUTES: &[RouteEntry] = &[
    area("/dashboard", RECRUITING, "Dashboard", "layout-dashboard"),
    area("/jobs", EVERYONE, "Jobs", "briefcase"),
    area("/candidates", STAFF, "Candidates", "users"),
    area("/interviews", STAFF, "Interviews", "video"),
    area("/ai-questions", STAFF, "AI Questions", "sparkles"),
    area("/feedback", STAFF, "Feedback", "message-square"),
    area("/fraud-monitoring", RECRUITING, "Fraud Monitoring", "shield-alert"),
    area("/my-applications", CANDIDATE_ONLY, "My Applications", "file-text"),
    area("/profile", EVERYONE, "Profile", "user"),
    area("/users", ADMIN_ONLY, "User Management", "user-cog"),
    area("/gdpr", ADMIN_ONLY, "GDPR Requests", "lock"),
    area("/admin-audit-log", ADMIN_ONLY, "Audit Log", "scroll-text"),
    nested("/candidate-matching", RECRUITING, "Candidate Matching", "git-compare", "/jobs"),
    nested("/recruiter-candidates", RECRUITING, "Job Candidates", "users", "/jobs"),
    nested("/interview-outline", STAFF, "Interview Outline", "list-checks", "/ai-questions"),
];

/// Ordered table of protected areas.
#[derive(Debug, Clone, Copy)]
pub struct RouteRegistry {
    entries: &'static [RouteEntry],
}

impl RouteRegistry {
    /// The process-wide route table.
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_ROUTES,
        }
    }

    /// Wrap an arbitrary table without checking it.
    pub const fn from_entries(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    /// Wrap a table after running the invariant checker over it.
    pub fn validated(entries: &'static [RouteEntry]) -> Result<Self, Vec<PolicyError>> {
        let registry = Self::from_entries(entries);
        crate::validate::validate_registry(&registry)?;
        Ok(registry)
    }

    /// Entries in registry order.
    pub fn all_entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    /// Exact path lookup.
    pub fn get(&self, path: &str) -> Option<&'static RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
