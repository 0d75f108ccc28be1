//! Navigation guard.
//!
//! Each call maps `(Principal, requested path)` straight to a terminal
//! [`AccessDecision`]. Nothing is remembered between calls.
//!
//! ```text
//! unauthenticated            ──► Redirect(/login)
//! authenticated, no role     ──► Deny(NoRoleAssigned)
//! role allowed on path       ──► Render
//! role not allowed / "/"     ──► Redirect(default route)
//!   └ default unusable       ──► Deny(NoAccessibleDestination)
//! ```

use crate::default_route::{default_route, LOGIN_PATH};
use crate::permission::{permissions_for, PermissionSet};
use crate::resolver::{normalize_path, AccessResolver};
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// The session's view of the current user, supplied fresh per navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Principal {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Principal {
    pub const fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
        }
    }

    pub const fn authenticated(role: Role) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
        }
    }

    /// Signed in, but no role has been assigned yet.
    pub const fn without_role() -> Self {
        Self {
            authenticated: true,
            role: None,
        }
    }

    /// Build from raw session values. Unrecognized role strings count as no role.
    pub fn from_session(authenticated: bool, role: Option<&str>) -> Self {
        Self {
            authenticated,
            role: role.and_then(Role::from_session_value),
        }
    }

    /// The same session acting as `role`. Returns a new principal.
    pub fn with_role(self, role: Role) -> Self {
        Self {
            role: Some(role),
            ..self
        }
    }

    /// Capabilities of this principal. Anonymous sessions get none.
    pub fn permissions(&self) -> PermissionSet {
        match (self.authenticated, self.role) {
            (true, Some(role)) => permissions_for(role),
            _ => PermissionSet::empty(),
        }
    }
}

/// Why a navigation is refused outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    NoRoleAssigned,
    NoAccessibleDestination,
}

impl DenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::NoRoleAssigned => "role not assigned; contact administrator",
            DenyReason::NoAccessibleDestination => "no accessible pages; contact administrator",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Show the requested view.
    Render,
    /// Navigate elsewhere instead.
    Redirect { target: String },
    /// Show the access-denied screen.
    Deny { reason: DenyReason },
}

impl AccessDecision {
    pub fn redirect(target: impl Into<String>) -> Self {
        AccessDecision::Redirect {
            target: target.into(),
        }
    }

    pub fn deny(reason: DenyReason) -> Self {
        AccessDecision::Deny { reason }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, AccessDecision::Render)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            AccessDecision::Redirect { target } => Some(target),
            _ => None,
        }
    }

    /// Text for the denial screen, if this is a denial.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Deny { reason } => Some(reason.message()),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessDecision::Render => f.write_str("render"),
            AccessDecision::Redirect { target } => write!(f, "redirect {}", target),
            AccessDecision::Deny { reason } => write!(f, "deny: {}", reason),
        }
    }
}

/// Guard evaluated in front of every protected view.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    resolver: AccessResolver,
}

impl RouteGuard {
    pub const fn new(resolver: AccessResolver) -> Self {
        Self { resolver }
    }

    /// Guard over the standard registry.
    pub const fn standard() -> Self {
        Self::new(AccessResolver::standard())
    }

    pub fn resolver(&self) -> &AccessResolver {
        &self.resolver
    }

    /// Decide what happens when `principal` navigates to `requested_path`.
    pub fn check(&self, principal: &Principal, requested_path: &str) -> AccessDecision {
        let decision = self.evaluate(principal, requested_path);
        tracing::debug!(
            path = requested_path,
            authenticated = principal.authenticated,
            role = principal.role.map(Role::as_str),
            %decision,
            "route guard decision"
        );
        decision
    }

    /// Post-login destination, equivalent to entering `/`.
    pub fn landing(&self, principal: &Principal) -> AccessDecision {
        self.check(principal, crate::default_route::ROOT_PATH)
    }

    fn evaluate(&self, principal: &Principal, requested_path: &str) -> AccessDecision {
        if !principal.authenticated {
            return AccessDecision::redirect(LOGIN_PATH);
        }

        let Some(role) = principal.role else {
            return AccessDecision::deny(DenyReason::NoRoleAssigned);
        };

        if self.resolver.is_accessible(role, requested_path) {
            return AccessDecision::Render;
        }

        self.fallback(role, requested_path)
    }

    fn fallback(&self, role: Role, requested_path: &str) -> AccessDecision {
        let target = default_route(Some(role));

        if !self.destination_usable(role, target, requested_path) {
            tracing::warn!(
                role = role.as_str(),
                default_route = target,
                "no accessible destination for role"
            );
            return AccessDecision::deny(DenyReason::NoAccessibleDestination);
        }

        AccessDecision::redirect(target)
    }

    /// Whether redirecting `role` to `target` settles instead of re-entering
    /// the guard. `/login` is only reachable here if the default route table
    /// stops mapping every role to an application page.
    fn destination_usable(&self, role: Role, target: &str, requested_path: &str) -> bool {
        target != LOGIN_PATH
            && !self.resolver.accessible_routes(role).is_empty()
            && self.resolver.is_accessible(role, target)
            && normalize_path(requested_path) != target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{RouteEntry, RouteRegistry};

    fn guard() -> RouteGuard {
        RouteGuard::standard()
    }

    #[test]
    fn anonymous_redirects_to_login() {
        let decision = guard().check(&Principal::anonymous(), "/jobs");
        assert_eq!(decision, AccessDecision::redirect("/login"));
    }

    #[test]
    fn anonymous_with_stale_role_still_redirects() {
        let principal = Principal {
            authenticated: false,
            role: Some(Role::Admin),
        };
        assert_eq!(
            guard().check(&principal, "/admin-audit-log"),
            AccessDecision::redirect("/login")
        );
        assert!(principal.permissions().is_empty());
    }

    #[test]
    fn candidate_bounced_to_jobs() {
        let decision = guard().check(&Principal::authenticated(Role::Candidate), "/candidates");
        assert_eq!(decision.redirect_target(), Some("/jobs"));
    }

    #[test]
    fn admin_renders_audit_log() {
        let decision = guard().check(&Principal::authenticated(Role::Admin), "/admin-audit-log");
        assert!(decision.is_render());
    }

    #[test]
    fn missing_role_is_denied() {
        let decision = guard().check(&Principal::without_role(), "/dashboard");
        assert_eq!(decision, AccessDecision::deny(DenyReason::NoRoleAssigned));
        assert!(decision
            .message()
            .is_some_and(|m| m.starts_with("role not assigned")));
    }

    #[test]
    fn root_resolves_to_default_route() {
        let principal = Principal::authenticated(Role::Recruiter);
        assert_eq!(guard().check(&principal, "/"), AccessDecision::redirect("/dashboard"));
        assert_eq!(guard().landing(&principal), AccessDecision::redirect("/dashboard"));
        assert_eq!(
            guard().landing(&Principal::authenticated(Role::DomainExpert)),
            AccessDecision::redirect("/jobs")
        );
    }

    #[test]
    fn unmatched_path_falls_back_to_default() {
        let decision = guard().check(&Principal::authenticated(Role::Admin), "/no/such/page");
        assert_eq!(decision, AccessDecision::redirect("/dashboard"));
    }

    #[test]
    fn unknown_session_role_is_denied() {
        let principal = Principal::from_session(true, Some("hiring_manager"));
        assert_eq!(principal.role, None);
        assert_eq!(
            guard().check(&principal, "/jobs"),
            AccessDecision::deny(DenyReason::NoRoleAssigned)
        );
    }

    #[test]
    fn role_switch_builds_new_principal() {
        let recruiter = Principal::authenticated(Role::Recruiter);
        let admin = recruiter.with_role(Role::Admin);
        assert_eq!(recruiter.role, Some(Role::Recruiter));
        assert_eq!(admin.role, Some(Role::Admin));
        assert!(guard().check(&admin, "/users").is_render());
        assert!(!guard().check(&recruiter, "/users").is_render());
    }

    #[test]
    fn decisions_are_repeatable() {
        let principal = Principal::authenticated(Role::DomainExpert);
        let first = guard().check(&principal, "/fraud-monitoring");
        let second = guard().check(&principal, "/fraud-monitoring");
        assert_eq!(first, second);
        assert_eq!(first, AccessDecision::redirect("/jobs"));
    }

    static NO_CANDIDATE_ROUTES: &[RouteEntry] = &[RouteEntry {
        path: "/dashboard",
        allowed_roles: &[Role::Admin, Role::Recruiter],
        label: "Dashboard",
        icon: "layout-dashboard",
        menu_parent: None,
    }];

    #[test]
    fn role_without_routes_is_denied_not_looped() {
        let guard = RouteGuard::new(AccessResolver::new(RouteRegistry::from_entries(
            NO_CANDIDATE_ROUTES,
        )));
        let decision = guard.check(&Principal::authenticated(Role::Candidate), "/dashboard");
        assert_eq!(
            decision,
            AccessDecision::deny(DenyReason::NoAccessibleDestination)
        );
        // Requesting the default route itself must not redirect to itself.
        let decision = guard.check(&Principal::authenticated(Role::Candidate), "/jobs");
        assert_eq!(
            decision,
            AccessDecision::deny(DenyReason::NoAccessibleDestination)
        );
    }

    #[test]
    fn unusable_destinations() {
        let guard = guard();
        assert!(guard.destination_usable(Role::Candidate, "/jobs", "/candidates"));
        assert!(!guard.destination_usable(Role::Candidate, LOGIN_PATH, "/candidates"));
        assert!(!guard.destination_usable(Role::Candidate, "/dashboard", "/candidates"));
        assert!(!guard.destination_usable(Role::Candidate, "/jobs", "/jobs/"));
    }

    #[test]
    fn dot_segments_do_not_reach_admin_pages() {
        let decision = guard().check(
            &Principal::authenticated(Role::Candidate),
            "/jobs/../admin-audit-log",
        );
        assert_eq!(decision, AccessDecision::redirect("/jobs"));
    }

    #[test]
    fn decision_serialization() {
        let json = serde_json::to_value(AccessDecision::redirect("/jobs")).expect("json");
        assert_eq!(json["decision"], "redirect");
        assert_eq!(json["target"], "/jobs");

        let deny: AccessDecision =
            serde_json::from_str(r#"{"decision":"deny","reason":"no_role_assigned"}"#)
                .expect("parse deny");
        assert_eq!(deny, AccessDecision::deny(DenyReason::NoRoleAssigned));
        assert_eq!(AccessDecision::Render.to_string(), "render");
    }
}
