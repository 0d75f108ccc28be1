//! Session seam between the UI shell and the access policy.
//!
//! The session store owns authentication. The guard only asks it for the
//! current principal, once per navigation, and never holds on to it.

use talentgate_policy::{AccessDecision, Principal, Role, RouteGuard};

/// Supplies the principal for the navigation in progress.
pub trait SessionProvider {
    fn current_principal(&self) -> Principal;
}

/// A session that always reports the same principal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSession {
    principal: Principal,
}

impl StaticSession {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn anonymous() -> Self {
        Self::new(Principal::anonymous())
    }

    pub fn signed_in(role: Role) -> Self {
        Self::new(Principal::authenticated(role))
    }

    /// A session acting as another role, for manual testing of role views.
    ///
    /// Returns a new session; `self` is unchanged.
    pub fn switch_role(&self, role: Role) -> Self {
        Self::new(self.principal.with_role(role))
    }
}

impl SessionProvider for StaticSession {
    fn current_principal(&self) -> Principal {
        self.principal
    }
}

/// Resolve a navigation against whatever the session reports right now.
pub fn navigate(guard: &RouteGuard, session: &dyn SessionProvider, path: &str) -> AccessDecision {
    let principal = session.current_principal();
    guard.check(&principal, path)
}
