//! Property tests over the standard policy.
//!
//! - Totality: every role has permissions, every route admits someone
//! - No redirect loop: a redirect always targets a page the role can render
//! - Fail closed: paths outside the registry, or with dot segments, render for nobody
//! - Idempotence: identical inputs give identical outputs
//! - Menu subset: accessible routes are exactly the registry filtered by role

use proptest::prelude::*;
use talentgate_policy::{
    accessible_routes, default_route, is_accessible, permissions_for, AccessDecision, DenyReason,
    Principal, Role, RouteGuard, RouteRegistry, LOGIN_PATH,
};

fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn arb_registered_path() -> impl Strategy<Value = String> {
    let paths: Vec<&'static str> = RouteRegistry::standard()
        .all_entries()
        .iter()
        .map(|entry| entry.path)
        .collect();
    (prop::sample::select(paths), "(/[a-z0-9-]{1,8}){0,2}")
        .prop_map(|(base, suffix)| format!("{}{}", base, suffix))
}

fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_registered_path(),
        "(/[a-z-]{1,12}){0,3}",
        Just("/".to_string()),
        Just(LOGIN_PATH.to_string()),
    ]
}

fn arb_principal() -> impl Strategy<Value = Principal> {
    (any::<bool>(), prop::option::of(arb_role())).prop_map(|(authenticated, role)| Principal {
        authenticated,
        role,
    })
}

#[test]
fn totality() {
    for role in Role::ALL {
        assert!(!permissions_for(role).is_empty());
    }
    for entry in RouteRegistry::standard().all_entries() {
        assert!(!entry.allowed_roles.is_empty(), "{}", entry.path);
    }
}

#[test]
fn default_route_is_login_or_accessible() {
    for role in Role::ALL {
        let target = default_route(Some(role));
        assert!(target == LOGIN_PATH || is_accessible(role, target));
    }
}

proptest! {
    #[test]
    fn redirects_never_loop(principal in arb_principal(), path in arb_path()) {
        let guard = RouteGuard::standard();
        match guard.check(&principal, &path) {
            AccessDecision::Redirect { target } if target == LOGIN_PATH => {
                prop_assert!(!principal.authenticated);
            }
            AccessDecision::Redirect { target } => {
                // Following the redirect must settle on the next step.
                prop_assert!(guard.check(&principal, &target).is_render());
            }
            AccessDecision::Deny { reason } => {
                prop_assert!(principal.authenticated);
                if principal.role.is_some() {
                    prop_assert_eq!(reason, DenyReason::NoAccessibleDestination);
                } else {
                    prop_assert_eq!(reason, DenyReason::NoRoleAssigned);
                }
            }
            AccessDecision::Render => {
                let role = principal.role;
                prop_assert!(principal.authenticated);
                prop_assert!(role.is_some_and(|role| is_accessible(role, &path)));
            }
        }
    }

    #[test]
    fn unregistered_paths_fail_closed(role in arb_role(), segment in "[a-z]{3,10}") {
        let path = format!("/unregistered-{}/{}", segment, segment);
        prop_assert!(!is_accessible(role, &path));
    }

    #[test]
    fn relative_segments_fail_closed(
        role in arb_role(),
        base in arb_registered_path(),
        dots in prop::sample::select(vec!["..", ".", "", "%2e%2e"]),
        rest in "[a-z-]{1,12}",
    ) {
        let path = format!("{}/{}/{}", base, dots, rest);
        prop_assert!(!is_accessible(role, &path));
    }

    #[test]
    fn guard_is_idempotent(principal in arb_principal(), path in arb_path()) {
        let guard = RouteGuard::standard();
        prop_assert_eq!(guard.check(&principal, &path), guard.check(&principal, &path));
    }

    #[test]
    fn accessible_routes_match_registry_filter(role in arb_role()) {
        let expected: Vec<_> = RouteRegistry::standard()
            .all_entries()
            .iter()
            .filter(|entry| entry.allowed_roles.contains(&role))
            .collect();
        let first = accessible_routes(role);
        prop_assert_eq!(&first, &expected);
        prop_assert_eq!(first, accessible_routes(role));
    }
}
