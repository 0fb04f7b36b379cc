//! Route guard decisions over real sessions

use super::session::{NOW, session_with, token};
use crate::guard::{Access, GuardDecision, Redirect, authorize, authorize_access};
use crate::types::Role;

fn redirect_of(decision: GuardDecision) -> Redirect {
    match decision {
        GuardDecision::Deny(redirect) => redirect,
        GuardDecision::Allow => panic!("expected navigation to be denied"),
    }
}

#[test]
fn test_no_token_redirects_with_return_url() {
    let (session, _, _) = session_with(None);

    for requested in ["/solicitudes", "/estudiantes?carrera=3", "/"] {
        let redirect = redirect_of(authorize(&session, requested, None));
        assert_eq!(redirect.path, "/login");
        assert_eq!(redirect.return_url.as_deref(), Some(requested));

        let redirect = redirect_of(authorize(&session, requested, Some(Role::Admin)));
        assert_eq!(redirect.return_url.as_deref(), Some(requested));
    }
}

#[test]
fn test_student_denied_admin_route() {
    let (session, _, _) = session_with(Some(&token("estudiante", NOW + 3600)));

    let redirect = redirect_of(authorize(&session, "/estudiantes", Some(Role::Admin)));
    assert_eq!(redirect.path, "/login");
    assert_eq!(redirect.return_url, None);

    // the session itself is untouched
    assert!(session.is_logged_in());
}

#[test]
fn test_admin_allowed_admin_route() {
    let (session, _, _) = session_with(Some(&token("admin", NOW + 3600)));

    assert!(session.is_logged_in());
    assert_eq!(session.current_user().unwrap().role, Role::Admin);
    assert_eq!(
        authorize(&session, "/tipos-beca", Some(Role::Admin)),
        GuardDecision::Allow
    );
}

#[test]
fn test_admin_denied_student_only_route() {
    let (session, _, _) = session_with(Some(&token("admin", NOW + 3600)));
    assert!(!authorize(&session, "/mis-solicitudes", Some(Role::Estudiante)).is_allowed());
}

#[test]
fn test_expired_token_redirects_regardless_of_role() {
    let (session, _, _) = session_with(Some(&token("estudiante", NOW - 10)));

    assert!(!session.is_logged_in());
    for required in [None, Some(Role::Estudiante), Some(Role::Admin)] {
        let redirect = redirect_of(authorize(&session, "/solicitudes", required));
        assert_eq!(redirect.return_url.as_deref(), Some("/solicitudes"));
    }
}

#[test]
fn test_decision_is_reevaluated_each_time() {
    let (session, _, clock) = session_with(Some(&token("admin", NOW + 60)));
    assert!(authorize(&session, "/", None).is_allowed());

    clock.advance(120);
    assert!(!authorize(&session, "/", None).is_allowed());
}

#[test]
fn test_logout_then_guard_denies() {
    let (session, _, _) = session_with(Some(&token("admin", NOW + 3600)));
    session.logout();

    let redirect = redirect_of(authorize(&session, "/reportes", Some(Role::Admin)));
    assert_eq!(redirect.href(), "/login?returnUrl=%2Freportes");
}

#[test]
fn test_public_routes_never_redirect() {
    let (session, _, _) = session_with(None);
    assert!(authorize_access(&session, "/login", Access::Public).is_allowed());
    assert!(!authorize_access(&session, "/", Access::Authenticated).is_allowed());
}
