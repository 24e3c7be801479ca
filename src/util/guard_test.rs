use super::*;

#[test]
fn protected_routes_require_a_session() {
    assert_eq!(protected_decision(true), GuardDecision::Allow);
    assert_eq!(protected_decision(false), GuardDecision::ToLogin);
}

#[test]
fn public_routes_reject_an_active_session() {
    assert_eq!(public_decision(false), GuardDecision::Allow);
    assert_eq!(public_decision(true), GuardDecision::ToHome);
}

#[test]
fn login_path_preserves_the_originating_route() {
    assert_eq!(login_path_from("/create"), "/login?from=/create");
    assert_eq!(login_path_from("/project-planning"), "/login?from=/project-planning");
}

#[test]
fn login_path_collapses_trivial_origins() {
    assert_eq!(login_path_from("/"), "/login");
    assert_eq!(login_path_from(""), "/login");
}
