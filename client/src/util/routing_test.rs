use super::*;
use records::User;

fn signed_in(role: Role) -> AuthState {
    AuthState { user: Some(User { id: 1, username: "u".to_owned(), role, ..User::default() }), loading: false }
}

#[test]
fn every_role_has_a_dashboard() {
    assert_eq!(dashboard_path(Role::SystemAdmin), "/admin");
    assert_eq!(dashboard_path(Role::AcademicAdmin), "/academic");
    assert_eq!(dashboard_path(Role::GbosApprover), "/gbos");
    assert_eq!(dashboard_path(Role::Supervisor), "/supervisor");
    assert_eq!(dashboard_path(Role::Student), "/student");
    assert_eq!(dashboard_path(Role::Unknown), "/unauthorized");
}

#[test]
fn landing_waits_while_loading() {
    assert_eq!(landing_route(&AuthState::loading()), RouteDecision::Wait);
}

#[test]
fn landing_without_user_goes_to_login() {
    assert_eq!(landing_route(&AuthState::default()), RouteDecision::Redirect("/login"));
}

#[test]
fn student_lands_on_student_dashboard() {
    assert_eq!(landing_route(&signed_in(Role::Student)), RouteDecision::Redirect("/student"));
}

#[test]
fn unrecognised_role_is_unauthorized() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 3, "username": "x", "role": "janitor" })).unwrap();
    let auth = AuthState { user: Some(user), loading: false };
    assert_eq!(landing_route(&auth), RouteDecision::Redirect("/unauthorized"));
}

#[test]
fn student_is_turned_away_from_admin_pages() {
    let auth = signed_in(Role::Student);
    assert_eq!(guard_redirect(&auth, &[Role::SystemAdmin]), Some("/student"));
    assert!(!may_render(&auth, &[Role::SystemAdmin]));
    assert!(may_render(&auth, &[Role::Student]));
    assert_eq!(guard_redirect(&auth, &[Role::Student]), None);
}

#[test]
fn guard_waits_for_session_then_requires_login() {
    assert_eq!(guard_redirect(&AuthState::loading(), &[Role::Student]), None);
    assert!(!may_render(&AuthState::loading(), &[Role::Student]));
    assert_eq!(guard_redirect(&AuthState::default(), &[Role::Student]), Some("/login"));
}
