use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use profiles::fixture::demo_profile;

fn loading() -> SessionStore {
    SessionStore::new()
}

fn signed_out() -> SessionStore {
    let mut s = SessionStore::new();
    s.initialize(None);
    s
}

fn signed_in() -> SessionStore {
    let mut s = SessionStore::new();
    s.set_user(demo_profile());
    s
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&loading()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn should_redirect_authed_only_with_user() {
    assert!(should_redirect_authed(&signed_in()));
    assert!(!should_redirect_authed(&signed_out()));
    assert!(!should_redirect_authed(&loading()));
}

#[test]
fn protected_guard_fires_exactly_once() {
    let mut guard = RedirectGuard::protected();
    let session = signed_out();
    assert_eq!(guard.check(&session), Some(LOGIN_PATH));
    assert_eq!(guard.check(&session), None);
    assert_eq!(guard.check(&session), None);
}

#[test]
fn protected_guard_waits_for_initialization() {
    let mut guard = RedirectGuard::protected();
    let mut session = loading();
    assert_eq!(guard.check(&session), None);
    session.initialize(None);
    assert_eq!(guard.check(&session), Some(LOGIN_PATH));
}

#[test]
fn protected_guard_never_fires_for_signed_in_user() {
    let mut guard = RedirectGuard::protected();
    let session = signed_in();
    for _ in 0..3 {
        assert_eq!(guard.check(&session), None);
    }
}

#[test]
fn protected_guard_fires_after_logout() {
    let mut guard = RedirectGuard::protected();
    let mut session = signed_in();
    assert_eq!(guard.check(&session), None);
    session.logout();
    assert_eq!(guard.check(&session), Some(LOGIN_PATH));
}

#[test]
fn login_guard_sends_signed_in_user_to_dashboard() {
    let mut guard = RedirectGuard::login_only();
    assert_eq!(guard.check(&signed_out()), None);
    assert_eq!(guard.check(&signed_in()), Some(DASHBOARD_PATH));
    assert_eq!(guard.check(&signed_in()), None);
}

// =============================================================================
// redirect_pass
// =============================================================================

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str, NavigateOptions)) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |path: &str, _opts: NavigateOptions| sink.borrow_mut().push(path.to_owned()))
}

#[test]
fn redirect_pass_navigates_to_login_exactly_once() {
    let (calls, navigate) = recorder();
    let session = RwSignal::new(loading());
    let mut guard = RedirectGuard::protected();

    redirect_pass(&mut guard, session, &navigate);
    assert!(calls.borrow().is_empty());

    session.update(|s| s.initialize(None));
    redirect_pass(&mut guard, session, &navigate);
    redirect_pass(&mut guard, session, &navigate);
    session.update(SessionStore::logout);
    redirect_pass(&mut guard, session, &navigate);

    assert_eq!(*calls.borrow(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn redirect_pass_leaves_signed_in_user_alone() {
    let (calls, navigate) = recorder();
    let session = RwSignal::new(signed_in());
    let mut guard = RedirectGuard::protected();

    for _ in 0..3 {
        redirect_pass(&mut guard, session, &navigate);
    }
    assert!(calls.borrow().is_empty());
}

#[test]
fn redirect_pass_login_only_sends_user_to_dashboard_once() {
    let (calls, navigate) = recorder();
    let session = RwSignal::new(signed_out());
    let mut guard = RedirectGuard::login_only();

    redirect_pass(&mut guard, session, &navigate);
    session.update(|s| s.set_user(demo_profile()));
    redirect_pass(&mut guard, session, &navigate);
    redirect_pass(&mut guard, session, &navigate);

    assert_eq!(*calls.borrow(), vec![DASHBOARD_PATH.to_owned()]);
}
