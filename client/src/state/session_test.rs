use super::*;
use profiles::fixture::demo_profile;

fn other_profile() -> UserProfile {
    let mut profile = demo_profile();
    profile.name.first = "Ada".into();
    profile.email = "ada@example.com".into();
    profile
}

fn authenticated() -> SessionStore {
    let mut store = SessionStore::new();
    store.set_user(demo_profile());
    store
}

// =============================================================================
// initialize
// =============================================================================

#[test]
fn new_store_is_loading_without_user() {
    let store = SessionStore::new();
    assert!(store.is_loading());
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert_eq!(store.state(), &SessionState::Loading);
}

#[test]
fn initialize_without_profile_is_unauthenticated() {
    let mut store = SessionStore::new();
    store.initialize(None);
    assert!(!store.is_loading());
    assert_eq!(store.state(), &SessionState::Unauthenticated);
}

#[test]
fn initialize_with_restored_profile_is_authenticated() {
    let mut store = SessionStore::new();
    store.initialize(Some(demo_profile()));
    assert_eq!(store.current_user(), Some(&demo_profile()));
    assert!(!store.is_loading());
}

#[test]
fn initialize_after_login_keeps_user() {
    let mut store = authenticated();
    store.initialize(None);
    assert_eq!(store.current_user(), Some(&demo_profile()));
}

// =============================================================================
// set_user
// =============================================================================

#[test]
fn set_user_authenticates_and_ends_loading() {
    let store = authenticated();
    assert!(store.is_authenticated());
    assert!(!store.is_loading());
    assert_eq!(store.current_user(), Some(&demo_profile()));
}

#[test]
fn set_user_replaces_previous_profile_wholesale() {
    let mut store = authenticated();
    store.set_user(other_profile());
    let user = store.current_user().unwrap();
    assert_eq!(user, &other_profile());
    assert_eq!(user.email, "ada@example.com");
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_user() {
    let mut store = authenticated();
    store.logout();
    assert!(store.current_user().is_none());
    assert_eq!(store.state(), &SessionState::Unauthenticated);
}

#[test]
fn logout_is_idempotent_from_any_state() {
    for mut store in [SessionStore::new(), authenticated(), {
        let mut s = SessionStore::new();
        s.initialize(None);
        s
    }] {
        store.logout();
        store.logout();
        assert_eq!(store.state(), &SessionState::Unauthenticated);
        assert!(store.current_user().is_none());
        assert!(!store.is_loading());
    }
}

// =============================================================================
// teardown
// =============================================================================

#[test]
fn teardown_returns_held_profile() {
    assert_eq!(authenticated().teardown(), Some(demo_profile()));
}

#[test]
fn teardown_of_empty_store_returns_none() {
    assert_eq!(SessionStore::new().teardown(), None);
}
