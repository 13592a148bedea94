use std::cell::Cell;

use super::*;
use profiles::fixture::demo_profile;

// =========================================================================
// MockProvider
// =========================================================================

struct MockProvider {
    result: Result<UserProfile, LoginError>,
    calls: Cell<usize>,
}

impl MockProvider {
    fn ok(profile: UserProfile) -> Self {
        Self { result: Ok(profile), calls: Cell::new(0) }
    }

    fn failing(err: LoginError) -> Self {
        Self { result: Err(err), calls: Cell::new(0) }
    }
}

#[async_trait::async_trait(?Send)]
impl ProfileProvider for MockProvider {
    async fn fetch_profile(&self, _phone: &PhoneNumber) -> Result<UserProfile, LoginError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

fn form_with(phone: &str) -> LoginForm {
    let mut form = LoginForm::default();
    form.set_phone(phone);
    form
}

fn ready_session() -> SessionStore {
    let mut session = SessionStore::new();
    session.initialize(None);
    session
}

// =========================================================================
// begin_submit
// =========================================================================

#[test]
fn begin_submit_valid_enters_submitting() {
    let mut form = form_with("09123456789");
    form.error = Some("stale".into());
    let phone = form.begin_submit().unwrap();
    assert_eq!(phone.as_str(), "09123456789");
    assert!(form.is_submitting());
    assert_eq!(form.error, None);
}

#[test]
fn begin_submit_empty_shows_required() {
    let mut form = form_with("");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.error.as_deref(), Some("Phone number is required"));
    assert_eq!(form.phase, LoginPhase::Idle);
}

#[test]
fn begin_submit_short_number_shows_length() {
    let mut form = form_with("0912345678");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.error.as_deref(), Some("Phone number must be exactly 11 digits"));
}

#[test]
fn begin_submit_wrong_prefix_shows_pattern() {
    let mut form = form_with("19123456789");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.error.as_deref(), Some("Phone number must be 11 digits starting with 09"));
}

#[test]
fn begin_submit_is_gated_while_submitting() {
    let mut form = form_with("09123456789");
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(form.is_submitting());
}

// =========================================================================
// complete
// =========================================================================

#[test]
fn complete_success_sets_session_user() {
    let mut form = form_with("09123456789");
    let mut session = ready_session();
    form.begin_submit();

    assert!(form.complete(Ok(demo_profile()), &mut session));
    assert_eq!(form.phase, LoginPhase::Succeeded);
    assert_eq!(session.current_user(), Some(&demo_profile()));
}

#[test]
fn complete_failure_leaves_session_untouched() {
    let mut form = form_with("09123456789");
    let mut session = SessionStore::new();
    session.set_user(demo_profile());
    let before = session.clone();
    form.begin_submit();

    assert!(!form.complete(Err(LoginError::Status(500)), &mut session));
    assert_eq!(session, before);
    assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED_MESSAGE));
    assert_eq!(form.phase, LoginPhase::Idle);
}

#[test]
fn complete_failure_allows_resubmit() {
    let mut form = form_with("09123456789");
    let mut session = ready_session();
    form.begin_submit();
    form.complete(Err(LoginError::Network("offline".into())), &mut session);
    assert!(form.begin_submit().is_some());
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn submit_success_installs_fetched_profile() {
    let provider = MockProvider::ok(demo_profile());
    let mut form = form_with("09123456789");
    let mut session = ready_session();

    assert!(submit(&mut form, &mut session, &provider).await);
    assert_eq!(provider.calls.get(), 1);
    assert!(session.is_authenticated());
    assert_eq!(session.current_user(), Some(&demo_profile()));
}

#[tokio::test]
async fn submit_invalid_phone_never_calls_provider() {
    let provider = MockProvider::ok(demo_profile());
    let mut form = form_with("123456789");
    let mut session = ready_session();

    assert!(!submit(&mut form, &mut session, &provider).await);
    assert_eq!(provider.calls.get(), 0);
    assert!(form.error.is_some());
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn submit_failed_fetch_keeps_prior_state() {
    for err in [
        LoginError::Network("dns".into()),
        LoginError::Status(502),
        LoginError::MalformedResponse("response contained no profile".into()),
    ] {
        let provider = MockProvider::failing(err);
        let mut form = form_with("09123456789");
        let mut session = ready_session();
        let before = session.clone();

        assert!(!submit(&mut form, &mut session, &provider).await);
        assert_eq!(session, before);
        assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED_MESSAGE));
    }
}

#[tokio::test]
async fn submit_replaces_previous_user() {
    let mut next = demo_profile();
    next.name.first = "Zed".into();
    let provider = MockProvider::ok(next.clone());
    let mut form = form_with("09123456789");
    let mut session = ready_session();
    session.set_user(demo_profile());

    assert!(submit(&mut form, &mut session, &provider).await);
    assert_eq!(session.current_user(), Some(&next));
}
