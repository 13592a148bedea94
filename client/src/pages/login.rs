//! Login page: phone number in, session profile out.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use profiles::UserProfile;

use crate::net::provider::LoginError;
use crate::net::source::ProfileSource;
use crate::state::login::LoginForm;
use crate::state::session::SessionStore;
use crate::util::auth::install_authed_redirect;

pub(crate) fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Signing in..." } else { "Sign In" }
}

pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "login-input login-input--error" } else { "login-input" }
}

/// Apply a finished login to the page's signals.
///
/// Returns `None` when either signal has been disposed (the page unmounted
/// while the request was in flight); the result is dropped in that case.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn commit_result(
    form: RwSignal<LoginForm>,
    session: RwSignal<SessionStore>,
    result: Result<UserProfile, LoginError>,
) -> Option<bool> {
    form.try_update(|f| session.try_update(|s| f.complete(result, s))).flatten()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let source = expect_context::<ProfileSource>();
    let form = RwSignal::new(LoginForm::default());

    install_authed_redirect(session, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(phone) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let source = source.clone();
            leptos::task::spawn_local(async move {
                let client = crate::net::provider::ProfileClient::from_source(&source);
                let result = crate::state::login::exchange(&client, &phone).await;
                if commit_result(form, session, result).is_none() {
                    log::debug!("login page unmounted before profile arrived");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (phone, &source);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Dekamond"</h1>
                <h3>"Welcome Back"</h3>
                <p class="login-card__subtitle">"Please sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="phone">"Phone Number"</label>
                    <input
                        id="phone"
                        class=move || input_class(form.with(|f| f.error.is_some()))
                        type="tel"
                        placeholder="09123456789"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.set_phone(event_target_value(&ev)))
                    />
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <span class="login-message login-message--error">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </span>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        {move || submit_label(form.with(LoginForm::is_submitting))}
                    </button>
                </form>
            </div>
        </div>
    }
}
