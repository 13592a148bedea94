//! Dashboard page showing the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected route. It renders a spinner while the session store
//! is still loading, nothing while the guard redirects an anonymous visitor,
//! and the profile cards otherwise.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use profiles::UserProfile;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// A labelled value on an info card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

/// One titled group of profile fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InfoCard {
    pub title: &'static str,
    pub items: Vec<InfoItem>,
}

fn item(label: &'static str, value: impl Into<String>) -> InfoItem {
    InfoItem { label, value: value.into() }
}

/// Render an ISO-8601 timestamp as e.g. `"October 13, 1989"` (UTC date).
/// Unparseable input is shown as-is.
pub(crate) fn format_date(raw: &str) -> String {
    OffsetDateTime::parse(raw, &Rfc3339)
        .map(|dt| format!("{} {}, {}", dt.month(), dt.day(), dt.year()))
        .unwrap_or_else(|_| raw.to_owned())
}

pub(crate) fn greeting(user: &UserProfile) -> String {
    format!("Hello, {}!", user.full_name())
}

pub(crate) fn info_cards(user: &UserProfile) -> Vec<InfoCard> {
    let loc = &user.location;
    vec![
        InfoCard {
            title: "Personal Information",
            items: vec![
                item("Full Name:", user.full_name()),
                item("Gender:", user.gender.clone()),
                item("Date of Birth:", format!("{} ({} years old)", format_date(&user.dob.date), user.dob.age)),
                item("Nationality:", user.nat.clone()),
            ],
        },
        InfoCard {
            title: "Contact Information",
            items: vec![
                item("Email:", user.email.clone()),
                item("Phone:", user.phone.clone()),
                item("Cell:", user.cell.clone()),
            ],
        },
        InfoCard {
            title: "Address",
            items: vec![
                item("Street:", format!("{} {}", loc.street.number, loc.street.name)),
                item("City:", loc.city.clone()),
                item("State:", loc.state.clone()),
                item("Country:", loc.country.clone()),
                item("Postal Code:", loc.postcode.to_string()),
            ],
        },
        InfoCard {
            title: "Account Details",
            items: vec![
                item("Username:", user.login.username.clone()),
                item("UUID:", user.login.uuid.clone()),
                item(
                    "Registered:",
                    format!("{} ({} years ago)", format_date(&user.registered.date), user.registered.age),
                ),
                item("ID:", format!("{}: {}", user.id.name, user.id.value.as_deref().unwrap_or_default())),
            ],
        },
        InfoCard {
            title: "Location Details",
            items: vec![
                item("Coordinates:", format!("{}, {}", loc.coordinates.latitude, loc.coordinates.longitude)),
                item("Timezone:", format!("{} ({})", loc.timezone.offset, loc.timezone.description)),
            ],
        },
    ]
}

/// Dashboard page. Redirects to `/auth` once the session is known to be empty.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    install_unauth_redirect(session, use_navigate());

    // The unauth guard performs the redirect once the store is cleared.
    let on_logout = Callback::new(move |()| session.update(SessionStore::logout));

    view! {
        {move || {
            if session.with(SessionStore::is_loading) {
                return view! {
                    <div class="dashboard-page dashboard-page--loading">
                        <div class="spinner"></div>
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any();
            }
            match session.with(|s| s.current_user().cloned()) {
                Some(user) => view! { <ProfileView user=user on_logout=on_logout/> }.into_any(),
                None => ().into_any(),
            }
        }}
    }
}

#[component]
fn ProfileView(user: UserProfile, on_logout: Callback<()>) -> impl IntoView {
    let cards = info_cards(&user);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div class="dashboard-page__logo">"Dekamond"</div>
                <button class="btn dashboard-page__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </header>
            <main class="dashboard-page__main">
                <section class="dashboard-page__welcome">
                    <img class="dashboard-page__avatar" src=user.picture.large.clone() alt=user.display_name()/>
                    <div class="dashboard-page__welcome-text">
                        <h1>"Welcome to the Dashboard"</h1>
                        <p>{greeting(&user)}</p>
                    </div>
                </section>
                <div class="dashboard-page__grid">
                    {cards
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="info-card">
                                    <h3>{card.title}</h3>
                                    {card
                                        .items
                                        .into_iter()
                                        .map(|i| {
                                            view! {
                                                <div class="info-card__item">
                                                    <span class="info-card__label">{i.label}</span>
                                                    <span class="info-card__value">{i.value}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </div>
    }
}
