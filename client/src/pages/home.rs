//! Public landing and post-registration welcome screens.

use leptos::prelude::*;

use crate::routing::paths;
use crate::state::app::use_app_state;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Pay Buddy"</h1>
            <p>"Send money, buy data, and fund your wallet in one place."</p>
            <div class="home-page__actions">
                <a href=paths::REGISTER class="btn btn--primary">
                    "Create account"
                </a>
                <a href=paths::LOGIN class="btn">
                    "Log in"
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    let app = use_app_state();
    let name = move || app.session.with(|s| s.display_name()).unwrap_or_default();

    view! {
        <div class="welcome-page">
            <h1>"Welcome " {name}</h1>
            <p>"Your account is ready."</p>
            <a href=paths::DASHBOARD class="btn btn--primary">
                "Go to dashboard"
            </a>
        </div>
    }
}
