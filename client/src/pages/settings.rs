//! Settings menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::app::use_app_state;
use crate::state::toast::use_toasts;

#[component]
pub fn SettingsMenuPage() -> impl IntoView {
    let app = use_app_state();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let pin_label = move || {
        if app.wallet.with(|w| w.pin_set) { "Change transaction PIN" } else { "Create transaction PIN" }
    };

    let on_sign_out = move |_| {
        app.sign_out();
        toasts.success("Signed out");
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <ul class="settings-page__menu">
                <li>
                    <a href=paths::CREATE_TRANSACTION_PIN>{pin_label}</a>
                </li>
                <li>
                    <a href=paths::RESET>"Reset password"</a>
                </li>
                <li>
                    <button class="btn btn--link" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </li>
            </ul>
        </div>
    }
}
