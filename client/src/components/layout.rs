//! Shared chrome for the signed-in `pay-buddy` area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every nested `pay-buddy/*` page renders inside `Layout`'s content slot,
//! so the header and navigation stay mounted while the user moves between
//! dashboard, wallet, and wizard screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::app::use_app_state;
use crate::state::toast::use_toasts;

/// Navigation entries shown in the side menu, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Dashboard", paths::DASHBOARD),
    ("Fund wallet", paths::PAYMENT),
    ("Send money", paths::SEND_MONEY_1),
    ("Buy data", paths::BUY_DATA_1),
    ("Settings", paths::SETTINGS_MENU),
];

/// Header, navigation, and a slot for the matched nested page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header/>
            <div class="layout__body">
                <nav class="layout__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a class="layout__nav-link" href=*href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}

/// Top bar with the user's name and a sign-out action.
#[component]
pub fn Header() -> impl IntoView {
    let app = use_app_state();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let greeting = move || {
        app.session
            .with(|s| s.display_name())
            .map_or_else(|| "Welcome".to_owned(), |name| format!("Hi, {name}"))
    };

    let on_sign_out = move |_| {
        app.sign_out();
        toasts.success("Signed out");
        navigate(paths::LOGIN, NavigateOptions::default());
    };

    view! {
        <header class="header">
            <a class="header__brand" href=paths::DASHBOARD>
                "Pay Buddy"
            </a>
            <span class="header__spacer"></span>
            <span class="header__greeting">{greeting}</span>
            <button class="btn header__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
