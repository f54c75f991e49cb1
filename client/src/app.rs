//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! `App` creates the two app-wide providers (state and toasts) exactly once,
//! above the router, so they survive every navigation. The Leptos router is
//! used only to track the location: every path lands in `RouteOutlet`, which
//! resolves it against the route table and mounts the matched page chain.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::layout::Layout;
use crate::components::toaster::Toaster;
use crate::pages::{
    auth::{LoginPage, PasswordResetFormPage, PasswordResetPage, RegisterPage},
    buy_data::BuyDataPartOnePage,
    confirm_fund::ConfirmFundPage,
    dashboard::DashboardPage,
    home::{HomePage, WelcomePage},
    not_found::NotFoundPage,
    payment::PaymentPage,
    send_money::{SendMoneyPartOnePage, SendMoneyPartThreePage, SendMoneyPartTwoPage},
    settings::SettingsMenuPage,
    transaction_pin::TransactionPinPage,
};
use crate::routing::{Page, Params, RouteMatch, app_routes};
use crate::state::app::provide_app_state;
use crate::state::toast::provide_toasts;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state and toast contexts, mounts the toast host, and
/// hands every location to the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = provide_app_state();
    provide_toasts();
    app.persist_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/pay-buddy.css"/>
        <Title formatter=|text: String| format!("{text} | Pay Buddy")/>

        <div class="app">
            <Toaster/>
            <Router>
                <Routes fallback=|| view! { <RouteOutlet/> }>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=WildcardSegment("any") view=RouteOutlet/>
                </Routes>
            </Router>
        </div>
    }
}

/// Resolve the current location against the route table and render it.
///
/// The frame (the enclosing layout chain) and the nested page are tracked
/// separately, so moving between siblings under one layout re-renders only
/// the slot and keeps the layout mounted.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    let resolved = Memo::new(move |_| location.pathname.with(|path| app_routes().resolve(path)));
    // `None` means nothing in the table matched.
    let frame = Memo::new(move |_| resolved.with(|m| m.as_ref().map(RouteMatch::frame)));
    let nested = Memo::new(move |_| {
        resolved.with(|m| m.as_ref().and_then(|m| m.nested().map(|page| (page, m.params.clone()))))
    });
    let title = Memo::new(move |_| resolved.with(|m| m.as_ref().map_or("Not found", |m| m.leaf().title())));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let path = location.pathname.get();
        match resolved.get() {
            Some(m) => log::debug!("route {path} -> {:?} {:?}", m.chain(), m.params),
            None => log::debug!("route {path} -> not found"),
        }
    });

    view! {
        <Title text=move || title.get()/>
        {move || match frame.get() {
            Some(frame) => render_frame(&frame, nested),
            None => view! { <NotFoundPage/> }.into_any(),
        }}
    }
}

/// Wrap the reactive nested page in each frame page, from the inside out.
fn render_frame(frame: &[Page], nested: Memo<Option<(Page, Params)>>) -> AnyView {
    let mut view = (move || nested.get().map(|(page, params)| page_view(page, &params, None))).into_any();
    for page in frame.iter().rev() {
        view = page_view(*page, &Params::default(), Some(view));
    }
    view
}

/// The component for `page`. `outlet` is the nested page, and only the
/// layout renders one.
fn page_view(page: Page, params: &Params, outlet: Option<AnyView>) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::PasswordResetForm => {
            let token = params.get("token").unwrap_or_default().to_owned();
            view! { <PasswordResetFormPage token/> }.into_any()
        }
        Page::PasswordReset => view! { <PasswordResetPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::Welcome => view! { <WelcomePage/> }.into_any(),
        Page::ConfirmFund => {
            let reference = params.get("reference").unwrap_or_default().to_owned();
            view! { <ConfirmFundPage reference/> }.into_any()
        }
        Page::Layout => view! { <Layout>{outlet}</Layout> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Payment => view! { <PaymentPage/> }.into_any(),
        Page::TransactionPin => view! { <TransactionPinPage/> }.into_any(),
        Page::SettingsMenu => view! { <SettingsMenuPage/> }.into_any(),
        Page::SendMoneyPartOne => view! { <SendMoneyPartOnePage/> }.into_any(),
        Page::SendMoneyPartTwo => view! { <SendMoneyPartTwoPage/> }.into_any(),
        Page::SendMoneyPartThree => view! { <SendMoneyPartThreePage/> }.into_any(),
        Page::BuyDataPartOne => view! { <BuyDataPartOnePage/> }.into_any(),
    }
}
