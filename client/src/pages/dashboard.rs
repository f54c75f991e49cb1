//! Dashboard page: wallet balance and quick actions.

use leptos::prelude::*;

use crate::routing::paths;
use crate::state::app::use_app_state;

/// Quick actions shown under the balance card.
const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("Send money", paths::SEND_MONEY_1),
    ("Buy data", paths::BUY_DATA_1),
    ("Fund wallet", paths::PAYMENT),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app_state();
    let balance = move || app.wallet.with(|w| w.formatted_balance());
    let pin_missing = move || !app.wallet.with(|w| w.pin_set);

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__balance">
                <h2>"Wallet balance"</h2>
                <p class="dashboard-page__amount">{balance}</p>
            </section>

            <Show when=pin_missing>
                <p class="dashboard-page__notice">
                    "You have not set a transaction PIN yet. "
                    <a href=paths::CREATE_TRANSACTION_PIN>"Create one"</a>
                </p>
            </Show>

            <div class="dashboard-page__actions">
                {QUICK_ACTIONS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="dashboard-page__action" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
