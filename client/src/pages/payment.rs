//! Fund-wallet page.
//!
//! The provider checkout and the return to `verifyPayment/:reference` are
//! handled outside the shell; this page collects the amount.

use leptos::prelude::*;

use crate::state::app::use_app_state;

#[component]
pub fn PaymentPage() -> impl IntoView {
    let app = use_app_state();
    let balance = move || app.wallet.with(|w| w.formatted_balance());

    view! {
        <div class="payment-page">
            <h1>"Fund wallet"</h1>
            <p>"Current balance: " {balance}</p>
            <form class="payment-page__form">
                <label class="payment-page__label">
                    "Amount (₦)" <input class="payment-page__input" type="text" inputmode="decimal" name="amount"/>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Continue to payment"
                </button>
            </form>
        </div>
    }
}
