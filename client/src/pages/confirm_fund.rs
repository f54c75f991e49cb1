//! Landing screen after the payment provider redirects back with a reference.

use leptos::prelude::*;

use crate::routing::paths;

#[component]
pub fn ConfirmFundPage(reference: String) -> impl IntoView {
    view! {
        <div class="confirm-fund-page">
            <h1>"Confirming payment"</h1>
            <p>
                "Payment reference: " <code class="confirm-fund-page__reference">{reference}</code>
            </p>
            <a href=paths::DASHBOARD class="btn btn--primary">
                "Back to dashboard"
            </a>
        </div>
    }
}
