use leptos::prelude::*;

/// Create or change the four-digit transaction PIN.
#[component]
pub fn TransactionPinPage() -> impl IntoView {
    view! {
        <div class="transaction-pin-page">
            <h1>"Transaction PIN"</h1>
            <p>"Your PIN authorizes transfers and purchases."</p>
            <form class="transaction-pin-page__form">
                <label class="transaction-pin-page__label">
                    "PIN"
                    <input class="transaction-pin-page__input" type="password" inputmode="numeric" maxlength="4" name="pin"/>
                </label>
                <label class="transaction-pin-page__label">
                    "Confirm PIN"
                    <input
                        class="transaction-pin-page__input"
                        type="password"
                        inputmode="numeric"
                        maxlength="4"
                        name="confirmPin"
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Save PIN"
                </button>
            </form>
        </div>
    }
}
