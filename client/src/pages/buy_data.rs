//! Buy-data flow, step one: network, plan, and phone number.

use leptos::prelude::*;

use crate::state::app::use_app_state;
use crate::state::data_purchase::DataPurchaseDraft;

/// Networks offered in the picker as `(service id, label)`.
pub const DATA_NETWORKS: &[(&str, &str)] = &[
    ("mtn-data", "MTN"),
    ("airtel-data", "Airtel"),
    ("glo-data", "Glo"),
    ("etisalat-data", "9mobile"),
];

#[component]
pub fn BuyDataPartOnePage() -> impl IntoView {
    let app = use_app_state();
    let draft = app.data_purchase;

    let selected = move || draft.with(|d| d.service_id.clone());
    let ready = move || draft.with(DataPurchaseDraft::is_ready);

    view! {
        <div class="buy-data-page">
            <h1>"Buy data"</h1>
            <form class="buy-data-page__form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <label class="buy-data-page__label">
                    "Network"
                    <select
                        class="buy-data-page__input"
                        prop:value=selected
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.select_network(&value));
                        }
                    >
                        <option value="">"Choose a network"</option>
                        {DATA_NETWORKS
                            .iter()
                            .map(|(id, label)| view! { <option value=*id>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="buy-data-page__label">
                    "Plan code"
                    <input
                        class="buy-data-page__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.variation_code.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.variation_code = Some(value).filter(|v| !v.trim().is_empty()));
                        }
                    />
                </label>
                <label class="buy-data-page__label">
                    "Phone number"
                    <input
                        class="buy-data-page__input"
                        type="tel"
                        prop:value=move || draft.with(|d| d.phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.phone = value);
                        }
                    />
                </label>
            </form>
            <Show when=ready>
                <p class="buy-data-page__ready">
                    {move || draft.with(|d| format!("Ready to buy {} for {}", d.variation_code.clone().unwrap_or_default(), d.phone.trim()))}
                </p>
            </Show>
        </div>
    }
}
