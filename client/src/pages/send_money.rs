//! Three-step send-money wizard.
//!
//! DESIGN
//! ======
//! Each step is its own route; entered values live in the shared
//! `TransferDraft` so back/forward navigation keeps them. A visitor who
//! deep-links past a step with missing input is sent back to that step once,
//! on entry.

#[cfg(test)]
#[path = "send_money_test.rs"]
mod send_money_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::app::use_app_state;
use crate::state::toast::use_toasts;
use crate::state::transfer::TransferDraft;
use crate::state::wallet::{format_naira, naira_input};
use crate::util::amount::parse_naira;

/// Where to send a visitor entering `step` with `draft`, if not allowed in.
pub(crate) fn redirect_target(draft: &TransferDraft, step: u8) -> Option<&'static str> {
    if draft.can_enter(step) {
        None
    } else {
        Some(paths::send_money_step(draft.next_step()))
    }
}

fn install_step_guard(step: u8) {
    let app = use_app_state();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = app.transfer.with_untracked(|d| redirect_target(d, step)) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

#[component]
pub fn SendMoneyPartOnePage() -> impl IntoView {
    let app = use_app_state();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (initial_bank, initial_account) =
        app.transfer.with_untracked(|d| (d.bank_code.clone(), d.account_number.clone()));
    let bank_code = RwSignal::new(initial_bank);
    let account_number = RwSignal::new(initial_account);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        app.transfer.update(|d| d.set_recipient(&bank_code.get(), &account_number.get()));
        if app.transfer.with(TransferDraft::has_recipient) {
            navigate(paths::SEND_MONEY_2, NavigateOptions::default());
        } else {
            toasts.error("Enter the recipient's bank and account number.");
        }
    };

    view! {
        <div class="send-money-page send-money-page--step-1">
            <h1>"Send money"</h1>
            <p class="send-money-page__step">"Step 1 of 3: recipient"</p>
            <form class="send-money-page__form" on:submit=on_submit>
                <label class="send-money-page__label">
                    "Bank code"
                    <input
                        class="send-money-page__input"
                        type="text"
                        prop:value=move || bank_code.get()
                        on:input=move |ev| bank_code.set(event_target_value(&ev))
                    />
                </label>
                <label class="send-money-page__label">
                    "Account number"
                    <input
                        class="send-money-page__input"
                        type="text"
                        inputmode="numeric"
                        prop:value=move || account_number.get()
                        on:input=move |ev| account_number.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Continue"
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn SendMoneyPartTwoPage() -> impl IntoView {
    install_step_guard(2);

    let app = use_app_state();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (initial_amount, initial_narration) = app.transfer.with_untracked(|d| {
        (d.amount_kobo.map(naira_input).unwrap_or_default(), d.narration.clone())
    });
    let amount = RwSignal::new(initial_amount);
    let narration = RwSignal::new(initial_narration);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(kobo) = parse_naira(&amount.get()).filter(|k| *k > 0) else {
            toasts.error("Enter a valid amount.");
            return;
        };
        app.transfer.update(|d| {
            d.amount_kobo = Some(kobo);
            d.narration = narration.get().trim().to_owned();
        });
        navigate(paths::SEND_MONEY_3, NavigateOptions::default());
    };

    view! {
        <div class="send-money-page send-money-page--step-2">
            <h1>"Send money"</h1>
            <p class="send-money-page__step">"Step 2 of 3: amount"</p>
            <form class="send-money-page__form" on:submit=on_submit>
                <label class="send-money-page__label">
                    "Amount (₦)"
                    <input
                        class="send-money-page__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="send-money-page__label">
                    "Narration"
                    <input
                        class="send-money-page__input"
                        type="text"
                        prop:value=move || narration.get()
                        on:input=move |ev| narration.set(event_target_value(&ev))
                    />
                </label>
                <div class="send-money-page__actions">
                    <a class="btn" href=paths::SEND_MONEY_1>
                        "Back"
                    </a>
                    <button class="btn btn--primary" type="submit">
                        "Continue"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn SendMoneyPartThreePage() -> impl IntoView {
    install_step_guard(3);

    let app = use_app_state();
    let navigate = use_navigate();

    let recipient = move || app.transfer.with(|d| format!("{} · {}", d.account_number, d.bank_code));
    let amount = move || app.transfer.with(|d| d.amount_kobo.map(format_naira).unwrap_or_default());
    let narration = move || app.transfer.with(|d| d.narration.clone());
    let pin_missing = move || !app.wallet.with(|w| w.pin_set);

    let on_cancel = move |_| {
        navigate(paths::DASHBOARD, NavigateOptions::default());
        app.transfer.update(TransferDraft::reset);
    };

    view! {
        <div class="send-money-page send-money-page--step-3">
            <h1>"Send money"</h1>
            <p class="send-money-page__step">"Step 3 of 3: review"</p>
            <dl class="send-money-page__summary">
                <dt>"Recipient"</dt>
                <dd>{recipient}</dd>
                <dt>"Amount"</dt>
                <dd>{amount}</dd>
                <dt>"Narration"</dt>
                <dd>{narration}</dd>
            </dl>
            <Show when=pin_missing>
                <p class="send-money-page__notice">
                    "A transaction PIN is required to send money. "
                    <a href=paths::CREATE_TRANSACTION_PIN>"Create one"</a>
                </p>
            </Show>
            <div class="send-money-page__actions">
                <a class="btn" href=paths::SEND_MONEY_2>
                    "Back"
                </a>
                <button class="btn" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
