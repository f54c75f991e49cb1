//! Canonical hrefs for in-app navigation.
//!
//! Links and redirects go through these instead of string literals so a
//! renamed route only changes in one place.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped when a value is placed in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const HOME: &str = "/";
pub const RESET: &str = "/reset";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const WELCOME: &str = "/welcome";

pub const PAY_BUDDY: &str = "/pay-buddy";
pub const DASHBOARD: &str = "/pay-buddy/dashboard";
pub const PAYMENT: &str = "/pay-buddy/payment";
pub const CREATE_TRANSACTION_PIN: &str = "/pay-buddy/create-transaction-pin";
pub const SETTINGS_MENU: &str = "/pay-buddy/settings-menu";
pub const SEND_MONEY_1: &str = "/pay-buddy/send-money-1";
pub const SEND_MONEY_2: &str = "/pay-buddy/send-money-2";
pub const SEND_MONEY_3: &str = "/pay-buddy/send-money-3";
pub const BUY_DATA_1: &str = "/pay-buddy/buy-data-1";

/// Link target for the password-reset form carrying `token`.
#[must_use]
pub fn reset_password(token: &str) -> String {
    format!("/reset-password/{}", utf8_percent_encode(token, SEGMENT))
}

/// Link target for the payment confirmation screen of `reference`.
#[must_use]
pub fn verify_payment(reference: &str) -> String {
    format!("/verifyPayment/{}", utf8_percent_encode(reference, SEGMENT))
}

/// Send-money wizard step `step` (1-based), clamped to the existing steps.
#[must_use]
pub fn send_money_step(step: u8) -> &'static str {
    match step {
        0 | 1 => SEND_MONEY_1,
        2 => SEND_MONEY_2,
        _ => SEND_MONEY_3,
    }
}
