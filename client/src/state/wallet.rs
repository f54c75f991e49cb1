#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use serde::{Deserialize, Serialize};

/// Kobo per naira.
pub const KOBO_PER_NAIRA: u64 = 100;

/// Last known wallet summary for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    /// Balance in kobo; `None` until a balance has been loaded.
    pub balance_kobo: Option<u64>,
    /// Whether a transaction PIN has been created for this wallet.
    pub pin_set: bool,
}

impl WalletState {
    /// Balance for display, or a dash placeholder while unknown.
    #[must_use]
    pub fn formatted_balance(&self) -> String {
        self.balance_kobo.map_or_else(|| "₦ --".to_owned(), format_naira)
    }
}

/// Format `kobo` as naira with thousands separators, e.g. `₦1,234.50`.
#[must_use]
pub fn format_naira(kobo: u64) -> String {
    let naira = (kobo / KOBO_PER_NAIRA).to_string();
    let fraction = kobo % KOBO_PER_NAIRA;

    let mut grouped = String::with_capacity(naira.len() + naira.len() / 3);
    for (i, ch) in naira.chars().enumerate() {
        if i > 0 && (naira.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₦{grouped}.{fraction:02}")
}

/// Plain `1234.50` form of `kobo` for prefilling an amount input. Round
/// trips through `parse_naira`.
#[must_use]
pub fn naira_input(kobo: u64) -> String {
    format!("{}.{:02}", kobo / KOBO_PER_NAIRA, kobo % KOBO_PER_NAIRA)
}
