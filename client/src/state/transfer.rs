//! Send-money wizard draft.
//!
//! DESIGN
//! ======
//! The three send-money routes are separate pages, so whatever the user has
//! entered lives here between navigations. Step pages consult `next_step` to
//! send a deep-linked visitor back to the first step with missing input.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use serde::{Deserialize, Serialize};

/// Values collected across the send-money steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDraft {
    pub bank_code: String,
    pub account_number: String,
    pub amount_kobo: Option<u64>,
    pub narration: String,
}

impl TransferDraft {
    /// Recipient bank and account are both filled in.
    #[must_use]
    pub fn has_recipient(&self) -> bool {
        !self.bank_code.trim().is_empty() && !self.account_number.trim().is_empty()
    }

    #[must_use]
    pub fn has_amount(&self) -> bool {
        self.amount_kobo.is_some_and(|a| a > 0)
    }

    /// The first step (1-based) whose inputs are still missing, or 3 (review)
    /// once everything is present.
    #[must_use]
    pub fn next_step(&self) -> u8 {
        if !self.has_recipient() {
            1
        } else if !self.has_amount() {
            2
        } else {
            3
        }
    }

    /// Whether `step` may be shown given what has been entered so far.
    #[must_use]
    pub fn can_enter(&self, step: u8) -> bool {
        step <= self.next_step()
    }

    pub fn set_recipient(&mut self, bank_code: &str, account_number: &str) {
        self.bank_code = bank_code.trim().to_owned();
        self.account_number = account_number.trim().to_owned();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
