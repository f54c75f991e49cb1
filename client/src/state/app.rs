//! Application-wide state handle.
//!
//! DESIGN
//! ======
//! One `AppState` is created by `App` before the router mounts and is handed
//! to descendants through a typed Leptos context. It lives as long as the
//! root owner. Each domain keeps its own signal so a page that only reads
//! the wallet does not re-render when a wizard draft changes.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use super::data_purchase::DataPurchaseDraft;
use super::session::SessionState;
use super::transfer::TransferDraft;
use super::wallet::WalletState;
use crate::util::persistence::{load_json, save_json};

/// `localStorage` key for the persisted session.
pub const SESSION_STORAGE_KEY: &str = "pay_buddy_session";

#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub session: RwSignal<SessionState>,
    pub wallet: RwSignal<WalletState>,
    pub transfer: RwSignal<TransferDraft>,
    pub data_purchase: RwSignal<DataPurchaseDraft>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            wallet: RwSignal::new(WalletState::default()),
            transfer: RwSignal::new(TransferDraft::default()),
            data_purchase: RwSignal::new(DataPurchaseDraft::default()),
        }
    }

    /// Forget the user and everything entered on their behalf.
    pub fn sign_out(&self) {
        self.session.update(SessionState::clear);
        self.wallet.set(WalletState::default());
        self.transfer.update(TransferDraft::reset);
        self.data_purchase.update(DataPurchaseDraft::reset);
    }

    /// Restore the session from browser storage once, then write it back on
    /// every change. Effects only run in the browser, so SSR output is
    /// unaffected and hydration sees the same initial markup.
    pub fn persist_session(&self) {
        let session = self.session;
        Effect::new(move || {
            if let Some(saved) = load_json::<SessionState>(SESSION_STORAGE_KEY) {
                session.set(saved);
            }
        });
        Effect::watch(
            move || session.get(),
            |current, _, _| save_json(SESSION_STORAGE_KEY, current),
            false,
        );
    }
}

/// Create the app-wide state and provide it to all descendants.
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// The state handle provided at the app root.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
