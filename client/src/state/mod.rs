//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `wallet`, wizard drafts, toasts) so
//! components depend on small focused models. The signals live in
//! [`app::AppState`] and [`toast::Toasts`], both provided once at the root.

pub mod app;
pub mod data_purchase;
pub mod session;
pub mod toast;
pub mod transfer;
pub mod wallet;
