//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome (layout, toasts) while reading/writing
//! shared state from Leptos context providers.

pub mod layout;
pub mod toaster;
