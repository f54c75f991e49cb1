//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted by the route outlet for one row of the route table.
//! Pages read and write shared state from context; anything that talks to
//! the Pay Buddy API lives outside the shell.

pub mod auth;
pub mod buy_data;
pub mod confirm_fund;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod payment;
pub mod send_money;
pub mod settings;
pub mod transaction_pin;
