//! The Pay Buddy route table.
//!
//! Public screens sit at the top level; everything behind sign-in nests under
//! the `pay-buddy` layout so it shares the header and navigation chrome.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::{Page, RouteDef, RouteTable};

/// Pages rendered inside the `pay-buddy` layout.
const PAY_BUDDY_CHILDREN: &[RouteDef] = &[
    RouteDef::leaf("dashboard", Page::Dashboard),
    RouteDef::leaf("payment", Page::Payment),
    RouteDef::leaf("create-transaction-pin", Page::TransactionPin),
    RouteDef::leaf("settings-menu", Page::SettingsMenu),
    RouteDef::leaf("send-money-1", Page::SendMoneyPartOne),
    RouteDef::leaf("send-money-2", Page::SendMoneyPartTwo),
    RouteDef::leaf("send-money-3", Page::SendMoneyPartThree),
    RouteDef::leaf("buy-data-1", Page::BuyDataPartOne),
];

/// Top-level routes in declaration order.
pub const APP_ROUTES: &[RouteDef] = &[
    RouteDef::leaf("/", Page::Home),
    RouteDef::leaf("/reset-password/:token", Page::PasswordResetForm),
    RouteDef::leaf("/reset", Page::PasswordReset),
    RouteDef::leaf("/login", Page::Login),
    RouteDef::leaf("/register", Page::Register),
    RouteDef::leaf("/welcome", Page::Welcome),
    RouteDef::leaf("verifyPayment/:reference", Page::ConfirmFund),
    RouteDef::parent("pay-buddy", Page::Layout, PAY_BUDDY_CHILDREN),
];

/// The application's route table.
#[must_use]
pub const fn app_routes() -> RouteTable {
    RouteTable::new(APP_ROUTES)
}
