use super::*;
use crate::routing::Page;

fn leaf_of(path: &str) -> Option<Page> {
    app_routes().resolve(path).map(|m| m.leaf())
}

// =============================================================
// Table shape
// =============================================================

#[test]
fn app_routes_validate() {
    assert_eq!(app_routes().validate(), Ok(()));
}

#[test]
fn every_entry_resolves_to_its_own_page() {
    for (path, page) in app_routes().entries() {
        let concrete = path.replace(":token", "t0k3n").replace(":reference", "ref-1");
        assert_eq!(leaf_of(&concrete), Some(page), "path {path}");
    }
}

#[test]
fn entries_cover_the_public_and_nested_screens() {
    let entries = app_routes().entries();
    assert_eq!(entries.len(), 16);
    assert_eq!(entries[0], ("/".to_owned(), Page::Home));
    assert_eq!(entries[6], ("/verifyPayment/:reference".to_owned(), Page::ConfirmFund));
    assert_eq!(entries[7], ("/pay-buddy".to_owned(), Page::Layout));
}

// =============================================================
// Top-level screens
// =============================================================

#[test]
fn top_level_paths_render_their_page() {
    let cases = [
        ("/", Page::Home),
        ("/reset", Page::PasswordReset),
        ("/login", Page::Login),
        ("/register", Page::Register),
        ("/welcome", Page::Welcome),
    ];
    for (path, page) in cases {
        let m = app_routes().resolve(path).unwrap();
        assert_eq!(m.leaf(), page, "path {path}");
        assert!(m.parents.is_empty(), "path {path} should not be nested");
    }
}

#[test]
fn reset_password_extracts_token() {
    let m = app_routes().resolve("/reset-password/abc123").unwrap();
    assert_eq!(m.leaf(), Page::PasswordResetForm);
    assert_eq!(m.param("token"), Some("abc123"));
}

#[test]
fn verify_payment_extracts_reference_with_or_without_leading_slash() {
    for path in ["verifyPayment/xyz", "/verifyPayment/xyz"] {
        let m = app_routes().resolve(path).unwrap();
        assert_eq!(m.leaf(), Page::ConfirmFund);
        assert_eq!(m.param("reference"), Some("xyz"));
    }
}

#[test]
fn reset_password_requires_token() {
    assert_eq!(leaf_of("/reset-password"), None);
    assert_eq!(leaf_of("/reset-password/"), None);
}

// =============================================================
// pay-buddy layout
// =============================================================

#[test]
fn nested_paths_render_inside_layout() {
    let cases = [
        ("pay-buddy/dashboard", Page::Dashboard),
        ("pay-buddy/payment", Page::Payment),
        ("pay-buddy/create-transaction-pin", Page::TransactionPin),
        ("pay-buddy/settings-menu", Page::SettingsMenu),
        ("pay-buddy/send-money-1", Page::SendMoneyPartOne),
        ("pay-buddy/send-money-2", Page::SendMoneyPartTwo),
        ("pay-buddy/send-money-3", Page::SendMoneyPartThree),
        ("pay-buddy/buy-data-1", Page::BuyDataPartOne),
    ];
    for (path, page) in cases {
        let m = app_routes().resolve(path).unwrap();
        assert_eq!(m.chain(), vec![Page::Layout, page], "path {path}");
    }
}

#[test]
fn pay_buddy_alone_renders_layout_without_child() {
    let m = app_routes().resolve("/pay-buddy").unwrap();
    assert_eq!(m.chain(), vec![Page::Layout]);
    assert_eq!(m.layout(), None);
}

#[test]
fn nested_pages_are_not_reachable_at_top_level() {
    assert_eq!(leaf_of("/dashboard"), None);
    assert_eq!(leaf_of("/send-money-1"), None);
}

// =============================================================
// Frame and nested page
// =============================================================

#[test]
fn sibling_nested_pages_share_the_layout_frame() {
    let dashboard = app_routes().resolve("pay-buddy/dashboard").unwrap();
    let payment = app_routes().resolve("pay-buddy/payment").unwrap();
    assert_eq!(dashboard.frame(), vec![Page::Layout]);
    assert_eq!(dashboard.frame(), payment.frame());
    assert_eq!(dashboard.nested(), Some(Page::Dashboard));
    assert_eq!(payment.nested(), Some(Page::Payment));
}

#[test]
fn layout_alone_shares_the_frame_with_an_empty_slot() {
    let alone = app_routes().resolve("pay-buddy").unwrap();
    let nested = app_routes().resolve("pay-buddy/settings-menu").unwrap();
    assert_eq!(alone.frame(), nested.frame());
    assert_eq!(alone.nested(), None);
}

#[test]
fn top_level_pages_have_an_empty_frame() {
    let m = app_routes().resolve("/login").unwrap();
    assert!(m.frame().is_empty());
    assert_eq!(m.nested(), Some(Page::Login));
}

// =============================================================
// Unmatched paths
// =============================================================

#[test]
fn unknown_paths_render_nothing_from_the_table() {
    for path in ["/nope", "/pay-buddy/unknown", "/login/extra", "/pay-buddy/send-money-4", "/verifyPayment"] {
        assert_eq!(leaf_of(path), None, "path {path}");
    }
}
