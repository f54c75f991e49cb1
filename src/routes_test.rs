use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("pay-buddy")
        .site_root("target/site-test-missing")
        .build()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes(&options())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_returns_not_found() {
    let response = base_routes(&options())
        .oneshot(Request::builder().uri("/pkg/pay-buddy.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_outside_app_returns_not_found() {
    let response = base_routes(&options())
        .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// SSR rendering through the route table
// =============================================================================

/// Root class of every routed page, plus the not-found screen.
const PAGE_MARKERS: &[&str] = &[
    "home-page",
    "welcome-page",
    "auth-page--login",
    "auth-page--register",
    "auth-page--request-reset",
    "auth-page--new-password",
    "confirm-fund-page",
    "dashboard-page",
    "payment-page",
    "transaction-pin-page",
    "settings-page",
    "send-money-page--step-1",
    "send-money-page--step-2",
    "send-money-page--step-3",
    "buy-data-page",
    "not-found-page",
];

async fn render(uri: &str) -> String {
    let response = app(options())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_only_marker(body: &str, uri: &str, expected: &str) {
    assert!(body.contains(expected), "{uri} should render {expected}");
    for other in PAGE_MARKERS.iter().filter(|m| **m != expected) {
        assert!(!body.contains(other), "{uri} also rendered {other}");
    }
}

#[tokio::test]
async fn top_level_paths_render_their_page_without_layout() {
    let cases = [
        ("/", "home-page"),
        ("/reset-password/abc123", "auth-page--new-password"),
        ("/reset", "auth-page--request-reset"),
        ("/login", "auth-page--login"),
        ("/register", "auth-page--register"),
        ("/welcome", "welcome-page"),
        ("/verifyPayment/T123", "confirm-fund-page"),
    ];
    for (uri, marker) in cases {
        let body = render(uri).await;
        assert_only_marker(&body, uri, marker);
        assert!(!body.contains("layout__content"), "{uri} rendered the layout");
    }
}

#[tokio::test]
async fn nested_paths_render_their_page_inside_layout() {
    let cases = [
        ("/pay-buddy/dashboard", "dashboard-page"),
        ("/pay-buddy/payment", "payment-page"),
        ("/pay-buddy/create-transaction-pin", "transaction-pin-page"),
        ("/pay-buddy/settings-menu", "settings-page"),
        ("/pay-buddy/send-money-1", "send-money-page--step-1"),
        ("/pay-buddy/send-money-2", "send-money-page--step-2"),
        ("/pay-buddy/send-money-3", "send-money-page--step-3"),
        ("/pay-buddy/buy-data-1", "buy-data-page"),
    ];
    for (uri, marker) in cases {
        let body = render(uri).await;
        assert_only_marker(&body, uri, marker);
        let slot = body.find("layout__content").unwrap_or_else(|| panic!("{uri} has no layout slot"));
        let page = body.find(marker).unwrap_or_default();
        assert!(page > slot, "{uri} rendered {marker} outside the layout slot");
    }
}

#[tokio::test]
async fn layout_alone_renders_an_empty_slot() {
    let body = render("/pay-buddy").await;
    assert!(body.contains("layout__content"));
    for marker in PAGE_MARKERS {
        assert!(!body.contains(marker), "/pay-buddy rendered {marker}");
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found() {
    for uri in ["/nope", "/pay-buddy/unknown", "/login/extra"] {
        let body = render(uri).await;
        assert_only_marker(&body, uri, "not-found-page");
    }
}

#[tokio::test]
async fn toast_host_is_mounted_once_for_every_route() {
    for uri in ["/", "/login", "/pay-buddy", "/pay-buddy/dashboard", "/nope"] {
        let body = render(uri).await;
        assert_eq!(body.matches(r#"class="toaster""#).count(), 1, "uri {uri}");
    }
}

#[tokio::test]
async fn path_params_reach_the_page_decoded() {
    let body = render("/reset-password/abc%20d").await;
    assert!(body.contains(r#"value="abc d""#));

    let body = render("/verifyPayment/T-42").await;
    assert!(body.contains("T-42"));
}
