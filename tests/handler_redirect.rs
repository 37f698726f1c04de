mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_www_host_keeps_path_and_query() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let response = server
        .get("/sale")
        .add_query_param("ref", "x")
        .add_header("Host", "www.example.com")
        .await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "https://shop.example/sale?ref=x"
    );
}

#[tokio::test]
async fn test_redirect_unmatched_host_uses_default() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let response = server.get("/").add_header("Host", "other.test").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://fallback.example/");
}

#[tokio::test]
async fn test_redirect_bare_and_www_host_match() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let bare = server.get("/p").add_header("Host", "example.com").await;
    let www = server.get("/p").add_header("Host", "www.example.com").await;

    assert_eq!(bare.header("location"), www.header("location"));
    assert_eq!(bare.header("location"), "https://shop.example/p");
}

#[tokio::test]
async fn test_redirect_host_with_port_and_uppercase() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let response = server
        .get("/")
        .add_header("Host", "WWW.Example.com:8080")
        .await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://shop.example/");
}

#[tokio::test]
async fn test_redirect_missing_host_uses_default() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let response = server.get("/landing").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "https://fallback.example/landing"
    );
}

#[tokio::test]
async fn test_redirect_target_with_path_is_concatenated() {
    let server = common::create_test_server(
        r#"{"redirects": {}, "defaultRedirect": "https://shop.example/landing?src=ad"}"#,
    );

    let response = server
        .get("/p")
        .add_query_param("q", "1")
        .add_header("Host", "park.test")
        .await;

    assert_eq!(
        response.header("location"),
        "https://shop.example/landing?src=ad/p?q=1"
    );
}

#[tokio::test]
async fn test_redirect_response_has_no_body_headers() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let response = server.get("/").add_header("Host", "example.com").await;

    assert!(response.maybe_header("cache-control").is_none());
    assert!(response.maybe_header("x-robots-tag").is_none());
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_rich_config_in_redirect_mode() {
    let server = common::create_test_server(
        r#"{
            "mode": "redirect",
            "defaults": { "targetUrl": "https://buy.example", "showCountdown": true },
            "domains": { "example.com": { "targetUrl": "https://shop.example" } }
        }"#,
    );

    let matched = server
        .get("/sale")
        .add_header("Host", "www.example.com")
        .await;
    matched.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(matched.header("location"), "https://shop.example/sale");

    let fallback = server.get("/sale").add_header("Host", "park.test").await;
    assert_eq!(fallback.header("location"), "https://buy.example/sale");
}

#[tokio::test]
async fn test_redirect_is_idempotent() {
    let server = common::create_test_server(common::SIMPLE_CONFIG);

    let first = server
        .get("/a/b")
        .add_query_param("x", "1")
        .add_header("Host", "example.com")
        .await;
    let second = server
        .get("/a/b")
        .add_query_param("x", "1")
        .add_header("Host", "example.com")
        .await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.header("location"), second.header("location"));
    assert_eq!(first.as_bytes(), second.as_bytes());
}
