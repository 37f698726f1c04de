#![allow(dead_code)]

use axum_test::TestServer;
use domain_park::domain::entities::RedirectTable;
use domain_park::routes::app_router;
use domain_park::state::AppState;
use std::sync::Arc;

pub const SIMPLE_CONFIG: &str = r#"{
    "redirects": { "example.com": "https://shop.example" },
    "defaultRedirect": "https://fallback.example"
}"#;

pub const INTERSTITIAL_CONFIG: &str = r#"{
    "defaults": {
        "targetUrl": "https://buy.example",
        "delaySeconds": 5,
        "message": "This domain is for sale",
        "subMessage": "Interested? Get in touch.",
        "contactEmail": "sales@buy.example",
        "showCountdown": true
    },
    "domains": {
        "quiet.test": { "showCountdown": false, "delaySeconds": 0 },
        "other.test": { "targetUrl": "https://other-buyer.example", "contactEmail": "" }
    }
}"#;

pub fn create_test_state(config: &str) -> AppState {
    let table = RedirectTable::from_json(config).unwrap();
    AppState::new(Arc::new(table))
}

pub fn create_test_server(config: &str) -> TestServer {
    TestServer::new(app_router(create_test_state(config))).unwrap()
}
