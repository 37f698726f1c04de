//! Catch-all handler for parked domains.

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::entities::ResponseMode;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_domain::extract_domain;
use crate::web::handlers::parked_page;

/// Answers any request according to the rule for its host.
///
/// # Endpoint
///
/// Router fallback: every method and every path.
///
/// # Request Flow
///
/// 1. Extract the host from the `Host` header (or URI authority)
/// 2. Strip a leading `www.` and merge the domain overrides over the defaults
/// 3. Redirect mode: return 301 to `target + path [+ "?" + query]`
/// 4. Interstitial mode: return the parked page (200)
///
/// Unknown or missing hosts fall through to the defaults.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the concatenated target contains
/// bytes that can't appear in a `Location` header.
pub async fn redirect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let host = extract_domain(&headers, &uri);
    let resolution = state.resolution_service.resolve(&host);

    match resolution.mode {
        ResponseMode::Redirect => {
            let location = resolution.location(uri.path(), uri.query());
            debug!(host = %host, domain = %resolution.domain, %location, "Redirecting");
            permanent_redirect(&location)
        }
        ResponseMode::Interstitial => {
            debug!(
                host = %host,
                domain = %resolution.domain,
                target = %resolution.settings.target_url,
                delay = resolution.settings.delay_seconds,
                "Serving parked page"
            );
            Ok(parked_page(&resolution))
        }
    }
}

/// Builds a bare `301 Moved Permanently` with only a `Location` header.
///
/// `axum::response::Redirect::permanent` answers 308, so the response is
/// assembled by hand.
fn permanent_redirect(location: &str) -> Result<Response, AppError> {
    let value = HeaderValue::from_bytes(location.as_bytes()).map_err(|e| {
        error!("Unrepresentable redirect target {:?}: {}", location, e);
        AppError::internal(
            "Configured target cannot be used as a Location header",
            json!({}),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response())
}
