//! Parked-domain interstitial page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{HeaderName, header},
    response::{IntoResponse, Response},
};

use crate::application::services::Resolution;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const NO_CACHE: &str = "no-cache, no-store, must-revalidate";
const NO_INDEX: &str = "noindex, nofollow";

/// Template for the "domain for sale" page.
///
/// Renders `templates/parked.html` with:
/// - Meta refresh to the target after `delay_seconds`
/// - Canonical link and robots hints pointing at the target
/// - Domain name, headline, sub-message and optional contact link
/// - Optional client-side countdown
/// - Skip link to the target
#[derive(Template, WebTemplate)]
#[template(path = "parked.html")]
pub struct ParkedTemplate<'a> {
    pub domain: &'a str,
    pub target_url: &'a str,
    pub delay_seconds: u64,
    pub message: &'a str,
    pub sub_message: &'a str,
    pub contact_email: &'a str,
    pub show_countdown: bool,
}

impl<'a> From<&'a Resolution> for ParkedTemplate<'a> {
    fn from(resolution: &'a Resolution) -> Self {
        let settings = &resolution.settings;

        Self {
            domain: &resolution.domain,
            target_url: &settings.target_url,
            delay_seconds: settings.delay_seconds,
            message: &settings.message,
            sub_message: &settings.sub_message,
            contact_email: &settings.contact_email,
            show_countdown: settings.show_countdown,
        }
    }
}

/// Renders the interstitial page for a resolved domain.
///
/// The page embeds the redirect target, so it is never cached, and search
/// engines are told not to index it.
pub fn parked_page(resolution: &Resolution) -> Response {
    (
        [
            (header::CONTENT_TYPE, HTML_CONTENT_TYPE),
            (header::CACHE_CONTROL, NO_CACHE),
            (HeaderName::from_static("x-robots-tag"), NO_INDEX),
        ],
        ParkedTemplate::from(resolution),
    )
        .into_response()
}
