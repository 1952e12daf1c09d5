//! Application configuration.
//!
//! Centralized configuration for the sentiment analysis frontend.
//! The only deployment setting is the API base URL; everything else is
//! a fixed constant of the client.

use once_cell::sync::Lazy;

/// Default Auth & Analysis service endpoint.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Build-time override for the service endpoint (`API_BASE_URL=... trunk build`).
const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("API_BASE_URL");

/// Resolved service endpoint, fixed for the lifetime of the page.
static API_BASE_URL: Lazy<String> = Lazy::new(|| resolve_base_url(API_BASE_URL_OVERRIDE));

/// Backend API base URL.
///
/// Resolved once on first access and immutable afterwards.
pub fn api_base_url() -> &'static str {
    API_BASE_URL.as_str()
}

/// Pick the override when it carries a value, else the default.
///
/// Trailing slashes are dropped so endpoint paths can be appended verbatim.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    let url = match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    };
    url.trim_end_matches('/').to_string()
}

/// Shown when login or registration fails without a service detail.
pub const AUTH_FALLBACK_MESSAGE: &str = "An error occurred";

/// Shown when an analysis fails without a service detail.
pub const ANALYSIS_FALLBACK_MESSAGE: &str = "Error analyzing file";

/// Shown after a successful registration.
pub const REGISTERED_NOTICE: &str = "Registration successful! You can now log in.";

/// Marker class for elements revealed on scroll.
pub const REVEAL_SELECTOR: &str = ".scroll-animate";

/// Class added once an element has been revealed.
pub const REVEALED_CLASS: &str = "animate-in";

/// Attribute holding a revealable element's position in the current scan.
pub const REVEAL_INDEX_ATTRIBUTE: &str = "data-reveal-index";

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Intersection root margin (reveal slightly before the bottom edge).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Distance from the viewport bottom at which the scroll fallback reveals.
pub const REVEAL_SCROLL_OFFSET: f64 = 100.0;

/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Accepted extension for the file picker (drops are not filtered).
pub const CSV_ACCEPT: &str = ".csv";
