//! Build-time client configuration.
//!
//! The WASM bundle cannot read the host's environment at runtime, so the API
//! base is baked in at compile time through `TIX_API_BASE_URL`. The default
//! targets the same origin, which the host binary can forward upstream.

pub const DEFAULT_API_BASE_URL: &str = "/api/v1";

/// Minimum time the splash screen stays up after mount.
pub const SPLASH_MIN_DISPLAY_MS: u32 = 1_000;

/// Seconds the magic-link button stays disabled after a rate-limit response.
pub const LOGIN_COOLDOWN_SECS: u32 = 60;

/// How long a toast stays on screen.
pub const TOAST_DISPLAY_MS: u32 = 5_000;

pub fn api_base_url() -> String {
    option_env!("TIX_API_BASE_URL")
        .filter(|raw| !raw.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
