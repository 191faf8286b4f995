//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Environment overrides are resolved in [`crate::config`].

/// Default classification endpoint (the local prediction service)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Default timeout for one classification request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default timeout for one call into the browser (seconds)
pub const DEFAULT_HOST_CALL_TIMEOUT_SECS: u64 = 5;

/// Browsers refuse native messages larger than 1 MiB from the host
pub const MAX_OUTGOING_MESSAGE_BYTES: usize = 1024 * 1024;

/// Default cap for a single message read from the browser
pub const DEFAULT_MAX_INCOMING_BYTES: usize = 4 * 1024 * 1024;

/// Icon bundled with the extension
pub const DEFAULT_ICON: &str = "icon.png";

// ============================================
// Warning notification content
// ============================================

pub const WARNING_TITLE: &str = "Warning: Phishing Site Detected!";
pub const BUTTON_GO_BACK: &str = "Go Back";
pub const BUTTON_CONTINUE: &str = "Continue";

/// Highest notification priority the browser accepts
pub const WARNING_PRIORITY: i32 = 2;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Phish Guard";

/// Body text of the phishing warning for `url`
pub fn warning_message(url: &str) -> String {
    format!("The website {} is classified as phishing.", url)
}
