//! Phish Guard - Phishing Warnings for the Active Tab
//!
//! Runs as a browser native messaging host. Whenever the user switches
//! tabs, the tab's URL is sent to a local classification service
//! (`POST /predict`); a phishing verdict raises a notification offering
//! "Go Back" or "Continue".
//!
//! # Architecture
//!
//! ```text
//!  Browser extension            phish-guard                 Classifier
//! ┌──────────────────┐  stdin  ┌──────────┐   ┌──────────┐  HTTP  ┌──────────┐
//! │ tabs.onActivated │ ──────> │  Bridge  │ ─>│ Notifier │ ─────> │ /predict │
//! │ notifications.*  │ <────── │NativeHost│ <─│          │ <───── │          │
//! └──────────────────┘  stdout └──────────┘   └──────────┘        └──────────┘
//! ```

pub mod bridge;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod notifier;

pub use bridge::{Bridge, NativeHost};
pub use classifier::{Classifier, HttpClassifier, Verdict};
pub use config::GuardConfig;
pub use error::{BridgeError, ClassifyError, HostError};
pub use host::BrowserHost;
pub use notifier::{ActivationOutcome, ClickOutcome, Notifier};
