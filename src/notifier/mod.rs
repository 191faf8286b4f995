//! Notifier Module - Tab Activation Warnings
//!
//! Flow per activation:
//! Idle -> URL resolved -> request sent -> (verdict | failure) -> (warning | done)
//!
//! Activations run independently. Each one is numbered; when a newer
//! activation starts, the older one stops waiting for its verdict and
//! never raises a warning. Button clicks for all warnings go through one
//! dispatcher ([`Notifier::on_button_clicked`]) that looks the warning up
//! in the [`WarningRegistry`].

pub mod registry;


pub use registry::{WarningContext, WarningRegistry};

use tokio::sync::watch;

use crate::classifier::{Classification, Classifier, Verdict};
use crate::host::{BrowserHost, ButtonAction, NotificationId, NotificationOptions, Tab, TabId};

/// Result of handling one tab activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Tab vanished or its URL is not visible
    TabUnavailable,
    /// Service unreachable, timed out, or answered garbage
    ClassificationFailed,
    /// A newer activation started before the verdict was used
    Stale,
    Safe,
    Unknown,
    Warned(NotificationId),
    /// Phishing verdict, but the browser refused the notification
    NotificationFailed,
}

/// Result of a notification button click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    WentBack,
    Dismissed,
    /// Not our notification, or not a known button
    Ignored,
    /// The browser refused the requested action
    Failed,
}

pub struct Notifier<H, C> {
    host: H,
    classifier: C,
    icon_url: String,
    registry: WarningRegistry,
    latest_activation: watch::Sender<u64>,
}

impl<H: BrowserHost, C: Classifier> Notifier<H, C> {
    pub fn new(host: H, classifier: C, icon_url: impl Into<String>) -> Self {
        let (latest_activation, _) = watch::channel(0);

        Self {
            host,
            classifier,
            icon_url: icon_url.into(),
            registry: WarningRegistry::new(),
            latest_activation,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Number of warnings still on screen
    pub fn pending_warnings(&self) -> usize {
        self.registry.len()
    }

    pub fn warning(&self, id: &NotificationId) -> Option<WarningContext> {
        self.registry.get(id)
    }

    /// Handle the browser switching to `tab_id`. Never fails: every error
    /// is logged and ends the activation quietly.
    pub async fn on_tab_activated(&self, tab_id: TabId) -> ActivationOutcome {
        let seq = self.begin_activation();

        let url = match self.host.get_tab(tab_id).await {
            Ok(Tab { url: Some(url), .. }) => url,
            Ok(_) => {
                log::debug!("Tab {} has no visible URL, skipping", tab_id);
                return ActivationOutcome::TabUnavailable;
            }
            Err(e) => {
                log::debug!("Tab {} lookup failed: {}", tab_id, e);
                return ActivationOutcome::TabUnavailable;
            }
        };

        log::info!("Active tab URL: {}", url);

        let classification = tokio::select! {
            result = self.classifier.classify(&url) => result,
            _ = self.superseded(seq) => {
                log::debug!("Classification of {} cancelled by a newer activation", url);
                return ActivationOutcome::Stale;
            }
        };

        let classification = match classification {
            Ok(c) => c,
            Err(e) => {
                log::error!("Classification failed for {}: {}", url, e);
                return ActivationOutcome::ClassificationFailed;
            }
        };

        log::debug!("Response from classifier: {:?}", classification.response);

        if self.is_superseded(seq) {
            log::debug!("Discarding stale verdict for {}", url);
            return ActivationOutcome::Stale;
        }

        match classification.verdict {
            Verdict::Phishing => self.raise_warning(tab_id, url).await,
            Verdict::Safe => ActivationOutcome::Safe,
            Verdict::Unknown => {
                log_unknown(&url, &classification);
                ActivationOutcome::Unknown
            }
        }
    }

    /// Single dispatcher for clicks on any warning
    pub async fn on_button_clicked(&self, id: &NotificationId, button_index: i64) -> ClickOutcome {
        if self.registry.get(id).is_none() {
            log::debug!("Click on unknown notification {}, ignoring", id);
            return ClickOutcome::Ignored;
        }

        match ButtonAction::from_index(button_index) {
            Some(ButtonAction::GoBack) => match self.host.go_back().await {
                Ok(()) => ClickOutcome::WentBack,
                Err(e) => {
                    log::warn!("Go back failed: {}", e);
                    ClickOutcome::Failed
                }
            },
            Some(ButtonAction::Continue) => {
                self.registry.remove(id);
                match self.host.clear_notification(id).await {
                    Ok(_) => ClickOutcome::Dismissed,
                    Err(e) => {
                        log::warn!("Failed to clear notification {}: {}", id, e);
                        ClickOutcome::Failed
                    }
                }
            }
            None => {
                log::debug!("Button {} on notification {} has no action", button_index, id);
                ClickOutcome::Ignored
            }
        }
    }

    /// The browser closed a notification (user dismissal or timeout)
    pub fn on_notification_closed(&self, id: &NotificationId) {
        if let Some(context) = self.registry.remove(id) {
            log::debug!("Warning {} for {} closed", id, context.url);
        }
    }

    async fn raise_warning(&self, tab_id: TabId, url: String) -> ActivationOutcome {
        let options = NotificationOptions::phishing_warning(&url, &self.icon_url);

        match self.host.create_notification(options).await {
            Ok(id) => {
                log::info!("Notification created with ID: {}", id);
                log::warn!("Phishing site detected: {}", url);
                self.registry.insert(id.clone(), tab_id, url);
                ActivationOutcome::Warned(id)
            }
            Err(e) => {
                log::error!("Failed to show phishing warning for {}: {}", url, e);
                ActivationOutcome::NotificationFailed
            }
        }
    }

    fn begin_activation(&self) -> u64 {
        let mut seq = 0;
        self.latest_activation.send_modify(|latest| {
            *latest += 1;
            seq = *latest;
        });
        seq
    }

    fn is_superseded(&self, seq: u64) -> bool {
        *self.latest_activation.borrow() != seq
    }

    /// Resolves once an activation newer than `seq` has started
    async fn superseded(&self, seq: u64) {
        let mut latest = self.latest_activation.subscribe();
        // The sender lives in `self`, so `changed` only fails once we are gone
        while *latest.borrow_and_update() == seq {
            if latest.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

fn log_unknown(url: &str, classification: &Classification) {
    let response = &classification.response;
    if let Some(error) = &response.error {
        log::warn!("Classifier reported an error for {}: {}", url, error);
    } else if let Some(prediction) = &response.prediction {
        log::warn!("Unrecognised prediction {} for {}, treating as safe", prediction, url);
    } else {
        log::debug!("No prediction for {}, treating as safe", url);
    }
}
