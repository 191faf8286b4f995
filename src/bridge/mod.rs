//! Bridge Module - Native Messaging Host
//!
//! The browser extension launches this process and forwards browser
//! events to it over stdin. Browser API calls go back over stdout.
//!
//! - `codec` - length-prefixed framing
//! - `protocol` - message types
//! - `native_host` - [`BrowserHost`](crate::host::BrowserHost) over the channel

pub mod codec;
pub mod native_host;
pub mod protocol;


pub use native_host::NativeHost;
pub use protocol::{HostCall, Incoming, OutgoingCall};

use std::sync::Arc;

use tokio::io::AsyncRead;

use crate::classifier::Classifier;
use crate::error::BridgeResult;
use crate::notifier::Notifier;

/// Dispatch loop between the browser and the notifier
pub struct Bridge<C> {
    notifier: Arc<Notifier<NativeHost, C>>,
    host: NativeHost,
    max_incoming_bytes: usize,
}

impl<C: Classifier + 'static> Bridge<C> {
    pub fn new(notifier: Arc<Notifier<NativeHost, C>>, max_incoming_bytes: usize) -> Self {
        let host = notifier.host().clone();
        Self { notifier, host, max_incoming_bytes }
    }

    /// Read browser messages until the browser closes the channel.
    ///
    /// Malformed messages are skipped; only a broken channel is an error.
    pub async fn run<R>(&self, mut reader: R) -> BridgeResult<()>
    where
        R: AsyncRead + Unpin,
    {
        let result = loop {
            let frame = match codec::read_message(&mut reader, self.max_incoming_bytes).await {
                Ok(Some(frame)) => frame,
                Ok(None) => break Ok(()),
                Err(e) => break Err(e),
            };

            match serde_json::from_slice::<Incoming>(&frame) {
                Ok(message) => self.dispatch(message),
                Err(e) => log::warn!("Ignoring malformed browser message: {}", e),
            }
        };

        self.host.disconnect();
        result
    }

    fn dispatch(&self, message: Incoming) {
        match message {
            Incoming::TabActivated { tab_id } => {
                let notifier = self.notifier.clone();
                tokio::spawn(async move {
                    let outcome = notifier.on_tab_activated(tab_id).await;
                    log::debug!("Activation of tab {} finished: {:?}", tab_id, outcome);
                });
            }
            Incoming::ButtonClicked { notification_id, button_index } => {
                let notifier = self.notifier.clone();
                tokio::spawn(async move {
                    let outcome = notifier.on_button_clicked(&notification_id, button_index).await;
                    log::debug!("Click {} on {}: {:?}", button_index, notification_id, outcome);
                });
            }
            Incoming::NotificationClosed { notification_id, by_user } => {
                log::debug!("Notification {} closed (by user: {})", notification_id, by_user);
                self.notifier.on_notification_closed(&notification_id);
            }
            Incoming::Reply { id, ok, error } => {
                if !self.host.resolve_reply(id, ok, error) {
                    log::warn!("Reply for unknown call {}", id);
                }
            }
        }
    }
}
