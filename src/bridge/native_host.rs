//! Browser host reached over native messaging.
//!
//! Every [`BrowserHost`] method becomes a `call` message; the browser
//! answers with a `reply` carrying the same id, which
//! [`NativeHost::resolve_reply`] routes back to the waiting caller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::io::AsyncWrite;
use tokio::sync::oneshot;

use super::codec;
use super::protocol::{HostCall, OutgoingCall};
use crate::error::{HostError, HostResult};
use crate::host::{BrowserHost, NotificationId, NotificationOptions, Tab, TabId};

type ReplySender = oneshot::Sender<HostResult<Value>>;
type SharedWriter = tokio::sync::Mutex<Box<dyn AsyncWrite + Send + Unpin>>;

#[derive(Clone)]
pub struct NativeHost {
    inner: Arc<Inner>,
}

struct Inner {
    writer: SharedWriter,
    pending: Mutex<HashMap<u64, (String, ReplySender)>>,
    next_id: AtomicU64,
    call_timeout: Duration,
}

impl NativeHost {
    pub fn new<W>(writer: W, call_timeout: Duration) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                writer: tokio::sync::Mutex::new(Box::new(writer)),
                pending: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
                call_timeout,
            }),
        }
    }

    /// Calls still waiting for a reply
    pub fn pending_calls(&self) -> usize {
        self.inner.pending.lock().len()
    }

    /// Deliver a reply to its caller. Returns `false` for unknown ids
    /// (the caller already gave up, or the browser sent garbage).
    pub fn resolve_reply(&self, id: u64, ok: Option<Value>, error: Option<String>) -> bool {
        let Some((method, sender)) = self.inner.pending.lock().remove(&id) else {
            return false;
        };

        let result = match error {
            Some(message) => Err(HostError::Rejected { method, message }),
            None => Ok(ok.unwrap_or(Value::Null)),
        };
        // Receiver gone means the caller timed out or was cancelled
        let _ = sender.send(result);
        true
    }

    /// Fail every outstanding call; used once the browser hangs up
    pub fn disconnect(&self) {
        let drained: Vec<_> = self.inner.pending.lock().drain().collect();
        for (_, (_, sender)) in drained {
            let _ = sender.send(Err(HostError::Disconnected("browser closed the channel".to_string())));
        }
    }

    async fn call(&self, call: HostCall) -> HostResult<Value> {
        let method = call.method();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;

        let payload = serde_json::to_vec(&OutgoingCall { id, call })
            .map_err(|e| HostError::Protocol { method: method.to_string(), detail: e.to_string() })?;

        let (tx, rx) = oneshot::channel();
        self.inner.pending.lock().insert(id, (method.to_string(), tx));

        let written = {
            let mut writer = self.inner.writer.lock().await;
            codec::write_message(&mut *writer, &payload).await
        };
        if let Err(e) = written {
            self.inner.pending.lock().remove(&id);
            return Err(HostError::Disconnected(e.to_string()));
        }

        log::trace!("-> call {} {}", id, method);

        match tokio::time::timeout(self.inner.call_timeout, rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(HostError::Disconnected("reply channel dropped".to_string())),
            Err(_) => {
                self.inner.pending.lock().remove(&id);
                Err(HostError::Timeout { method: method.to_string(), after: self.inner.call_timeout })
            }
        }
    }

    async fn call_for<T: DeserializeOwned>(&self, call: HostCall) -> HostResult<T> {
        let method = call.method();
        let value = self.call(call).await?;
        serde_json::from_value(value)
            .map_err(|e| HostError::Protocol { method: method.to_string(), detail: e.to_string() })
    }
}

#[async_trait]
impl BrowserHost for NativeHost {
    async fn get_tab(&self, tab_id: TabId) -> HostResult<Tab> {
        self.call_for(HostCall::TabsGet { tab_id }).await
    }

    async fn create_notification(&self, options: NotificationOptions) -> HostResult<NotificationId> {
        self.call_for(HostCall::NotificationsCreate { options }).await
    }

    async fn clear_notification(&self, id: &NotificationId) -> HostResult<bool> {
        let value = self.call(HostCall::NotificationsClear { notification_id: id.clone() }).await?;
        // Some browsers resolve `clear` without a value
        Ok(value.as_bool().unwrap_or(true))
    }

    async fn go_back(&self) -> HostResult<()> {
        self.call(HostCall::TabsGoBack).await.map(|_| ())
    }
}
