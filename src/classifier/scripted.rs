//! Scripted classifier used by unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::Notify;

use super::{Classification, ClassificationResponse, Classifier};
use crate::error::{ClassifyError, ClassifyResult};

#[derive(Clone)]
pub enum Answer {
    /// Service answers with this JSON body
    Body(Value),
    /// Connection refused
    Unreachable,
    /// Never answers; signals `entered` first
    Hang,
}

#[derive(Default)]
pub struct ScriptedClassifier {
    answers: Mutex<HashMap<String, Answer>>,
    calls: Mutex<Vec<String>>,
    entered: Arc<Notify>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, url: &str, answer: Answer) -> Self {
        self.answers.lock().insert(url.to_string(), answer);
        self
    }

    /// URLs submitted so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Notified each time a request starts hanging
    pub fn entered(&self) -> Arc<Notify> {
        self.entered.clone()
    }
}

#[async_trait]
impl Classifier for ScriptedClassifier {
    async fn classify(&self, url: &str) -> ClassifyResult<Classification> {
        self.calls.lock().push(url.to_string());
        let answer = self.answers.lock().get(url).cloned().unwrap_or(Answer::Unreachable);

        match answer {
            Answer::Body(body) => Ok(Classification::from_response(ClassificationResponse::from_json(&body))),
            Answer::Unreachable => Err(ClassifyError::Network("connection refused".to_string())),
            Answer::Hang => {
                self.entered.notify_one();
                std::future::pending().await
            }
        }
    }
}
