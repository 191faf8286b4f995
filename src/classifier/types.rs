//! Classification request/response contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub url: String,
}

/// Response of the classification service.
///
/// Every field is optional and read leniently: a body of any JSON shape
/// is accepted, fields with unexpected types are simply left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationResponse {
    pub prediction: Option<Value>,
    pub url: Option<String>,
    pub message: Option<String>,
    pub phishing_probability: Option<f64>,
    pub safe_probability: Option<f64>,
    /// Set when the service failed internally (it still answers HTTP 200)
    pub error: Option<String>,
}

impl ClassificationResponse {
    pub fn from_json(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| body.get(key).and_then(Value::as_f64);

        Self {
            prediction: body.get("prediction").cloned(),
            url: text("url"),
            message: text("message"),
            phishing_probability: number("phishing_probability"),
            safe_probability: number("safe_probability"),
            error: text("error"),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_prediction(self.prediction.as_ref())
    }
}

/// Outcome of one classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `prediction` is exactly 1
    Phishing,
    /// `prediction` is exactly 0
    Safe,
    /// Missing, out of range, or not a number
    Unknown,
}

impl Verdict {
    pub fn from_prediction(prediction: Option<&Value>) -> Self {
        match prediction.and_then(Value::as_f64) {
            Some(p) if p == 1.0 => Verdict::Phishing,
            Some(p) if p == 0.0 => Verdict::Safe,
            _ => Verdict::Unknown,
        }
    }

    pub fn is_phishing(self) -> bool {
        self == Verdict::Phishing
    }
}

/// Verdict together with the response it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub verdict: Verdict,
    pub response: ClassificationResponse,
}

impl Classification {
    pub fn from_response(response: ClassificationResponse) -> Self {
        Self { verdict: response.verdict(), response }
    }
}
