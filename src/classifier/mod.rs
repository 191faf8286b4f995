//! Classifier Module - URL Verdicts
//!
//! - `types` - request/response contract and the [`Verdict`] derived from it
//! - `client` - [`Classifier`] seam and the HTTP implementation

pub mod client;
pub mod types;

#[cfg(test)]
pub mod scripted;


pub use client::{Classifier, HttpClassifier};
pub use types::{Classification, ClassificationRequest, ClassificationResponse, Verdict};
