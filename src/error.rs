//! Structured error types for the RCA engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("empty batch: feature projection requires at least one alarm")]
  EmptyBatch,

  #[error("invalid parameter: {param}: {reason}")]
  InvalidParameter { param: String, reason: String },

  #[error("empty cluster: cluster {cluster_id} has no member alarms")]
  EmptyCluster { cluster_id: usize },

  #[error("label mismatch: {alarms} alarms vs {labels} labels")]
  LabelMismatch { alarms: usize, labels: usize },

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn invalid_parameter(param: &str, reason: &str) -> Self {
    Self::InvalidParameter {
      param: param.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
