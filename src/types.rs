//! Core types for the RCA engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound alarm line from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundAlarm {
  pub timestamp: String,
  pub component: String,
  pub alarm_type: String,
  pub severity: u8,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical internal alarm after normalization + validation.
/// Immutable for the duration of the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
  pub timestamp: DateTime<Utc>,
  pub component: String,
  pub alarm_type: String,
  /// Ordinal severity, 1 (low) to 5 (critical).
  pub severity: u8,
}

// ---------------------------------------------------------------------------
// Feature vector
// ---------------------------------------------------------------------------

/// 4-d numeric projection of one alarm:
/// `[elapsed_seconds, component_code, alarm_type_code, severity]`.
///
/// Category codes are batch-local sorted ranks over the distinct strings
/// observed in the batch; elapsed seconds are relative to the earliest
/// alarm in the batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; 4]);

impl FeatureVector {
  /// Weighted Euclidean distance to another vector.
  pub fn distance(&self, other: &FeatureVector, weights: &[f64; 4]) -> f64 {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .zip(weights.iter())
      .map(|((a, b), w)| {
        let d = w * (a - b);
        d * d
      })
      .sum::<f64>()
      .sqrt()
  }
}

// ---------------------------------------------------------------------------
// Cluster label
// ---------------------------------------------------------------------------

/// Label assigned to each alarm's index by the clusterer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterLabel {
  /// Member of the cluster with this id (dense, assigned in scan order).
  Cluster(usize),
  /// Not density-reachable from any core point.
  Noise,
}

impl ClusterLabel {
  pub fn is_noise(&self) -> bool {
    matches!(self, ClusterLabel::Noise)
  }

  /// Cluster id, or `None` for noise.
  pub fn id(&self) -> Option<usize> {
    match self {
      ClusterLabel::Cluster(id) => Some(*id),
      ClusterLabel::Noise => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Root-cause summary for one cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootCauseSummary {
  /// Stable content-derived id ("rca-" + truncated blake3 hex).
  pub report_id: String,
  pub primary_component: String,
  pub primary_alarm_type: String,
  pub average_severity: f64,
  pub alarm_count: u64,
  pub first_seen: String,
  pub last_seen: String,
}

/// One full batch analysis: labels reduced to counts + per-cluster summaries.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
  pub batch_size: usize,
  pub cluster_count: usize,
  pub noise_count: usize,
  pub summaries: BTreeMap<usize, RootCauseSummary>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
