//! Pipeline composition: project -> cluster -> summarize.

use crate::cluster;
use crate::config::Config;
use crate::error::EngineError;
use crate::features;
use crate::rca;
use crate::types::{Alarm, AnalysisReport};

/// The RCA engine. Holds configuration only; every call to [`Engine::analyze`]
/// is an independent batch transformation with no retained state.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Run the full pipeline over one batch of alarms.
  ///
  /// Stages run to completion in strict order; any stage error surfaces
  /// immediately with no partial result.
  pub fn analyze(&self, alarms: &[Alarm]) -> Result<AnalysisReport, EngineError> {
    let vectors = features::project(alarms)?;
    let labels = cluster::cluster(&vectors, &self.config)?;
    let summaries = rca::summarize(alarms, &labels)?;

    let noise_count = labels.iter().filter(|l| l.is_noise()).count();

    Ok(AnalysisReport {
      batch_size: alarms.len(),
      cluster_count: summaries.len(),
      noise_count,
      summaries,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};

  fn alarm(minute: u32, component: &str, alarm_type: &str, severity: u8) -> Alarm {
    Alarm {
      timestamp: Utc.with_ymd_and_hms(2025, 1, 15, 10, minute, 0).unwrap(),
      component: component.into(),
      alarm_type: alarm_type.into(),
      severity,
    }
  }

  /// Two bursts of three alarms each, separated in time well beyond eps.
  fn two_burst_batch() -> Vec<Alarm> {
    vec![
      alarm(0, "Router", "Link Failure", 5),
      alarm(1, "Router", "Link Failure", 5),
      alarm(2, "Router", "Link Failure", 5),
      alarm(50, "Switch", "Packet Loss", 1),
      alarm(51, "Switch", "Packet Loss", 1),
      alarm(52, "Switch", "Packet Loss", 1),
    ]
  }

  #[test]
  fn end_to_end_two_clusters() {
    let engine = Engine::with_defaults();
    let report = engine.analyze(&two_burst_batch()).unwrap();

    assert_eq!(report.batch_size, 6);
    assert_eq!(report.cluster_count, 2);
    assert_eq!(report.noise_count, 0);

    let by_component: Vec<(&str, f64, u64)> = report
      .summaries
      .values()
      .map(|s| (s.primary_component.as_str(), s.average_severity, s.alarm_count))
      .collect();
    assert!(by_component.contains(&("Router", 5.0, 3)));
    assert!(by_component.contains(&("Switch", 1.0, 3)));

    let router = report
      .summaries
      .values()
      .find(|s| s.primary_component == "Router")
      .unwrap();
    assert_eq!(router.primary_alarm_type, "Link Failure");
  }

  #[test]
  fn empty_batch_surfaces_projection_error() {
    let engine = Engine::with_defaults();
    let err = engine.analyze(&[]).unwrap_err();
    assert!(matches!(err, EngineError::EmptyBatch));
  }

  #[test]
  fn oversized_min_points_yields_all_noise_and_empty_summaries() {
    let engine = Engine::new(Config {
      min_points: 100,
      ..Config::default()
    });
    let report = engine.analyze(&two_burst_batch()).unwrap();
    assert_eq!(report.cluster_count, 0);
    assert_eq!(report.noise_count, 6);
    assert!(report.summaries.is_empty());
  }

  #[test]
  fn repeated_analysis_is_identical() {
    let engine = Engine::with_defaults();
    let batch = two_burst_batch();
    let first = engine.analyze(&batch).unwrap();
    let second = engine.analyze(&batch).unwrap();
    assert_eq!(
      serde_json::to_string(&first).unwrap(),
      serde_json::to_string(&second).unwrap()
    );
  }
}
