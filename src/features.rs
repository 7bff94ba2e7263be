//! Feature projection: alarm batch -> 4-d numeric vectors.
//!
//! Each alarm becomes `[elapsed_seconds, component_code, alarm_type_code,
//! severity]`. Elapsed seconds are relative to the earliest alarm in the
//! batch. Category codes are sorted ranks over the distinct strings seen in
//! the batch, so the encoding is deterministic within and across runs but
//! carries no identity between batches.

use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::types::{Alarm, FeatureVector};

/// Project a batch of alarms into feature vectors, index-aligned with the
/// input. Pure function of the batch.
pub fn project(alarms: &[Alarm]) -> Result<Vec<FeatureVector>, EngineError> {
  if alarms.is_empty() {
    return Err(EngineError::EmptyBatch);
  }

  // Batch-relative time origin.
  let start = alarms
    .iter()
    .map(|a| a.timestamp)
    .min()
    .ok_or(EngineError::EmptyBatch)?;

  let component_codes = sorted_rank_codes(alarms.iter().map(|a| a.component.as_str()));
  let type_codes = sorted_rank_codes(alarms.iter().map(|a| a.alarm_type.as_str()));

  let vectors = alarms
    .iter()
    .map(|alarm| {
      let elapsed = (alarm.timestamp - start).num_milliseconds() as f64 / 1000.0;
      // Membership is guaranteed: codes were built from this same batch.
      let component_code = rank_of(&component_codes, &alarm.component);
      let type_code = rank_of(&type_codes, &alarm.alarm_type);
      FeatureVector([elapsed, component_code, type_code, alarm.severity as f64])
    })
    .collect();

  Ok(vectors)
}

/// Distinct category strings in lexicographic order; the code for a string
/// is its rank in this order.
fn sorted_rank_codes<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  let distinct: BTreeSet<&str> = values.collect();
  distinct.into_iter().map(str::to_string).collect()
}

fn rank_of(codes: &[String], value: &str) -> f64 {
  codes
    .binary_search_by(|c| c.as_str().cmp(value))
    .unwrap_or(0) as f64
}
