//! Root-cause summarization: cluster labels -> per-cluster summaries.
//!
//! For each non-noise cluster: tally component and alarm-type frequencies,
//! pick the dominant value of each, and average severity. Tie-break rule:
//! members are scanned in input index order and the first value to reach
//! the eventual maximum tally wins, so earlier-seen values take precedence
//! over later ones at equal counts.

use std::collections::{BTreeMap, HashMap};

use crate::error::EngineError;
use crate::types::{Alarm, ClusterLabel, RootCauseSummary};

/// Summarize each non-noise cluster. `alarms` and `labels` must be
/// index-aligned; the noise label is excluded from the result entirely.
pub fn summarize(
  alarms: &[Alarm],
  labels: &[ClusterLabel],
) -> Result<BTreeMap<usize, RootCauseSummary>, EngineError> {
  if alarms.len() != labels.len() {
    return Err(EngineError::LabelMismatch {
      alarms: alarms.len(),
      labels: labels.len(),
    });
  }

  // Partition alarm indices by cluster id, dropping noise. BTreeMap keeps
  // cluster iteration (and serialized output) in id order.
  let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
  for (idx, label) in labels.iter().enumerate() {
    if let ClusterLabel::Cluster(id) = label {
      members.entry(*id).or_default().push(idx);
    }
  }

  members
    .into_iter()
    .map(|(id, indices)| {
      let summary = summarize_cluster(id, alarms, &indices)?;
      Ok((id, summary))
    })
    .collect()
}

fn summarize_cluster(
  cluster_id: usize,
  alarms: &[Alarm],
  indices: &[usize],
) -> Result<RootCauseSummary, EngineError> {
  if indices.is_empty() {
    return Err(EngineError::EmptyCluster { cluster_id });
  }

  let mut component_counts: HashMap<&str, u64> = HashMap::new();
  let mut type_counts: HashMap<&str, u64> = HashMap::new();
  let mut primary_component = "";
  let mut primary_alarm_type = "";
  let mut best_component_count = 0u64;
  let mut best_type_count = 0u64;
  let mut severity_sum = 0u64;

  let mut first_seen = alarms[indices[0]].timestamp;
  let mut last_seen = first_seen;

  // Single pass in index order; a value becomes primary only by strictly
  // exceeding the running max, which yields the first-to-reach-max rule.
  for &idx in indices {
    let alarm = &alarms[idx];

    let count = component_counts.entry(alarm.component.as_str()).or_insert(0);
    *count += 1;
    if *count > best_component_count {
      best_component_count = *count;
      primary_component = alarm.component.as_str();
    }

    let count = type_counts.entry(alarm.alarm_type.as_str()).or_insert(0);
    *count += 1;
    if *count > best_type_count {
      best_type_count = *count;
      primary_alarm_type = alarm.alarm_type.as_str();
    }

    severity_sum += alarm.severity as u64;
    if alarm.timestamp < first_seen {
      first_seen = alarm.timestamp;
    }
    if alarm.timestamp > last_seen {
      last_seen = alarm.timestamp;
    }
  }

  let alarm_count = indices.len() as u64;
  let average_severity = severity_sum as f64 / alarm_count as f64;

  let report_id = {
    let mut hasher = blake3::Hasher::new();
    hasher.update(primary_component.as_bytes());
    hasher.update(b"|");
    hasher.update(primary_alarm_type.as_bytes());
    hasher.update(b"|");
    hasher.update(first_seen.to_rfc3339().as_bytes());
    hasher.update(b"|");
    hasher.update(&alarm_count.to_le_bytes());
    let hex = hasher.finalize().to_hex();
    format!("rca-{}", &hex[..16])
  };

  Ok(RootCauseSummary {
    report_id,
    primary_component: primary_component.to_string(),
    primary_alarm_type: primary_alarm_type.to_string(),
    average_severity,
    alarm_count,
    first_seen: first_seen.to_rfc3339(),
    last_seen: last_seen.to_rfc3339(),
  })
}
