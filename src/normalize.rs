//! Normalize inbound alarms into canonical internal Alarm models.

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::types::{Alarm, InboundAlarm};

/// Parse and validate a single inbound alarm.
pub fn normalize(raw: &InboundAlarm) -> Result<Alarm, EngineError> {
  let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&raw.timestamp)
    .map_err(|e| EngineError::validation("timestamp", &format!("invalid RFC3339: {}", e)))?
    .with_timezone(&Utc);

  if raw.component.trim().is_empty() {
    return Err(EngineError::validation("component", "must not be empty"));
  }
  if raw.alarm_type.trim().is_empty() {
    return Err(EngineError::validation("alarm_type", "must not be empty"));
  }
  if !(1..=5).contains(&raw.severity) {
    return Err(EngineError::validation("severity", "must be in 1..=5"));
  }

  Ok(Alarm {
    timestamp,
    component: raw.component.clone(),
    alarm_type: raw.alarm_type.clone(),
    severity: raw.severity,
  })
}

/// Normalize a whole batch, failing on the first invalid alarm.
pub fn normalize_batch(raw: &[InboundAlarm]) -> Result<Vec<Alarm>, EngineError> {
  raw.iter().map(normalize).collect()
}
