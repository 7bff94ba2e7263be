//! Seeded synthetic alarm generation for demos and load testing.
//!
//! Draws from fixed telecom vocabularies, with timestamps scattered
//! uniformly over the 10,000 minutes before a reference instant. A fixed
//! seed reproduces the exact same batch.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::InboundAlarm;

pub const COMPONENTS: [&str; 5] = ["Router", "RAN", "DWDM", "Switch", "Server"];
pub const ALARM_TYPES: [&str; 4] = [
  "Link Failure",
  "High Latency",
  "Packet Loss",
  "Hardware Fault",
];

/// Generate `count` random alarms scattered over the 10,000 minutes before
/// `now`, reproducible for a given `seed`.
pub fn generate_at(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<InboundAlarm> {
  let mut rng = StdRng::seed_from_u64(seed);

  (0..count)
    .map(|_| {
      let minutes_ago = rng.gen_range(1..=10_000);
      InboundAlarm {
        timestamp: (now - Duration::minutes(minutes_ago)).to_rfc3339(),
        component: COMPONENTS[rng.gen_range(0..COMPONENTS.len())].to_string(),
        alarm_type: ALARM_TYPES[rng.gen_range(0..ALARM_TYPES.len())].to_string(),
        severity: rng.gen_range(1..=5),
      }
    })
    .collect()
}

/// Generate `count` random alarms relative to the current wall clock.
pub fn generate(count: usize, seed: u64) -> Vec<InboundAlarm> {
  generate_at(count, seed, Utc::now())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::normalize;
  use chrono::TimeZone;

  fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
  }

  #[test]
  fn same_seed_same_batch() {
    let first = generate_at(50, 7, epoch());
    let second = generate_at(50, 7, epoch());
    assert_eq!(
      serde_json::to_string(&first).unwrap(),
      serde_json::to_string(&second).unwrap()
    );
  }

  #[test]
  fn different_seeds_differ() {
    let first = generate_at(50, 7, epoch());
    let second = generate_at(50, 8, epoch());
    assert_ne!(
      serde_json::to_string(&first).unwrap(),
      serde_json::to_string(&second).unwrap()
    );
  }

  #[test]
  fn generated_alarms_normalize_cleanly() {
    for raw in generate_at(200, 42, epoch()) {
      let alarm = normalize::normalize(&raw).unwrap();
      assert!((1..=5).contains(&alarm.severity));
      assert!(COMPONENTS.contains(&alarm.component.as_str()));
      assert!(ALARM_TYPES.contains(&alarm.alarm_type.as_str()));
      assert!(alarm.timestamp < epoch());
    }
  }

  #[test]
  fn count_is_respected() {
    assert_eq!(generate_at(0, 1, epoch()).len(), 0);
    assert_eq!(generate_at(17, 1, epoch()).len(), 17);
  }
}
