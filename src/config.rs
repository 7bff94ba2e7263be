//! Engine configuration with sane defaults.

/// Tunable parameters for density clustering.
#[derive(Debug, Clone)]
pub struct Config {
  /// Neighborhood radius in feature space (weighted Euclidean).
  ///
  /// The default is tuned against raw feature scaling, where elapsed
  /// seconds dominate the other three dimensions: alarms within roughly
  /// 1000 seconds of each other land in the same neighborhood.
  pub eps: f64,
  /// Minimum neighborhood size (self included) for a core point.
  pub min_points: usize,
  /// Per-dimension distance weights:
  /// `[elapsed_seconds, component_code, alarm_type_code, severity]`.
  ///
  /// All 1.0 keeps the raw reference scaling; callers that want the
  /// categorical dimensions to matter at large `eps` can boost them here.
  pub feature_weights: [f64; 4],
}

impl Default for Config {
  fn default() -> Self {
    Self {
      eps: 1000.0,
      min_points: 3,
      feature_weights: [1.0, 1.0, 1.0, 1.0],
    }
  }
}
