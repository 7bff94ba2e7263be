//! Density clustering (DBSCAN) over feature vectors.
//!
//! Two-phase so that membership does not depend on processing order:
//! neighborhoods and core flags are computed for every point first, then
//! clusters are grown from unvisited core points in index order. Border
//! points join the first cluster whose expansion reaches them; points
//! reachable from no core point are noise.

use std::collections::VecDeque;

use crate::config::Config;
use crate::error::EngineError;
use crate::types::{ClusterLabel, FeatureVector};

/// Cluster feature vectors by density. Returns one label per input vector,
/// index-aligned. An all-noise outcome is valid, not an error.
pub fn cluster(
  vectors: &[FeatureVector],
  config: &Config,
) -> Result<Vec<ClusterLabel>, EngineError> {
  if !(config.eps > 0.0) || !config.eps.is_finite() {
    return Err(EngineError::invalid_parameter(
      "eps",
      "must be a finite number > 0",
    ));
  }
  if config.min_points < 1 {
    return Err(EngineError::invalid_parameter("min_points", "must be >= 1"));
  }

  let n = vectors.len();

  // Phase 1: O(n^2) neighborhood search. A point's neighborhood includes
  // itself (distance 0 <= eps always holds).
  let neighborhoods: Vec<Vec<usize>> = (0..n)
    .map(|i| {
      (0..n)
        .filter(|&j| vectors[i].distance(&vectors[j], &config.feature_weights) <= config.eps)
        .collect()
    })
    .collect();

  let is_core: Vec<bool> = neighborhoods
    .iter()
    .map(|nb| nb.len() >= config.min_points)
    .collect();

  // Phase 2: grow clusters from core points by breadth-first expansion.
  let mut labels = vec![ClusterLabel::Noise; n];
  let mut visited = vec![false; n];
  let mut next_id = 0usize;

  for seed in 0..n {
    if visited[seed] || !is_core[seed] {
      continue;
    }

    let id = next_id;
    next_id += 1;

    let mut queue = VecDeque::new();
    visited[seed] = true;
    labels[seed] = ClusterLabel::Cluster(id);
    queue.push_back(seed);

    while let Some(point) = queue.pop_front() {
      // Only core points propagate density-reachability.
      if !is_core[point] {
        continue;
      }
      for &neighbor in &neighborhoods[point] {
        if visited[neighbor] {
          continue;
        }
        visited[neighbor] = true;
        labels[neighbor] = ClusterLabel::Cluster(id);
        queue.push_back(neighbor);
      }
    }
  }

  Ok(labels)
}
