//! Network Alarm Root-Cause Analysis Engine — deterministic, batch (MVP).
//!
//! Ingests structured fault/alarm events, projects them into a numeric
//! feature space, groups them by spatial density (DBSCAN), and summarizes
//! each cluster's likely root cause (dominant component, dominant alarm
//! type, mean severity).
//!
//! No AI, no DB, no network; pure computation over an in-memory batch.

pub mod cluster;
pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod normalize;
pub mod rca;
pub mod synthetic;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{Alarm, AnalysisReport, ClusterLabel, InboundAlarm, RootCauseSummary};
