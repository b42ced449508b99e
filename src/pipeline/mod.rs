//! Match pipeline and its observers
//!
//! A match plays one strategy for X against one for O over many games,
//! reporting each ply and outcome to the attached observers.

pub mod matches;
pub mod observers;

pub use matches::{MatchConfig, MatchPipeline, MatchResult};
pub use observers::{
    JsonlObserver, MetricsObserver, MetricsSummary, Observation, ProgressObserver,
    StepObservation,
};

pub use crate::ports::{Observer, Strategy};
