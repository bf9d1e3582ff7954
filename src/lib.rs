//! Electric propulsion trade-study toolkit.
//!
//! Re-exports the workspace crates so front-ends depend on a single library, and converts
//! catalog records into validated runtime thrusters.

pub mod catalog;

pub use thruster_config as config;
pub use thruster_core as physics;
pub use thruster_evaluator as evaluator;
pub use thruster_export as export;
pub use thruster_propulsion as propulsion;
pub use thruster_ranking as ranking;

pub use thruster_evaluator::{
    EvaluationError, EvaluationResult, MissionRequirements, Performance, RankingWeights,
    Rejection, Score, Verdict, evaluate,
};
pub use thruster_propulsion::{TechnologyFamily, ThrusterSpec};
pub use thruster_ranking::{SelectionMode, select, select_with};

