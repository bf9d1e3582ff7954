//! Physics evaluation of a single thruster against one set of mission requirements.
//!
//! The evaluator only produces raw physical quantities and a feasibility verdict. Scoring
//! lives with the selector so that changing ranking weights never re-runs the physics.

pub mod requirements;
pub mod rocket;

use std::fmt;

use thiserror::Error;
use thruster_core::time::seconds_to_days;
use thruster_propulsion::{ThrusterError, ThrusterSpec};
use tracing::debug;

pub use requirements::{
    DEFAULT_DUTY_CYCLE, DEFAULT_MIN_TRL, MissionRequirements, RankingWeights, RequirementsError,
};

/// Orbits per day assumed when estimating discrete firings (low Earth orbit).
const ORBITS_PER_DAY: f64 = 15.0;
/// Orbits covered by one firing arc during continuous operation.
const ORBITS_PER_BURN: f64 = 10.0;

/// Input errors: the request itself is malformed, independent of feasibility.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("invalid thruster record '{name}': {source}")]
    InvalidThruster {
        name: String,
        #[source]
        source: ThrusterError,
    },
    #[error("invalid requirements: {0}")]
    InvalidRequirements(#[from] RequirementsError),
}

/// Why a thruster cannot fly the mission.
///
/// Power, then TRL, then mass budget; the first failing check wins. `InvalidInput` is only
/// reported when power and TRL pass but the mass figures cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    InsufficientPower,
    TrlTooLow,
    ExceedsMassBudget,
    /// The physics degenerated (zero Δv or exhaust velocity, overflowing mass ratio).
    InvalidInput,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::InsufficientPower => "insufficient power",
            Rejection::TrlTooLow => "TRL too low",
            Rejection::ExceedsMassBudget => "exceeds mass budget",
            Rejection::InvalidInput => "invalid input",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feasibility verdict for one thruster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("accepted"),
            Verdict::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

/// Physical performance of one thruster on one mission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub exhaust_velocity_m_s: f64,
    pub propellant_mass_kg: f64,
    /// Thruster dry mass plus propellant (kg).
    pub total_propulsion_mass_kg: f64,
    /// Time spent firing (s).
    pub burn_duration_s: f64,
    /// Burn duration stretched by the duty cycle (s).
    pub calendar_duration_s: f64,
    pub thrust_to_power_n_per_w: f64,
    /// Propellant share of the wet spacecraft.
    pub propellant_fraction: f64,
    pub estimated_burns: u64,
}

/// Composite ranking score and its unweighted components. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Total propulsion mass over the mass budget.
    pub mass_ratio: f64,
    /// Calendar duration over one Julian year.
    pub time_ratio: f64,
    pub composite: f64,
}

/// Outcome of evaluating one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult<'a> {
    pub thruster: &'a ThrusterSpec,
    /// Absent only when the physics itself could not be computed.
    pub performance: Option<Performance>,
    pub verdict: Verdict,
    /// Filled in by the selector for accepted candidates.
    pub score: Option<Score>,
}

impl EvaluationResult<'_> {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

/// Evaluate one thruster for the mission.
///
/// Both inputs are validated first; malformed records or requirements are input errors and
/// never turn into feasibility rejections.
pub fn evaluate<'a>(
    thruster: &'a ThrusterSpec,
    requirements: &MissionRequirements,
) -> Result<EvaluationResult<'a>, EvaluationError> {
    requirements.validate()?;
    thruster
        .validate()
        .map_err(|source| EvaluationError::InvalidThruster {
            name: thruster.name.clone(),
            source,
        })?;

    let performance = compute_performance(thruster, requirements);
    let verdict = match (capability_rejection(thruster, requirements), &performance) {
        (Some(reason), _) => Verdict::Rejected(reason),
        (None, None) => Verdict::Rejected(Rejection::InvalidInput),
        (None, Some(p)) if p.total_propulsion_mass_kg > requirements.mass_budget_kg => {
            Verdict::Rejected(Rejection::ExceedsMassBudget)
        }
        (None, Some(_)) => Verdict::Accepted,
    };
    let result = EvaluationResult {
        thruster,
        performance,
        verdict,
        score: None,
    };

    debug!(
        thruster = %thruster.name,
        verdict = %result.verdict,
        propellant_kg = result.performance.map(|p| p.propellant_mass_kg),
        "evaluated thruster"
    );
    Ok(result)
}

fn compute_performance(
    thruster: &ThrusterSpec,
    requirements: &MissionRequirements,
) -> Option<Performance> {
    let exhaust_velocity = rocket::exhaust_velocity(thruster.isp_s);
    let delta_v = requirements.delta_v_m_s;
    if !(delta_v > 0.0) || !(exhaust_velocity > 0.0) {
        return None;
    }

    let final_mass = requirements.spacecraft_dry_mass_kg + thruster.dry_mass_kg;
    let propellant = rocket::propellant_mass(final_mass, delta_v, exhaust_velocity);
    let burn_duration = rocket::burn_duration(propellant, exhaust_velocity, thruster.thrust_n);
    let calendar_duration = burn_duration / requirements.duty_cycle;
    if !propellant.is_finite() || !calendar_duration.is_finite() {
        return None;
    }

    let total_orbits = seconds_to_days(calendar_duration) * ORBITS_PER_DAY;
    let estimated_burns = ((total_orbits / ORBITS_PER_BURN).floor() as u64).max(1);

    Some(Performance {
        exhaust_velocity_m_s: exhaust_velocity,
        propellant_mass_kg: propellant,
        total_propulsion_mass_kg: thruster.dry_mass_kg + propellant,
        burn_duration_s: burn_duration,
        calendar_duration_s: calendar_duration,
        thrust_to_power_n_per_w: thruster.thrust_to_power_n_per_w(),
        propellant_fraction: propellant / (final_mass + propellant),
        estimated_burns,
    })
}

/// Power and TRL checks. They depend only on the records, so they win over any failure of
/// the physics.
fn capability_rejection(
    thruster: &ThrusterSpec,
    requirements: &MissionRequirements,
) -> Option<Rejection> {
    if thruster.power_w > requirements.available_power_w {
        Some(Rejection::InsufficientPower)
    } else if thruster.trl < requirements.min_trl {
        Some(Rejection::TrlTooLow)
    } else {
        None
    }
}
