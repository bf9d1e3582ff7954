//! Mission requirements supplied once per evaluation run.

use thiserror::Error;

/// Minimum technology readiness level accepted when the caller does not choose one.
pub const DEFAULT_MIN_TRL: u8 = 6;
/// Fraction of calendar time the thruster fires when the caller does not choose one.
pub const DEFAULT_DUTY_CYCLE: f64 = 0.30;

/// Relative emphasis of propulsion mass versus mission duration in the composite score.
///
/// The weights are used exactly as given; they need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub mass: f64,
    pub time: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            mass: 0.4,
            time: 0.6,
        }
    }
}

impl RankingWeights {
    pub fn new(mass: f64, time: f64) -> Self {
        Self { mass, time }
    }

    /// Rescale so the weights sum to one. Returns `None` when both are zero.
    ///
    /// Selection never calls this on its own; callers opt in explicitly.
    pub fn normalized(&self) -> Option<Self> {
        let sum = self.mass + self.time;
        if sum > 0.0 && sum.is_finite() {
            Some(Self {
                mass: self.mass / sum,
                time: self.time / sum,
            })
        } else {
            None
        }
    }

    /// Both weights zero: every candidate scores 0 and ranking falls back to catalog order.
    pub fn is_degenerate(&self) -> bool {
        self.mass == 0.0 && self.time == 0.0
    }
}

/// Problems with a requirements value, independent of any thruster.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequirementsError {
    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("minimum TRL must lie in 1..=9 (got {0})")]
    TrlOutOfRange(u8),
    #[error("duty cycle must lie in (0, 1] (got {0}); pass a fraction, not a percentage")]
    DutyCycleOutOfRange(f64),
    #[error("{field} weight must be non-negative and finite (got {value})")]
    InvalidWeight { field: &'static str, value: f64 },
}

/// Mission constraints shared by every thruster evaluated in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRequirements {
    /// Total velocity change (m/s).
    pub delta_v_m_s: f64,
    /// Spacecraft dry mass excluding the propulsion unit (kg).
    pub spacecraft_dry_mass_kg: f64,
    /// Power available to the propulsion unit (W).
    pub available_power_w: f64,
    /// Limit on thruster dry mass plus propellant (kg).
    pub mass_budget_kg: f64,
    pub min_trl: u8,
    /// Fraction of calendar time spent firing, in (0, 1].
    pub duty_cycle: f64,
    pub weights: RankingWeights,
}

impl MissionRequirements {
    /// Requirements with the default minimum TRL, duty cycle, and weights.
    pub fn new(
        delta_v_m_s: f64,
        spacecraft_dry_mass_kg: f64,
        available_power_w: f64,
        mass_budget_kg: f64,
    ) -> Self {
        Self {
            delta_v_m_s,
            spacecraft_dry_mass_kg,
            available_power_w,
            mass_budget_kg,
            min_trl: DEFAULT_MIN_TRL,
            duty_cycle: DEFAULT_DUTY_CYCLE,
            weights: RankingWeights::default(),
        }
    }

    pub fn with_min_trl(mut self, min_trl: u8) -> Self {
        self.min_trl = min_trl;
        self
    }

    pub fn with_duty_cycle(mut self, duty_cycle: f64) -> Self {
        self.duty_cycle = duty_cycle;
        self
    }

    pub fn with_weights(mut self, weights: RankingWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Check positivity and range invariants. Out-of-range duty cycles are rejected rather
    /// than reinterpreted as percentages.
    pub fn validate(&self) -> Result<(), RequirementsError> {
        positive("delta_v_m_s", self.delta_v_m_s)?;
        positive("spacecraft_dry_mass_kg", self.spacecraft_dry_mass_kg)?;
        positive("available_power_w", self.available_power_w)?;
        positive("mass_budget_kg", self.mass_budget_kg)?;
        if !(1..=9).contains(&self.min_trl) {
            return Err(RequirementsError::TrlOutOfRange(self.min_trl));
        }
        if !(self.duty_cycle > 0.0 && self.duty_cycle <= 1.0) {
            return Err(RequirementsError::DutyCycleOutOfRange(self.duty_cycle));
        }
        weight("mass", self.weights.mass)?;
        weight("time", self.weights.time)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), RequirementsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RequirementsError::NonPositive { field, value })
    }
}

fn weight(field: &'static str, value: f64) -> Result<(), RequirementsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RequirementsError::InvalidWeight { field, value })
    }
}
