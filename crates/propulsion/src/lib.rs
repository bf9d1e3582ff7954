//! Electric propulsion thruster records shared by the evaluator and the catalog loaders.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Technology family of an electric thruster.
///
/// Every family shares one constant-thrust evaluation model; the tag is carried as data
/// for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnologyFamily {
    Hall,
    Ion,
    Feep,
    Electrospray,
    Resistojet,
    PulsedPlasma,
}

impl TechnologyFamily {
    /// All families in display order.
    pub const ALL: [TechnologyFamily; 6] = [
        TechnologyFamily::Hall,
        TechnologyFamily::Ion,
        TechnologyFamily::Feep,
        TechnologyFamily::Electrospray,
        TechnologyFamily::Resistojet,
        TechnologyFamily::PulsedPlasma,
    ];

    /// Short label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            TechnologyFamily::Hall => "Hall",
            TechnologyFamily::Ion => "Ion",
            TechnologyFamily::Feep => "FEEP",
            TechnologyFamily::Electrospray => "Electrospray",
            TechnologyFamily::Resistojet => "Resistojet",
            TechnologyFamily::PulsedPlasma => "PPT",
        }
    }
}

impl fmt::Display for TechnologyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TechnologyFamily {
    type Err = ThrusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "HALL" | "HALLEFFECT" | "HET" => Ok(TechnologyFamily::Hall),
            "ION" | "GRIDDEDION" | "RFION" => Ok(TechnologyFamily::Ion),
            "FEEP" => Ok(TechnologyFamily::Feep),
            "ELECTROSPRAY" | "COLLOID" => Ok(TechnologyFamily::Electrospray),
            "RESISTOJET" => Ok(TechnologyFamily::Resistojet),
            "PPT" | "PULSEDPLASMA" | "PULSEDPLASMATHRUSTER" => Ok(TechnologyFamily::PulsedPlasma),
            _ => Err(ThrusterError::UnknownFamily(s.to_string())),
        }
    }
}

/// Reasons a thruster record is malformed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThrusterError {
    #[error("thruster name must not be empty")]
    MissingName,
    #[error("unknown technology family '{0}'")]
    UnknownFamily(String),
    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("TRL must lie in 1..=9 (got {0})")]
    TrlOutOfRange(i64),
    #[error("thrust efficiency must lie in (0, 1] (got {0})")]
    EfficiencyOutOfRange(f64),
}

/// Immutable description of one catalog thruster.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrusterSpec {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub family: TechnologyFamily,
    pub propellant: String,
    /// Specific impulse (s).
    pub isp_s: f64,
    /// Nominal thrust (N).
    pub thrust_n: f64,
    /// Electrical input power at the nominal operating point (W).
    pub power_w: f64,
    /// Dry mass of the propulsion unit (kg).
    pub dry_mass_kg: f64,
    /// Technology readiness level, 1 (concept) to 9 (flight proven).
    pub trl: u8,
    pub thrust_efficiency: Option<f64>,
}

impl ThrusterSpec {
    /// Check the record invariants: positive finite physics fields and TRL in 1..=9.
    pub fn validate(&self) -> Result<(), ThrusterError> {
        if self.name.trim().is_empty() {
            return Err(ThrusterError::MissingName);
        }
        positive("isp_s", self.isp_s)?;
        positive("thrust_n", self.thrust_n)?;
        positive("power_w", self.power_w)?;
        positive("dry_mass_kg", self.dry_mass_kg)?;
        if !(1..=9).contains(&self.trl) {
            return Err(ThrusterError::TrlOutOfRange(self.trl.into()));
        }
        if let Some(eta) = self.thrust_efficiency {
            if !(eta > 0.0 && eta <= 1.0) {
                return Err(ThrusterError::EfficiencyOutOfRange(eta));
            }
        }
        Ok(())
    }

    /// Thrust produced per watt of input power (N/W).
    pub fn thrust_to_power_n_per_w(&self) -> f64 {
        self.thrust_n / self.power_w
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ThrusterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ThrusterError::NonPositive { field, value })
    }
}
