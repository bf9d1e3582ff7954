#![allow(dead_code)]

use thruster_selection::{MissionRequirements, RankingWeights, TechnologyFamily, ThrusterSpec};

pub fn thruster(
    name: &str,
    isp_s: f64,
    thrust_n: f64,
    power_w: f64,
    dry_mass_kg: f64,
    trl: u8,
) -> ThrusterSpec {
    ThrusterSpec {
        id: name.to_lowercase(),
        name: name.to_string(),
        manufacturer: "Test Propulsion".to_string(),
        family: TechnologyFamily::Electrospray,
        propellant: "Ionic liquid".to_string(),
        isp_s,
        thrust_n,
        power_w,
        dry_mass_kg,
        trl,
        thrust_efficiency: None,
    }
}

/// Isp 1500 s, 0.1 N, 50 W, 1 kg, TRL 8.
pub fn reference_thruster() -> ThrusterSpec {
    thruster("Reference", 1_500.0, 0.1, 50.0, 1.0, 8)
}

/// Δv 800 m/s, 12 kg spacecraft, 60 W, 2 kg budget, TRL ≥ 6, 30 % duty, weights (0.4, 0.6).
pub fn reference_mission() -> MissionRequirements {
    MissionRequirements::new(800.0, 12.0, 60.0, 2.0)
        .with_min_trl(6)
        .with_duty_cycle(0.30)
        .with_weights(RankingWeights::new(0.4, 0.6))
}
