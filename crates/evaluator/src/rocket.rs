//! Constant-thrust rocket-equation helpers.

use thruster_core::constants::G0;

/// Effective exhaust velocity (m/s) for a specific impulse in seconds.
#[inline]
pub fn exhaust_velocity(isp_s: f64) -> f64 {
    isp_s * G0
}

/// Propellant mass (kg) needed to impart `delta_v_m_s` on a final (burnout) mass.
///
/// Solves the Tsiolkovsky relation `Δv = v_e ln((m_f + m_p) / m_f)` for `m_p`. The final
/// mass is fully known ahead of time, so the solution is closed form.
#[inline]
pub fn propellant_mass(final_mass_kg: f64, delta_v_m_s: f64, exhaust_velocity_m_s: f64) -> f64 {
    final_mass_kg * (delta_v_m_s / exhaust_velocity_m_s).exp_m1()
}

/// Firing time (s) to expel `propellant_kg` at constant thrust: `m_p v_e / F`.
#[inline]
pub fn burn_duration(propellant_kg: f64, exhaust_velocity_m_s: f64, thrust_n: f64) -> f64 {
    propellant_kg * exhaust_velocity_m_s / thrust_n
}
