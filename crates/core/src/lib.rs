//! Core units, constants, and shared primitives for the thruster selection workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Seconds per Julian year, the normalisation horizon for mission duration.
    pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert millinewtons to newtons.
    #[inline]
    pub fn mn_to_n(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert newtons to millinewtons.
    #[inline]
    pub fn n_to_mn(v: f64) -> f64 {
        v * 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / SECONDS_PER_YEAR
    }

    /// Split a duration into whole days, hours, and minutes for display.
    pub fn split_duration(seconds: f64) -> (i64, i64, i64) {
        let total_seconds = seconds.max(0.0);
        let days = (total_seconds / SECONDS_PER_DAY).floor() as i64;
        let remaining = total_seconds - (days as f64 * SECONDS_PER_DAY);
        let hours = (remaining / 3_600.0).floor() as i64;
        let minutes = ((remaining - hours as f64 * 3_600.0) / 60.0).floor() as i64;
        (days, hours, minutes)
    }
}
