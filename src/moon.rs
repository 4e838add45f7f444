use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::types::{MoonPhase, MoonPhaseSample};

pub const BASE_YEAR: f64 = 1900.0;
pub const LUNATIONS_PER_YEAR: f64 = 12.3685;
pub const PHASE_EPOCH_OFFSET: f64 = 4.867;
pub const SYNODIC_MONTH: f64 = 29.53059;
/// Shorter synodic constant used for the countdown to the next boundary.
pub const SYNODIC_MONTH_ROUNDED: f64 = 29.53;

/// Phase fraction in [0, 1) from a low-precision synodic approximation.
///
/// The month term uses a truncated remainder, so years before 1900 keep the
/// sign of the dividend there; the final fraction is always wrapped into
/// [0, 1).
pub fn phase_fraction(year: i32, month: u32, day: u32) -> f64 {
    let c = (year as f64 - BASE_YEAR) * LUNATIONS_PER_YEAR;
    let e = (month as f64 + c - 4.0) % 12.0;
    let jd = c + e + day as f64;
    let fraction = ((jd + PHASE_EPOCH_OFFSET) / SYNODIC_MONTH).rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Peaks at both new and full moon and is zero at the quarters. This does
/// not match physical illumination, which is near zero at new moon.
pub fn illumination_pct(fraction: f64) -> u8 {
    ((0.5 - fraction).abs() * 200.0).round().clamp(0.0, 100.0) as u8
}

pub fn phase_bucket(fraction: f64) -> MoonPhase {
    if !(0.03..=0.97).contains(&fraction) {
        MoonPhase::NewMoon
    } else if fraction < 0.22 {
        MoonPhase::WaxingCrescent
    } else if fraction < 0.28 {
        MoonPhase::FirstQuarter
    } else if fraction < 0.47 {
        MoonPhase::WaxingGibbous
    } else if fraction < 0.53 {
        MoonPhase::FullMoon
    } else if fraction < 0.72 {
        MoonPhase::WaningGibbous
    } else if fraction < 0.78 {
        MoonPhase::LastQuarter
    } else {
        MoonPhase::WaningCrescent
    }
}

pub fn days_to_next_boundary(phase: MoonPhase, fraction: f64) -> i64 {
    let target = if phase.counts_to_full() { 0.5 } else { 1.0 };
    ((target - fraction) * SYNODIC_MONTH_ROUNDED).round() as i64
}

pub fn moon_phase_from_fraction(fraction: f64) -> MoonPhaseSample {
    let phase = phase_bucket(fraction);
    MoonPhaseSample {
        fraction,
        illumination_pct: illumination_pct(fraction),
        phase,
        days_to_next_boundary: days_to_next_boundary(phase, fraction),
    }
}

pub fn moon_phase(year: i32, month: u32, day: u32) -> MoonPhaseSample {
    moon_phase_from_fraction(phase_fraction(year, month, day))
}

pub fn moon_phase_on(date: NaiveDate) -> MoonPhaseSample {
    moon_phase(date.year(), date.month(), date.day())
}

/// Moon sample for the calendar date of `now` in its own time zone.
pub fn moon_phase_at<Tz: TimeZone>(now: &DateTime<Tz>) -> MoonPhaseSample {
    moon_phase_on(now.date_naive())
}

pub fn shading_offset_pct(fraction: f64) -> f64 {
    fraction * 100.0
}
