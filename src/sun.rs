use chrono::{DateTime, TimeZone};

use crate::config::SkyviewConfig;
use crate::error::{Result, SkyError};
use crate::types::{ArcPlacement, DaylightWindow};

pub const ARC_SWEEP_DEGREES: f64 = 180.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Fraction of the daylight window elapsed at `now`, clamped to [0, 1].
///
/// All arguments are epoch seconds. A window whose sunset is not after its
/// sunrise is rejected instead of producing NaN or infinity.
pub fn sun_progress(sunrise: i64, sunset: i64, now: i64) -> Result<f64> {
    if sunset <= sunrise {
        return Err(SkyError::InvalidDaylightWindow { sunrise, sunset });
    }
    let total = (sunset as i128 - sunrise as i128) as f64;
    let elapsed = (now as i128 - sunrise as i128) as f64;
    Ok((elapsed / total).clamp(0.0, 1.0))
}

pub fn sun_progress_at<Tz: TimeZone>(
    window: &DaylightWindow,
    now: &DateTime<Tz>,
) -> Result<f64> {
    window.progress_at(now.timestamp())
}

/// Offset of the sun marker on a semicircle of `radius`.
///
/// Progress 0 sits at `(-radius, 0)`, 0.5 at the apex `(0, radius)` and 1 at
/// `(radius, 0)`.
pub fn arc_placement(progress: f64, radius: f64) -> ArcPlacement {
    let rad = deg_to_rad(progress * ARC_SWEEP_DEGREES);
    ArcPlacement {
        x: -radius * rad.cos(),
        y: radius * rad.sin(),
    }
}

pub fn arc_height(placement: &ArcPlacement, config: &SkyviewConfig) -> f64 {
    config.arc_baseline + placement.y
}

/// Night runs from `night_start_hour` up to `night_end_hour`, wrapping past
/// midnight when the start is the later hour. Equal hours mean no night.
pub fn is_night_hour(hour: u32, config: &SkyviewConfig) -> bool {
    let (start, end) = (config.night_start_hour, config.night_end_hour);
    if start > end {
        hour >= start || hour < end
    } else {
        start <= hour && hour < end
    }
}
