use chrono::{DateTime, Datelike, TimeZone, Timelike};
use tracing::warn;

use crate::config::SkyviewConfig;
use crate::meteors::next_shower;
use crate::moon::moon_phase_at;
use crate::sun::{arc_placement, is_night_hour, sun_progress};
use crate::types::{SkyReading, WeatherSnapshot};

/// Sun, moon and meteor values for the sky panel at `now`.
///
/// An unusable daylight window is reported through `daylight_valid` and the
/// sun is parked at sunrise.
pub fn sky_reading<Tz: TimeZone>(
    sunrise: i64,
    sunset: i64,
    now: &DateTime<Tz>,
    config: &SkyviewConfig,
) -> SkyReading {
    let (progress, daylight_valid) = match sun_progress(sunrise, sunset, now.timestamp()) {
        Ok(p) => (p, true),
        Err(err) => {
            warn!(error = %err, "falling back to sunrise position");
            (0.0, false)
        }
    };

    SkyReading {
        sun_progress: progress,
        sun_arc: arc_placement(progress, config.arc_radius),
        daylight_valid,
        moon: moon_phase_at(now),
        is_night: is_night_hour(now.hour(), config),
        next_shower: next_shower(now.month()),
    }
}

pub fn sky_reading_for<Tz: TimeZone>(
    snapshot: &WeatherSnapshot,
    now: &DateTime<Tz>,
    config: &SkyviewConfig,
) -> SkyReading {
    sky_reading(snapshot.sunrise, snapshot.sunset, now, config)
}
