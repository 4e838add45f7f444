use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use tracing::{debug, warn};

use crate::config::SkyviewConfig;
use crate::error::Result;
use crate::types::{
    Coordinates, CurrentConditions, ForecastEntry, SnapshotOrigin, WeatherSnapshot,
};

pub const DAILY_SAMPLE_LIMIT: usize = 5;
pub const HOURLY_SAMPLE_LIMIT: usize = 6;

// keeps scaled jitter strictly below its upper bound after rounding
const UNIT_CEILING: f64 = 1.0 - 1e-9;

const GOLDEN_STEP: f64 = 0.618_033_988_749_895;

/// Supplier of jitter values in [0, 1) for synthetic data.
pub trait NoiseSource {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic additive-recurrence sequence; the same seed always yields
/// the same synthetic forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenRatioNoise {
    state: f64,
}

impl GoldenRatioNoise {
    pub fn new(seed: f64) -> Self {
        Self {
            state: seed.rem_euclid(1.0),
        }
    }
}

impl Default for GoldenRatioNoise {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl NoiseSource for GoldenRatioNoise {
    fn next_unit(&mut self) -> f64 {
        self.state = (self.state + GOLDEN_STEP).fract();
        self.state
    }
}

impl<F: FnMut() -> f64> NoiseSource for F {
    fn next_unit(&mut self) -> f64 {
        self().clamp(0.0, UNIT_CEILING)
    }
}

pub trait WeatherSource {
    fn fetch(&self, city: &str) -> Result<WeatherSnapshot>;
}

impl<F: Fn(&str) -> Result<WeatherSnapshot>> WeatherSource for F {
    fn fetch(&self, city: &str) -> Result<WeatherSnapshot> {
        self(city)
    }
}

/// Clear-sky stand-in used when the live fetch fails.
pub fn synthetic_snapshot<N: NoiseSource>(
    city: &str,
    now: i64,
    config: &SkyviewConfig,
    noise: &mut N,
) -> WeatherSnapshot {
    let mut forecast = Vec::with_capacity(config.synthetic_forecast_len);
    for i in 0..config.synthetic_forecast_len {
        let step = (i as i64).saturating_mul(config.synthetic_step_seconds);
        let timestamp = now.saturating_add(step);
        let temperature = 20.0 + noise.next_unit() * 5.0;
        let precipitation_chance = noise.next_unit() * 0.3;
        forecast.push(ForecastEntry {
            timestamp,
            temperature,
            weather_code: 801,
            icon: "02d".to_string(),
            precipitation_chance,
        });
    }

    WeatherSnapshot {
        city: city.to_string(),
        coord: Coordinates {
            lat: 37.56,
            lon: 126.97,
        },
        current: CurrentConditions {
            temperature: 22.0,
            feels_like: 24.0,
            humidity: 45,
            pressure: 1012.0,
            wind_speed: 3.5,
            wind_deg: 180.0,
            weather_code: 800,
            icon: "01d".to_string(),
        },
        sunrise: now.saturating_sub(config.synthetic_half_daylight_seconds),
        sunset: now.saturating_add(config.synthetic_half_daylight_seconds),
        utc_offset_seconds: 0,
        forecast,
        origin: SnapshotOrigin::Synthetic,
    }
}

pub fn synthetic_city_temperature<N: NoiseSource>(noise: &mut N) -> f64 {
    20.0 + noise.next_unit() * 10.0
}

/// Fetch `city` from `source`, substituting a synthetic snapshot on failure.
pub fn snapshot_or_fallback<S, N>(
    source: &S,
    city: &str,
    now: i64,
    config: &SkyviewConfig,
    noise: &mut N,
) -> WeatherSnapshot
where
    S: WeatherSource + ?Sized,
    N: NoiseSource,
{
    match source.fetch(city) {
        Ok(snapshot) => {
            debug!(city, entries = snapshot.forecast.len(), "fetched live weather");
            snapshot
        }
        Err(err) => {
            warn!(city, error = %err, "weather fetch failed, using synthetic data");
            synthetic_snapshot(city, now, config, noise)
        }
    }
}

fn local_date(timestamp: i64, offset: &FixedOffset) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(offset).date_naive())
}

/// First entry of each distinct local date, at most five days.
pub fn daily_samples(
    entries: &[ForecastEntry],
    utc_offset_seconds: i32,
) -> Vec<&ForecastEntry> {
    let offset = FixedOffset::east_opt(utc_offset_seconds).unwrap_or(Utc.fix());
    let mut seen: Vec<NaiveDate> = Vec::with_capacity(DAILY_SAMPLE_LIMIT);
    let mut days = Vec::with_capacity(DAILY_SAMPLE_LIMIT);

    for entry in entries {
        if days.len() >= DAILY_SAMPLE_LIMIT {
            break;
        }
        let Some(date) = local_date(entry.timestamp, &offset) else {
            continue;
        };
        if !seen.contains(&date) {
            seen.push(date);
            days.push(entry);
        }
    }
    days
}

pub fn hourly_samples(entries: &[ForecastEntry]) -> &[ForecastEntry] {
    &entries[..entries.len().min(HOURLY_SAMPLE_LIMIT)]
}
