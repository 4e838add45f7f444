pub mod conditions;
pub mod config;
pub mod error;
pub mod forecast;
pub mod meteors;
pub mod moon;
pub mod skyview;
pub mod sun;
pub mod types;

pub use conditions::{
    compass_direction, feels_bar_pct, precipitation_pct, pressure_bar_pct, OutfitAdvice,
    TemperatureUnit, WeatherCategory, COMPASS_POINTS,
};

pub use config::SkyviewConfig;

pub use error::{Result, SkyError};

pub use forecast::{
    daily_samples, hourly_samples, snapshot_or_fallback, synthetic_city_temperature,
    synthetic_snapshot, GoldenRatioNoise, NoiseSource, WeatherSource,
};

pub use meteors::{next_shower, MeteorShower, METEOR_SHOWERS};

pub use moon::{
    days_to_next_boundary, illumination_pct, moon_phase, moon_phase_at, moon_phase_from_fraction,
    moon_phase_on, phase_bucket, phase_fraction, shading_offset_pct, SYNODIC_MONTH,
    SYNODIC_MONTH_ROUNDED,
};

pub use skyview::{sky_reading, sky_reading_for};

pub use sun::{
    arc_height, arc_placement, deg_to_rad, is_night_hour, rad_to_deg, sun_progress,
    sun_progress_at, ARC_SWEEP_DEGREES,
};

pub use types::{
    ArcPlacement, Coordinates, CurrentConditions, DaylightWindow, ForecastEntry, MoonPhase,
    MoonPhaseSample, SkyReading, SnapshotOrigin, WeatherSnapshot,
};
