use serde::{Deserialize, Serialize};

use crate::error::{Result, SkyError};
use crate::meteors::MeteorShower;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaylightWindow {
    pub sunrise: i64,
    pub sunset: i64,
}

impl DaylightWindow {
    pub fn new(sunrise: i64, sunset: i64) -> Result<Self> {
        if sunset <= sunrise {
            return Err(SkyError::InvalidDaylightWindow { sunrise, sunset });
        }
        Ok(Self { sunrise, sunset })
    }

    pub fn length_seconds(&self) -> i64 {
        self.sunset.saturating_sub(self.sunrise)
    }

    pub fn progress_at(&self, now: i64) -> Result<f64> {
        crate::sun::sun_progress(self.sunrise, self.sunset, now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPlacement {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::NewMoon => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::FullMoon => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
        }
    }

    /// Phases up to and including the waxing gibbous count down to full moon;
    /// everything else counts down to the next new moon.
    pub fn counts_to_full(&self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.emoji())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseSample {
    pub fraction: f64,
    pub illumination_pct: u8,
    pub phase: MoonPhase,
    pub days_to_next_boundary: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotOrigin {
    Live,
    Synthetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub weather_code: u16,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: i64,
    pub temperature: f64,
    pub weather_code: u16,
    pub icon: String,
    pub precipitation_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub coord: Coordinates,
    pub current: CurrentConditions,
    /// Raw provider values; not guaranteed to form a valid [`DaylightWindow`].
    pub sunrise: i64,
    pub sunset: i64,
    pub utc_offset_seconds: i32,
    pub forecast: Vec<ForecastEntry>,
    pub origin: SnapshotOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyReading {
    pub sun_progress: f64,
    pub sun_arc: ArcPlacement,
    pub daylight_valid: bool,
    pub moon: MoonPhaseSample,
    pub is_night: bool,
    pub next_shower: &'static MeteorShower,
}
