use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "\u{2103}",
            Self::Fahrenheit => "\u{2109}",
        }
    }
}

/// Background category derived from an OpenWeather condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Storm,
    Rain,
    Snow,
    Mist,
    Clear,
    Clouds,
    Unknown,
}

impl WeatherCategory {
    /// See: https://openweathermap.org/weather-conditions
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => Self::Storm,
            300..=599 => Self::Rain, // drizzle and rain share a background
            600..=699 => Self::Snow,
            700..=799 => Self::Mist,
            800 => Self::Clear,
            801.. => Self::Clouds,
            _ => Self::Unknown,
        }
    }

    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Storm => Some("storm"),
            Self::Rain => Some("rain"),
            Self::Snow => Some("snow"),
            Self::Mist => Some("mist"),
            Self::Clear => Some("clear"),
            Self::Clouds => Some("clouds"),
            Self::Unknown => None,
        }
    }
}

pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn compass_direction(deg: f64) -> &'static str {
    let normalized = deg.rem_euclid(360.0);
    let index = (normalized / 45.0).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

pub fn feels_bar_pct(feels_like: f64) -> f64 {
    (feels_like / 40.0 * 100.0).clamp(0.0, 100.0)
}

pub fn pressure_bar_pct(pressure_hpa: f64) -> f64 {
    ((pressure_hpa - 950.0) / 100.0 * 100.0).clamp(0.0, 100.0)
}

pub fn precipitation_pct(chance: f64) -> u8 {
    (chance * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfitAdvice {
    WarmCoat,
    Comfortable,
    StayCool,
}

impl OutfitAdvice {
    pub fn for_celsius(temperature: f64) -> Self {
        if temperature < 10.0 {
            Self::WarmCoat
        } else if temperature > 25.0 {
            Self::StayCool
        } else {
            Self::Comfortable
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::WarmCoat => "\u{1F9E5}",
            Self::Comfortable => "\u{1F455}",
            Self::StayCool => "\u{1F3BD}",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::WarmCoat => "Wear a warm coat.",
            Self::Comfortable => "Comfortable weather.",
            Self::StayCool => "Stay cool and hydrated.",
        }
    }
}
