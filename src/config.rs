use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conditions::TemperatureUnit;
use crate::error::{Result, SkyError};

/// Thirty days of three-hour steps.
pub const MAX_SYNTHETIC_FORECAST_LEN: usize = 240;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyviewConfig {
    pub default_city: String,

    pub unit: TemperatureUnit,

    /// Radius of the sun arc in display units
    pub arc_radius: f64,

    /// Distance between the panel bottom and the arc's horizon line
    pub arc_baseline: f64,

    /// Local hour at which the night theme starts
    pub night_start_hour: u32,

    /// Local hour at which the night theme ends
    pub night_end_hour: u32,

    pub synthetic_forecast_len: usize,
    pub synthetic_step_seconds: i64,

    /// Half of the synthetic daylight window, centered on the fetch time
    pub synthetic_half_daylight_seconds: i64,
}

impl Default for SkyviewConfig {
    fn default() -> Self {
        Self {
            default_city: "Seoul".to_string(),
            unit: TemperatureUnit::Celsius,
            arc_radius: 120.0,
            arc_baseline: 20.0,
            night_start_hour: 19,
            night_end_hour: 6,
            synthetic_forecast_len: 40,
            synthetic_step_seconds: 10_800,
            synthetic_half_daylight_seconds: 14_400,
        }
    }
}

impl SkyviewConfig {
    /// Parse a TOML document, filling missing fields from the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        debug!(city = %config.default_city, unit = ?config.unit, "loaded skyview config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.night_start_hour >= 24 {
            return Err(invalid("night_start_hour", "must be below 24"));
        }
        if self.night_end_hour >= 24 {
            return Err(invalid("night_end_hour", "must be below 24"));
        }
        if !(self.arc_radius > 0.0) {
            return Err(invalid("arc_radius", "must be positive"));
        }
        if self.night_start_hour == self.night_end_hour {
            return Err(invalid("night_end_hour", "must differ from night_start_hour"));
        }
        if self.synthetic_forecast_len > MAX_SYNTHETIC_FORECAST_LEN {
            return Err(SkyError::InvalidConfig {
                field: "synthetic_forecast_len",
                message: format!("must be at most {MAX_SYNTHETIC_FORECAST_LEN}"),
            });
        }
        if self.synthetic_step_seconds <= 0 {
            return Err(invalid("synthetic_step_seconds", "must be positive"));
        }
        if self.synthetic_half_daylight_seconds <= 0 {
            return Err(invalid(
                "synthetic_half_daylight_seconds",
                "must be positive",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: &str) -> SkyError {
    SkyError::InvalidConfig {
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = SkyviewConfig::default();
        assert_eq!(c.default_city, "Seoul");
        assert_eq!(c.unit, TemperatureUnit::Celsius);
        assert_eq!(c.arc_radius, 120.0);
        assert_eq!(c.night_start_hour, 19);
        assert_eq!(c.night_end_hour, 6);
        assert_eq!(c.synthetic_forecast_len, 40);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c = SkyviewConfig::from_toml_str("default_city = \"Busan\"\nunit = \"fahrenheit\"\n")
            .unwrap();
        assert_eq!(c.default_city, "Busan");
        assert_eq!(c.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(c.arc_radius, 120.0);
        assert_eq!(c.synthetic_step_seconds, 10_800);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SkyviewConfig::from_toml_str("").unwrap(), SkyviewConfig::default());
    }

    #[test]
    fn test_rejects_bad_hour() {
        let err = SkyviewConfig::from_toml_str("night_start_hour = 24").unwrap_err();
        assert!(matches!(
            err,
            SkyError::InvalidConfig { field: "night_start_hour", .. }
        ));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let err = SkyviewConfig::from_toml_str("arc_radius = 0.0").unwrap_err();
        assert!(matches!(err, SkyError::InvalidConfig { field: "arc_radius", .. }));
    }

    #[test]
    fn test_rejects_equal_night_hours() {
        let err = SkyviewConfig::from_toml_str("night_start_hour = 6\nnight_end_hour = 6")
            .unwrap_err();
        assert!(matches!(err, SkyError::InvalidConfig { field: "night_end_hour", .. }));
    }

    #[test]
    fn test_accepts_daytime_night_window() {
        let c = SkyviewConfig::from_toml_str("night_start_hour = 0\nnight_end_hour = 6").unwrap();
        assert_eq!((c.night_start_hour, c.night_end_hour), (0, 6));
    }

    #[test]
    fn test_rejects_oversized_forecast() {
        let err = SkyviewConfig::from_toml_str("synthetic_forecast_len = 10000000000").unwrap_err();
        assert!(matches!(
            err,
            SkyError::InvalidConfig { field: "synthetic_forecast_len", .. }
        ));
        let at_cap = format!("synthetic_forecast_len = {MAX_SYNTHETIC_FORECAST_LEN}");
        assert!(SkyviewConfig::from_toml_str(&at_cap).is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SkyviewConfig::from_toml_str("arc_radius = ").unwrap_err();
        assert!(matches!(err, SkyError::Config(_)));
    }
}
