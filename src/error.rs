#[derive(Debug, thiserror::Error)]
pub enum SkyError {
    #[error("invalid daylight window: sunset {sunset} is not after sunrise {sunrise}")]
    InvalidDaylightWindow { sunrise: i64, sunset: i64 },
    #[error("weather source error: {0}")]
    Source(String),
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid config field {field}: {message}")]
    InvalidConfig { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, SkyError>;
