use chrono::Utc;
use chrono_tz::Asia::Seoul;
use tracing_subscriber::EnvFilter;

use skyview::conditions::{compass_direction, precipitation_pct, OutfitAdvice};
use skyview::config::SkyviewConfig;
use skyview::error::SkyError;
use skyview::forecast::{daily_samples, hourly_samples, snapshot_or_fallback, GoldenRatioNoise};
use skyview::skyview::sky_reading_for;
use skyview::types::WeatherSnapshot;

fn offline(_city: &str) -> skyview::Result<WeatherSnapshot> {
    Err(SkyError::Source("network unavailable".to_string()))
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = SkyviewConfig::default();
    let now = Utc::now().with_timezone(&Seoul);
    let mut noise = GoldenRatioNoise::default();

    let snap = snapshot_or_fallback(
        &offline,
        &config.default_city,
        now.timestamp(),
        &config,
        &mut noise,
    );
    let reading = sky_reading_for(&snap, &now, &config);
    let current = &snap.current;

    println!("=== Sky View: {} ({:?}) ===", snap.city, snap.origin);
    println!("Local time: {}", now.format("%a %b %-d %H:%M"));
    println!();
    println!("--- Today ---");
    println!(
        "Temperature: {:.0}{}",
        config.unit.convert(current.temperature),
        config.unit.symbol()
    );
    println!("Wind: {} m/s {}", current.wind_speed, compass_direction(current.wind_deg));
    println!("Outfit: {}", OutfitAdvice::for_celsius(current.temperature).text());
    let start = snap.forecast.first().map_or(snap.sunrise, |e| e.timestamp);
    for e in hourly_samples(&snap.forecast) {
        println!(
            "  +{:>2}h  {:.0}°  {}%",
            (e.timestamp - start) / 3600,
            e.temperature,
            precipitation_pct(e.precipitation_chance)
        );
    }
    let days = daily_samples(&snap.forecast, snap.utc_offset_seconds);
    println!("Daily samples: {}", days.len());
    println!();
    println!("--- Sky ---");
    println!("Sun progress: {:.1}%", reading.sun_progress * 100.0);
    println!("Sun marker: ({:.1}, {:.1})", reading.sun_arc.x, reading.sun_arc.y);
    println!("Moon: {}", reading.moon.phase);
    println!("{}% Illuminated", reading.moon.illumination_pct);
    println!("Next phase in {} days", reading.moon.days_to_next_boundary);
    println!(
        "Next meteor shower: {} (peak {}, up to {} meteors/hour)",
        reading.next_shower.name, reading.next_shower.peak, reading.next_shower.rate
    );
}
