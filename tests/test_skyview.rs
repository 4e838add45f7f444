use chrono::TimeZone;
use chrono_tz::Asia::Seoul;

use skyview::config::SkyviewConfig;
use skyview::forecast::{synthetic_snapshot, GoldenRatioNoise};
use skyview::meteors::{next_shower, METEOR_SHOWERS};
use skyview::moon::moon_phase;
use skyview::skyview::{sky_reading, sky_reading_for};
use skyview::types::MoonPhase;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Meteors ──

#[test]
fn test_next_shower_by_month() {
    assert_eq!(next_shower(1).name, "Lyrids");
    assert_eq!(next_shower(4).name, "Eta Aquarids");
    assert_eq!(next_shower(6).name, "Perseids");
    assert_eq!(next_shower(10).name, "Leonids");
    assert_eq!(next_shower(11).name, "Geminids");
}

#[test]
fn test_next_shower_wraps_after_december() {
    assert_eq!(next_shower(12).name, "Quadrantids");
    assert_eq!(next_shower(12).rate, 120);
}

#[test]
fn test_shower_table_sorted_by_month() {
    assert!(METEOR_SHOWERS.windows(2).all(|w| w[0].month < w[1].month));
}

// ── SkyReading ──

#[test]
fn test_reading_with_daytime_night_window() {
    let config = SkyviewConfig {
        night_start_hour: 0,
        night_end_hour: 6,
        ..SkyviewConfig::default()
    };
    let noon = Seoul.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap();
    let early = Seoul.with_ymd_and_hms(2024, 1, 11, 3, 0, 0).unwrap();
    let t = noon.timestamp();
    assert!(!sky_reading(t - 3_600, t + 3_600, &noon, &config).is_night);
    assert!(sky_reading(t - 3_600, t + 3_600, &early, &config).is_night);
}

#[test]
fn test_reading_midday_in_seoul() {
    let config = SkyviewConfig::default();
    let now = Seoul.with_ymd_and_hms(2024, 1, 11, 12, 30, 0).unwrap();
    let t = now.timestamp();
    let reading = sky_reading(t - 18_000, t + 18_000, &now, &config);

    assert!(reading.daylight_valid);
    assert_approx!(reading.sun_progress, 0.5, 1e-12);
    assert_approx!(reading.sun_arc.x, 0.0, 1e-9);
    assert_approx!(reading.sun_arc.y, 120.0, 1e-9);
    assert!(!reading.is_night);
    assert_eq!(reading.moon, moon_phase(2024, 1, 11));
    assert_eq!(reading.moon.phase, MoonPhase::WaningGibbous);
    assert_eq!(reading.next_shower.name, "Lyrids");
}

#[test]
fn test_reading_invalid_window_parks_sun_at_sunrise() {
    let config = SkyviewConfig::default();
    let now = Seoul.with_ymd_and_hms(2024, 8, 1, 21, 0, 0).unwrap();
    let t = now.timestamp();
    let reading = sky_reading(t, t - 60, &now, &config);

    assert!(!reading.daylight_valid);
    assert_eq!(reading.sun_progress, 0.0);
    assert_approx!(reading.sun_arc.x, -120.0, 1e-9);
    assert!(reading.is_night);
    assert_eq!(reading.next_shower.name, "Orionids");
}

#[test]
fn test_reading_from_synthetic_snapshot() {
    let config = SkyviewConfig::default();
    let now = Seoul.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
    let mut noise = GoldenRatioNoise::default();
    let snap = synthetic_snapshot("Seoul", now.timestamp(), &config, &mut noise);
    let reading = sky_reading_for(&snap, &now, &config);

    assert!(reading.daylight_valid);
    assert_approx!(reading.sun_progress, 0.5, 1e-12);
    assert_eq!(reading.moon, moon_phase(2026, 10, 17));
}

#[test]
fn test_reading_is_idempotent() {
    let config = SkyviewConfig::default();
    let now = Seoul.with_ymd_and_hms(2025, 3, 3, 7, 15, 0).unwrap();
    let t = now.timestamp();
    assert_eq!(
        sky_reading(t - 3_600, t + 30_000, &now, &config),
        sky_reading(t - 3_600, t + 30_000, &now, &config)
    );
}
