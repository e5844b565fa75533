use proptest::prelude::*;
use sunbright::core::{
    BrightnessCurve, DisplaySettings, Theme, ThemeNames, clamp_percentage, evaluate, select_theme,
};

/// Curves with valid brightness bounds and integer altitude thresholds
fn curve_strategy() -> impl Strategy<Value = BrightnessCurve> {
    (0..=100i32, 0..=100i32, -90..90i32, 1..=90i32).prop_map(|(b1, b2, min_alt, width)| {
        let max_alt = (min_alt + width).min(90);
        BrightnessCurve {
            min_brightness: b1.min(b2),
            max_brightness: b1.max(b2),
            min_altitude: f64::from(min_alt),
            max_altitude: f64::from(max_alt),
        }
    })
}

fn altitude_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0f64
}

proptest! {
    #[test]
    fn test_below_lower_threshold_is_min_brightness(
        curve in curve_strategy(),
        below in 0.0..1000.0f64
    ) {
        prop_assert_eq!(curve.map(curve.min_altitude - below), curve.min_brightness);
    }

    #[test]
    fn test_above_upper_threshold_is_max_brightness(
        curve in curve_strategy(),
        above in 0.0..1000.0f64
    ) {
        prop_assert_eq!(curve.map(curve.max_altitude + above), curve.max_brightness);
    }

    #[test]
    fn test_midpoint_maps_to_rounded_midpoint(curve in curve_strategy()) {
        let mid_altitude = (curve.min_altitude + curve.max_altitude) / 2.0;
        let expected = (f64::from(curve.min_brightness + curve.max_brightness) / 2.0).round() as i32;
        prop_assert_eq!(curve.map(mid_altitude), expected);
    }

    #[test]
    fn test_map_is_monotonic(
        curve in curve_strategy(),
        a in altitude_strategy(),
        b in altitude_strategy()
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.map(low) <= curve.map(high));
    }

    #[test]
    fn test_map_stays_within_configured_range(
        curve in curve_strategy(),
        altitude in -1000.0..1000.0f64
    ) {
        let brightness = curve.map(altitude);
        prop_assert!(brightness >= curve.min_brightness);
        prop_assert!(brightness <= curve.max_brightness);
    }

    #[test]
    fn test_theme_is_total(altitude in any::<f64>()) {
        let theme = select_theme(altitude);
        prop_assert!(theme == Theme::Light || theme == Theme::Dark);
        if altitude >= 0.0 {
            prop_assert_eq!(theme, Theme::Light);
        }
    }

    #[test]
    fn test_applied_brightness_is_a_percentage(
        curve in curve_strategy(),
        dark_compensation in -100..=100i32,
        altitude in any::<f64>()
    ) {
        let settings = DisplaySettings {
            curve,
            dark_compensation,
            themes: ThemeNames::default(),
        };
        let evaluation = evaluate(altitude, &settings);
        prop_assert!(evaluation.brightness <= 100);
    }

    #[test]
    fn test_evaluate_is_idempotent(curve in curve_strategy(), altitude in altitude_strategy()) {
        let settings = DisplaySettings {
            curve,
            dark_compensation: 15,
            themes: ThemeNames::default(),
        };
        prop_assert_eq!(evaluate(altitude, &settings), evaluate(altitude, &settings));
    }

    #[test]
    fn test_clamp_percentage(value in any::<i32>()) {
        let clamped = clamp_percentage(value);
        prop_assert!(clamped <= 100);
        if (0..=100).contains(&value) {
            prop_assert_eq!(i32::from(clamped), value);
        }
    }
}

#[test]
fn test_sun_on_horizon_is_light() {
    assert_eq!(select_theme(0.0), Theme::Light);
    assert_eq!(select_theme(-0.0), Theme::Light);
    assert_eq!(select_theme(-1e-9), Theme::Dark);
}
