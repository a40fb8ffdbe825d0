//! Property-based tests for the mapping strategies

use head_mouse::calibration::CalibrationState;
use head_mouse::mapping::{LinearMapper, TargetMapper, Zone, ZoneMapper};
use proptest::prelude::*;

fn calibrated(center_x: f32, threshold: f32, range_x: f32, sensitivity: f64) -> CalibrationState {
    let mut calib = CalibrationState::new(threshold, range_x, sensitivity);
    calib.center_x = center_x;
    calib
}

proptest! {
    /// Every sample classifies into exactly one zone, and the target always
    /// matches that zone's fixed coordinate
    #[test]
    fn prop_zone_classification_is_total(
        head_x in -2.0f32..2.0,
        center_x in -1.0f32..1.0,
        threshold in 0.001f32..0.1,
        sensitivity in 0.1f64..4.0,
    ) {
        let mapper = ZoneMapper::new(1920);
        let calib = calibrated(center_x, threshold, 0.3, sensitivity);
        let target = mapper.map(head_x, &calib);

        let zone = target.zone.expect("zone mapping always labels a zone");
        prop_assert_eq!(target.target_x, zone.target_x(1920));
        prop_assert!(matches!(zone, Zone::Left | Zone::Center | Zone::Right));
    }

    /// Samples exactly at the scaled threshold classify as CENTER
    #[test]
    fn prop_zone_boundary_is_center(
        threshold in 0.001f32..0.1,
    ) {
        // Center at zero and unit sensitivity keep the boundary offset
        // exactly representable
        let calib = calibrated(0.0, threshold, 0.3, 1.0);
        let mapper = ZoneMapper::new(1920);

        let eff = calib.effective_threshold();
        prop_assert_eq!(mapper.map(eff, &calib).zone, Some(Zone::Center));
        prop_assert_eq!(mapper.map(-eff, &calib).zone, Some(Zone::Center));
    }

    /// The linear target always lands within the screen, however large the
    /// raw offset
    #[test]
    fn prop_linear_output_within_screen(
        head_x in -1000.0f32..1000.0,
        center_x in -1.0f32..1.0,
        range_x in 0.05f32..1.0,
        sensitivity in 0.1f64..4.0,
        screen_width in 640i32..7680,
    ) {
        let mapper = LinearMapper::new(screen_width);
        let calib = calibrated(center_x, 0.01, range_x, sensitivity);
        let target = mapper.map(head_x, &calib);

        prop_assert!(target.target_x >= 0);
        prop_assert!(target.target_x <= screen_width - 1);
        prop_assert!(target.zone.is_none());
    }

    /// For fixed calibration the linear target is non-decreasing in head X
    #[test]
    fn prop_linear_is_monotonic(
        a in -2.0f32..2.0,
        b in -2.0f32..2.0,
        center_x in -1.0f32..1.0,
        range_x in 0.05f32..1.0,
        sensitivity in 0.1f64..4.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mapper = LinearMapper::new(1920);
        let calib = calibrated(center_x, 0.01, range_x, sensitivity);

        prop_assert!(mapper.map(lo, &calib).target_x <= mapper.map(hi, &calib).target_x);
    }

    /// The calibrated center maps to the middle of the screen regardless of
    /// range and sensitivity
    #[test]
    fn prop_linear_center_maps_to_middle(
        center_x in -1.0f32..1.0,
        range_x in 0.05f32..1.0,
        sensitivity in 0.1f64..4.0,
        screen_width in (320i32..3840).prop_map(|w| w * 2),
    ) {
        let mapper = LinearMapper::new(screen_width);
        let calib = calibrated(center_x, 0.01, range_x, sensitivity);

        let target = mapper.map(center_x, &calib).target_x;
        prop_assert_eq!(target, screen_width / 2);
    }
}
