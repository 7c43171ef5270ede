use ir_cursor_mapping::corners::{ScreenCorners, calibrate_corners, classify_corners};
use ir_cursor_mapping::error::MappingError;
use ir_cursor_mapping::{MappingConfig, Point, PointF, ScreenConstants, Snapshot};

fn snapshot(points: [(u16, u16); 4]) -> Snapshot {
    Snapshot::new(points.map(|(x, y)| Point::new(x, y)))
}

/// Marker spacing equal to the target width leaves the raw corners in place.
fn identity_config() -> MappingConfig {
    MappingConfig {
        reference_spacing: 100.0,
        target_width: 100.0,
        ..Default::default()
    }
}

fn assert_close(a: PointF, b: PointF, tol: f32) {
    assert!(
        (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol,
        "expected ({:.4},{:.4}) ~ ({:.4},{:.4})",
        a.x,
        a.y,
        b.x,
        b.y
    );
}

#[test]
fn test_classification_ignores_sensor_order() {
    let expected = ScreenCorners::new(
        PointF::new(100.0, 110.0),
        PointF::new(900.0, 90.0),
        PointF::new(120.0, 800.0),
        PointF::new(880.0, 820.0),
    );
    let orders = [
        [(100, 110), (900, 90), (120, 800), (880, 820)],
        [(880, 820), (120, 800), (900, 90), (100, 110)],
        [(900, 90), (880, 820), (100, 110), (120, 800)],
    ];
    for order in orders {
        assert_eq!(classify_corners(&snapshot(order)), Ok(expected));
    }
}

#[test]
fn test_clustered_points_are_ambiguous() {
    let s = snapshot([(100, 100), (100, 100), (100, 100), (500, 500)]);
    assert_eq!(classify_corners(&s), Err(MappingError::AmbiguousCorners));
    assert_eq!(
        calibrate_corners(&s, &MappingConfig::default()),
        Err(MappingError::AmbiguousCorners)
    );
}

#[test]
fn test_point_on_centroid_axis_is_ambiguous() {
    // centroid is (150, 175); the two lower points share its x
    let s = snapshot([(100, 100), (200, 100), (150, 200), (150, 300)]);
    assert_eq!(classify_corners(&s), Err(MappingError::AmbiguousCorners));
}

#[test]
fn test_two_points_in_one_quadrant_are_ambiguous() {
    let s = snapshot([(100, 100), (110, 120), (900, 100), (500, 900)]);
    assert_eq!(classify_corners(&s), Err(MappingError::AmbiguousCorners));
}

#[test]
fn test_identity_calibration_keeps_raw_corners() {
    let s = snapshot([(100, 100), (1000, 100), (100, 900), (1000, 900)]);
    let corners = calibrate_corners(&s, &identity_config()).unwrap();
    assert_close(corners.top_left, PointF::new(100.0, 100.0), 1e-3);
    assert_close(corners.top_right, PointF::new(1000.0, 100.0), 1e-3);
    assert_close(corners.bot_left, PointF::new(100.0, 900.0), 1e-3);
    assert_close(corners.bot_right, PointF::new(1000.0, 900.0), 1e-3);
}

#[test]
fn test_calibration_scales_out_to_target_width() {
    // pair half width 50 camera units = 10 cm, screen half width 29.9 cm
    let s = snapshot([(100, 100), (200, 100), (100, 200), (200, 200)]);
    let corners = calibrate_corners(&s, &MappingConfig::default()).unwrap();
    assert_close(corners.top_left, PointF::new(0.5, 100.0), 1e-3);
    assert_close(corners.top_right, PointF::new(299.5, 100.0), 1e-3);
    assert_close(corners.bot_left, PointF::new(0.5, 200.0), 1e-3);
    assert_close(corners.bot_right, PointF::new(299.5, 200.0), 1e-3);
}

#[test]
fn test_calibration_follows_tilted_pairs() {
    // both pairs slope by 0.1; calibrated corners stay on the pair lines
    let s = snapshot([(400, 300), (600, 320), (400, 700), (600, 720)]);
    let config = MappingConfig {
        reference_spacing: 10.0,
        target_width: 20.0,
        ..Default::default()
    };
    let corners = calibrate_corners(&s, &config).unwrap();
    assert_close(corners.top_left, PointF::new(300.0, 290.0), 1e-2);
    assert_close(corners.top_right, PointF::new(700.0, 330.0), 1e-2);
    assert_close(corners.bot_left, PointF::new(300.0, 690.0), 1e-2);
    assert_close(corners.bot_right, PointF::new(700.0, 730.0), 1e-2);
}

#[test]
fn test_zero_reference_spacing_is_division_by_zero() {
    let s = snapshot([(100, 100), (200, 100), (100, 200), (200, 200)]);
    let config = MappingConfig {
        reference_spacing: 0.0,
        ..Default::default()
    };
    assert_eq!(calibrate_corners(&s, &config), Err(MappingError::DivisionByZero));
}

#[test]
fn test_destination_from_screen_constants() {
    let corners = ScreenCorners::from(ScreenConstants::new(1920, 1080, 2.0));
    assert_eq!(corners, ScreenCorners::from_rect(960.0, 540.0));
    assert_eq!(corners.bot_right, PointF::new(960.0, 540.0));
}
