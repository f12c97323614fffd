mod support;

use spirors::float_types::{PI, Real, TAU, tolerance};
use spirors::{ConfigError, DrivePoint, GearConfig};
use support::{approx_eq, classic_config, point_distance};

#[test]
fn pen_point_matches_hand_computed_values() {
    let config = classic_config();
    let center = DrivePoint::new(450.0, 450.0);

    // At angle 0 every cosine is 1 and every sine is 0:
    // x = cx + (R - r) + d, y = cy.
    let at_zero = config.pen_point(0.0, center);
    assert!(approx_eq(at_zero.x, 450.0 + 75.0 + 75.0, 1e-9));
    assert!(approx_eq(at_zero.y, 450.0, 1e-9));

    // At angle π/2 with ratio (R-r)/r = 5/3:
    // x = cx + d·cos(5π/6), y = cy + (R - r) − d·sin(5π/6).
    let quarter = config.pen_point(PI / 2.0, center);
    assert!(approx_eq(quarter.x, 450.0 + 75.0 * (5.0 * PI / 6.0).cos(), 1e-9));
    assert!(approx_eq(quarter.y, 450.0 + 75.0 - 75.0 * (5.0 * PI / 6.0).sin(), 1e-9));
}

#[test]
fn curve_closes_after_one_cycle_extent() {
    let center = DrivePoint::new(0.0, 0.0);
    let configs = [
        classic_config(),
        GearConfig::new(150.0, 90.0, 120.0).unwrap(),
        GearConfig::new(105.0, 30.0, 90.0).unwrap(),
        GearConfig::new(135.0, 68.0, 128.0).unwrap(),
        GearConfig::new(128.0, 83.0, 135.0).unwrap(),
    ];
    for config in configs {
        let extent = config.cycle_extent();
        for i in 0..8 {
            let angle = i as Real * 0.9;
            let a = config.pen_point(angle, center);
            let b = config.pen_point(angle + extent, center);
            assert!(
                point_distance(a, b) < tolerance() * config.outer_radius(),
                "curve did not close for R={}, r={} at angle {angle}",
                config.outer_radius(),
                config.inner_radius(),
            );
        }
    }
}

#[test]
fn cycle_extent_is_not_symmetric_in_the_radii() {
    // rotations = r / gcd(R, r): R=120, r=45 → gcd 15 → 3 turns → 6π.
    let config = classic_config();
    assert_eq!(config.rotations(), 3);
    assert!(approx_eq(config.cycle_extent(), 6.0 * PI, 1e-9));

    // Swapping the roles (r=45 ring, smaller gear 15 keeps gcd 15) gives a
    // different turn count: rotations = 15/15 = 1.
    let swapped = GearConfig::new(45.0, 15.0, 10.0).unwrap();
    assert_eq!(swapped.rotations(), 1);
    assert!(approx_eq(swapped.cycle_extent(), TAU, 1e-9));
    assert!(swapped.cycle_extent() != config.cycle_extent());
}

#[test]
fn coprime_radii_need_r_full_turns() {
    let config = GearConfig::new(120.0, 49.0, 60.0).unwrap();
    assert_eq!(config.rotations(), 49);
}

#[test]
fn inner_gear_center_rides_the_ring() {
    let config = classic_config();
    let center = DrivePoint::new(100.0, 100.0);
    for i in 0..12 {
        let angle = i as Real * 0.6;
        let gear = config.inner_gear_center(angle, center);
        // Always at distance R - r from the canvas center.
        assert!(approx_eq(point_distance(gear, center), 75.0, 1e-9));
    }
}

#[test]
fn zero_inner_radius_is_a_configuration_error() {
    // Rejected at construction, never deferred into a division fault.
    assert_eq!(
        GearConfig::new(120.0, 0.0, 75.0).unwrap_err(),
        ConfigError::ZeroInnerRadius
    );
}

#[test]
fn invalid_gear_triples_are_rejected() {
    assert!(matches!(
        GearConfig::new(120.0, 120.0, 75.0),
        Err(ConfigError::InnerNotSmaller { .. })
    ));
    assert!(matches!(
        GearConfig::new(45.0, 120.0, 75.0),
        Err(ConfigError::InnerNotSmaller { .. })
    ));
    assert!(matches!(
        GearConfig::new(-120.0, 45.0, 75.0),
        Err(ConfigError::NonPositiveRadius(_))
    ));
    assert!(matches!(
        GearConfig::new(120.0, -45.0, 75.0),
        Err(ConfigError::NonPositiveRadius(_))
    ));
    assert!(matches!(
        GearConfig::new(120.0, 45.0, -1.0),
        Err(ConfigError::NegativePenDistance(_))
    ));
    assert!(matches!(
        GearConfig::new(Real::NAN, 45.0, 75.0),
        Err(ConfigError::NonPositiveRadius(_))
    ));
    // d = 0 is legal: the pen sits at the inner gear center.
    assert!(GearConfig::new(120.0, 45.0, 0.0).is_ok());
}

#[test]
fn sampled_points_are_always_finite() {
    let config = classic_config();
    let center = DrivePoint::new(450.0, 450.0);
    for i in 0..1000 {
        let p = config.pen_point(i as Real * 0.05, center);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
