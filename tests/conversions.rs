//! Coordinate conversions against the linked library. None of these need a
//! kernel, so they run everywhere.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use spicebind::{Geodetic, Latitudinal, RaDec, ReferenceEllipsoid, Spherical, Toolkit};

// WGS84 spheroid, close enough to the library's Earth model for round trips.
const EARTH_ELLIPSOID: ReferenceEllipsoid = ReferenceEllipsoid {
    equatorial_radius_km: 6378.1366,
    flattening: 1.0 / 298.257_223_563,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64, label: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{label}: {actual} vs {expected}"
    );
}

#[test]
fn latitudinal_round_trip_preserves_the_vector() {
    let toolkit = Toolkit::shared();
    let rectan = [1.0, -2.0, 3.0];

    let coords = toolkit.rectangular_to_latitudinal(rectan);
    let back = toolkit.latitudinal_to_rectangular(coords);

    for axis in 0..3 {
        assert_close(back[axis], rectan[axis], 1e-12, "component");
    }
}

#[test]
fn x_axis_is_the_latitudinal_origin() {
    let toolkit = Toolkit::shared();
    let coords = toolkit.rectangular_to_latitudinal([1.0, 0.0, 0.0]);
    assert_close(coords.radius_km, 1.0, 1e-15, "radius");
    assert_close(coords.longitude_rad, 0.0, 1e-15, "longitude");
    assert_close(coords.latitude_rad, 0.0, 1e-15, "latitude");
}

#[test]
fn spherical_round_trip_preserves_the_vector() {
    let toolkit = Toolkit::shared();
    let rectan = [-4.0, 1.5, 2.5];

    let coords = toolkit.rectangular_to_spherical(rectan);
    let back = toolkit.spherical_to_rectangular(coords);

    for axis in 0..3 {
        assert_close(back[axis], rectan[axis], 1e-12, "component");
    }
}

#[test]
fn z_axis_has_zero_colatitude() {
    let toolkit = Toolkit::shared();
    let coords = toolkit.rectangular_to_spherical([0.0, 0.0, 2.0]);
    assert_close(coords.radius_km, 2.0, 1e-15, "radius");
    assert_close(coords.colatitude_rad, 0.0, 1e-15, "colatitude");
}

#[test]
fn right_ascension_wraps_into_the_positive_range() {
    let toolkit = Toolkit::shared();
    // Negative y puts the plain azimuth below zero; the shim's contract is
    // [0, 2pi).
    let coords = toolkit.rectangular_to_ra_dec([1.0, -1.0, 0.0]);
    assert!(
        coords.right_ascension_rad >= 0.0 && coords.right_ascension_rad < 2.0 * PI,
        "right ascension out of range: {}",
        coords.right_ascension_rad
    );
    assert_close(coords.right_ascension_rad, 7.0 * PI / 4.0, 1e-12, "right ascension");
    assert_close(coords.declination_rad, 0.0, 1e-15, "declination");

    let back = toolkit.ra_dec_to_rectangular(coords);
    assert_close(back[0], 1.0, 1e-12, "x");
    assert_close(back[1], -1.0, 1e-12, "y");
    assert_close(back[2], 0.0, 1e-12, "z");
}

#[test]
fn ra_dec_and_latitudinal_agree_on_angles() {
    let toolkit = Toolkit::shared();
    let rectan = [0.3, 0.4, 0.5];

    let ra_dec = toolkit.rectangular_to_ra_dec(rectan);
    let latitudinal = toolkit.rectangular_to_latitudinal(rectan);

    // Declination is latitude; RA is longitude wrapped positive.
    assert_close(ra_dec.declination_rad, latitudinal.latitude_rad, 1e-14, "declination");
    assert_close(ra_dec.range_km, latitudinal.radius_km, 1e-14, "range");
}

#[test]
fn latitudinal_and_spherical_are_complementary() {
    let toolkit = Toolkit::shared();
    let coords = Latitudinal {
        radius_km: 10.0,
        longitude_rad: FRAC_PI_4,
        latitude_rad: FRAC_PI_3,
    };

    let spherical = toolkit.latitudinal_to_spherical(coords);
    assert_close(spherical.radius_km, 10.0, 1e-12, "radius");
    assert_close(spherical.longitude_rad, FRAC_PI_4, 1e-12, "longitude");
    assert_close(
        spherical.colatitude_rad,
        FRAC_PI_2 - coords.latitude_rad,
        1e-12,
        "colatitude",
    );

    let back = toolkit.spherical_to_latitudinal(Spherical {
        radius_km: spherical.radius_km,
        colatitude_rad: spherical.colatitude_rad,
        longitude_rad: spherical.longitude_rad,
    });
    assert_close(back.latitude_rad, coords.latitude_rad, 1e-12, "latitude");
}

#[test]
fn geodetic_round_trip_on_the_reference_ellipsoid() {
    let toolkit = Toolkit::shared();
    let coords = Geodetic {
        longitude_rad: -1.2,
        latitude_rad: 0.8,
        altitude_km: 12.3,
    };

    let rectan = toolkit
        .geodetic_to_rectangular(coords, EARTH_ELLIPSOID)
        .expect("georec");
    let back = toolkit
        .rectangular_to_geodetic(rectan, EARTH_ELLIPSOID)
        .expect("recgeo");

    assert_close(back.longitude_rad, coords.longitude_rad, 1e-10, "longitude");
    assert_close(back.latitude_rad, coords.latitude_rad, 1e-10, "latitude");
    assert_close(back.altitude_km, coords.altitude_km, 1e-6, "altitude");
}

#[test]
fn equatorial_point_sits_at_zero_geodetic_altitude() {
    let toolkit = Toolkit::shared();
    let surface = [EARTH_ELLIPSOID.equatorial_radius_km, 0.0, 0.0];
    let coords = toolkit
        .rectangular_to_geodetic(surface, EARTH_ELLIPSOID)
        .expect("recgeo");
    assert_close(coords.latitude_rad, 0.0, 1e-12, "latitude");
    assert_close(coords.altitude_km, 0.0, 1e-9, "altitude");
}

#[test]
fn angle_constants_are_inverses() {
    let toolkit = Toolkit::shared();
    let dpr = toolkit.degrees_per_radian();
    let rpd = toolkit.radians_per_degree();

    assert_close(dpr, 180.0 / PI, 1e-12, "degrees per radian");
    assert_close(dpr * rpd, 1.0, 1e-15, "product");
}

#[test]
fn a_julian_day_is_86400_seconds() {
    let toolkit = Toolkit::shared();
    assert_eq!(toolkit.seconds_per_day(), 86_400.0);
}
