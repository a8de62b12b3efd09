//! End-to-end tests against the linked library and the catalog kernels.
//! Every test serializes on a file-local guard and skips cleanly when the
//! kernels have not been fetched yet.

use std::f64::consts::PI;
use std::sync::{Mutex, OnceLock};

use spicebind::kernels::{self, KERNEL_CATALOG, KernelKind};
use spicebind::{
    AberrationCorrection, BodyShape, Constraint, EphemerisQuery, EpochKind, FixedPoint,
    InterceptQuery, KernelCategory, MovingPoint, OccultationKind, Planetographic,
    ReferenceEllipsoid, ReferenceLocus, SearchWindow, SpiceError, SubPointMethod, SubPointQuery,
    TargetBody, TimeSystem, TimeWindow, Toolkit, UtcFormat, epochs,
};

const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
const MOON_RADIUS_KM: f64 = 1737.4;

fn guard() -> &'static Mutex<()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(()))
}

fn ensure_kernels_or_skip() -> Option<&'static Toolkit> {
    let toolkit = Toolkit::shared();
    match kernels::load_defaults(toolkit) {
        Ok(()) => Some(toolkit),
        Err(SpiceError::MissingKernel { path, .. }) => {
            eprintln!(
                "Skipping ephemeris tests: missing kernel at {path}. Run `cargo run --bin fetch_kernels` first."
            );
            None
        }
        Err(err) => panic!("Unexpected SPICE initialization error: {err}"),
    }
}

fn norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn catalog_path(kind: KernelKind) -> String {
    let descriptor = KERNEL_CATALOG
        .iter()
        .find(|descriptor| descriptor.kind == kind)
        .expect("catalog covers every kind");
    descriptor.local_path().to_str().expect("utf8 path").to_string()
}

#[test]
fn kernel_catalog_is_present_and_sized() {
    let _lock = guard().lock().unwrap();
    if ensure_kernels_or_skip().is_none() {
        return;
    }

    let summaries = kernels::kernel_summaries().expect("kernel summaries should load");
    assert_eq!(
        summaries.len(),
        KERNEL_CATALOG.len(),
        "all catalog kernels should be reported"
    );
    for summary in summaries {
        assert!(
            summary.file_size_bytes > 0,
            "kernel {} should have non-zero size",
            summary.descriptor.filename
        );
    }
}

#[test]
fn loaded_kernel_table_covers_the_catalog() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    assert!(toolkit.kernel_count(KernelCategory::All).expect("ktotal") >= 3);
    assert!(toolkit.kernel_count(KernelCategory::Spk).expect("ktotal") >= 1);
    // Leapseconds and the text PCK both count as text kernels.
    assert!(toolkit.kernel_count(KernelCategory::Text).expect("ktotal") >= 2);

    let data = toolkit
        .kernel_data(0, KernelCategory::Spk)
        .expect("kdata")
        .expect("at least one SPK is loaded");
    assert!(data.file.ends_with(".bsp"), "unexpected SPK file: {}", data.file);
    assert_eq!(data.kind, "SPK");
}

#[test]
fn spk_summary_lists_the_planetary_bodies() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let ids = toolkit
        .spk_bodies(&catalog_path(KernelKind::Spk))
        .expect("spkobj");
    for expected in [10, 4, 301, 399] {
        assert!(ids.contains(&expected), "missing body {expected} in {ids:?}");
    }
}

#[test]
fn body_codes_round_trip_through_names() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    assert_eq!(toolkit.body_code("EARTH").expect("bodn2c"), Some(399));
    assert_eq!(toolkit.body_code("MARS BARYCENTER").expect("bodn2c"), Some(4));
    assert_eq!(
        toolkit.body_name(301).expect("bodc2n").as_deref(),
        Some("MOON")
    );
    assert_eq!(toolkit.body_code("NOT A REAL BODY").expect("bodn2c"), None);
}

#[test]
fn radii_come_from_the_constants_pool() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let radii = toolkit.body_constants("EARTH", "RADII", 3).expect("bodvrd");
    assert_eq!(radii.len(), 3);
    assert!(
        (radii[0] - 6378.14).abs() < 0.01,
        "unexpected Earth equatorial radius: {}",
        radii[0]
    );

    // Extra room is trimmed to the stored dimension.
    let roomy = toolkit.body_constants("EARTH", "RADII", 8).expect("bodvrd");
    assert_eq!(roomy.len(), 3);

    let moon = toolkit.body_constants_by_id(301, "RADII", 3).expect("bodvcd");
    assert!((moon[0] - MOON_RADIUS_KM).abs() < 0.1);
}

#[test]
fn mars_barycenter_state_is_reasonable() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-01-01 12:00:00 TDB").expect("str2et");
    let query = EphemerisQuery {
        target: "MARS BARYCENTER",
        observer: "EARTH",
        frame: "J2000",
        correction: AberrationCorrection::None,
    };
    let state = toolkit.state(&query, et).expect("spkezr");

    let distance = norm(&state.position_km);
    assert!(
        (5.0e7..4.2e8).contains(&distance),
        "Earth-Mars distance out of range: {distance} km"
    );
    let speed = norm(&state.velocity_km_s);
    assert!(speed > 0.0 && speed < 100.0, "relative speed: {speed} km/s");

    // Geometric light time is distance over c.
    let expected_light_time = distance / SPEED_OF_LIGHT_KM_S;
    assert!(
        (state.light_time_seconds - expected_light_time).abs() < 1e-6,
        "light time {} vs {}",
        state.light_time_seconds,
        expected_light_time
    );

    let position = toolkit.position(&query, et).expect("spkpos");
    for axis in 0..3 {
        assert!((position.position_km[axis] - state.position_km[axis]).abs() < 1e-6);
    }
}

#[test]
fn moon_distance_stays_within_its_orbit() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-04-01 00:00:00 TDB").expect("str2et");
    let position = toolkit
        .position(
            &EphemerisQuery {
                target: "MOON",
                observer: "EARTH",
                frame: "J2000",
                correction: AberrationCorrection::None,
            },
            et,
        )
        .expect("spkpos");
    let distance = norm(&position.position_km);
    assert!(
        (3.5e5..4.1e5).contains(&distance),
        "Earth-Moon distance out of range: {distance} km"
    );
}

#[test]
fn offset_observers_with_zero_offset_match_the_direct_lookup() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-07-01 00:00:00 TDB").expect("str2et");
    let correction = AberrationCorrection::None;
    let reference = toolkit
        .state(
            &EphemerisQuery {
                target: "MARS BARYCENTER",
                observer: "EARTH",
                frame: "J2000",
                correction,
            },
            et,
        )
        .expect("spkezr");

    let at_earth_center = FixedPoint {
        position_km: [0.0, 0.0, 0.0],
        center: "EARTH",
        frame: "J2000",
    };
    let from_fixed = toolkit
        .state_from_fixed_observer(
            "MARS BARYCENTER",
            et,
            "J2000",
            ReferenceLocus::Observer,
            correction,
            at_earth_center,
        )
        .expect("spkcpo");

    let at_mars_center = FixedPoint {
        position_km: [0.0, 0.0, 0.0],
        center: "MARS BARYCENTER",
        frame: "J2000",
    };
    let of_fixed = toolkit
        .state_of_fixed_target(
            at_mars_center,
            et,
            "J2000",
            ReferenceLocus::Observer,
            correction,
            "EARTH",
        )
        .expect("spkcpt");

    let moving_earth_center = MovingPoint {
        position_km: [0.0, 0.0, 0.0],
        velocity_km_s: [0.0, 0.0, 0.0],
        epoch_et: et,
        center: "EARTH",
        frame: "J2000",
    };
    let from_moving = toolkit
        .state_from_moving_observer(
            "MARS BARYCENTER",
            et,
            "J2000",
            ReferenceLocus::Observer,
            correction,
            moving_earth_center,
        )
        .expect("spkcvo");

    let moving_mars_center = MovingPoint {
        position_km: [0.0, 0.0, 0.0],
        velocity_km_s: [0.0, 0.0, 0.0],
        epoch_et: et,
        center: "MARS BARYCENTER",
        frame: "J2000",
    };
    let of_moving = toolkit
        .state_of_moving_target(
            moving_mars_center,
            et,
            "J2000",
            ReferenceLocus::Observer,
            correction,
            "EARTH",
        )
        .expect("spkcvt");

    for candidate in [&from_fixed, &of_fixed, &from_moving, &of_moving] {
        for axis in 0..3 {
            assert!(
                (candidate.position_km[axis] - reference.position_km[axis]).abs() < 1e-6,
                "position mismatch on axis {axis}"
            );
            assert!(
                (candidate.velocity_km_s[axis] - reference.velocity_km_s[axis]).abs() < 1e-9,
                "velocity mismatch on axis {axis}"
            );
        }
    }
}

#[test]
fn frame_transforms_are_orthonormal_and_consistent() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-01-01 00:00:00 TDB").expect("str2et");

    let identity = toolkit
        .position_transform("J2000", "J2000", et)
        .expect("pxform");
    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert!((identity[row][col] - expected).abs() < 1e-14);
        }
    }

    let rotation = toolkit
        .position_transform("J2000", "IAU_EARTH", et)
        .expect("pxform");
    for row in 0..3 {
        let length = norm(&rotation[row]);
        assert!((length - 1.0).abs() < 1e-12, "row {row} not unit length");
    }
    let dot_01: f64 = (0..3).map(|k| rotation[0][k] * rotation[1][k]).sum();
    assert!(dot_01.abs() < 1e-12, "rows not orthogonal: {dot_01}");

    // The rotation block of the state transform is the position transform.
    let state_transform = toolkit
        .state_transform("J2000", "IAU_EARTH", et)
        .expect("sxform");
    for row in 0..3 {
        for col in 0..3 {
            assert!((state_transform[row][col] - rotation[row][col]).abs() < 1e-13);
        }
    }

    // With equal epochs the two-epoch variant degenerates to pxform.
    let between = toolkit
        .position_transform_between("J2000", "IAU_EARTH", et, et)
        .expect("pxfrm2");
    for row in 0..3 {
        for col in 0..3 {
            assert!((between[row][col] - rotation[row][col]).abs() < 1e-13);
        }
    }
}

#[test]
fn lunar_intercept_hits_and_misses() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-02-01 00:00:00 TDB").expect("str2et");
    let toward_moon = toolkit
        .position(
            &EphemerisQuery {
                target: "MOON",
                observer: "EARTH",
                frame: "J2000",
                correction: AberrationCorrection::None,
            },
            et,
        )
        .expect("spkpos")
        .position_km;

    let hit = toolkit
        .surface_intercept(
            &InterceptQuery {
                target: "MOON",
                fixed_frame: "IAU_MOON",
                observer: "EARTH",
                correction: AberrationCorrection::None,
                ray_frame: "J2000",
                ray_direction: toward_moon,
            },
            et,
        )
        .expect("sincpt")
        .expect("ray toward the Moon must hit it");
    let radius = norm(&hit.point_km);
    assert!(
        (radius - MOON_RADIUS_KM).abs() < 0.5,
        "intercept off the lunar surface: {radius} km"
    );
    assert!(norm(&hit.surface_vector_km) < norm(&toward_moon));
    assert_eq!(hit.epoch_et, et, "geometric intercept is evaluated at et");

    let away = [-toward_moon[0], -toward_moon[1], -toward_moon[2]];
    let miss = toolkit
        .surface_intercept(
            &InterceptQuery {
                target: "MOON",
                fixed_frame: "IAU_MOON",
                observer: "EARTH",
                correction: AberrationCorrection::None,
                ray_frame: "J2000",
                ray_direction: away,
            },
            et,
        )
        .expect("sincpt");
    assert!(miss.is_none(), "a ray away from the Moon cannot hit it");
}

#[test]
fn sub_points_sit_on_the_lunar_surface() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-02-01 00:00:00 TDB").expect("str2et");
    let query = SubPointQuery {
        method: SubPointMethod::NearPoint,
        target: "MOON",
        fixed_frame: "IAU_MOON",
        observer: "EARTH",
        correction: AberrationCorrection::None,
    };

    let sub_observer = toolkit.sub_observer_point(&query, et).expect("subpnt");
    assert!((norm(&sub_observer.point_km) - MOON_RADIUS_KM).abs() < 0.5);
    assert_eq!(sub_observer.epoch_et, et);

    let sub_solar = toolkit.sub_solar_point(&query, et).expect("subslr");
    assert!((norm(&sub_solar.point_km) - MOON_RADIUS_KM).abs() < 0.5);
}

#[test]
fn lunar_phase_angle_is_a_physical_angle() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-03-10 00:00:00 TDB").expect("str2et");
    let angle = toolkit
        .phase_angle(et, "MOON", "SUN", "EARTH", AberrationCorrection::LightTimeStellar)
        .expect("phaseq");
    assert!((0.0..=PI).contains(&angle), "phase angle: {angle}");
}

#[test]
fn solar_longitude_wraps_the_full_circle() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let et = toolkit.parse_time("2030-08-15 00:00:00 TDB").expect("str2et");
    let longitude = toolkit
        .solar_longitude("EARTH", et, AberrationCorrection::None)
        .expect("lspcn");
    assert!(
        (0.0..2.0 * PI).contains(&longitude),
        "solar longitude: {longitude}"
    );
}

#[test]
fn perigee_search_finds_local_minima() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let start_et = toolkit.parse_time("2030-01-01 00:00:00 TDB").expect("str2et");
    let confinement = TimeWindow {
        start_et,
        end_et: start_et + 45.0 * 86_400.0,
    };
    let events = toolkit
        .find_distance_events(
            "MOON",
            "EARTH",
            AberrationCorrection::None,
            &SearchWindow::new(Constraint::LocalMin, 6.0 * 3600.0, confinement),
        )
        .expect("gfdist");

    assert!(!events.is_empty(), "45 days must contain a perigee");
    for event in &events {
        // A local minimum is a point event.
        assert!((event.end_et - event.start_et).abs() < 1e-3);
        assert!(event.start_et >= confinement.start_et - 1.0);
        assert!(event.end_et <= confinement.end_et + 1.0);
    }
}

#[test]
fn close_approach_intervals_lie_inside_the_confinement() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let start_et = toolkit.parse_time("2030-01-01 00:00:00 TDB").expect("str2et");
    let confinement = TimeWindow {
        start_et,
        end_et: start_et + 45.0 * 86_400.0,
    };
    let events = toolkit
        .find_distance_events(
            "MOON",
            "EARTH",
            AberrationCorrection::None,
            &SearchWindow::new(Constraint::LessThan(4.0e5), 6.0 * 3600.0, confinement),
        )
        .expect("gfdist");

    assert!(!events.is_empty(), "the Moon dips below 400000 km every month");
    let mut previous_end = f64::MIN;
    for event in &events {
        assert!(event.start_et <= event.end_et);
        assert!(event.start_et >= previous_end, "intervals must be ordered");
        assert!(event.start_et >= confinement.start_et - 1.0);
        assert!(event.end_et <= confinement.end_et + 1.0);
        previous_end = event.end_et;
    }
}

#[test]
fn conjunction_search_finds_new_moons() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let start_et = toolkit.parse_time("2030-01-01 00:00:00 TDB").expect("str2et");
    let confinement = TimeWindow {
        start_et,
        end_et: start_et + 59.0 * 86_400.0,
    };
    // Point bodies are enough for conjunction epochs; the frames are unused.
    let moon = TargetBody {
        name: "MOON",
        shape: BodyShape::Point,
        frame: "NULL",
    };
    let sun = TargetBody {
        name: "SUN",
        shape: BodyShape::Point,
        frame: "NULL",
    };
    let events = toolkit
        .find_separation_events(
            moon,
            sun,
            "EARTH",
            AberrationCorrection::None,
            &SearchWindow::new(Constraint::LocalMin, 6.0 * 3600.0, confinement),
        )
        .expect("gfsep");

    assert!(
        (1..=3).contains(&events.len()),
        "two lunations should hold 1-3 conjunctions, got {}",
        events.len()
    );
    for event in &events {
        assert!((event.end_et - event.start_et).abs() < 1e-3);
    }
}

#[test]
fn geocentric_eclipse_shows_up_as_an_occultation() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    // The November 25, 2030 total solar eclipse is central enough that the
    // disks overlap even from the geocenter.
    let start_et = toolkit.parse_time("2030-11-20 00:00:00 TDB").expect("str2et");
    let confinement = TimeWindow {
        start_et,
        end_et: start_et + 10.0 * 86_400.0,
    };
    let moon = TargetBody {
        name: "MOON",
        shape: BodyShape::Ellipsoid,
        frame: "IAU_MOON",
    };
    let sun = TargetBody {
        name: "SUN",
        shape: BodyShape::Ellipsoid,
        frame: "IAU_SUN",
    };
    let events = toolkit
        .find_occultations(
            OccultationKind::Any,
            moon,
            sun,
            "EARTH",
            AberrationCorrection::None,
            600.0,
            confinement,
        )
        .expect("gfoclt");

    assert_eq!(events.len(), 1, "expected exactly one eclipse window");
    let eclipse = events[0];
    let greatest = toolkit.parse_time("2030-11-25 06:50:00").expect("str2et");
    assert!(
        eclipse.start_et < greatest && greatest < eclipse.end_et,
        "eclipse window {:?} should contain the greatest eclipse",
        eclipse
    );
    let duration = eclipse.end_et - eclipse.start_et;
    assert!(duration > 600.0 && duration < 6.0 * 3600.0, "duration: {duration} s");
}

#[test]
fn time_formatting_round_trips_through_the_parser() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let formatted = toolkit
        .format_time(0.0, "YYYY-MM-DD HR:MN:SC ::TDB")
        .expect("timout");
    assert_eq!(formatted, "2000-01-01 12:00:00");

    let et = toolkit
        .parse_time("2000-01-01 12:00:00 TDB")
        .expect("str2et");
    assert!(et.abs() < 1e-9, "J2000 must parse to zero, got {et}");

    let day_apart = toolkit.parse_time("2030-01-02 12:00:00 TDB").expect("str2et")
        - toolkit.parse_time("2030-01-01 12:00:00 TDB").expect("str2et");
    assert_eq!(day_apart, 86_400.0);
}

#[test]
fn utc_strings_are_deterministic() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let iso = toolkit
        .utc_string(0.0, UtcFormat::IsoCalendar, 3)
        .expect("et2utc");
    assert_eq!(iso, "2000-01-01T11:58:55.816");

    let calendar = toolkit
        .utc_string(0.0, UtcFormat::Calendar, 0)
        .expect("et2utc");
    assert!(calendar.starts_with("2000 JAN 01"), "calendar form: {calendar}");

    let julian = toolkit
        .utc_string(0.0, UtcFormat::JulianDate, 5)
        .expect("et2utc");
    assert!(julian.starts_with("JD 2451544.99"), "julian form: {julian}");

    // A formatted UTC instant parses back to the same epoch.
    let et = toolkit.parse_time("2030-06-15 03:04:05.123").expect("str2et");
    let text = toolkit
        .utc_string(et, UtcFormat::IsoCalendar, 6)
        .expect("et2utc");
    let back = toolkit.parse_time(&text).expect("str2et");
    assert!((back - et).abs() < 1e-5, "round trip drift: {}", back - et);
}

#[test]
fn uniform_scales_and_delta_et_are_consistent() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let tai = toolkit
        .convert_time(0.0, TimeSystem::Et, TimeSystem::Tai)
        .expect("unitim");
    assert!(
        (-32.19..-32.17).contains(&tai),
        "TAI at J2000 should sit near -32.184, got {tai}"
    );

    let jed = toolkit
        .convert_time(0.0, TimeSystem::Et, TimeSystem::Jed)
        .expect("unitim");
    assert!((jed - 2_451_545.0).abs() < 1e-9, "JED of J2000: {jed}");

    let delta = toolkit.delta_et(0.0, EpochKind::Et).expect("deltet");
    assert!(
        (64.1..64.3).contains(&delta),
        "ET-UTC at J2000 should be about 64.184 s, got {delta}"
    );
}

#[test]
fn reference_epochs_match_the_parser() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let unix = toolkit.parse_time("1970-01-01 00:00:00").expect("str2et");
    assert!((unix - epochs::UNIX).abs() < 5e-3, "Unix epoch: {unix}");

    let gps = toolkit.parse_time("1980-01-06 00:00:00").expect("str2et");
    assert!((gps - epochs::GPS).abs() < 5e-3, "GPS epoch: {gps}");

    let j1950 = toolkit.parse_time("1950-01-01 00:00:00 TDB").expect("str2et");
    assert!((j1950 - epochs::J1950).abs() < 1e-6, "J1950: {j1950}");
}

#[test]
fn current_epoch_lands_in_the_present_era() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let now = toolkit.current_epoch().expect("current epoch");
    let floor = toolkit.parse_time("2025-01-01 00:00:00").expect("str2et");
    assert!(now > floor, "current epoch {now} is before 2025");
    assert!(now < epochs::J2100, "current epoch {now} is past 2100");
}

#[test]
fn planetographic_round_trip_on_mars() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let ellipsoid = ReferenceEllipsoid {
        equatorial_radius_km: 3396.19,
        flattening: (3396.19 - 3376.20) / 3396.19,
    };
    let coords = Planetographic {
        longitude_rad: 1.1,
        latitude_rad: -0.4,
        altitude_km: 2.5,
    };

    let rectan = toolkit
        .planetographic_to_rectangular("MARS", coords, ellipsoid)
        .expect("pgrrec");
    let back = toolkit
        .rectangular_to_planetographic("MARS", rectan, ellipsoid)
        .expect("recpgr");

    assert!((back.longitude_rad - coords.longitude_rad).abs() < 1e-10);
    assert!((back.latitude_rad - coords.latitude_rad).abs() < 1e-10);
    assert!((back.altitude_km - coords.altitude_km).abs() < 1e-6);
}

#[test]
fn lunar_surface_point_uses_the_loaded_radii() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let point = toolkit.body_surface_point(301, 0.0, 0.0).expect("srfrec");
    assert!((point[0] - MOON_RADIUS_KM).abs() < 0.1, "x: {}", point[0]);
    assert!(point[1].abs() < 1e-9);
    assert!(point[2].abs() < 1e-9);
}

#[test]
fn unloading_a_kernel_removes_its_data() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    let pck = catalog_path(KernelKind::Pck);
    toolkit.unload_kernel(&pck).expect("unload");
    let result = toolkit.body_constants("EARTH", "RADII", 3);
    assert!(
        matches!(result, Err(SpiceError::Failure { .. })),
        "radii lookup must fail without the PCK"
    );

    toolkit.load_kernel(&pck).expect("reload");
    toolkit
        .body_constants("EARTH", "RADII", 3)
        .expect("radii return after reload");
}

#[test]
fn clearing_the_pool_drops_the_leapseconds() {
    let _lock = guard().lock().unwrap();
    let Some(toolkit) = ensure_kernels_or_skip() else {
        return;
    };

    toolkit.clear_kernels().expect("kclear");
    assert_eq!(toolkit.kernel_count(KernelCategory::All).expect("ktotal"), 0);
    assert!(
        matches!(
            toolkit.parse_time("2030-01-01 00:00:00"),
            Err(SpiceError::Failure { .. })
        ),
        "UTC parsing must fail without a leapseconds kernel"
    );

    kernels::load_defaults(toolkit).expect("reload after clear");
    toolkit
        .parse_time("2030-01-01 00:00:00")
        .expect("parsing works again");
}
