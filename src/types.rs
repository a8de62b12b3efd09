//! Typed arguments and result records for the toolkit shims.
//!
//! The wrapped routines take their vocabulary as strings (`"LT+S"`, `"ABSMIN"`,
//! `"NEAR POINT/ELLIPSOID"`). The enums here own those spellings so a typo is
//! a compile error instead of a runtime failure, and the query structs replace
//! the long positional argument runs of the raw API.

use std::ffi::CStr;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SpiceError;

/// Cartesian state of a target relative to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateVector {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
    pub light_time_seconds: f64,
}

/// Position-only variant of [`StateVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionVector {
    pub position_km: [f64; 3],
    pub light_time_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Latitudinal {
    pub radius_km: f64,
    pub longitude_rad: f64,
    pub latitude_rad: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spherical {
    pub radius_km: f64,
    pub colatitude_rad: f64,
    pub longitude_rad: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaDec {
    pub range_km: f64,
    pub right_ascension_rad: f64,
    pub declination_rad: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geodetic {
    pub longitude_rad: f64,
    pub latitude_rad: f64,
    pub altitude_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Planetographic {
    pub longitude_rad: f64,
    pub latitude_rad: f64,
    pub altitude_km: f64,
}

/// Spheroid shape used by the geodetic and planetographic conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEllipsoid {
    pub equatorial_radius_km: f64,
    pub flattening: f64,
}

/// Closed interval of ephemeris time, in TDB seconds past J2000.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start_et: f64,
    pub end_et: f64,
}

/// Surface geometry result shared by the intercept and sub-point shims.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfacePoint {
    /// Point on the target surface, in the target's body-fixed frame.
    pub point_km: [f64; 3],
    /// Vector from the observer to the point, same frame.
    pub surface_vector_km: [f64; 3],
    /// Target epoch the geometry was evaluated at.
    pub epoch_et: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOfView {
    pub shape: String,
    pub frame: String,
    pub boresight: [f64; 3],
    pub boundary_vectors: Vec<[f64; 3]>,
}

/// One entry of the loaded-kernel table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelData {
    pub file: String,
    pub kind: String,
    pub source: String,
    pub handle: i32,
}

/// Light-time and stellar aberration handling for observer-target lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AberrationCorrection {
    #[default]
    None,
    LightTime,
    LightTimeStellar,
    ConvergedNewtonian,
    ConvergedNewtonianStellar,
    TransmitLightTime,
    TransmitLightTimeStellar,
    TransmitConvergedNewtonian,
    TransmitConvergedNewtonianStellar,
}

impl AberrationCorrection {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            AberrationCorrection::None => c"NONE",
            AberrationCorrection::LightTime => c"LT",
            AberrationCorrection::LightTimeStellar => c"LT+S",
            AberrationCorrection::ConvergedNewtonian => c"CN",
            AberrationCorrection::ConvergedNewtonianStellar => c"CN+S",
            AberrationCorrection::TransmitLightTime => c"XLT",
            AberrationCorrection::TransmitLightTimeStellar => c"XLT+S",
            AberrationCorrection::TransmitConvergedNewtonian => c"XCN",
            AberrationCorrection::TransmitConvergedNewtonianStellar => c"XCN+S",
        }
    }
}

impl fmt::Display for AberrationCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_cstr().to_string_lossy())
    }
}

impl FromStr for AberrationCorrection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "NONE" => Ok(AberrationCorrection::None),
            "LT" => Ok(AberrationCorrection::LightTime),
            "LT+S" => Ok(AberrationCorrection::LightTimeStellar),
            "CN" => Ok(AberrationCorrection::ConvergedNewtonian),
            "CN+S" => Ok(AberrationCorrection::ConvergedNewtonianStellar),
            "XLT" => Ok(AberrationCorrection::TransmitLightTime),
            "XLT+S" => Ok(AberrationCorrection::TransmitLightTimeStellar),
            "XCN" => Ok(AberrationCorrection::TransmitConvergedNewtonian),
            "XCN+S" => Ok(AberrationCorrection::TransmitConvergedNewtonianStellar),
            other => Err(format!("unknown aberration correction `{other}`")),
        }
    }
}

/// Loaded-kernel table categories accepted by the kernel shims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelCategory {
    #[default]
    All,
    Spk,
    Ck,
    Pck,
    Ek,
    Text,
    Meta,
}

impl KernelCategory {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            KernelCategory::All => c"ALL",
            KernelCategory::Spk => c"SPK",
            KernelCategory::Ck => c"CK",
            KernelCategory::Pck => c"PCK",
            KernelCategory::Ek => c"EK",
            KernelCategory::Text => c"TEXT",
            KernelCategory::Meta => c"META",
        }
    }
}

/// Uniform time systems understood by [`convert_time`](crate::Toolkit::convert_time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSystem {
    Tai,
    Tdt,
    Tdb,
    Et,
    Jed,
    Jdtdt,
    Jdtdb,
}

impl TimeSystem {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            TimeSystem::Tai => c"TAI",
            TimeSystem::Tdt => c"TDT",
            TimeSystem::Tdb => c"TDB",
            TimeSystem::Et => c"ET",
            TimeSystem::Jed => c"JED",
            TimeSystem::Jdtdt => c"JDTDT",
            TimeSystem::Jdtdb => c"JDTDB",
        }
    }
}

/// Epoch kind accepted by [`delta_et`](crate::Toolkit::delta_et).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochKind {
    Utc,
    Et,
}

impl EpochKind {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            EpochKind::Utc => c"UTC",
            EpochKind::Et => c"ET",
        }
    }
}

/// Output layout for [`utc_string`](crate::Toolkit::utc_string).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtcFormat {
    Calendar,
    DayOfYear,
    JulianDate,
    IsoCalendar,
    IsoDayOfYear,
}

impl UtcFormat {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            UtcFormat::Calendar => c"C",
            UtcFormat::DayOfYear => c"D",
            UtcFormat::JulianDate => c"J",
            UtcFormat::IsoCalendar => c"ISOC",
            UtcFormat::IsoDayOfYear => c"ISOD",
        }
    }
}

/// Condition an event search solves for.
///
/// The comparison variants carry the reference value in the unit of the
/// searched quantity (kilometers for distance, radians for separation and
/// coordinate searches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    GreaterThan(f64),
    LessThan(f64),
    Equals(f64),
    AbsoluteMax,
    AbsoluteMin,
    LocalMax,
    LocalMin,
}

impl Constraint {
    pub(crate) fn relation(self) -> &'static CStr {
        match self {
            Constraint::GreaterThan(_) => c">",
            Constraint::LessThan(_) => c"<",
            Constraint::Equals(_) => c"=",
            Constraint::AbsoluteMax => c"ABSMAX",
            Constraint::AbsoluteMin => c"ABSMIN",
            Constraint::LocalMax => c"LOCMAX",
            Constraint::LocalMin => c"LOCMIN",
        }
    }

    pub(crate) fn reference_value(self) -> f64 {
        match self {
            Constraint::GreaterThan(value)
            | Constraint::LessThan(value)
            | Constraint::Equals(value) => value,
            _ => 0.0,
        }
    }
}

/// Occultation classes recognized by the occultation finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccultationKind {
    Full,
    Annular,
    Partial,
    Any,
}

impl OccultationKind {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            OccultationKind::Full => c"FULL",
            OccultationKind::Annular => c"ANNULAR",
            OccultationKind::Partial => c"PARTIAL",
            OccultationKind::Any => c"ANY",
        }
    }
}

/// Target body model used by the separation and occultation finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyShape {
    Point,
    Sphere,
    #[default]
    Ellipsoid,
}

impl BodyShape {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            BodyShape::Point => c"POINT",
            BodyShape::Sphere => c"SPHERE",
            BodyShape::Ellipsoid => c"ELLIPSOID",
        }
    }
}

/// Where a constant-offset state is evaluated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceLocus {
    #[default]
    Observer,
    Center,
    Target,
}

impl ReferenceLocus {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            ReferenceLocus::Observer => c"OBSERVER",
            ReferenceLocus::Center => c"CENTER",
            ReferenceLocus::Target => c"TARGET",
        }
    }
}

/// Coordinate system a coordinate event search measures in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    Rectangular,
    Latitudinal,
    RaDec,
    Spherical,
    Cylindrical,
    Geodetic,
    Planetographic,
}

impl CoordinateSystem {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            CoordinateSystem::Rectangular => c"RECTANGULAR",
            CoordinateSystem::Latitudinal => c"LATITUDINAL",
            CoordinateSystem::RaDec => c"RA/DEC",
            CoordinateSystem::Spherical => c"SPHERICAL",
            CoordinateSystem::Cylindrical => c"CYLINDRICAL",
            CoordinateSystem::Geodetic => c"GEODETIC",
            CoordinateSystem::Planetographic => c"PLANETOGRAPHIC",
        }
    }
}

/// Component of a [`CoordinateSystem`] a coordinate event search tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    X,
    Y,
    Z,
    Radius,
    Longitude,
    Latitude,
    Range,
    RightAscension,
    Declination,
    Colatitude,
    Altitude,
}

impl Coordinate {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            Coordinate::X => c"X",
            Coordinate::Y => c"Y",
            Coordinate::Z => c"Z",
            Coordinate::Radius => c"RADIUS",
            Coordinate::Longitude => c"LONGITUDE",
            Coordinate::Latitude => c"LATITUDE",
            Coordinate::Range => c"RANGE",
            Coordinate::RightAscension => c"RIGHT ASCENSION",
            Coordinate::Declination => c"DECLINATION",
            Coordinate::Colatitude => c"COLATITUDE",
            Coordinate::Altitude => c"ALTITUDE",
        }
    }
}

/// Computation method for the sub-observer and sub-solar shims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubPointMethod {
    #[default]
    NearPoint,
    Intercept,
}

impl SubPointMethod {
    pub(crate) fn as_cstr(self) -> &'static CStr {
        match self {
            SubPointMethod::NearPoint => c"NEAR POINT/ELLIPSOID",
            SubPointMethod::Intercept => c"INTERCEPT/ELLIPSOID",
        }
    }
}

/// Observer, target and frame for a position or state lookup.
#[derive(Debug, Clone, Copy)]
pub struct EphemerisQuery<'a> {
    pub target: &'a str,
    pub observer: &'a str,
    pub frame: &'a str,
    pub correction: AberrationCorrection,
}

/// Ray-surface intercept request.
#[derive(Debug, Clone, Copy)]
pub struct InterceptQuery<'a> {
    pub target: &'a str,
    pub fixed_frame: &'a str,
    pub observer: &'a str,
    pub correction: AberrationCorrection,
    pub ray_frame: &'a str,
    pub ray_direction: [f64; 3],
}

/// Sub-observer or sub-solar point request.
#[derive(Debug, Clone, Copy)]
pub struct SubPointQuery<'a> {
    pub method: SubPointMethod,
    pub target: &'a str,
    pub fixed_frame: &'a str,
    pub observer: &'a str,
    pub correction: AberrationCorrection,
}

/// A location held fixed relative to some center, for the constant-offset
/// state shims.
#[derive(Debug, Clone, Copy)]
pub struct FixedPoint<'a> {
    pub position_km: [f64; 3],
    pub center: &'a str,
    pub frame: &'a str,
}

/// A location moving with a known constant velocity from `epoch_et`.
#[derive(Debug, Clone, Copy)]
pub struct MovingPoint<'a> {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
    pub epoch_et: f64,
    pub center: &'a str,
    pub frame: &'a str,
}

/// Body name plus the shape model a finder should use for it.
#[derive(Debug, Clone, Copy)]
pub struct TargetBody<'a> {
    pub name: &'a str,
    pub shape: BodyShape,
    pub frame: &'a str,
}

/// Surface-intercept coordinate event request.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateEventQuery<'a> {
    pub target: &'a str,
    pub fixed_frame: &'a str,
    pub observer: &'a str,
    pub correction: AberrationCorrection,
    pub ray_frame: &'a str,
    pub ray_direction: [f64; 3],
    pub system: CoordinateSystem,
    pub coordinate: Coordinate,
}

/// Search bounds shared by the event finders.
#[derive(Debug, Clone, Copy)]
pub struct SearchWindow {
    pub constraint: Constraint,
    /// Tolerance added to the extrema relations, in the searched unit.
    pub adjustment: f64,
    /// Step the root bracketing walks the confinement with, in seconds.
    pub step_seconds: f64,
    pub confinement: TimeWindow,
    /// Workspace sizing for the solver.
    pub max_intervals: usize,
}

impl SearchWindow {
    pub fn new(constraint: Constraint, step_seconds: f64, confinement: TimeWindow) -> Self {
        SearchWindow {
            constraint,
            adjustment: 0.0,
            step_seconds,
            confinement,
            max_intervals: 1000,
        }
    }
}

/// Converts a runtime-sized slice into the fixed vector the shims take.
pub fn vector3_from_slice(values: &[f64]) -> Result<[f64; 3], SpiceError> {
    <[f64; 3]>::try_from(values).map_err(|_| SpiceError::VectorLength {
        expected: 3,
        actual: values.len(),
    })
}

/// Six-component variant of [`vector3_from_slice`] for state vectors.
pub fn state6_from_slice(values: &[f64]) -> Result<[f64; 6], SpiceError> {
    <[f64; 6]>::try_from(values).map_err(|_| SpiceError::VectorLength {
        expected: 6,
        actual: values.len(),
    })
}
