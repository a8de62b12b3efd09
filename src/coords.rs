//! Coordinate system conversions.
//!
//! The rectangular/latitudinal/spherical/range family is pure arithmetic and
//! cannot raise a library error, so those shims return plain values. The
//! geodetic, planetographic and body-fixed conversions validate their inputs
//! against loaded constants and report failures like every other shim.

use crate::types::{Geodetic, Latitudinal, Planetographic, RaDec, ReferenceEllipsoid, Spherical};
use crate::{Backend, SpiceError, Toolkit, cstring};

impl<B: Backend> Toolkit<B> {
    pub fn latitudinal_to_rectangular(&self, coords: Latitudinal) -> [f64; 3] {
        let mut rectan = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.latrec(
            coords.radius_km,
            coords.longitude_rad,
            coords.latitude_rad,
            &mut rectan,
        );
        rectan
    }

    pub fn rectangular_to_latitudinal(&self, rectan: [f64; 3]) -> Latitudinal {
        let (mut radius, mut longitude, mut latitude) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner
            .backend
            .reclat(&rectan, &mut radius, &mut longitude, &mut latitude);
        Latitudinal {
            radius_km: radius,
            longitude_rad: longitude,
            latitude_rad: latitude,
        }
    }

    pub fn spherical_to_rectangular(&self, coords: Spherical) -> [f64; 3] {
        let mut rectan = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.sphrec(
            coords.radius_km,
            coords.colatitude_rad,
            coords.longitude_rad,
            &mut rectan,
        );
        rectan
    }

    pub fn rectangular_to_spherical(&self, rectan: [f64; 3]) -> Spherical {
        let (mut radius, mut colatitude, mut longitude) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner
            .backend
            .recsph(&rectan, &mut radius, &mut colatitude, &mut longitude);
        Spherical {
            radius_km: radius,
            colatitude_rad: colatitude,
            longitude_rad: longitude,
        }
    }

    pub fn ra_dec_to_rectangular(&self, coords: RaDec) -> [f64; 3] {
        let mut rectan = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.radrec(
            coords.range_km,
            coords.right_ascension_rad,
            coords.declination_rad,
            &mut rectan,
        );
        rectan
    }

    /// Right ascension comes back in `[0, 2pi)`.
    pub fn rectangular_to_ra_dec(&self, rectan: [f64; 3]) -> RaDec {
        let (mut range, mut right_ascension, mut declination) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner
            .backend
            .recrad(&rectan, &mut range, &mut right_ascension, &mut declination);
        RaDec {
            range_km: range,
            right_ascension_rad: right_ascension,
            declination_rad: declination,
        }
    }

    pub fn latitudinal_to_spherical(&self, coords: Latitudinal) -> Spherical {
        let (mut rho, mut colatitude, mut s_longitude) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner.backend.latsph(
            coords.radius_km,
            coords.longitude_rad,
            coords.latitude_rad,
            &mut rho,
            &mut colatitude,
            &mut s_longitude,
        );
        Spherical {
            radius_km: rho,
            colatitude_rad: colatitude,
            longitude_rad: s_longitude,
        }
    }

    pub fn spherical_to_latitudinal(&self, coords: Spherical) -> Latitudinal {
        let (mut radius, mut longitude, mut latitude) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner.backend.sphlat(
            coords.radius_km,
            coords.colatitude_rad,
            coords.longitude_rad,
            &mut radius,
            &mut longitude,
            &mut latitude,
        );
        Latitudinal {
            radius_km: radius,
            longitude_rad: longitude,
            latitude_rad: latitude,
        }
    }

    /// Converts body-fixed rectangular coordinates to geodetic coordinates
    /// on `ellipsoid`.
    pub fn rectangular_to_geodetic(
        &self,
        rectan: [f64; 3],
        ellipsoid: ReferenceEllipsoid,
    ) -> Result<Geodetic, SpiceError> {
        let (mut longitude, mut latitude, mut altitude) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner.backend.recgeo(
            &rectan,
            ellipsoid.equatorial_radius_km,
            ellipsoid.flattening,
            &mut longitude,
            &mut latitude,
            &mut altitude,
        );
        inner.check()?;
        Ok(Geodetic {
            longitude_rad: longitude,
            latitude_rad: latitude,
            altitude_km: altitude,
        })
    }

    pub fn geodetic_to_rectangular(
        &self,
        coords: Geodetic,
        ellipsoid: ReferenceEllipsoid,
    ) -> Result<[f64; 3], SpiceError> {
        let mut rectan = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.georec(
            coords.longitude_rad,
            coords.latitude_rad,
            coords.altitude_km,
            ellipsoid.equatorial_radius_km,
            ellipsoid.flattening,
            &mut rectan,
        );
        inner.check()?;
        Ok(rectan)
    }

    /// Converts body-fixed rectangular coordinates to planetographic
    /// coordinates. Longitude sense depends on `body`'s rotation, which is
    /// why the body name is required here and not in the geodetic shims.
    pub fn rectangular_to_planetographic(
        &self,
        body: &str,
        rectan: [f64; 3],
        ellipsoid: ReferenceEllipsoid,
    ) -> Result<Planetographic, SpiceError> {
        let body_c = cstring("body", body)?;
        let (mut longitude, mut latitude, mut altitude) = (0.0, 0.0, 0.0);
        let mut inner = self.lock();
        inner.backend.recpgr(
            &body_c,
            &rectan,
            ellipsoid.equatorial_radius_km,
            ellipsoid.flattening,
            &mut longitude,
            &mut latitude,
            &mut altitude,
        );
        inner.check()?;
        Ok(Planetographic {
            longitude_rad: longitude,
            latitude_rad: latitude,
            altitude_km: altitude,
        })
    }

    pub fn planetographic_to_rectangular(
        &self,
        body: &str,
        coords: Planetographic,
        ellipsoid: ReferenceEllipsoid,
    ) -> Result<[f64; 3], SpiceError> {
        let body_c = cstring("body", body)?;
        let mut rectan = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.pgrrec(
            &body_c,
            coords.longitude_rad,
            coords.latitude_rad,
            coords.altitude_km,
            ellipsoid.equatorial_radius_km,
            ellipsoid.flattening,
            &mut rectan,
        );
        inner.check()?;
        Ok(rectan)
    }

    /// Body-fixed rectangular coordinates of the surface point at
    /// `longitude`/`latitude`, using the radii loaded for `body_id`.
    pub fn body_surface_point(
        &self,
        body_id: i32,
        longitude_rad: f64,
        latitude_rad: f64,
    ) -> Result<[f64; 3], SpiceError> {
        let mut rectan = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.srfrec(
            body_id as cspice_sys::SpiceInt,
            longitude_rad,
            latitude_rad,
            &mut rectan,
        );
        inner.check()?;
        Ok(rectan)
    }

    /// Degrees in one radian.
    pub fn degrees_per_radian(&self) -> f64 {
        self.lock().backend.dpr()
    }

    /// Radians in one degree.
    pub fn radians_per_degree(&self) -> f64 {
        self.lock().backend.rpd()
    }
}
