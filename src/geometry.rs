//! Observation geometry: surface intercepts, sub-points, phase angles,
//! instrument fields of view and body constants.

use std::ffi::CStr;

use cspice_sys::SpiceInt;

use crate::types::{
    AberrationCorrection, FieldOfView, InterceptQuery, SubPointQuery, SurfacePoint,
};
use crate::{Backend, SpiceError, Toolkit, buffer_to_string, cstring};

/// Target shape model for the intercept and sub-point shims.
const ELLIPSOID_METHOD: &CStr = c"ELLIPSOID";

/// Boundary vectors accepted from an instrument kernel.
const FOV_BOUND_ROOM: usize = 32;
const FOV_NAME_LEN: usize = 33;
const BODY_NAME_LEN: usize = 64;

impl<B: Backend> Toolkit<B> {
    /// Planetocentric longitude of the sun as seen from `body`, in radians.
    pub fn solar_longitude(
        &self,
        body: &str,
        et: f64,
        correction: AberrationCorrection,
    ) -> Result<f64, SpiceError> {
        let body_c = cstring("body", body)?;
        let mut inner = self.lock();
        let longitude = inner.backend.lspcn(&body_c, et, correction.as_cstr());
        inner.check()?;
        Ok(longitude)
    }

    /// Intersection of a ray with the target's ellipsoid surface.
    ///
    /// `Ok(None)` means the ray misses the target. A raised library error
    /// (unknown body, missing kernel data) takes precedence over the miss
    /// flag, so outputs of a failed call are never read.
    pub fn surface_intercept(
        &self,
        query: &InterceptQuery<'_>,
        et: f64,
    ) -> Result<Option<SurfacePoint>, SpiceError> {
        let target = cstring("target", query.target)?;
        let fixed_frame = cstring("fixed_frame", query.fixed_frame)?;
        let observer = cstring("observer", query.observer)?;
        let ray_frame = cstring("ray_frame", query.ray_frame)?;
        let mut point = [0.0; 3];
        let mut epoch = 0.0;
        let mut surface_vector = [0.0; 3];
        let mut inner = self.lock();
        let found = inner.backend.sincpt(
            ELLIPSOID_METHOD,
            &target,
            et,
            &fixed_frame,
            query.correction.as_cstr(),
            &observer,
            &ray_frame,
            &query.ray_direction,
            &mut point,
            &mut epoch,
            &mut surface_vector,
        );
        inner.check()?;
        if !found {
            return Ok(None);
        }
        Ok(Some(SurfacePoint {
            point_km: point,
            surface_vector_km: surface_vector,
            epoch_et: epoch,
        }))
    }

    /// Point on the target surface closest to (or intercepted below) the
    /// observer.
    pub fn sub_observer_point(
        &self,
        query: &SubPointQuery<'_>,
        et: f64,
    ) -> Result<SurfacePoint, SpiceError> {
        let target = cstring("target", query.target)?;
        let fixed_frame = cstring("fixed_frame", query.fixed_frame)?;
        let observer = cstring("observer", query.observer)?;
        let mut point = [0.0; 3];
        let mut epoch = 0.0;
        let mut surface_vector = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.subpnt(
            query.method.as_cstr(),
            &target,
            et,
            &fixed_frame,
            query.correction.as_cstr(),
            &observer,
            &mut point,
            &mut epoch,
            &mut surface_vector,
        );
        inner.check()?;
        Ok(SurfacePoint {
            point_km: point,
            surface_vector_km: surface_vector,
            epoch_et: epoch,
        })
    }

    /// Like [`sub_observer_point`](Self::sub_observer_point) but for the sun.
    pub fn sub_solar_point(
        &self,
        query: &SubPointQuery<'_>,
        et: f64,
    ) -> Result<SurfacePoint, SpiceError> {
        let target = cstring("target", query.target)?;
        let fixed_frame = cstring("fixed_frame", query.fixed_frame)?;
        let observer = cstring("observer", query.observer)?;
        let mut point = [0.0; 3];
        let mut epoch = 0.0;
        let mut surface_vector = [0.0; 3];
        let mut inner = self.lock();
        inner.backend.subslr(
            query.method.as_cstr(),
            &target,
            et,
            &fixed_frame,
            query.correction.as_cstr(),
            &observer,
            &mut point,
            &mut epoch,
            &mut surface_vector,
        );
        inner.check()?;
        Ok(SurfacePoint {
            point_km: point,
            surface_vector_km: surface_vector,
            epoch_et: epoch,
        })
    }

    /// Observer-target-illuminator phase angle at `et`, in radians.
    pub fn phase_angle(
        &self,
        et: f64,
        target: &str,
        illuminator: &str,
        observer: &str,
        correction: AberrationCorrection,
    ) -> Result<f64, SpiceError> {
        let target_c = cstring("target", target)?;
        let illuminator_c = cstring("illuminator", illuminator)?;
        let observer_c = cstring("observer", observer)?;
        let mut inner = self.lock();
        let angle = inner.backend.phaseq(
            et,
            &target_c,
            &illuminator_c,
            &observer_c,
            correction.as_cstr(),
        );
        inner.check()?;
        Ok(angle)
    }

    /// Field-of-view description of the instrument with NAIF id
    /// `instrument_id`, read from the loaded instrument kernel.
    pub fn field_of_view(&self, instrument_id: i32) -> Result<FieldOfView, SpiceError> {
        let mut shape = vec![0i8; FOV_NAME_LEN];
        let mut frame = vec![0i8; FOV_NAME_LEN];
        let mut boresight = [0.0; 3];
        let mut count: SpiceInt = 0;
        let mut bounds = vec![[0.0; 3]; FOV_BOUND_ROOM];
        let mut inner = self.lock();
        inner.backend.getfov(
            instrument_id as SpiceInt,
            &mut shape,
            &mut frame,
            &mut boresight,
            &mut count,
            &mut bounds,
        );
        inner.check()?;
        bounds.truncate(count as usize);
        Ok(FieldOfView {
            shape: buffer_to_string(&shape),
            frame: buffer_to_string(&frame),
            boresight,
            boundary_vectors: bounds,
        })
    }

    /// Values of the kernel pool constant `item` for `body` (for example
    /// `"RADII"` or `"GM"`). At most `max_values` values are returned.
    pub fn body_constants(
        &self,
        body: &str,
        item: &str,
        max_values: usize,
    ) -> Result<Vec<f64>, SpiceError> {
        let body_c = cstring("body", body)?;
        let item_c = cstring("item", item)?;
        let mut values = vec![0.0; max_values];
        let mut dim: SpiceInt = 0;
        let mut inner = self.lock();
        inner.backend.bodvrd(&body_c, &item_c, &mut values, &mut dim);
        inner.check()?;
        values.truncate(dim as usize);
        Ok(values)
    }

    /// [`body_constants`](Self::body_constants) keyed by NAIF id instead of
    /// name.
    pub fn body_constants_by_id(
        &self,
        body_id: i32,
        item: &str,
        max_values: usize,
    ) -> Result<Vec<f64>, SpiceError> {
        let item_c = cstring("item", item)?;
        let mut values = vec![0.0; max_values];
        let mut dim: SpiceInt = 0;
        let mut inner = self.lock();
        inner
            .backend
            .bodvcd(body_id as SpiceInt, &item_c, &mut values, &mut dim);
        inner.check()?;
        values.truncate(dim as usize);
        Ok(values)
    }

    /// NAIF id for a body name. `Ok(None)` when the name is not in the
    /// built-in table or any loaded text kernel.
    pub fn body_code(&self, name: &str) -> Result<Option<i32>, SpiceError> {
        let name_c = cstring("name", name)?;
        let mut code: SpiceInt = 0;
        let mut inner = self.lock();
        let found = inner.backend.bodn2c(&name_c, &mut code);
        inner.check()?;
        Ok(found.then_some(code as i32))
    }

    /// Body name for a NAIF id, the inverse of [`body_code`](Self::body_code).
    pub fn body_name(&self, code: i32) -> Result<Option<String>, SpiceError> {
        let mut name = vec![0i8; BODY_NAME_LEN];
        let mut inner = self.lock();
        let found = inner.backend.bodc2n(code as SpiceInt, &mut name);
        inner.check()?;
        Ok(found.then(|| buffer_to_string(&name)))
    }
}
