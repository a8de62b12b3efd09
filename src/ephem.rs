//! Ephemeris lookups: positions, full states, frame transformations and the
//! constant-offset observer/target variants.

use crate::cell::IntCell;
use crate::types::{
    AberrationCorrection, EphemerisQuery, FixedPoint, MovingPoint, PositionVector, ReferenceLocus,
    StateVector,
};
use crate::{Backend, SpiceError, Toolkit, cstring};

/// Body id capacity when summarizing a binary kernel.
const ID_CELL_CAPACITY: usize = 1000;

impl<B: Backend> Toolkit<B> {
    /// Apparent position of the query target relative to its observer at
    /// `et`, in the query frame.
    pub fn position(
        &self,
        query: &EphemerisQuery<'_>,
        et: f64,
    ) -> Result<PositionVector, SpiceError> {
        let target = cstring("target", query.target)?;
        let frame = cstring("frame", query.frame)?;
        let observer = cstring("observer", query.observer)?;
        let mut position = [0.0; 3];
        let mut light_time = 0.0;
        let mut inner = self.lock();
        inner.backend.spkpos(
            &target,
            et,
            &frame,
            query.correction.as_cstr(),
            &observer,
            &mut position,
            &mut light_time,
        );
        inner.check()?;
        Ok(PositionVector {
            position_km: position,
            light_time_seconds: light_time,
        })
    }

    /// Apparent state (position and velocity) of the query target relative
    /// to its observer at `et`.
    pub fn state(&self, query: &EphemerisQuery<'_>, et: f64) -> Result<StateVector, SpiceError> {
        let target = cstring("target", query.target)?;
        let frame = cstring("frame", query.frame)?;
        let observer = cstring("observer", query.observer)?;
        let mut state = [0.0; 6];
        let mut light_time = 0.0;
        let mut inner = self.lock();
        inner.backend.spkezr(
            &target,
            et,
            &frame,
            query.correction.as_cstr(),
            &observer,
            &mut state,
            &mut light_time,
        );
        inner.check()?;
        Ok(StateVector {
            position_km: [state[0], state[1], state[2]],
            velocity_km_s: [state[3], state[4], state[5]],
            light_time_seconds: light_time,
        })
    }

    /// Rotation taking position vectors from frame `from` to frame `to`
    /// at `et`.
    pub fn position_transform(
        &self,
        from: &str,
        to: &str,
        et: f64,
    ) -> Result<[[f64; 3]; 3], SpiceError> {
        let from_c = cstring("from", from)?;
        let to_c = cstring("to", to)?;
        let mut rotation = [[0.0; 3]; 3];
        let mut inner = self.lock();
        inner.backend.pxform(&from_c, &to_c, et, &mut rotation);
        inner.check()?;
        Ok(rotation)
    }

    /// Rotation from frame `from` at `from_et` to frame `to` at `to_et`,
    /// for geometry spanning two epochs.
    pub fn position_transform_between(
        &self,
        from: &str,
        to: &str,
        from_et: f64,
        to_et: f64,
    ) -> Result<[[f64; 3]; 3], SpiceError> {
        let from_c = cstring("from", from)?;
        let to_c = cstring("to", to)?;
        let mut rotation = [[0.0; 3]; 3];
        let mut inner = self.lock();
        inner
            .backend
            .pxfrm2(&from_c, &to_c, from_et, to_et, &mut rotation);
        inner.check()?;
        Ok(rotation)
    }

    /// Transformation taking full state vectors from frame `from` to frame
    /// `to` at `et`.
    pub fn state_transform(
        &self,
        from: &str,
        to: &str,
        et: f64,
    ) -> Result<[[f64; 6]; 6], SpiceError> {
        let from_c = cstring("from", from)?;
        let to_c = cstring("to", to)?;
        let mut transform = [[0.0; 6]; 6];
        let mut inner = self.lock();
        inner.backend.sxform(&from_c, &to_c, et, &mut transform);
        inner.check()?;
        Ok(transform)
    }

    /// State of `target` as seen from a stationary observer (a lander, a
    /// ground station) described by `observer`.
    pub fn state_from_fixed_observer(
        &self,
        target: &str,
        et: f64,
        out_frame: &str,
        locus: ReferenceLocus,
        correction: AberrationCorrection,
        observer: FixedPoint<'_>,
    ) -> Result<StateVector, SpiceError> {
        let target_c = cstring("target", target)?;
        let out_frame_c = cstring("out_frame", out_frame)?;
        let center_c = cstring("observer.center", observer.center)?;
        let frame_c = cstring("observer.frame", observer.frame)?;
        let mut state = [0.0; 6];
        let mut light_time = 0.0;
        let mut inner = self.lock();
        inner.backend.spkcpo(
            &target_c,
            et,
            &out_frame_c,
            locus.as_cstr(),
            correction.as_cstr(),
            &observer.position_km,
            &center_c,
            &frame_c,
            &mut state,
            &mut light_time,
        );
        inner.check()?;
        Ok(StateVector {
            position_km: [state[0], state[1], state[2]],
            velocity_km_s: [state[3], state[4], state[5]],
            light_time_seconds: light_time,
        })
    }

    /// State of a stationary target point as seen from `observer`.
    pub fn state_of_fixed_target(
        &self,
        target: FixedPoint<'_>,
        et: f64,
        out_frame: &str,
        locus: ReferenceLocus,
        correction: AberrationCorrection,
        observer: &str,
    ) -> Result<StateVector, SpiceError> {
        let center_c = cstring("target.center", target.center)?;
        let frame_c = cstring("target.frame", target.frame)?;
        let out_frame_c = cstring("out_frame", out_frame)?;
        let observer_c = cstring("observer", observer)?;
        let mut state = [0.0; 6];
        let mut light_time = 0.0;
        let mut inner = self.lock();
        inner.backend.spkcpt(
            &target.position_km,
            &center_c,
            &frame_c,
            et,
            &out_frame_c,
            locus.as_cstr(),
            correction.as_cstr(),
            &observer_c,
            &mut state,
            &mut light_time,
        );
        inner.check()?;
        Ok(StateVector {
            position_km: [state[0], state[1], state[2]],
            velocity_km_s: [state[3], state[4], state[5]],
            light_time_seconds: light_time,
        })
    }

    /// State of `target` as seen from an observer moving with the constant
    /// velocity recorded in `observer`.
    pub fn state_from_moving_observer(
        &self,
        target: &str,
        et: f64,
        out_frame: &str,
        locus: ReferenceLocus,
        correction: AberrationCorrection,
        observer: MovingPoint<'_>,
    ) -> Result<StateVector, SpiceError> {
        let target_c = cstring("target", target)?;
        let out_frame_c = cstring("out_frame", out_frame)?;
        let center_c = cstring("observer.center", observer.center)?;
        let frame_c = cstring("observer.frame", observer.frame)?;
        let mut observer_state = [0.0; 6];
        observer_state[..3].copy_from_slice(&observer.position_km);
        observer_state[3..].copy_from_slice(&observer.velocity_km_s);
        let mut state = [0.0; 6];
        let mut light_time = 0.0;
        let mut inner = self.lock();
        inner.backend.spkcvo(
            &target_c,
            et,
            &out_frame_c,
            locus.as_cstr(),
            correction.as_cstr(),
            &observer_state,
            observer.epoch_et,
            &center_c,
            &frame_c,
            &mut state,
            &mut light_time,
        );
        inner.check()?;
        Ok(StateVector {
            position_km: [state[0], state[1], state[2]],
            velocity_km_s: [state[3], state[4], state[5]],
            light_time_seconds: light_time,
        })
    }

    /// State of a target moving with the constant velocity recorded in
    /// `target`, as seen from `observer`.
    pub fn state_of_moving_target(
        &self,
        target: MovingPoint<'_>,
        et: f64,
        out_frame: &str,
        locus: ReferenceLocus,
        correction: AberrationCorrection,
        observer: &str,
    ) -> Result<StateVector, SpiceError> {
        let center_c = cstring("target.center", target.center)?;
        let frame_c = cstring("target.frame", target.frame)?;
        let out_frame_c = cstring("out_frame", out_frame)?;
        let observer_c = cstring("observer", observer)?;
        let mut target_state = [0.0; 6];
        target_state[..3].copy_from_slice(&target.position_km);
        target_state[3..].copy_from_slice(&target.velocity_km_s);
        let mut state = [0.0; 6];
        let mut light_time = 0.0;
        let mut inner = self.lock();
        inner.backend.spkcvt(
            &target_state,
            target.epoch_et,
            &center_c,
            &frame_c,
            et,
            &out_frame_c,
            locus.as_cstr(),
            correction.as_cstr(),
            &observer_c,
            &mut state,
            &mut light_time,
        );
        inner.check()?;
        Ok(StateVector {
            position_km: [state[0], state[1], state[2]],
            velocity_km_s: [state[3], state[4], state[5]],
            light_time_seconds: light_time,
        })
    }

    /// NAIF ids of the bodies an SPK file provides ephemerides for. The
    /// file does not need to be loaded.
    pub fn spk_bodies(&self, path: &str) -> Result<Vec<i32>, SpiceError> {
        let path_c = cstring("path", path)?;
        let mut ids = IntCell::with_capacity(ID_CELL_CAPACITY);
        let mut inner = self.lock();
        inner.backend.spkobj(&path_c, &mut ids);
        inner.check()?;
        Ok(drain_ids(&ids))
    }

    /// Frame class ids a binary PCK file provides orientation for.
    pub fn pck_frames(&self, path: &str) -> Result<Vec<i32>, SpiceError> {
        let path_c = cstring("path", path)?;
        let mut ids = IntCell::with_capacity(ID_CELL_CAPACITY);
        let mut inner = self.lock();
        inner.backend.pckfrm(&path_c, &mut ids);
        inner.check()?;
        Ok(drain_ids(&ids))
    }
}

fn drain_ids(ids: &IntCell) -> Vec<i32> {
    (0..ids.card())
        .filter_map(|index| ids.get(index))
        .map(|id| id as i32)
        .collect()
}
