//! Event finders.
//!
//! Every finder follows the same shape: build a confinement window from the
//! requested interval, run the solver into a result window, then drain that
//! window pairwise into `(start, end)` intervals. An empty result means the
//! event never occurs in the confinement and is a normal outcome, not an
//! error.

use std::ffi::CStr;

use cspice_sys::SpiceInt;

use crate::cell::DoubleCell;
use crate::types::{
    AberrationCorrection, CoordinateEventQuery, OccultationKind, SearchWindow, TargetBody,
    TimeWindow,
};
use crate::{Backend, Inner, SpiceError, Toolkit, cstring};

/// Values per window cell, enough for 2497 intervals.
const WINDOW_CAPACITY: usize = 5000;

/// Target shape model for the coordinate event finder.
const ELLIPSOID_METHOD: &CStr = c"ELLIPSOID";

impl<B: Backend> Inner<B> {
    fn confinement_cell(&mut self, window: TimeWindow) -> DoubleCell {
        let mut cell = DoubleCell::with_capacity(WINDOW_CAPACITY);
        self.backend.wninsd(window.start_et, window.end_et, &mut cell);
        cell
    }

    fn drain_intervals(&mut self, window: &mut DoubleCell) -> Vec<TimeWindow> {
        let count = self.backend.wncard(window);
        let mut intervals = Vec::with_capacity(count as usize);
        for index in 0..count {
            let (mut start, mut end) = (0.0, 0.0);
            self.backend.wnfetd(window, index, &mut start, &mut end);
            intervals.push(TimeWindow {
                start_et: start,
                end_et: end,
            });
        }
        intervals
    }
}

impl<B: Backend> Toolkit<B> {
    /// Intervals where the observer-target distance satisfies the search
    /// constraint.
    pub fn find_distance_events(
        &self,
        target: &str,
        observer: &str,
        correction: AberrationCorrection,
        search: &SearchWindow,
    ) -> Result<Vec<TimeWindow>, SpiceError> {
        let target_c = cstring("target", target)?;
        let observer_c = cstring("observer", observer)?;
        let mut inner = self.lock();
        let mut confinement = inner.confinement_cell(search.confinement);
        let mut result = DoubleCell::with_capacity(WINDOW_CAPACITY);
        inner.backend.gfdist(
            &target_c,
            correction.as_cstr(),
            &observer_c,
            search.constraint.relation(),
            search.constraint.reference_value(),
            search.adjustment,
            search.step_seconds,
            search.max_intervals as SpiceInt,
            &mut confinement,
            &mut result,
        );
        inner.check()?;
        Ok(inner.drain_intervals(&mut result))
    }

    /// Intervals where the angular separation between two bodies satisfies
    /// the search constraint. Reference values and adjustments are radians.
    pub fn find_separation_events(
        &self,
        first: TargetBody<'_>,
        second: TargetBody<'_>,
        observer: &str,
        correction: AberrationCorrection,
        search: &SearchWindow,
    ) -> Result<Vec<TimeWindow>, SpiceError> {
        let first_name = cstring("first.name", first.name)?;
        let first_frame = cstring("first.frame", first.frame)?;
        let second_name = cstring("second.name", second.name)?;
        let second_frame = cstring("second.frame", second.frame)?;
        let observer_c = cstring("observer", observer)?;
        let mut inner = self.lock();
        let mut confinement = inner.confinement_cell(search.confinement);
        let mut result = DoubleCell::with_capacity(WINDOW_CAPACITY);
        inner.backend.gfsep(
            &first_name,
            first.shape.as_cstr(),
            &first_frame,
            &second_name,
            second.shape.as_cstr(),
            &second_frame,
            correction.as_cstr(),
            &observer_c,
            search.constraint.relation(),
            search.constraint.reference_value(),
            search.adjustment,
            search.step_seconds,
            search.max_intervals as SpiceInt,
            &mut confinement,
            &mut result,
        );
        inner.check()?;
        Ok(inner.drain_intervals(&mut result))
    }

    /// Intervals where one coordinate of a ray's surface intercept satisfies
    /// the search constraint.
    pub fn find_coordinate_events(
        &self,
        query: &CoordinateEventQuery<'_>,
        search: &SearchWindow,
    ) -> Result<Vec<TimeWindow>, SpiceError> {
        let target = cstring("target", query.target)?;
        let fixed_frame = cstring("fixed_frame", query.fixed_frame)?;
        let observer = cstring("observer", query.observer)?;
        let ray_frame = cstring("ray_frame", query.ray_frame)?;
        let mut inner = self.lock();
        let mut confinement = inner.confinement_cell(search.confinement);
        let mut result = DoubleCell::with_capacity(WINDOW_CAPACITY);
        inner.backend.gfsntc(
            &target,
            &fixed_frame,
            ELLIPSOID_METHOD,
            query.correction.as_cstr(),
            &observer,
            &ray_frame,
            &query.ray_direction,
            query.system.as_cstr(),
            query.coordinate.as_cstr(),
            search.constraint.relation(),
            search.constraint.reference_value(),
            search.adjustment,
            search.step_seconds,
            search.max_intervals as SpiceInt,
            &mut confinement,
            &mut result,
        );
        inner.check()?;
        Ok(inner.drain_intervals(&mut result))
    }

    /// Intervals where `target` appears in the field of view of
    /// `instrument`.
    pub fn find_target_in_fov(
        &self,
        instrument: &str,
        target: TargetBody<'_>,
        observer: &str,
        correction: AberrationCorrection,
        step_seconds: f64,
        confinement: TimeWindow,
    ) -> Result<Vec<TimeWindow>, SpiceError> {
        let instrument_c = cstring("instrument", instrument)?;
        let target_name = cstring("target.name", target.name)?;
        let target_frame = cstring("target.frame", target.frame)?;
        let observer_c = cstring("observer", observer)?;
        let mut inner = self.lock();
        let mut confinement = inner.confinement_cell(confinement);
        let mut result = DoubleCell::with_capacity(WINDOW_CAPACITY);
        inner.backend.gftfov(
            &instrument_c,
            &target_name,
            target.shape.as_cstr(),
            &target_frame,
            correction.as_cstr(),
            &observer_c,
            step_seconds,
            &mut confinement,
            &mut result,
        );
        inner.check()?;
        Ok(inner.drain_intervals(&mut result))
    }

    /// Intervals where a fixed ray points into the field of view of
    /// `instrument`.
    pub fn find_ray_in_fov(
        &self,
        instrument: &str,
        ray_frame: &str,
        ray_direction: [f64; 3],
        observer: &str,
        correction: AberrationCorrection,
        step_seconds: f64,
        confinement: TimeWindow,
    ) -> Result<Vec<TimeWindow>, SpiceError> {
        let instrument_c = cstring("instrument", instrument)?;
        let ray_frame_c = cstring("ray_frame", ray_frame)?;
        let observer_c = cstring("observer", observer)?;
        let mut inner = self.lock();
        let mut confinement = inner.confinement_cell(confinement);
        let mut result = DoubleCell::with_capacity(WINDOW_CAPACITY);
        inner.backend.gfrfov(
            &instrument_c,
            &ray_direction,
            &ray_frame_c,
            correction.as_cstr(),
            &observer_c,
            step_seconds,
            &mut confinement,
            &mut result,
        );
        inner.check()?;
        Ok(inner.drain_intervals(&mut result))
    }

    /// Intervals where `front` occults `back` as seen from `observer`.
    pub fn find_occultations(
        &self,
        kind: OccultationKind,
        front: TargetBody<'_>,
        back: TargetBody<'_>,
        observer: &str,
        correction: AberrationCorrection,
        step_seconds: f64,
        confinement: TimeWindow,
    ) -> Result<Vec<TimeWindow>, SpiceError> {
        let front_name = cstring("front.name", front.name)?;
        let front_frame = cstring("front.frame", front.frame)?;
        let back_name = cstring("back.name", back.name)?;
        let back_frame = cstring("back.frame", back.frame)?;
        let observer_c = cstring("observer", observer)?;
        let mut inner = self.lock();
        let mut confinement = inner.confinement_cell(confinement);
        let mut result = DoubleCell::with_capacity(WINDOW_CAPACITY);
        inner.backend.gfoclt(
            kind.as_cstr(),
            &front_name,
            front.shape.as_cstr(),
            &front_frame,
            &back_name,
            back.shape.as_cstr(),
            &back_frame,
            correction.as_cstr(),
            &observer_c,
            step_seconds,
            &mut confinement,
            &mut result,
        );
        inner.check()?;
        Ok(inner.drain_intervals(&mut result))
    }
}
