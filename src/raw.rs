//! The FFI seam: one trait method per wrapped CSPICE entry point.

use std::ffi::CStr;

use cspice_sys::{
    SpiceBoolean, SpiceDouble, SpiceInt, bodc2n_c, bodn2c_c, bodvcd_c, bodvrd_c, deltet_c, dpr_c,
    erract_c, et2utc_c, failed_c, furnsh_c, georec_c, getfov_c, getmsg_c, gfdist_c, gfoclt_c,
    gfrfov_c, gfsep_c, gfsntc_c, gftfov_c, kclear_c, kdata_c, ktotal_c, latrec_c, latsph_c,
    lspcn_c, pckfrm_c, pgrrec_c, phaseq_c, pxform_c, pxfrm2_c, radrec_c, recgeo_c, reclat_c,
    recpgr_c, recrad_c, recsph_c, reset_c, rpd_c, scdecd_c, sce2c_c, scencd_c, scs2e_c, sct2e_c,
    sctiks_c, sincpt_c, spd_c, sphlat_c, sphrec_c, spkcpo_c, spkcpt_c, spkcvo_c, spkcvt_c,
    spkezr_c, spkobj_c, spkpos_c, srfrec_c, str2et_c, subpnt_c, subslr_c, sxform_c, timout_c,
    unitim_c, unload_c, wncard_c, wnfetd_c, wninsd_c,
};

use crate::cell::{DoubleCell, IntCell};

/// Library surface the toolkit drives.
///
/// Methods mirror the underlying entry points at C granularity so the layer
/// above stays a pure marshaling layer: it converts arguments, makes exactly
/// one call here, and translates the error flag. Production code uses
/// [`Cspice`]; tests substitute scripted stand-ins to run the same shims
/// without linking kernels or forcing real geometry.
///
/// String buffers are passed as `&mut [i8]` slices; implementations treat the
/// slice length as the C `lenout` argument. Found-flag routines return `bool`.
pub trait Backend {
    // error subsystem
    fn failed(&mut self) -> bool;
    fn getmsg(&mut self, option: &CStr, message: &mut [i8]);
    fn reset(&mut self);
    fn erract_set(&mut self, action: &CStr);

    // kernel pool
    fn furnsh(&mut self, path: &CStr);
    fn unload(&mut self, path: &CStr);
    fn ktotal(&mut self, category: &CStr) -> SpiceInt;
    fn kclear(&mut self);
    #[allow(clippy::too_many_arguments)]
    fn kdata(
        &mut self,
        which: SpiceInt,
        category: &CStr,
        file: &mut [i8],
        kind: &mut [i8],
        source: &mut [i8],
        handle: &mut SpiceInt,
    ) -> bool;

    // coordinate conversions
    fn latrec(&mut self, radius: f64, longitude: f64, latitude: f64, rectan: &mut [f64; 3]);
    fn reclat(&mut self, rectan: &[f64; 3], radius: &mut f64, longitude: &mut f64, latitude: &mut f64);
    fn sphrec(&mut self, radius: f64, colatitude: f64, longitude: f64, rectan: &mut [f64; 3]);
    fn recsph(&mut self, rectan: &[f64; 3], radius: &mut f64, colatitude: &mut f64, longitude: &mut f64);
    fn radrec(&mut self, range: f64, right_ascension: f64, declination: f64, rectan: &mut [f64; 3]);
    fn recrad(&mut self, rectan: &[f64; 3], range: &mut f64, right_ascension: &mut f64, declination: &mut f64);
    #[allow(clippy::too_many_arguments)]
    fn latsph(&mut self, radius: f64, longitude: f64, latitude: f64, rho: &mut f64, colatitude: &mut f64, s_longitude: &mut f64);
    #[allow(clippy::too_many_arguments)]
    fn sphlat(&mut self, radius: f64, colatitude: f64, s_longitude: f64, l_radius: &mut f64, longitude: &mut f64, latitude: &mut f64);
    #[allow(clippy::too_many_arguments)]
    fn georec(&mut self, longitude: f64, latitude: f64, altitude: f64, equatorial_radius: f64, flattening: f64, rectan: &mut [f64; 3]);
    #[allow(clippy::too_many_arguments)]
    fn recgeo(&mut self, rectan: &[f64; 3], equatorial_radius: f64, flattening: f64, longitude: &mut f64, latitude: &mut f64, altitude: &mut f64);
    #[allow(clippy::too_many_arguments)]
    fn pgrrec(&mut self, body: &CStr, longitude: f64, latitude: f64, altitude: f64, equatorial_radius: f64, flattening: f64, rectan: &mut [f64; 3]);
    #[allow(clippy::too_many_arguments)]
    fn recpgr(&mut self, body: &CStr, rectan: &[f64; 3], equatorial_radius: f64, flattening: f64, longitude: &mut f64, latitude: &mut f64, altitude: &mut f64);
    fn srfrec(&mut self, body: SpiceInt, longitude: f64, latitude: f64, rectan: &mut [f64; 3]);
    fn dpr(&mut self) -> f64;
    fn rpd(&mut self) -> f64;

    // geometry
    fn lspcn(&mut self, body: &CStr, et: f64, correction: &CStr) -> f64;
    #[allow(clippy::too_many_arguments)]
    fn sincpt(
        &mut self,
        method: &CStr,
        target: &CStr,
        et: f64,
        fixed_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        ray_frame: &CStr,
        ray_direction: &[f64; 3],
        point: &mut [f64; 3],
        target_epoch: &mut f64,
        surface_vector: &mut [f64; 3],
    ) -> bool;
    #[allow(clippy::too_many_arguments)]
    fn subpnt(
        &mut self,
        method: &CStr,
        target: &CStr,
        et: f64,
        fixed_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        point: &mut [f64; 3],
        target_epoch: &mut f64,
        surface_vector: &mut [f64; 3],
    );
    #[allow(clippy::too_many_arguments)]
    fn subslr(
        &mut self,
        method: &CStr,
        target: &CStr,
        et: f64,
        fixed_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        point: &mut [f64; 3],
        target_epoch: &mut f64,
        surface_vector: &mut [f64; 3],
    );
    fn phaseq(&mut self, et: f64, target: &CStr, illuminator: &CStr, observer: &CStr, correction: &CStr) -> f64;
    #[allow(clippy::too_many_arguments)]
    fn getfov(
        &mut self,
        instrument: SpiceInt,
        shape: &mut [i8],
        frame: &mut [i8],
        boresight: &mut [f64; 3],
        count: &mut SpiceInt,
        bounds: &mut [[f64; 3]],
    );
    fn bodvrd(&mut self, body: &CStr, item: &CStr, values: &mut [f64], dim: &mut SpiceInt);
    fn bodvcd(&mut self, body: SpiceInt, item: &CStr, values: &mut [f64], dim: &mut SpiceInt);
    fn bodn2c(&mut self, name: &CStr, code: &mut SpiceInt) -> bool;
    fn bodc2n(&mut self, code: SpiceInt, name: &mut [i8]) -> bool;

    // ephemerides
    #[allow(clippy::too_many_arguments)]
    fn spkpos(
        &mut self,
        target: &CStr,
        et: f64,
        frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        position: &mut [f64; 3],
        light_time: &mut f64,
    );
    #[allow(clippy::too_many_arguments)]
    fn spkezr(
        &mut self,
        target: &CStr,
        et: f64,
        frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    );
    fn pxform(&mut self, from: &CStr, to: &CStr, et: f64, rotation: &mut [[f64; 3]; 3]);
    fn pxfrm2(&mut self, from: &CStr, to: &CStr, from_et: f64, to_et: f64, rotation: &mut [[f64; 3]; 3]);
    fn sxform(&mut self, from: &CStr, to: &CStr, et: f64, transform: &mut [[f64; 6]; 6]);
    #[allow(clippy::too_many_arguments)]
    fn spkcpo(
        &mut self,
        target: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer_position: &[f64; 3],
        observer_center: &CStr,
        observer_frame: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    );
    #[allow(clippy::too_many_arguments)]
    fn spkcpt(
        &mut self,
        target_position: &[f64; 3],
        target_center: &CStr,
        target_frame: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    );
    #[allow(clippy::too_many_arguments)]
    fn spkcvo(
        &mut self,
        target: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer_state: &[f64; 6],
        observer_epoch: f64,
        observer_center: &CStr,
        observer_frame: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    );
    #[allow(clippy::too_many_arguments)]
    fn spkcvt(
        &mut self,
        target_state: &[f64; 6],
        target_epoch: f64,
        target_center: &CStr,
        target_frame: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    );
    fn spkobj(&mut self, file: &CStr, ids: &mut IntCell);
    fn pckfrm(&mut self, file: &CStr, ids: &mut IntCell);

    // geometry finders and windows
    #[allow(clippy::too_many_arguments)]
    fn gfdist(
        &mut self,
        target: &CStr,
        correction: &CStr,
        observer: &CStr,
        relation: &CStr,
        reference_value: f64,
        adjustment: f64,
        step: f64,
        max_intervals: SpiceInt,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    );
    #[allow(clippy::too_many_arguments)]
    fn gfsep(
        &mut self,
        first: &CStr,
        first_shape: &CStr,
        first_frame: &CStr,
        second: &CStr,
        second_shape: &CStr,
        second_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        relation: &CStr,
        reference_value: f64,
        adjustment: f64,
        step: f64,
        max_intervals: SpiceInt,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    );
    #[allow(clippy::too_many_arguments)]
    fn gfsntc(
        &mut self,
        target: &CStr,
        fixed_frame: &CStr,
        method: &CStr,
        correction: &CStr,
        observer: &CStr,
        ray_frame: &CStr,
        ray_direction: &[f64; 3],
        system: &CStr,
        coordinate: &CStr,
        relation: &CStr,
        reference_value: f64,
        adjustment: f64,
        step: f64,
        max_intervals: SpiceInt,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    );
    #[allow(clippy::too_many_arguments)]
    fn gftfov(
        &mut self,
        instrument: &CStr,
        target: &CStr,
        target_shape: &CStr,
        target_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        step: f64,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    );
    #[allow(clippy::too_many_arguments)]
    fn gfrfov(
        &mut self,
        instrument: &CStr,
        ray_direction: &[f64; 3],
        ray_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        step: f64,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    );
    #[allow(clippy::too_many_arguments)]
    fn gfoclt(
        &mut self,
        kind: &CStr,
        front: &CStr,
        front_shape: &CStr,
        front_frame: &CStr,
        back: &CStr,
        back_shape: &CStr,
        back_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        step: f64,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    );
    fn wninsd(&mut self, start: f64, end: f64, window: &mut DoubleCell);
    fn wncard(&mut self, window: &mut DoubleCell) -> SpiceInt;
    fn wnfetd(&mut self, window: &mut DoubleCell, index: SpiceInt, start: &mut f64, end: &mut f64);

    // time systems and spacecraft clocks
    fn str2et(&mut self, epoch: &CStr, et: &mut f64);
    fn timout(&mut self, et: f64, picture: &CStr, output: &mut [i8]);
    fn et2utc(&mut self, et: f64, format: &CStr, precision: SpiceInt, output: &mut [i8]);
    fn spd(&mut self) -> f64;
    fn unitim(&mut self, epoch: f64, from: &CStr, to: &CStr) -> f64;
    fn deltet(&mut self, epoch: f64, epoch_kind: &CStr, delta: &mut f64);
    fn sce2c(&mut self, spacecraft: SpiceInt, et: f64, ticks: &mut f64);
    fn scs2e(&mut self, spacecraft: SpiceInt, clock: &CStr, et: &mut f64);
    fn sct2e(&mut self, spacecraft: SpiceInt, ticks: f64, et: &mut f64);
    fn scencd(&mut self, spacecraft: SpiceInt, clock: &CStr, ticks: &mut f64);
    fn scdecd(&mut self, spacecraft: SpiceInt, ticks: f64, clock: &mut [i8]);
    fn sctiks(&mut self, spacecraft: SpiceInt, clock: &CStr, ticks: &mut f64);
}

/// The linked CSPICE library. Every method is a single `unsafe` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cspice;

impl Backend for Cspice {
    fn failed(&mut self) -> bool {
        unsafe { failed_c() != 0 as SpiceBoolean }
    }

    fn getmsg(&mut self, option: &CStr, message: &mut [i8]) {
        unsafe {
            getmsg_c(
                option.as_ptr() as *mut i8,
                message.len() as SpiceInt,
                message.as_mut_ptr(),
            );
        }
    }

    fn reset(&mut self) {
        unsafe { reset_c() }
    }

    fn erract_set(&mut self, action: &CStr) {
        const SET: &CStr = c"SET";
        unsafe {
            erract_c(
                SET.as_ptr() as *mut i8,
                0 as SpiceInt,
                action.as_ptr() as *mut i8,
            );
        }
    }

    fn furnsh(&mut self, path: &CStr) {
        unsafe { furnsh_c(path.as_ptr() as *mut i8) }
    }

    fn unload(&mut self, path: &CStr) {
        unsafe { unload_c(path.as_ptr() as *mut i8) }
    }

    fn ktotal(&mut self, category: &CStr) -> SpiceInt {
        let mut count: SpiceInt = 0;
        unsafe { ktotal_c(category.as_ptr() as *mut i8, &mut count) }
        count
    }

    fn kclear(&mut self) {
        unsafe { kclear_c() }
    }

    fn kdata(
        &mut self,
        which: SpiceInt,
        category: &CStr,
        file: &mut [i8],
        kind: &mut [i8],
        source: &mut [i8],
        handle: &mut SpiceInt,
    ) -> bool {
        let mut found: SpiceBoolean = 0;
        unsafe {
            kdata_c(
                which,
                category.as_ptr() as *mut i8,
                file.len() as SpiceInt,
                kind.len() as SpiceInt,
                source.len() as SpiceInt,
                file.as_mut_ptr(),
                kind.as_mut_ptr(),
                source.as_mut_ptr(),
                handle,
                &mut found,
            );
        }
        found != 0
    }

    fn latrec(&mut self, radius: f64, longitude: f64, latitude: f64, rectan: &mut [f64; 3]) {
        unsafe { latrec_c(radius, longitude, latitude, rectan.as_mut_ptr()) }
    }

    fn reclat(&mut self, rectan: &[f64; 3], radius: &mut f64, longitude: &mut f64, latitude: &mut f64) {
        unsafe { reclat_c(rectan.as_ptr() as *mut SpiceDouble, radius, longitude, latitude) }
    }

    fn sphrec(&mut self, radius: f64, colatitude: f64, longitude: f64, rectan: &mut [f64; 3]) {
        unsafe { sphrec_c(radius, colatitude, longitude, rectan.as_mut_ptr()) }
    }

    fn recsph(&mut self, rectan: &[f64; 3], radius: &mut f64, colatitude: &mut f64, longitude: &mut f64) {
        unsafe { recsph_c(rectan.as_ptr() as *mut SpiceDouble, radius, colatitude, longitude) }
    }

    fn radrec(&mut self, range: f64, right_ascension: f64, declination: f64, rectan: &mut [f64; 3]) {
        unsafe { radrec_c(range, right_ascension, declination, rectan.as_mut_ptr()) }
    }

    fn recrad(&mut self, rectan: &[f64; 3], range: &mut f64, right_ascension: &mut f64, declination: &mut f64) {
        unsafe { recrad_c(rectan.as_ptr() as *mut SpiceDouble, range, right_ascension, declination) }
    }

    fn latsph(&mut self, radius: f64, longitude: f64, latitude: f64, rho: &mut f64, colatitude: &mut f64, s_longitude: &mut f64) {
        unsafe { latsph_c(radius, longitude, latitude, rho, colatitude, s_longitude) }
    }

    fn sphlat(&mut self, radius: f64, colatitude: f64, s_longitude: f64, l_radius: &mut f64, longitude: &mut f64, latitude: &mut f64) {
        unsafe { sphlat_c(radius, colatitude, s_longitude, l_radius, longitude, latitude) }
    }

    fn georec(&mut self, longitude: f64, latitude: f64, altitude: f64, equatorial_radius: f64, flattening: f64, rectan: &mut [f64; 3]) {
        unsafe { georec_c(longitude, latitude, altitude, equatorial_radius, flattening, rectan.as_mut_ptr()) }
    }

    fn recgeo(&mut self, rectan: &[f64; 3], equatorial_radius: f64, flattening: f64, longitude: &mut f64, latitude: &mut f64, altitude: &mut f64) {
        unsafe {
            recgeo_c(
                rectan.as_ptr() as *mut SpiceDouble,
                equatorial_radius,
                flattening,
                longitude,
                latitude,
                altitude,
            );
        }
    }

    fn pgrrec(&mut self, body: &CStr, longitude: f64, latitude: f64, altitude: f64, equatorial_radius: f64, flattening: f64, rectan: &mut [f64; 3]) {
        unsafe {
            pgrrec_c(
                body.as_ptr() as *mut i8,
                longitude,
                latitude,
                altitude,
                equatorial_radius,
                flattening,
                rectan.as_mut_ptr(),
            );
        }
    }

    fn recpgr(&mut self, body: &CStr, rectan: &[f64; 3], equatorial_radius: f64, flattening: f64, longitude: &mut f64, latitude: &mut f64, altitude: &mut f64) {
        unsafe {
            recpgr_c(
                body.as_ptr() as *mut i8,
                rectan.as_ptr() as *mut SpiceDouble,
                equatorial_radius,
                flattening,
                longitude,
                latitude,
                altitude,
            );
        }
    }

    fn srfrec(&mut self, body: SpiceInt, longitude: f64, latitude: f64, rectan: &mut [f64; 3]) {
        unsafe { srfrec_c(body, longitude, latitude, rectan.as_mut_ptr()) }
    }

    fn dpr(&mut self) -> f64 {
        unsafe { dpr_c() }
    }

    fn rpd(&mut self) -> f64 {
        unsafe { rpd_c() }
    }

    fn lspcn(&mut self, body: &CStr, et: f64, correction: &CStr) -> f64 {
        unsafe {
            lspcn_c(
                body.as_ptr() as *mut i8,
                et,
                correction.as_ptr() as *mut i8,
            )
        }
    }

    fn sincpt(
        &mut self,
        method: &CStr,
        target: &CStr,
        et: f64,
        fixed_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        ray_frame: &CStr,
        ray_direction: &[f64; 3],
        point: &mut [f64; 3],
        target_epoch: &mut f64,
        surface_vector: &mut [f64; 3],
    ) -> bool {
        let mut found: SpiceBoolean = 0;
        unsafe {
            sincpt_c(
                method.as_ptr() as *mut i8,
                target.as_ptr() as *mut i8,
                et,
                fixed_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                ray_frame.as_ptr() as *mut i8,
                ray_direction.as_ptr() as *mut SpiceDouble,
                point.as_mut_ptr(),
                target_epoch,
                surface_vector.as_mut_ptr(),
                &mut found,
            );
        }
        found != 0
    }

    fn subpnt(
        &mut self,
        method: &CStr,
        target: &CStr,
        et: f64,
        fixed_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        point: &mut [f64; 3],
        target_epoch: &mut f64,
        surface_vector: &mut [f64; 3],
    ) {
        unsafe {
            subpnt_c(
                method.as_ptr() as *mut i8,
                target.as_ptr() as *mut i8,
                et,
                fixed_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                point.as_mut_ptr(),
                target_epoch,
                surface_vector.as_mut_ptr(),
            );
        }
    }

    fn subslr(
        &mut self,
        method: &CStr,
        target: &CStr,
        et: f64,
        fixed_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        point: &mut [f64; 3],
        target_epoch: &mut f64,
        surface_vector: &mut [f64; 3],
    ) {
        unsafe {
            subslr_c(
                method.as_ptr() as *mut i8,
                target.as_ptr() as *mut i8,
                et,
                fixed_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                point.as_mut_ptr(),
                target_epoch,
                surface_vector.as_mut_ptr(),
            );
        }
    }

    fn phaseq(&mut self, et: f64, target: &CStr, illuminator: &CStr, observer: &CStr, correction: &CStr) -> f64 {
        unsafe {
            phaseq_c(
                et,
                target.as_ptr() as *mut i8,
                illuminator.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
            )
        }
    }

    fn getfov(
        &mut self,
        instrument: SpiceInt,
        shape: &mut [i8],
        frame: &mut [i8],
        boresight: &mut [f64; 3],
        count: &mut SpiceInt,
        bounds: &mut [[f64; 3]],
    ) {
        unsafe {
            getfov_c(
                instrument,
                bounds.len() as SpiceInt,
                shape.len() as SpiceInt,
                frame.len() as SpiceInt,
                shape.as_mut_ptr(),
                frame.as_mut_ptr(),
                boresight.as_mut_ptr(),
                count,
                bounds.as_mut_ptr(),
            );
        }
    }

    fn bodvrd(&mut self, body: &CStr, item: &CStr, values: &mut [f64], dim: &mut SpiceInt) {
        unsafe {
            bodvrd_c(
                body.as_ptr() as *mut i8,
                item.as_ptr() as *mut i8,
                values.len() as SpiceInt,
                dim,
                values.as_mut_ptr(),
            );
        }
    }

    fn bodvcd(&mut self, body: SpiceInt, item: &CStr, values: &mut [f64], dim: &mut SpiceInt) {
        unsafe {
            bodvcd_c(
                body,
                item.as_ptr() as *mut i8,
                values.len() as SpiceInt,
                dim,
                values.as_mut_ptr(),
            );
        }
    }

    fn bodn2c(&mut self, name: &CStr, code: &mut SpiceInt) -> bool {
        let mut found: SpiceBoolean = 0;
        unsafe { bodn2c_c(name.as_ptr() as *mut i8, code, &mut found) }
        found != 0
    }

    fn bodc2n(&mut self, code: SpiceInt, name: &mut [i8]) -> bool {
        let mut found: SpiceBoolean = 0;
        unsafe { bodc2n_c(code, name.len() as SpiceInt, name.as_mut_ptr(), &mut found) }
        found != 0
    }

    fn spkpos(
        &mut self,
        target: &CStr,
        et: f64,
        frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        position: &mut [f64; 3],
        light_time: &mut f64,
    ) {
        unsafe {
            spkpos_c(
                target.as_ptr() as *mut i8,
                et,
                frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                position.as_mut_ptr(),
                light_time,
            );
        }
    }

    fn spkezr(
        &mut self,
        target: &CStr,
        et: f64,
        frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    ) {
        unsafe {
            spkezr_c(
                target.as_ptr() as *mut i8,
                et,
                frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                state.as_mut_ptr(),
                light_time,
            );
        }
    }

    fn pxform(&mut self, from: &CStr, to: &CStr, et: f64, rotation: &mut [[f64; 3]; 3]) {
        unsafe {
            pxform_c(
                from.as_ptr() as *mut i8,
                to.as_ptr() as *mut i8,
                et,
                rotation.as_mut_ptr(),
            );
        }
    }

    fn pxfrm2(&mut self, from: &CStr, to: &CStr, from_et: f64, to_et: f64, rotation: &mut [[f64; 3]; 3]) {
        unsafe {
            pxfrm2_c(
                from.as_ptr() as *mut i8,
                to.as_ptr() as *mut i8,
                from_et,
                to_et,
                rotation.as_mut_ptr(),
            );
        }
    }

    fn sxform(&mut self, from: &CStr, to: &CStr, et: f64, transform: &mut [[f64; 6]; 6]) {
        unsafe {
            sxform_c(
                from.as_ptr() as *mut i8,
                to.as_ptr() as *mut i8,
                et,
                transform.as_mut_ptr(),
            );
        }
    }

    fn spkcpo(
        &mut self,
        target: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer_position: &[f64; 3],
        observer_center: &CStr,
        observer_frame: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    ) {
        unsafe {
            spkcpo_c(
                target.as_ptr() as *mut i8,
                et,
                out_frame.as_ptr() as *mut i8,
                locus.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer_position.as_ptr() as *mut SpiceDouble,
                observer_center.as_ptr() as *mut i8,
                observer_frame.as_ptr() as *mut i8,
                state.as_mut_ptr(),
                light_time,
            );
        }
    }

    fn spkcpt(
        &mut self,
        target_position: &[f64; 3],
        target_center: &CStr,
        target_frame: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    ) {
        unsafe {
            spkcpt_c(
                target_position.as_ptr() as *mut SpiceDouble,
                target_center.as_ptr() as *mut i8,
                target_frame.as_ptr() as *mut i8,
                et,
                out_frame.as_ptr() as *mut i8,
                locus.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                state.as_mut_ptr(),
                light_time,
            );
        }
    }

    fn spkcvo(
        &mut self,
        target: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer_state: &[f64; 6],
        observer_epoch: f64,
        observer_center: &CStr,
        observer_frame: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    ) {
        unsafe {
            spkcvo_c(
                target.as_ptr() as *mut i8,
                et,
                out_frame.as_ptr() as *mut i8,
                locus.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer_state.as_ptr() as *mut SpiceDouble,
                observer_epoch,
                observer_center.as_ptr() as *mut i8,
                observer_frame.as_ptr() as *mut i8,
                state.as_mut_ptr(),
                light_time,
            );
        }
    }

    fn spkcvt(
        &mut self,
        target_state: &[f64; 6],
        target_epoch: f64,
        target_center: &CStr,
        target_frame: &CStr,
        et: f64,
        out_frame: &CStr,
        locus: &CStr,
        correction: &CStr,
        observer: &CStr,
        state: &mut [f64; 6],
        light_time: &mut f64,
    ) {
        unsafe {
            spkcvt_c(
                target_state.as_ptr() as *mut SpiceDouble,
                target_epoch,
                target_center.as_ptr() as *mut i8,
                target_frame.as_ptr() as *mut i8,
                et,
                out_frame.as_ptr() as *mut i8,
                locus.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                state.as_mut_ptr(),
                light_time,
            );
        }
    }

    fn spkobj(&mut self, file: &CStr, ids: &mut IntCell) {
        unsafe { spkobj_c(file.as_ptr() as *mut i8, ids.raw_mut()) }
    }

    fn pckfrm(&mut self, file: &CStr, ids: &mut IntCell) {
        unsafe { pckfrm_c(file.as_ptr() as *mut i8, ids.raw_mut()) }
    }

    fn gfdist(
        &mut self,
        target: &CStr,
        correction: &CStr,
        observer: &CStr,
        relation: &CStr,
        reference_value: f64,
        adjustment: f64,
        step: f64,
        max_intervals: SpiceInt,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    ) {
        unsafe {
            gfdist_c(
                target.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                relation.as_ptr() as *mut i8,
                reference_value,
                adjustment,
                step,
                max_intervals,
                confinement.raw_mut(),
                result.raw_mut(),
            );
        }
    }

    fn gfsep(
        &mut self,
        first: &CStr,
        first_shape: &CStr,
        first_frame: &CStr,
        second: &CStr,
        second_shape: &CStr,
        second_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        relation: &CStr,
        reference_value: f64,
        adjustment: f64,
        step: f64,
        max_intervals: SpiceInt,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    ) {
        unsafe {
            gfsep_c(
                first.as_ptr() as *mut i8,
                first_shape.as_ptr() as *mut i8,
                first_frame.as_ptr() as *mut i8,
                second.as_ptr() as *mut i8,
                second_shape.as_ptr() as *mut i8,
                second_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                relation.as_ptr() as *mut i8,
                reference_value,
                adjustment,
                step,
                max_intervals,
                confinement.raw_mut(),
                result.raw_mut(),
            );
        }
    }

    fn gfsntc(
        &mut self,
        target: &CStr,
        fixed_frame: &CStr,
        method: &CStr,
        correction: &CStr,
        observer: &CStr,
        ray_frame: &CStr,
        ray_direction: &[f64; 3],
        system: &CStr,
        coordinate: &CStr,
        relation: &CStr,
        reference_value: f64,
        adjustment: f64,
        step: f64,
        max_intervals: SpiceInt,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    ) {
        unsafe {
            gfsntc_c(
                target.as_ptr() as *mut i8,
                fixed_frame.as_ptr() as *mut i8,
                method.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                ray_frame.as_ptr() as *mut i8,
                ray_direction.as_ptr() as *mut SpiceDouble,
                system.as_ptr() as *mut i8,
                coordinate.as_ptr() as *mut i8,
                relation.as_ptr() as *mut i8,
                reference_value,
                adjustment,
                step,
                max_intervals,
                confinement.raw_mut(),
                result.raw_mut(),
            );
        }
    }

    fn gftfov(
        &mut self,
        instrument: &CStr,
        target: &CStr,
        target_shape: &CStr,
        target_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        step: f64,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    ) {
        unsafe {
            gftfov_c(
                instrument.as_ptr() as *mut i8,
                target.as_ptr() as *mut i8,
                target_shape.as_ptr() as *mut i8,
                target_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                step,
                confinement.raw_mut(),
                result.raw_mut(),
            );
        }
    }

    fn gfrfov(
        &mut self,
        instrument: &CStr,
        ray_direction: &[f64; 3],
        ray_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        step: f64,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    ) {
        unsafe {
            gfrfov_c(
                instrument.as_ptr() as *mut i8,
                ray_direction.as_ptr() as *mut SpiceDouble,
                ray_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                step,
                confinement.raw_mut(),
                result.raw_mut(),
            );
        }
    }

    fn gfoclt(
        &mut self,
        kind: &CStr,
        front: &CStr,
        front_shape: &CStr,
        front_frame: &CStr,
        back: &CStr,
        back_shape: &CStr,
        back_frame: &CStr,
        correction: &CStr,
        observer: &CStr,
        step: f64,
        confinement: &mut DoubleCell,
        result: &mut DoubleCell,
    ) {
        unsafe {
            gfoclt_c(
                kind.as_ptr() as *mut i8,
                front.as_ptr() as *mut i8,
                front_shape.as_ptr() as *mut i8,
                front_frame.as_ptr() as *mut i8,
                back.as_ptr() as *mut i8,
                back_shape.as_ptr() as *mut i8,
                back_frame.as_ptr() as *mut i8,
                correction.as_ptr() as *mut i8,
                observer.as_ptr() as *mut i8,
                step,
                confinement.raw_mut(),
                result.raw_mut(),
            );
        }
    }

    fn wninsd(&mut self, start: f64, end: f64, window: &mut DoubleCell) {
        unsafe { wninsd_c(start, end, window.raw_mut()) }
    }

    fn wncard(&mut self, window: &mut DoubleCell) -> SpiceInt {
        unsafe { wncard_c(window.raw_mut()) }
    }

    fn wnfetd(&mut self, window: &mut DoubleCell, index: SpiceInt, start: &mut f64, end: &mut f64) {
        unsafe { wnfetd_c(window.raw_mut(), index, start, end) }
    }

    fn str2et(&mut self, epoch: &CStr, et: &mut f64) {
        unsafe { str2et_c(epoch.as_ptr() as *mut i8, et) }
    }

    fn timout(&mut self, et: f64, picture: &CStr, output: &mut [i8]) {
        unsafe {
            timout_c(
                et,
                picture.as_ptr() as *mut i8,
                output.len() as SpiceInt,
                output.as_mut_ptr(),
            );
        }
    }

    fn et2utc(&mut self, et: f64, format: &CStr, precision: SpiceInt, output: &mut [i8]) {
        unsafe {
            et2utc_c(
                et,
                format.as_ptr() as *mut i8,
                precision,
                output.len() as SpiceInt,
                output.as_mut_ptr(),
            );
        }
    }

    fn spd(&mut self) -> f64 {
        unsafe { spd_c() }
    }

    fn unitim(&mut self, epoch: f64, from: &CStr, to: &CStr) -> f64 {
        unsafe {
            unitim_c(
                epoch,
                from.as_ptr() as *mut i8,
                to.as_ptr() as *mut i8,
            )
        }
    }

    fn deltet(&mut self, epoch: f64, epoch_kind: &CStr, delta: &mut f64) {
        unsafe { deltet_c(epoch, epoch_kind.as_ptr() as *mut i8, delta) }
    }

    fn sce2c(&mut self, spacecraft: SpiceInt, et: f64, ticks: &mut f64) {
        unsafe { sce2c_c(spacecraft, et, ticks) }
    }

    fn scs2e(&mut self, spacecraft: SpiceInt, clock: &CStr, et: &mut f64) {
        unsafe { scs2e_c(spacecraft, clock.as_ptr() as *mut i8, et) }
    }

    fn sct2e(&mut self, spacecraft: SpiceInt, ticks: f64, et: &mut f64) {
        unsafe { sct2e_c(spacecraft, ticks, et) }
    }

    fn scencd(&mut self, spacecraft: SpiceInt, clock: &CStr, ticks: &mut f64) {
        unsafe { scencd_c(spacecraft, clock.as_ptr() as *mut i8, ticks) }
    }

    fn scdecd(&mut self, spacecraft: SpiceInt, ticks: f64, clock: &mut [i8]) {
        unsafe { scdecd_c(spacecraft, ticks, clock.len() as SpiceInt, clock.as_mut_ptr()) }
    }

    fn sctiks(&mut self, spacecraft: SpiceInt, clock: &CStr, ticks: &mut f64) {
        unsafe { sctiks_c(spacecraft, clock.as_ptr() as *mut i8, ticks) }
    }
}
