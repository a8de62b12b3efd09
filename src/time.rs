//! Time systems: epoch parsing and formatting, uniform time scales and
//! spacecraft clocks.
//!
//! Everything except [`seconds_per_day`](Toolkit::seconds_per_day) depends on
//! a loaded leapseconds kernel, and the spacecraft clock shims additionally
//! need an SCLK kernel for the spacecraft in question.

use cspice_sys::SpiceInt;

use crate::types::{EpochKind, TimeSystem, UtcFormat};
use crate::{Backend, SpiceError, Toolkit, buffer_to_string, cstring};

const TIME_BUFFER_LEN: usize = 64;

/// Well-known reference epochs, in TDB seconds past J2000.
pub mod epochs {
    /// Julian epoch 2100.
    pub const J2100: f64 = 3_155_760_000.0;
    /// Julian epoch 1950.
    pub const J1950: f64 = -1_577_880_000.0;
    /// Julian epoch 1900.
    pub const J1900: f64 = -3_155_760_000.0;
    /// GPS epoch, 1980-01-06 00:00:00 UTC.
    pub const GPS: f64 = -630_763_148.815_936_8;
    /// Unix epoch, 1970-01-01 00:00:00 UTC.
    pub const UNIX: f64 = -946_727_958.816_064_4;
}

impl<B: Backend> Toolkit<B> {
    /// Parses an epoch string (UTC by default, or any calendar/Julian form
    /// the library accepts) into TDB seconds past J2000.
    pub fn parse_time(&self, epoch: &str) -> Result<f64, SpiceError> {
        let epoch_c = cstring("epoch", epoch)?;
        let mut et = 0.0;
        let mut inner = self.lock();
        inner.backend.str2et(&epoch_c, &mut et);
        inner.check()?;
        Ok(et)
    }

    /// Formats `et` with a timout picture such as
    /// `"YYYY-MM-DD HR:MN:SC ::TDB"`.
    pub fn format_time(&self, et: f64, picture: &str) -> Result<String, SpiceError> {
        let picture_c = cstring("picture", picture)?;
        let mut output = vec![0i8; picture.len() + TIME_BUFFER_LEN];
        let mut inner = self.lock();
        inner.backend.timout(et, &picture_c, &mut output);
        inner.check()?;
        Ok(buffer_to_string(&output))
    }

    /// Renders `et` as a UTC string with `precision` fractional-second
    /// digits.
    pub fn utc_string(
        &self,
        et: f64,
        format: UtcFormat,
        precision: u8,
    ) -> Result<String, SpiceError> {
        let mut output = vec![0i8; TIME_BUFFER_LEN];
        let mut inner = self.lock();
        inner
            .backend
            .et2utc(et, format.as_cstr(), precision as SpiceInt, &mut output);
        inner.check()?;
        Ok(buffer_to_string(&output))
    }

    /// Seconds in a Julian day.
    pub fn seconds_per_day(&self) -> f64 {
        self.lock().backend.spd()
    }

    /// Converts an epoch between uniform time scales.
    pub fn convert_time(
        &self,
        epoch: f64,
        from: TimeSystem,
        to: TimeSystem,
    ) -> Result<f64, SpiceError> {
        let mut inner = self.lock();
        let converted = inner.backend.unitim(epoch, from.as_cstr(), to.as_cstr());
        inner.check()?;
        Ok(converted)
    }

    /// Difference ET - UTC at `epoch`, which is expressed in the scale named
    /// by `kind`.
    pub fn delta_et(&self, epoch: f64, kind: EpochKind) -> Result<f64, SpiceError> {
        let mut delta = 0.0;
        let mut inner = self.lock();
        inner.backend.deltet(epoch, kind.as_cstr(), &mut delta);
        inner.check()?;
        Ok(delta)
    }

    /// The current wall-clock instant as ephemeris time.
    pub fn current_epoch(&self) -> Result<f64, SpiceError> {
        let stamp = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3f")
            .to_string();
        self.parse_time(&stamp)
    }

    /// Parses a spacecraft clock string (`"2/32599938.217"` style) into
    /// ephemeris time.
    pub fn clock_string_to_et(&self, spacecraft_id: i32, clock: &str) -> Result<f64, SpiceError> {
        let clock_c = cstring("clock", clock)?;
        let mut et = 0.0;
        let mut inner = self.lock();
        inner
            .backend
            .scs2e(spacecraft_id as SpiceInt, &clock_c, &mut et);
        inner.check()?;
        Ok(et)
    }

    /// Converts an encoded clock tick count into ephemeris time.
    pub fn clock_ticks_to_et(&self, spacecraft_id: i32, ticks: f64) -> Result<f64, SpiceError> {
        let mut et = 0.0;
        let mut inner = self.lock();
        inner.backend.sct2e(spacecraft_id as SpiceInt, ticks, &mut et);
        inner.check()?;
        Ok(et)
    }

    /// Converts ephemeris time into encoded clock ticks.
    pub fn et_to_clock_ticks(&self, spacecraft_id: i32, et: f64) -> Result<f64, SpiceError> {
        let mut ticks = 0.0;
        let mut inner = self.lock();
        inner.backend.sce2c(spacecraft_id as SpiceInt, et, &mut ticks);
        inner.check()?;
        Ok(ticks)
    }

    /// Encodes a clock string as absolute ticks since spacecraft clock
    /// start.
    pub fn encode_clock_string(&self, spacecraft_id: i32, clock: &str) -> Result<f64, SpiceError> {
        let clock_c = cstring("clock", clock)?;
        let mut ticks = 0.0;
        let mut inner = self.lock();
        inner
            .backend
            .scencd(spacecraft_id as SpiceInt, &clock_c, &mut ticks);
        inner.check()?;
        Ok(ticks)
    }

    /// Renders encoded clock ticks back into a clock string, the inverse of
    /// [`encode_clock_string`](Self::encode_clock_string).
    pub fn decode_clock_ticks(&self, spacecraft_id: i32, ticks: f64) -> Result<String, SpiceError> {
        let mut output = vec![0i8; TIME_BUFFER_LEN];
        let mut inner = self.lock();
        inner
            .backend
            .scdecd(spacecraft_id as SpiceInt, ticks, &mut output);
        inner.check()?;
        Ok(buffer_to_string(&output))
    }

    /// Converts a clock string into ticks without partition adjustment,
    /// which makes it the right form for clock arithmetic.
    pub fn clock_string_to_ticks(&self, spacecraft_id: i32, clock: &str) -> Result<f64, SpiceError> {
        let clock_c = cstring("clock", clock)?;
        let mut ticks = 0.0;
        let mut inner = self.lock();
        inner
            .backend
            .sctiks(spacecraft_id as SpiceInt, &clock_c, &mut ticks);
        inner.check()?;
        Ok(ticks)
    }
}
