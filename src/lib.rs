//! Safe, typed bindings to the NAIF CSPICE toolkit.
//!
//! CSPICE is a single-threaded C library with global kernel and error state.
//! [`Toolkit`] owns that state behind a mutex: every public method locks,
//! marshals its arguments, makes exactly one library call through the
//! [`Backend`] seam and translates the error flag before the lock is
//! released. The process-wide instance lives behind [`Toolkit::shared`];
//! tests construct their own toolkits over scripted backends.
//!
//! ```no_run
//! use spicebind::{AberrationCorrection, EphemerisQuery, Toolkit};
//!
//! let toolkit = Toolkit::shared();
//! toolkit.load_kernel("data/spice/naif0012.tls")?;
//! toolkit.load_kernel("data/spice/de440s.bsp")?;
//!
//! let et = toolkit.parse_time("2030-01-02 12:00:00 TDB")?;
//! let state = toolkit.state(
//!     &EphemerisQuery {
//!         target: "MARS BARYCENTER",
//!         observer: "EARTH",
//!         frame: "J2000",
//!         correction: AberrationCorrection::LightTimeStellar,
//!     },
//!     et,
//! )?;
//! println!("position: {:?} km", state.position_km);
//! # Ok::<(), spicebind::SpiceError>(())
//! ```

use std::ffi::{CStr, CString};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

pub mod cell;
mod coords;
mod ephem;
mod error;
mod geometry;
mod guard;
mod kernel;
pub mod kernels;
mod raw;
mod search;
mod time;
mod types;

pub use error::{ErrorDetail, SpiceError};
pub use raw::{Backend, Cspice};
pub use time::epochs;
pub use types::*;

/// Integer width of the linked library, part of the [`Backend`] vocabulary.
pub use cspice_sys::SpiceInt;

/// Serialized access to the CSPICE library state.
///
/// All state the wrapped routines read or write (the kernel pool, the error
/// subsystem) is owned by the toolkit's mutex, so a `&Toolkit` can be shared
/// freely across threads. Methods that fail release the lock normally; the
/// error subsystem is reset before the error is returned, so the next call
/// starts clean.
pub struct Toolkit<B: Backend = Cspice> {
    inner: Mutex<Inner<B>>,
}

struct Inner<B> {
    backend: B,
    detail: ErrorDetail,
}

impl Toolkit {
    /// The process-wide toolkit over the linked library.
    pub fn shared() -> &'static Toolkit {
        static SHARED: OnceLock<Toolkit> = OnceLock::new();
        SHARED.get_or_init(|| Toolkit::new(Cspice))
    }
}

impl<B: Backend> Toolkit<B> {
    /// Wraps `backend`, switching its error subsystem to report-and-return
    /// mode so failed calls raise a flag instead of aborting the process.
    pub fn new(mut backend: B) -> Self {
        backend.erract_set(c"RETURN");
        Toolkit {
            inner: Mutex::new(Inner {
                backend,
                detail: ErrorDetail::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<B>> {
        // A panic in a marshaling layer cannot corrupt library state, so a
        // poisoned lock is still safe to reuse.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Selects the message class future failures are reported with.
    pub fn set_error_detail(&self, detail: ErrorDetail) {
        self.lock().detail = detail;
    }

    pub fn error_detail(&self) -> ErrorDetail {
        self.lock().detail
    }
}

impl<B: Backend> Inner<B> {
    /// Turns a raised error flag into `Err`, resetting the library state.
    fn check(&mut self) -> Result<(), SpiceError> {
        error::drain_failure(&mut self.backend, self.detail)
    }
}

/// NUL-checks `value` for handoff to the library, naming the offending
/// argument on failure.
pub(crate) fn cstring(name: &'static str, value: &str) -> Result<CString, SpiceError> {
    CString::new(value).map_err(|_| SpiceError::InvalidArgument { name })
}

/// Reads a NUL-terminated library output buffer into an owned string.
pub(crate) fn buffer_to_string(buffer: &[i8]) -> String {
    // The library NUL-terminates every string it writes.
    unsafe { CStr::from_ptr(buffer.as_ptr()) }
        .to_string_lossy()
        .trim()
        .to_string()
}
