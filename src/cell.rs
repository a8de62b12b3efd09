//! Owned buffers for CSPICE cells.
//!
//! A cell is a counted array with a six-slot control area ahead of the
//! payload and a header struct pointing into both. The wrappers here keep
//! the payload boxed so the header's pointers stay valid when the wrapper
//! itself moves.

use std::ffi::c_void;

use cspice_sys::{SpiceCell, SpiceInt, _SpiceDataType_SPICE_DP, _SpiceDataType_SPICE_INT};

/// Slots reserved ahead of the payload in every cell.
const CONTROL_AREA: usize = 6;

/// Double-precision cell. Backs the confinement and result windows of the
/// geometry finders.
#[derive(Debug)]
pub struct DoubleCell {
    payload: Box<[f64]>,
    header: SpiceCell,
}

impl DoubleCell {
    /// Allocates an empty cell able to hold `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut payload = vec![0.0; CONTROL_AREA + capacity].into_boxed_slice();
        let base = payload.as_mut_ptr();
        let header = SpiceCell {
            dtype: _SpiceDataType_SPICE_DP,
            length: 0,
            size: capacity as SpiceInt,
            card: 0,
            isSet: 1,
            adjust: 0,
            init: 0,
            base: base as *mut c_void,
            data: unsafe { base.add(CONTROL_AREA) } as *mut c_void,
        };
        Self { payload, header }
    }

    /// Number of values currently stored.
    pub fn card(&self) -> usize {
        self.header.card as usize
    }

    /// Total value capacity.
    pub fn capacity(&self) -> usize {
        self.header.size as usize
    }

    /// Reads a stored value, `None` past the cardinality.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.card() {
            return None;
        }
        Some(self.payload[CONTROL_AREA + index])
    }

    /// Appends a value, growing the cardinality by one.
    ///
    /// Panics when the cell is already full; callers size cells before use.
    pub fn append(&mut self, value: f64) {
        let card = self.card();
        assert!(card < self.capacity(), "cell capacity exceeded");
        self.payload[CONTROL_AREA + card] = value;
        self.header.card = (card + 1) as SpiceInt;
    }

    /// Header pointer handed to library calls that read or fill the cell.
    pub fn raw_mut(&mut self) -> *mut SpiceCell {
        &mut self.header
    }
}

/// Integer cell. Receives body and frame ID sets from kernel summaries.
#[derive(Debug)]
pub struct IntCell {
    payload: Box<[SpiceInt]>,
    header: SpiceCell,
}

impl IntCell {
    /// Allocates an empty cell able to hold `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut payload = vec![0 as SpiceInt; CONTROL_AREA + capacity].into_boxed_slice();
        let base = payload.as_mut_ptr();
        let header = SpiceCell {
            dtype: _SpiceDataType_SPICE_INT,
            length: 0,
            size: capacity as SpiceInt,
            card: 0,
            isSet: 1,
            adjust: 0,
            init: 0,
            base: base as *mut c_void,
            data: unsafe { base.add(CONTROL_AREA) } as *mut c_void,
        };
        Self { payload, header }
    }

    /// Number of values currently stored.
    pub fn card(&self) -> usize {
        self.header.card as usize
    }

    /// Total value capacity.
    pub fn capacity(&self) -> usize {
        self.header.size as usize
    }

    /// Reads a stored value, `None` past the cardinality.
    pub fn get(&self, index: usize) -> Option<SpiceInt> {
        if index >= self.card() {
            return None;
        }
        Some(self.payload[CONTROL_AREA + index])
    }

    /// Appends a value, growing the cardinality by one.
    ///
    /// Panics when the cell is already full.
    pub fn append(&mut self, value: SpiceInt) {
        let card = self.card();
        assert!(card < self.capacity(), "cell capacity exceeded");
        self.payload[CONTROL_AREA + card] = value;
        self.header.card = (card + 1) as SpiceInt;
    }

    /// Header pointer handed to library calls that read or fill the cell.
    pub fn raw_mut(&mut self) -> *mut SpiceCell {
        &mut self.header
    }
}
