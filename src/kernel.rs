//! Kernel pool management.
//!
//! Loading and unloading rewrite the library's loaded-kernel table, so those
//! shims hold a [`SignalBlock`] for the duration of the call in addition to
//! the toolkit lock.

use cspice_sys::SpiceInt;
use tracing::debug;

use crate::guard::SignalBlock;
use crate::types::{KernelCategory, KernelData};
use crate::{Backend, SpiceError, Toolkit, buffer_to_string, cstring};

const FILE_NAME_LEN: usize = 256;
const KIND_LEN: usize = 33;

impl<B: Backend> Toolkit<B> {
    /// Loads a kernel file (or meta-kernel) into the pool.
    pub fn load_kernel(&self, path: &str) -> Result<(), SpiceError> {
        let path_c = cstring("path", path)?;
        let mut inner = self.lock();
        let _signals = SignalBlock::new();
        inner.backend.furnsh(&path_c);
        inner.check()?;
        debug!(path, "kernel loaded");
        Ok(())
    }

    /// Unloads a previously loaded kernel.
    pub fn unload_kernel(&self, path: &str) -> Result<(), SpiceError> {
        let path_c = cstring("path", path)?;
        let mut inner = self.lock();
        let _signals = SignalBlock::new();
        inner.backend.unload(&path_c);
        inner.check()?;
        debug!(path, "kernel unloaded");
        Ok(())
    }

    /// Number of loaded kernels in `category`.
    pub fn kernel_count(&self, category: KernelCategory) -> Result<usize, SpiceError> {
        let mut inner = self.lock();
        let count = inner.backend.ktotal(category.as_cstr());
        inner.check()?;
        Ok(count as usize)
    }

    /// Unloads every kernel and resets the pool.
    pub fn clear_kernels(&self) -> Result<(), SpiceError> {
        let mut inner = self.lock();
        let _signals = SignalBlock::new();
        inner.backend.kclear();
        inner.check()?;
        debug!("kernel pool cleared");
        Ok(())
    }

    /// Describes the `index`-th loaded kernel in `category`, counting from
    /// zero. `Ok(None)` means the index is past the end of the table.
    pub fn kernel_data(
        &self,
        index: usize,
        category: KernelCategory,
    ) -> Result<Option<KernelData>, SpiceError> {
        let mut file = vec![0i8; FILE_NAME_LEN];
        let mut kind = vec![0i8; KIND_LEN];
        let mut source = vec![0i8; FILE_NAME_LEN];
        let mut handle: SpiceInt = 0;
        let mut inner = self.lock();
        let found = inner.backend.kdata(
            index as SpiceInt,
            category.as_cstr(),
            &mut file,
            &mut kind,
            &mut source,
            &mut handle,
        );
        inner.check()?;
        if !found {
            return Ok(None);
        }
        Ok(Some(KernelData {
            file: buffer_to_string(&file),
            kind: buffer_to_string(&kind),
            source: buffer_to_string(&source),
            handle: handle as i32,
        }))
    }
}
