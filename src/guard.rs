//! Signal masking around kernel pool mutation.
//!
//! CSPICE keeps the loaded-kernel table in global state and a signal arriving
//! mid-update can leave it corrupted. Pool-mutating shims hold a
//! [`SignalBlock`] for the duration of the call; the saved mask is restored
//! when the guard drops, on the error path as well as the normal one.

use std::mem;
use std::ptr;

use libc::{SIG_BLOCK, SIG_SETMASK, sigfillset, sigprocmask, sigset_t};

pub(crate) struct SignalBlock {
    saved: sigset_t,
}

impl SignalBlock {
    pub(crate) fn new() -> Self {
        unsafe {
            let mut all: sigset_t = mem::zeroed();
            let mut saved: sigset_t = mem::zeroed();
            sigfillset(&mut all);
            sigprocmask(SIG_BLOCK, &all, &mut saved);
            SignalBlock { saved }
        }
    }
}

impl Drop for SignalBlock {
    fn drop(&mut self) {
        unsafe {
            sigprocmask(SIG_SETMASK, &self.saved, ptr::null_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libc::{SIGUSR1, sigismember};

    fn usr1_blocked() -> bool {
        unsafe {
            let mut current: sigset_t = mem::zeroed();
            sigprocmask(SIG_SETMASK, ptr::null(), &mut current);
            sigismember(&current, SIGUSR1) == 1
        }
    }

    #[test]
    fn guard_blocks_then_restores() {
        assert!(!usr1_blocked());
        {
            let _guard = SignalBlock::new();
            assert!(usr1_blocked());
        }
        assert!(!usr1_blocked());
    }
}
