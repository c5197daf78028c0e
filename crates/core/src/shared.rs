//! A registry handle that can be shared between threads.
//!
//! Each call runs under a single lock acquisition, so a booking's conflict scan and
//! its append cannot interleave with another booking.

use crate::registry::ClinicRegistry;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<ClinicRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: ClinicRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs `op` with exclusive access to the registry.
    ///
    /// A lock poisoned by a panicking caller is recovered.
    pub fn with<R>(&self, op: impl FnOnce(&mut ClinicRegistry) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        op(&mut guard)
    }
}
