//! On-demand confetti module
//!
//! The effect subsystem is acquired the first time something needs it and
//! reused for the rest of the process. [`import`] always returns the same
//! handle; initialization runs at most once no matter how many callers race
//! for it.

use crate::container::{ConfettiContainer, POPPED};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

/// Global module handle
static CONFETTI_MODULE: OnceLock<ConfettiModule> = OnceLock::new();

/// Number of times the module initializer has run
static LOADS: AtomicUsize = AtomicUsize::new(0);

/// Handle to the loaded confetti effect
#[derive(Debug)]
pub struct ConfettiModule {
    tag: &'static str,
}

impl ConfettiModule {
    /// Element tag the module defines
    pub const TAG: &'static str = "confetti-container";

    fn load() -> Self {
        LOADS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("loaded {} module", Self::TAG);
        Self { tag: Self::TAG }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Create a new, unpopped element
    pub fn create(&self, id: impl Into<String>) -> ConfettiContainer {
        ConfettiContainer::new(id)
    }

    /// Set the `popped` attribute on a mounted element
    pub fn pop(&self, target: &Mutex<ConfettiContainer>) {
        target.lock().unwrap().set_attribute(POPPED, "");
    }
}

/// Get the module, loading it on first use
pub fn import() -> &'static ConfettiModule {
    CONFETTI_MODULE.get_or_init(ConfettiModule::load)
}

/// Whether [`import`] has been called yet
pub fn is_loaded() -> bool {
    CONFETTI_MODULE.get().is_some()
}

/// How many times the module has been initialized (0 or 1)
pub fn load_count() -> usize {
    LOADS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_is_memoized() {
        let first = import() as *const ConfettiModule;
        let second = import() as *const ConfettiModule;

        assert_eq!(first, second);
        assert!(is_loaded());
        assert_eq!(load_count(), 1);
    }

    #[test]
    fn test_pop_sets_attribute() {
        let module = import();
        let confetti = module.create("confetti").into_shared();

        module.pop(&confetti);
        assert!(confetti.lock().unwrap().is_popped());
        assert_eq!(module.tag(), "confetti-container");
    }
}
