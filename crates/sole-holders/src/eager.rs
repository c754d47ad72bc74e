//! Construct-at-startup holder.
//!
//! The payload is built when the holder is built — during program
//! initialization, before concurrent callers exist — so
//! [`instance`](EagerHolder::instance) contains no creation branch and no
//! first-call race is possible.  The trade-off is explicit: availability is
//! guaranteed, but construction cost (and the memory) is paid even if no
//! caller ever asks for the instance.
//!
//! Teardown keeps the idempotent contract of the lazy heap variants.  This
//! variant does not re-create: the factory runs exactly once, at holder
//! construction, and after teardown `instance` reports absence.

use std::any::type_name;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use sole_core::errors::{Error, Result};
use sole_core::events::{EventHook, HolderEvent};
use sole_core::state::HolderState;

/// A holder whose payload is constructed up front.
///
/// # Example
/// ```
/// use sole_holders::EagerHolder;
///
/// struct Meter { unit: &'static str }
///
/// let holder = EagerHolder::new(|| Ok(Meter { unit: "ms" }))?;
/// // Already valid: no creation happens on access.
/// assert_eq!(holder.instance().unwrap().unit, "ms");
///
/// holder.destroy();
/// holder.destroy(); // idempotent
/// assert!(holder.instance().is_none());
/// # Ok::<(), sole_core::Error>(())
/// ```
pub struct EagerHolder<T> {
    slot: Mutex<Option<Arc<T>>>,
    observer: OnceLock<Arc<EventHook>>,
}

impl<T> EagerHolder<T> {
    /// Run `factory` immediately and wrap the constructed payload.
    ///
    /// A factory failure propagates to the caller and no holder is built —
    /// an eager holder is never observable in a half-initialized state.
    pub fn new(factory: impl FnOnce() -> Result<T>) -> Result<Self> {
        let value = factory().map_err(|e| Error::Creation(e.to_string()))?;
        Ok(Self {
            slot: Mutex::new(Some(Arc::new(value))),
            observer: OnceLock::new(),
        })
    }

    /// Return the instance constructed at holder creation.
    ///
    /// No creation branch: this only reads the slot.  Returns `None` once
    /// the holder has been torn down.
    pub fn instance(&self) -> Option<Arc<T>> {
        self.lock_slot().clone()
    }

    /// Drop the holder's reference to the instance.
    ///
    /// Idempotent.  This variant does not re-create after teardown.
    pub fn destroy(&self) {
        let was_present = self.lock_slot().take().is_some();
        if was_present {
            self.emit(HolderEvent::Destroyed {
                type_name: type_name::<T>(),
            });
        }
    }

    /// Return the current lifecycle tag.
    ///
    /// An eager holder is born [`Ready`](HolderState::Ready) and moves to
    /// [`Destroyed`](HolderState::Destroyed) on teardown; no other phase is
    /// observable.
    pub fn state(&self) -> HolderState {
        if self.is_initialized() {
            HolderState::Ready
        } else {
            HolderState::Destroyed
        }
    }

    /// Return `true` if the slot currently holds the instance.
    pub fn is_initialized(&self) -> bool {
        self.lock_slot().is_some()
    }

    /// Install a diagnostic hook, invoked on teardown.
    ///
    /// Write-once: returns `false` (and keeps the first hook) if one is
    /// already installed.
    pub fn set_observer(&self, hook: impl Fn(&HolderEvent) + Send + Sync + 'static) -> bool {
        self.observer.set(Arc::new(hook)).is_ok()
    }

    fn emit(&self, event: HolderEvent) {
        if let Some(hook) = self.observer.get() {
            hook(&event);
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> std::fmt::Debug for EagerHolder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EagerHolder")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sole_core::fail;

    struct Gauge {
        ceiling: u32,
    }

    #[test]
    fn constructed_before_first_access() {
        let mut built = false;
        let holder = EagerHolder::new(|| {
            built = true;
            Ok(Gauge { ceiling: 100 })
        })
        .unwrap();
        assert!(built, "factory must run at holder construction");
        assert_eq!(holder.state(), HolderState::Ready);
        assert_eq!(holder.instance().unwrap().ceiling, 100);
    }

    #[test]
    fn identity_is_stable() {
        let holder = EagerHolder::new(|| Ok(Gauge { ceiling: 1 })).unwrap();
        let a = holder.instance().unwrap();
        let b = holder.instance().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn teardown_is_idempotent_and_final() {
        let holder = EagerHolder::new(|| Ok(Gauge { ceiling: 1 })).unwrap();
        holder.destroy();
        holder.destroy();
        assert_eq!(holder.state(), HolderState::Destroyed);
        assert!(holder.instance().is_none());
    }

    #[test]
    fn factory_failure_means_no_holder() {
        let result = EagerHolder::<Gauge>::new(|| fail!("hardware missing"));
        assert!(matches!(result.unwrap_err(), Error::Creation(_)));
    }
}
