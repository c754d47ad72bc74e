//! Double-checked lazy holder — the thread-safe heap variant.
//!
//! The initialization-safety protocol:
//!
//! 1. **Fast path** — the lifecycle tag is read with `Acquire` ordering and
//!    no lock.  If it says [`Ready`](HolderState::Ready), the slot is
//!    populated and the caller only touches the *shared* read lock for the
//!    instant it takes to clone the handle.  The exclusive lock is never
//!    acquired on this path, so steady-state reads do not serialize.
//! 2. **Slow path** — the caller takes the exclusive lock and re-checks the
//!    slot (the second check): another caller may have finished construction
//!    while this one waited.  Only if the slot is still empty does the
//!    factory run, with the lock held for the whole check-and-create region.
//!    The tag becomes `Ready` via a `Release` store *before* the lock is
//!    dropped, so a fast-path `Acquire` read that sees `Ready` also sees the
//!    fully-constructed payload.
//!
//! Teardown takes the same exclusive lock, making it mutually exclusive with
//! any in-flight creation.  A failing factory rolls the tag back and leaves
//! the slot empty, so a later caller can retry creation.

use std::any::type_name;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sole_core::errors::{Error, Result};
use sole_core::events::{EventHook, HolderEvent};
use sole_core::state::HolderState;

/// A lazy heap holder whose check-and-create sequence is serialized by
/// double-checked locking.
///
/// At most one construction occurs per holder lifetime (per
/// destroy/re-create cycle), every caller after the first successful
/// creation observes the same identity, and teardown is idempotent.
///
/// `destroy` severs the holder's reference; the payload itself is dropped
/// once the last outstanding handle is gone.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use sole_holders::LockedHolder;
///
/// struct Engine { threads: usize }
///
/// fn start() -> sole_core::Result<Engine> {
///     Ok(Engine { threads: 4 })
/// }
///
/// static ENGINE: LockedHolder<Engine> = LockedHolder::new(start);
///
/// let a = ENGINE.instance().unwrap();
/// let b = ENGINE.instance().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// ENGINE.destroy();
/// // Re-creation after teardown yields a legitimately new identity.
/// let c = ENGINE.instance().unwrap();
/// assert!(!Arc::ptr_eq(&a, &c));
/// ```
///
/// Holders are not copyable, and neither handle duplication nor payload
/// copying can bypass the single-instance guarantee:
///
/// ```compile_fail
/// use sole_holders::LockedHolder;
///
/// fn dup(h: LockedHolder<u32>) -> (LockedHolder<u32>, LockedHolder<u32>) {
///     (h.clone(), h) // no `Clone` impl: rejected at compile time
/// }
/// ```
pub struct LockedHolder<T> {
    state: AtomicU8,
    slot: RwLock<Option<Arc<T>>>,
    factory: fn() -> Result<T>,
    observer: OnceLock<Arc<EventHook>>,
}

impl<T> LockedHolder<T> {
    /// Create an empty holder with the given payload factory.
    pub const fn new(factory: fn() -> Result<T>) -> Self {
        Self {
            state: AtomicU8::new(HolderState::Uninitialized as u8),
            slot: RwLock::new(None),
            factory,
            observer: OnceLock::new(),
        }
    }

    /// Return the shared instance, creating it on first use.
    ///
    /// Concurrent first-time callers are serialized: exactly one runs the
    /// factory, the rest block on the exclusive lock and pick up the stored
    /// handle from the second check.  On factory failure the slot stays
    /// empty, the error goes to this caller only, and a later call may
    /// retry.
    ///
    /// The factory must not call back into the same holder: the slot lock is
    /// not reentrant, so a factory that requests the instance it is
    /// constructing deadlocks.
    pub fn instance(&self) -> Result<Arc<T>> {
        if self.state() == HolderState::Ready {
            if let Some(existing) = self.read_slot().as_ref() {
                return Ok(existing.clone());
            }
            // Raced with destroy(): the tag flipped after we read it.
        }
        self.create_slow()
    }

    fn create_slow(&self) -> Result<Arc<T>> {
        let mut guard = self.write_slot();
        // Second check: someone else may have created while we waited.
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.clone());
        }
        self.store_state(HolderState::Initializing);
        match (self.factory)() {
            Ok(value) => {
                let created = Arc::new(value);
                *guard = Some(created.clone());
                self.store_state(HolderState::Ready);
                drop(guard);
                self.emit(HolderEvent::Created {
                    type_name: type_name::<T>(),
                });
                Ok(created)
            }
            Err(err) => {
                // Roll back so the slot is indistinguishable from "never
                // created".
                self.store_state(HolderState::Uninitialized);
                drop(guard);
                self.emit(HolderEvent::CreationFailed {
                    type_name: type_name::<T>(),
                    message: err.to_string(),
                });
                Err(Error::Creation(err.to_string()))
            }
        }
    }

    /// Return the stored instance without creating one.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.read_slot().clone()
    }

    /// Tear down the stored instance.
    ///
    /// Takes the exclusive lock, so teardown cannot interleave with an
    /// in-flight creation.  Idempotent: destroying an empty holder is a
    /// no-op.  A later [`instance`](Self::instance) call re-creates the
    /// payload with a new identity.
    pub fn destroy(&self) {
        let mut guard = self.write_slot();
        if guard.take().is_some() {
            self.store_state(HolderState::Destroyed);
            drop(guard);
            self.emit(HolderEvent::Destroyed {
                type_name: type_name::<T>(),
            });
        }
    }

    /// Return the current lifecycle tag (lock-free `Acquire` read).
    pub fn state(&self) -> HolderState {
        HolderState::from_u8(self.state.load(Ordering::Acquire))
            .expect("holder state tag corrupted")
    }

    /// Return `true` if the slot currently holds an instance.
    pub fn is_initialized(&self) -> bool {
        self.state() == HolderState::Ready
    }

    /// Install a diagnostic hook, invoked on every lifecycle transition.
    ///
    /// Write-once: returns `false` (and keeps the first hook) if one is
    /// already installed.  The hook runs outside the slot lock, so it may
    /// itself call back into the holder.
    pub fn set_observer(&self, hook: impl Fn(&HolderEvent) + Send + Sync + 'static) -> bool {
        self.observer.set(Arc::new(hook)).is_ok()
    }

    fn emit(&self, event: HolderEvent) {
        if let Some(hook) = self.observer.get() {
            hook(&event);
        }
    }

    fn store_state(&self, next: HolderState) {
        let prev = self.state.swap(next.as_u8(), Ordering::AcqRel);
        debug_assert!(
            HolderState::from_u8(prev).is_some_and(|p| p.can_transition_to(next)),
            "illegal holder transition to {next}"
        );
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<Arc<T>>> {
        match self.slot.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let guard = poisoned.into_inner();
                self.repair_state(guard.is_some());
                guard
            }
        }
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<Arc<T>>> {
        match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let guard = poisoned.into_inner();
                self.repair_state(guard.is_some());
                guard
            }
        }
    }

    // A panicking factory poisons the lock with the tag stuck at
    // `Initializing`; resynchronize the tag with what the slot actually
    // holds so later callers see either "ready" or "never created".
    fn repair_state(&self, occupied: bool) {
        let tag = if occupied {
            HolderState::Ready
        } else {
            HolderState::Uninitialized
        };
        self.state.store(tag.as_u8(), Ordering::Release);
    }
}

impl<T> std::fmt::Debug for LockedHolder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockedHolder")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
