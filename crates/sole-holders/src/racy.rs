//! Lazy heap holder **without** a serialized check-and-create sequence.
//!
//! This variant is kept for contrast with [`locked`](crate::locked): it
//! shows the race that double-checked locking exists to close.  The slot
//! itself is lock-protected, so the type is memory-safe, but the existence
//! check and the store are two separate critical sections.  Two threads that
//! both observe an empty slot will both run the factory; the later store
//! displaces the earlier instance, so the factory can run more than once and
//! callers can briefly observe different identities.
//!
//! Do not use this in new code — reach for [`LockedHolder`](crate::LockedHolder).

use std::sync::{Arc, Mutex, MutexGuard};

use sole_core::errors::{Error, Result};

/// A lazy heap holder whose check-and-create sequence is **not** serialized.
///
/// The defect is intentional and documented: under concurrent first use the
/// payload factory may run more than once, and all but the last constructed
/// instance are discarded.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use sole_holders::RacyHolder;
///
/// struct Cache { slots: usize }
///
/// fn build() -> sole_core::Result<Cache> {
///     Ok(Cache { slots: 64 })
/// }
///
/// static CACHE: RacyHolder<Cache> = RacyHolder::new(build);
///
/// let a = CACHE.instance().unwrap();
/// let b = CACHE.instance().unwrap();
/// // Sequentially, the identity is stable.
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(a.slots, 64);
///
/// CACHE.destroy();
/// assert!(CACHE.peek().is_none());
/// ```
pub struct RacyHolder<T> {
    slot: Mutex<Option<Arc<T>>>,
    factory: fn() -> Result<T>,
}

impl<T> RacyHolder<T> {
    /// Create an empty holder with the given payload factory.
    pub const fn new(factory: fn() -> Result<T>) -> Self {
        Self {
            slot: Mutex::new(None),
            factory,
        }
    }

    /// Return the shared instance, creating it if the slot looks empty.
    ///
    /// The emptiness check releases the lock before the factory runs, so a
    /// concurrent caller may create a second instance in the meantime — see
    /// the module documentation.  On factory failure the slot is left empty
    /// and the error is returned to this caller only.
    pub fn instance(&self) -> Result<Arc<T>> {
        if let Some(existing) = self.lock_slot().as_ref() {
            return Ok(existing.clone());
        }
        // Lock released: between the check above and the store below another
        // caller can run the factory too.  Last store wins.
        let created = Arc::new((self.factory)().map_err(|e| Error::Creation(e.to_string()))?);
        *self.lock_slot() = Some(created.clone());
        Ok(created)
    }

    /// Return the stored instance without creating one.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.lock_slot().clone()
    }

    /// Drop the holder's reference to the instance, if any.
    ///
    /// Idempotent: tearing down an empty holder is a no-op.  A later call to
    /// [`instance`](Self::instance) re-creates the payload with a new
    /// identity.
    pub fn destroy(&self) {
        self.lock_slot().take();
    }

    /// Return `true` if the slot currently holds an instance.
    pub fn is_initialized(&self) -> bool {
        self.lock_slot().is_some()
    }

    // A poisoned lock means some thread panicked while touching the slot;
    // the slot content is still coherent (either empty or a whole Arc), so
    // recover and keep going.
    fn lock_slot(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> std::fmt::Debug for RacyHolder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RacyHolder")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sole_core::fail;

    #[derive(Debug)]
    struct Token(u8);

    fn make() -> Result<Token> {
        Ok(Token(1))
    }

    fn broken() -> Result<Token> {
        fail!("factory unavailable");
    }

    #[test]
    fn sequential_identity_is_stable() {
        let holder = RacyHolder::new(make);
        let a = holder.instance().unwrap();
        let b = holder.instance().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.0, 1);
    }

    #[test]
    fn destroy_twice_is_a_noop() {
        let holder = RacyHolder::new(make);
        holder.instance().unwrap();
        holder.destroy();
        holder.destroy();
        assert!(!holder.is_initialized());
    }

    #[test]
    fn failed_factory_leaves_slot_empty() {
        let holder = RacyHolder::new(broken);
        let err = holder.instance().unwrap_err();
        assert!(matches!(err, Error::Creation(_)));
        assert!(holder.peek().is_none());
    }
}
