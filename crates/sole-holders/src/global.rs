//! Generic one-time-initialized holder and the [`Singleton`] trait.
//!
//! [`GlobalHolder`] is the reusable, type-parametric holder: a
//! const-constructible cell plus the factory that fills it, intended to live
//! in a `static`.  Initialization is one-time and serialized; if the factory
//! panics the cell stays empty and the panic reaches only the caller that
//! triggered it, so a later call may try again.
//!
//! [`Singleton`] layers controlled construction on top: a payload type
//! implements the trait (usually via [`impl_singleton!`]) inside its own
//! module, where its constructor can stay private.  External code then has
//! exactly one way to reach an instance — `Payload::instance()` — and no way
//! to build a second one.

use std::sync::OnceLock;

/// A const-constructible holder for a single lazily-created `T`.
///
/// Declare it as a `static` and every caller shares one instance with a
/// stable `&'static` identity.  There is no teardown: the payload lives for
/// the rest of the process, like any other static-duration value.
///
/// # Example
/// ```
/// use sole_holders::GlobalHolder;
///
/// struct Limits { max_jobs: usize }
///
/// fn defaults() -> Limits {
///     Limits { max_jobs: 16 }
/// }
///
/// static LIMITS: GlobalHolder<Limits> = GlobalHolder::new(defaults);
///
/// assert!(!LIMITS.is_initialized());
/// assert_eq!(LIMITS.instance().max_jobs, 16);
/// assert!(LIMITS.is_initialized());
/// assert!(std::ptr::eq(LIMITS.instance(), LIMITS.instance()));
/// ```
pub struct GlobalHolder<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> GlobalHolder<T> {
    /// Create an empty holder with the given initializer.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Return the shared instance, running the initializer on first access.
    ///
    /// Concurrent first-time callers block until exactly one initializer run
    /// completes; all then observe the same instance.  A panicking
    /// initializer leaves the cell empty, so the next caller re-attempts
    /// initialization.
    ///
    /// The initializer must not request the instance it is constructing;
    /// reentrant initialization is unsupported.
    pub fn instance(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    /// Return `true` if the initializer has already run to completion.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> std::fmt::Debug for GlobalHolder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalHolder")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

/// A payload type whose only route to an instance is its holder.
///
/// Implement with [`impl_singleton!`] inside the payload's module: the
/// constructor handed to the macro can then be private, so arbitrary
/// external code cannot build a second instance — construction is a
/// capability held by the holder alone.
///
/// # Example
/// ```
/// mod audio {
///     use sole_holders::impl_singleton;
///
///     pub struct Mixer { channels: u8 }
///
///     impl Mixer {
///         // Private: only the holder can construct.
///         fn boot() -> Self {
///             Mixer { channels: 8 }
///         }
///
///         pub fn channels(&self) -> u8 {
///             self.channels
///         }
///     }
///
///     impl_singleton!(Mixer, Mixer::boot);
/// }
///
/// use sole_holders::Singleton;
///
/// let mixer = audio::Mixer::instance();
/// assert_eq!(mixer.channels(), 8);
/// assert!(std::ptr::eq(mixer, audio::Mixer::instance()));
/// ```
///
/// Direct construction from outside the payload's module is rejected before
/// it can execute:
///
/// ```compile_fail
/// mod audio {
///     use sole_holders::impl_singleton;
///
///     pub struct Mixer { channels: u8 }
///
///     impl Mixer {
///         fn boot() -> Self {
///             Mixer { channels: 8 }
///         }
///     }
///
///     impl_singleton!(Mixer, Mixer::boot);
/// }
///
/// let rogue = audio::Mixer::boot(); // private fn: rejected at compile time
/// ```
///
/// So is duplicating the payload — singleton payloads deliberately carry no
/// `Clone` impl:
///
/// ```compile_fail
/// mod audio {
///     use sole_holders::impl_singleton;
///
///     pub struct Mixer { channels: u8 }
///
///     impl Mixer {
///         fn boot() -> Self {
///             Mixer { channels: 8 }
///         }
///     }
///
///     impl_singleton!(Mixer, Mixer::boot);
/// }
///
/// use sole_holders::Singleton;
///
/// let copy: audio::Mixer = audio::Mixer::instance().clone(); // no `Clone` impl
/// ```
pub trait Singleton: Sized + Send + Sync + 'static {
    /// Return the holder that owns this type's single instance.
    fn holder() -> &'static GlobalHolder<Self>;

    /// Return the shared instance, creating it on first access.
    fn instance() -> &'static Self {
        Self::holder().instance()
    }
}

/// Implement [`Singleton`] for a payload type.
///
/// Expands to an `impl` whose holder is a function-local `static`, so each
/// payload type gets its own cell.  Invoke it in the payload's own module to
/// keep the constructor private (see [`Singleton`]).
#[macro_export]
macro_rules! impl_singleton {
    ($ty:ty, $ctor:expr) => {
        impl $crate::global::Singleton for $ty {
            fn holder() -> &'static $crate::global::GlobalHolder<$ty> {
                static HOLDER: $crate::global::GlobalHolder<$ty> =
                    $crate::global::GlobalHolder::new($ctor);
                &HOLDER
            }
        }
    };
}
