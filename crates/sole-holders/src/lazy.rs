//! Lazily-created process-wide singletons.
//!
//! The canonical container is `std::sync::LazyLock`: the value is built on
//! first dereference, concurrent first-time callers block until exactly one
//! of them has finished construction, and every caller then observes the
//! same `&'static` identity.  No user-written locking is involved, and the
//! value is dropped by the runtime at process teardown — there is no
//! explicit destroy operation for this variant.
//!
//! If the initializer panics, the panic propagates to the caller that
//! triggered initialization and the cell is poisoned; this variant trades
//! recoverability for a creation branch that the caller never sees.

/// Re-export `LazyLock` as the canonical lazily-created singleton container.
pub use std::sync::LazyLock;

/// Declare a lazily-created process-wide singleton.
///
/// Expands to a `static` of type `LazyLock<$ty>` whose value is built on
/// first access.  Attributes and visibility are passed through, so the
/// declaration reads like an ordinary `static` item.
///
/// # Example
/// ```
/// use sole_holders::singleton;
///
/// struct Catalog { entries: Vec<String> }
///
/// singleton!(static CATALOG: Catalog = Catalog { entries: Vec::new() };);
///
/// assert!(CATALOG.entries.is_empty());
/// // Identity is stable across accesses.
/// assert!(std::ptr::eq(&*CATALOG, &*CATALOG));
/// ```
#[macro_export]
macro_rules! singleton {
    ($(#[$attr:meta])* $vis:vis static $name:ident: $ty:ty = $init:expr;) => {
        $(#[$attr])*
        $vis static $name: ::std::sync::LazyLock<$ty> =
            ::std::sync::LazyLock::new(|| $init);
    };
}
