//! # sole-holders
//!
//! Holder types that guarantee a process creates **exactly one** instance of
//! a payload type and that every caller observes the same instance.
//!
//! The variants differ in when the instance is created, how concurrent
//! first-time callers are serialized, and whether explicit teardown is
//! supported:
//!
//! | Variant | Creation | First-call serialization | Teardown |
//! |---------|----------|--------------------------|----------|
//! | [`singleton!`] (`LazyLock`) | first use | by the runtime | process exit |
//! | [`RacyHolder`] | first use | **none** (documented defect) | [`destroy`](RacyHolder::destroy) |
//! | [`LockedHolder`] | first use | double-checked locking | [`destroy`](LockedHolder::destroy) |
//! | [`EagerHolder`] | up front | none needed | [`destroy`](EagerHolder::destroy) |
//! | [`GlobalHolder`] / [`Singleton`] | first use | one-time initialization | process exit |
//!
//! Use [`LockedHolder`] when you need explicit teardown, [`GlobalHolder`]
//! (or the [`singleton!`] macro) when the instance can live for the rest of
//! the process.  [`RacyHolder`] exists to demonstrate the race that
//! [`LockedHolder`] closes; it is not a recommended design.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Construct-at-startup holder.
pub mod eager;

/// Generic one-time-initialized holder and the [`Singleton`] trait.
pub mod global;

/// Lazily-created statics with runtime-serialized initialization.
pub mod lazy;

/// Double-checked lazy holder (the thread-safe heap variant).
pub mod locked;

/// Lazy heap holder without a serialized check-and-create sequence.
pub mod racy;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use eager::EagerHolder;
pub use global::{GlobalHolder, Singleton};
pub use locked::LockedHolder;
pub use racy::RacyHolder;
