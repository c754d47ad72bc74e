//! # sole
//!
//! Single-instance holders for Rust: facilities that guarantee a process
//! creates exactly one instance of a payload type and that every caller
//! observes the same instance — lazily, eagerly, or behind double-checked
//! locking, with or without explicit teardown.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on the individual `sole-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! sole = "0.1"
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//! use sole::holders::LockedHolder;
//!
//! struct Registry { capacity: usize }
//!
//! fn open() -> sole::core::Result<Registry> {
//!     Ok(Registry { capacity: 128 })
//! }
//!
//! static REGISTRY: LockedHolder<Registry> = LockedHolder::new(open);
//!
//! let a = REGISTRY.instance().unwrap();
//! let b = REGISTRY.instance().unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(a.capacity, 128);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, lifecycle states, and diagnostic events.
pub use sole_core as core;

/// The holder variants themselves.
pub use sole_holders as holders;
