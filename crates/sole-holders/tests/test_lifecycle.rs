//! Property tests for the holder lifecycle.
//!
//! Random sequences of get/peek/destroy are replayed against a fresh
//! `LockedHolder` and checked against a trivial model: the state tag must
//! track slot occupancy, identity must be stable between teardowns, and
//! every teardown must produce a fresh identity on the next creation.

use std::sync::Arc;

use proptest::prelude::*;
use sole_core::{HolderState, Result};
use sole_holders::LockedHolder;

#[derive(Debug, Clone, Copy)]
enum Op {
    Get,
    Peek,
    Destroy,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Get), Just(Op::Peek), Just(Op::Destroy)]
}

struct Unit;

fn make_unit() -> Result<Unit> {
    Ok(Unit)
}

proptest! {
    #[test]
    fn lifecycle_matches_model(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let holder = LockedHolder::new(make_unit);

        // Model: is an instance currently live, and which identity was last
        // handed out.
        let mut live = false;
        let mut last: Option<Arc<Unit>> = None;

        for op in ops {
            match op {
                Op::Get => {
                    let current = holder.instance().unwrap();
                    if let Some(previous) = last.take() {
                        if live {
                            prop_assert!(
                                Arc::ptr_eq(&previous, &current),
                                "identity changed without a teardown"
                            );
                        } else {
                            prop_assert!(
                                !Arc::ptr_eq(&previous, &current),
                                "teardown must yield a new identity"
                            );
                        }
                    }
                    last = Some(current);
                    live = true;
                }
                Op::Peek => {
                    prop_assert_eq!(holder.peek().is_some(), live);
                }
                Op::Destroy => {
                    holder.destroy();
                    live = false;
                }
            }

            // The tag tracks occupancy at every step.
            match holder.state() {
                HolderState::Ready => prop_assert!(live),
                HolderState::Uninitialized | HolderState::Destroyed => {
                    prop_assert!(!live)
                }
                // Single-threaded replay never observes a window where the
                // factory is running.
                HolderState::Initializing => prop_assert!(false),
            }
        }
    }
}
