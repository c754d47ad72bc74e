//! Holder lifecycle state tag.
//!
//! Every holder moves through the same life cycle: empty, being built,
//! built, torn down.  The tag is `repr(u8)` so holders can publish it
//! through an `AtomicU8` and let callers observe the current phase without
//! taking any lock.

/// The lifecycle phase of a holder's storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HolderState {
    /// No instance has been created yet (or the last creation attempt failed
    /// and the slot was rolled back).
    Uninitialized = 0,
    /// A caller is currently running the payload factory.
    Initializing = 1,
    /// The slot holds a fully-constructed instance.
    Ready = 2,
    /// The instance was explicitly torn down.
    Destroyed = 3,
}

impl HolderState {
    /// Return `true` if moving from `self` to `next` is a legal lifecycle
    /// transition.
    ///
    /// The legal moves are:
    ///
    /// * `Uninitialized → Initializing` — first creation begins,
    /// * `Initializing → Ready` — creation succeeded,
    /// * `Initializing → Uninitialized` — creation failed, slot rolled back,
    /// * `Ready → Destroyed` — explicit teardown,
    /// * `Destroyed → Initializing` — re-creation after teardown.
    ///
    /// Everything else is a protocol violation.
    pub fn can_transition_to(self, next: HolderState) -> bool {
        use HolderState::*;
        matches!(
            (self, next),
            (Uninitialized, Initializing)
                | (Initializing, Ready)
                | (Initializing, Uninitialized)
                | (Ready, Destroyed)
                | (Destroyed, Initializing)
        )
    }

    /// Return the `u8` encoding used for atomic storage.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a value previously produced by [`as_u8`](Self::as_u8).
    ///
    /// Returns `None` for out-of-range values.
    pub fn from_u8(value: u8) -> Option<HolderState> {
        match value {
            0 => Some(HolderState::Uninitialized),
            1 => Some(HolderState::Initializing),
            2 => Some(HolderState::Ready),
            3 => Some(HolderState::Destroyed),
            _ => None,
        }
    }
}

impl std::fmt::Display for HolderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolderState::Uninitialized => write!(f, "uninitialized"),
            HolderState::Initializing => write!(f, "initializing"),
            HolderState::Ready => write!(f, "ready"),
            HolderState::Destroyed => write!(f, "destroyed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HolderState::*;
    use super::*;
    use proptest::prelude::*;

    const ALL: [HolderState; 4] = [Uninitialized, Initializing, Ready, Destroyed];

    #[test]
    fn transition_table() {
        assert!(Uninitialized.can_transition_to(Initializing));
        assert!(Initializing.can_transition_to(Ready));
        assert!(Initializing.can_transition_to(Uninitialized));
        assert!(Ready.can_transition_to(Destroyed));
        assert!(Destroyed.can_transition_to(Initializing));

        // A ready slot can never be overwritten in place.
        assert!(!Ready.can_transition_to(Initializing));
        assert!(!Ready.can_transition_to(Ready));
        // Teardown is only reachable from a ready slot.
        assert!(!Uninitialized.can_transition_to(Destroyed));
        assert!(!Initializing.can_transition_to(Destroyed));
    }

    #[test]
    fn no_state_transitions_to_itself() {
        for s in ALL {
            assert!(!s.can_transition_to(s), "{s} must not self-transition");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Ready.to_string(), "ready");
        assert_eq!(Uninitialized.to_string(), "uninitialized");
    }

    proptest! {
        #[test]
        fn u8_roundtrip(idx in 0usize..4) {
            let s = ALL[idx];
            prop_assert_eq!(HolderState::from_u8(s.as_u8()), Some(s));
        }

        #[test]
        fn out_of_range_is_rejected(v in 4u8..) {
            prop_assert_eq!(HolderState::from_u8(v), None);
        }
    }
}
