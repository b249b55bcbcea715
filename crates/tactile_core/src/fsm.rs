//! Finite state machine trait for widget lifecycle states
//!
//! States are small `Copy` enums; events are `u32` codes so that hosts can
//! forward them from any event source without knowing the concrete state
//! type.
//!
//! ```
//! use tactile_core::fsm::StateTransitions;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Toggle {
//!     Off,
//!     On,
//! }
//!
//! const FLIP: u32 = 1;
//!
//! impl StateTransitions for Toggle {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Toggle::Off, FLIP) => Some(Toggle::On),
//!             (Toggle::On, FLIP) => Some(Toggle::Off),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Toggle::Off.on_event(FLIP), Some(Toggle::On));
//! assert_eq!(Toggle::Off.on_event(99), None);
//! ```

use std::hash::Hash;

/// A state that reacts to numeric events
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply an event in place, returning whether the state changed
    fn apply(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}
