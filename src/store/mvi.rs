//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State is replaced wholesale on every transition; the reducer is the only
//! place where transitions happen.

/// Marker trait for state snapshots.
///
/// Snapshots are cloned to produce new states and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user actions and system events).
pub trait Intent: Send + 'static {}

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. Must have no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
