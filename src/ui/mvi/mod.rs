//! Model-View-Intent (MVI) primitives.
//!
//! All UI state lives in value types that change only through pure
//! reducers:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Network completions re-enter the cycle as intents, so every state
//! transition happens on the event loop, one at a time.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
