//! Base trait for intents.

/// Marker trait for intents: user actions, and network completions fed
/// back into the loop as plain values.
pub trait Intent: Send + 'static {}
