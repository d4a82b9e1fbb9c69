//! Base trait for UI state values.

/// Marker trait for UI state.
///
/// A state value is a plain snapshot: cloneable, comparable so the view can
/// detect changes, and `Default` so the reducer dispatch can take it out of
/// its slot while computing the successor.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
