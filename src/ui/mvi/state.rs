/// Marker for feature state.
///
/// `Default` is the state at mount time, `Clone` and `PartialEq` let callers
/// snapshot and compare before/after a reduction.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
