/// Marker for values a reducer accepts: user actions such as key presses
/// and system events such as a settled fetch.
pub trait Intent: Send + 'static {}
