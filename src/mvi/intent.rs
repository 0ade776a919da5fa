/// Marker for values describing one state transition.
///
/// For network-backed stores these are lifecycle events: a request
/// started, returned data, failed, or finished.
pub trait Intent: Send + 'static {}
