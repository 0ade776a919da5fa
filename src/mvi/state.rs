/// Marker for store state.
///
/// Snapshots are cloned out to readers and subscribers, compared to
/// detect changes, and start from `Default` when a store is created.
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}
