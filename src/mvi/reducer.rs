use super::intent::Intent;
use super::state::State;

/// Pure state transition function: `(State, Intent) -> State`.
///
/// Reducers own no data and perform no I/O. The store calls them under
/// its write lock, one intent at a time.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order, starting from `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
