//! Unidirectional state flow shared by the stores in this crate.
//!
//! ```text
//! fetch ──→ Intent ──→ Reducer ──→ State ──→ readers / subscribers
//! ```
//!
//! A store never edits its state in place. It turns each lifecycle event
//! into an [`Intent`] and replaces its state with the [`Reducer`]'s output,
//! which keeps every transition testable without a network.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
