//! StatsBomb open data feed: payload types, HTTP calls and the memoized store.

pub mod http;
pub mod store;
pub mod types;

pub use store::EventStore;
pub use types::{Competition, Event, EventKind, MatchEvents, MatchInfo, MatchKey};
