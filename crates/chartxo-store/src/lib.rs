//! # chartxo-store
//!
//! Explicit application state over a file-backed persistence boundary.
//!
//! [`LocalStore`] owns the two persisted records (user profile, scan
//! history). [`AppState`] loads them once and is the only place they are
//! mutated; each committed mutation rewrites the affected record in full.

mod error;
mod local;
mod state;

pub use error::StoreError;
pub use local::{HISTORY_KEY, LocalStore, PROFILE_KEY};
pub use state::{AppState, Clock};
