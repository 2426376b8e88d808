//! Roster engine for small round-robin tournaments
//!
//! This crate provides:
//! - A roster of numbered teams plus an absent bucket and a derived unassigned pool
//! - Multi-select of members and best-effort bulk reassignment
//! - A match registry keyed by unordered team pairs
//! - A round-robin match table and standings built from active teams only
//! - A session that routes user gestures to roster mutations
//!
//! Rendering, dialogs and persistence are collaborators supplied by the caller
//! (see [`SaveHook`] and [`DialogHook`]).

pub mod assignment;
pub mod config;
pub mod error;
pub mod matches;
pub mod roster;
pub mod selection;
pub mod session;
pub mod standings;
pub mod table;
pub mod types;

pub use assignment::*;
pub use config::*;
pub use error::*;
pub use matches::*;
pub use roster::*;
pub use selection::*;
pub use session::*;
pub use standings::*;
pub use table::*;
pub use types::*;
