//! Tournament roster front end
//!
//! This crate provides the pieces the `tournament` binary wires together:
//! - A save hook that writes the session state to a JSON file
//! - Text and JSON reports of roster, match table and standings
//! - Selection building from `name[@source]` arguments
//!
//! # Usage
//!
//! ```bash
//! # Show the roster and match table
//! cargo run -p tournament -- roster.toml show
//!
//! # Record a result and mark a member absent
//! cargo run -p tournament -- roster.toml result 1 2 3 1
//! cargo run -p tournament -- roster.toml absent Alice
//! ```

mod report;
mod select;
mod storage;

pub use report::*;
pub use select::*;
pub use storage::*;
