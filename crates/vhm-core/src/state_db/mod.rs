//! Read-only access to the editor's state database (`state.vscdb`, SQLite).
//!
//! The database holds a single `ItemTable` key/value table; vhm reads the
//! recently-opened history list out of it and offers a raw dump, never
//! writing.

pub mod db;
pub mod types;

mod read;

pub use db::*;
pub use types::*;
