pub mod config;
pub mod logging;

pub mod classify;
pub mod pinned;
pub mod state_db;
pub mod window_state;
