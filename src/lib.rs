//! Classic Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `classic_tetris::{core,input,store,term,types}` and adds the pieces
//! only the runner needs: environment configuration and the tick scheduler.

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_store as store;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;

pub mod config;
pub mod scheduler;

pub use config::Config;
pub use scheduler::TickScheduler;
