//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the playfield/tetromino engine: piece sequence
//! generation, rotation and collision checks, line clears and scoring. It has
//! **no dependencies** on terminals, files, or clocks:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule is unit tested in isolation
//! - **Allocation-free**: Boards, matrices and bags live on the stack
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven tetromino matrices and their colors
//! - [`rng`]: 7-bag random piece generation
//! - [`geometry`]: Matrix rotation and placement validity
//! - [`board`]: 10x20 playfield with hidden spawn rows, commits and line clears
//! - [`scoring`]: Line clear points
//! - [`high_score`]: Persistence seam for the high score
//! - [`game_state`]: The session tying it all together
//! - [`snapshot`]: Read-only copies for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every 7 consecutive pieces contain each kind once
//! - **Naive rotation**: clockwise only, rejected if blocked (no wall kicks)
//! - **Gravity**: the piece falls one row every `GRAVITY_TICKS + 1` ticks
//! - **Locking**: a piece locks as soon as a downward step is blocked
//! - **Scoring**: 0 / 40 / 100 / 300 / 1200 for 0-4 lines in one placement
//! - **Game over**: a piece locks while part of it is above the visible board
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::GameState;
//! use classic_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! while !game.game_over() && game.apply_action(GameAction::SoftDrop) {}
//!
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod high_score;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CommitResult};
pub use game_state::{GameState, Tetromino};
pub use geometry::{is_valid_placement, rotate_cw, Matrix};
pub use high_score::{HighScoreStore, MemoryHighScore};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::line_clear_score;
pub use shapes::{color, shape, PieceColor};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
