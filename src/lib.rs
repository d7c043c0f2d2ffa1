//! A minimax agent for playing two small connection games: tic-tac-toe
//! and 'Connect 4'
//!
//! The agent uses a depth-limited game tree search with alpha-beta pruning
//! to pick a move for either game. Tic-tac-toe is small enough to solve
//! exactly at full depth; Connect 4 positions beyond the depth limit are
//! scored with a fixed weighted-window heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use gridgame_ai::board::{Board, Player};
//! use gridgame_ai::eval::EvalPolicy;
//! use gridgame_ai::search::{Score, Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::tic_tac_toe()?;
//! let mut searcher = Searcher::new(9, EvalPolicy::Exact)?;
//! let result = searcher.best_move(&board, Player::One)?;
//!
//! // tic-tac-toe is a draw under perfect play
//! assert!(result.score == Score::Finite(0));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;


/// The width of the Connect 4 board in tiles
pub const CONNECT_COLUMNS: usize = 7;

/// The height of the Connect 4 board in tiles
pub const CONNECT_ROWS: usize = 6;

/// The number of aligned tiles needed to win Connect 4
pub const CONNECT_RUN: usize = 4;

/// The side length of the tic-tac-toe board
pub const TIC_TAC_TOE_SIZE: usize = 3;

/// The number of aligned marks needed to win tic-tac-toe
pub const TIC_TAC_TOE_RUN: usize = 3;

// ensure a winning run fits on each board
const_assert!(CONNECT_RUN <= CONNECT_COLUMNS);
const_assert!(CONNECT_RUN <= CONNECT_ROWS);
const_assert!(TIC_TAC_TOE_RUN <= TIC_TAC_TOE_SIZE);
