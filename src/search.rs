//! Minimax game tree search with alpha-beta pruning

use anyhow::{anyhow, Result};

use std::fmt;

use crate::board::{Board, GameState, Move, Player};
use crate::eval::EvalPolicy;

/// A backed-up position score
///
/// Won and lost positions are scored with the infinite sentinels so they
/// dominate any finite heuristic value; the derived ordering keeps the
/// `alpha >= beta` cutoff comparisons correct at the boundaries.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Score {
    NegInf,
    Finite(i32),
    PosInf,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Score::NegInf => write!(f, "-inf"),
            Score::Finite(value) => write!(f, "{}", value),
            Score::PosInf => write!(f, "+inf"),
        }
    }
}

/// The outcome of a search: the chosen move and its backed-up score
///
/// `mv` is `None` for a position with no legal continuation; the caller
/// must treat that as "game already over" and apply nothing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    pub mv: Option<Move>,
    pub score: Score,
}

/// A depth-limited minimax searcher for either game variant
///
/// # Notes
/// Each recursive branch places into its own clone of the board, so no
/// branch ever observes another branch's in-progress mutation. The search
/// is deterministic: ties between equally scored moves always resolve to
/// the first move in the board's enumeration order.
pub struct Searcher {
    depth: usize,
    eval: EvalPolicy,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a searcher with a fixed depth bound and leaf policy
    ///
    /// A zero depth bound cannot produce a move and is rejected here rather
    /// than mid-search.
    pub fn new(depth: usize, eval: EvalPolicy) -> Result<Self> {
        if depth == 0 {
            return Err(anyhow!("invalid search depth 0, must be at least 1"));
        }
        Ok(Self {
            depth,
            eval,
            node_count: 0,
        })
    }

    /// Searches for the best move for `player` with alpha-beta pruning
    ///
    /// Returns both the chosen move and its backed-up score; the score is
    /// from `player`'s perspective.
    pub fn best_move(&mut self, board: &Board, player: Player) -> Result<SearchResult> {
        self.node_count = 0;
        self.minimax(board, player, self.depth, true, Score::NegInf, Score::PosInf)
    }

    /// Searches without pruning
    ///
    /// Visits every node the depth bound allows. Kept as the reference
    /// oracle: pruning may only reduce the node count, never change the
    /// backed-up score.
    pub fn best_move_unpruned(&mut self, board: &Board, player: Player) -> Result<SearchResult> {
        self.node_count = 0;
        self.minimax_plain(board, player, self.depth, true)
    }

    /// Scores a decided position from the maximizing player's perspective
    fn terminal_score(&self, status: GameState, maximizer: Player) -> Score {
        match status.winner() {
            Some(winner) if winner == maximizer => match self.eval {
                EvalPolicy::Exact => Score::Finite(1),
                EvalPolicy::Windowed => Score::PosInf,
            },
            Some(_) => match self.eval {
                EvalPolicy::Exact => Score::Finite(-1),
                EvalPolicy::Windowed => Score::NegInf,
            },
            None => Score::Finite(0),
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        maximizer: Player,
        depth: usize,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<SearchResult> {
        self.node_count += 1;

        // decided positions are scored before any child moves are generated
        let status = board.terminal_status();
        if status.is_over() {
            return Ok(SearchResult {
                mv: None,
                score: self.terminal_score(status, maximizer),
            });
        }

        // guard against a board with no legal continuation; the terminal
        // check above makes this unreachable, but an empty move list must
        // never crash the tie-break initialisation below
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult {
                mv: None,
                score: Score::Finite(self.eval.evaluate(board, maximizer)),
            });
        }

        if depth == 0 {
            return Ok(SearchResult {
                mv: None,
                score: Score::Finite(self.eval.evaluate(board, maximizer)),
            });
        }

        let acting = if maximizing {
            maximizer
        } else {
            maximizer.other()
        };
        let mut best_move = moves[0];
        let mut best_score = if maximizing {
            Score::NegInf
        } else {
            Score::PosInf
        };

        for &mv in moves.iter() {
            let mut child = board.clone();
            // only enumerated legal moves reach here, so a placement failure
            // is an internal invariant violation and aborts the search
            child.place(mv, acting)?;
            let result = self.minimax(&child, maximizer, depth - 1, !maximizing, alpha, beta)?;

            if maximizing {
                // strict comparison: the first move found keeps ties
                if result.score > best_score {
                    best_score = result.score;
                    best_move = mv;
                }
                if best_score > alpha {
                    alpha = best_score;
                }
            } else {
                if result.score < best_score {
                    best_score = result.score;
                    best_move = mv;
                }
                if best_score < beta {
                    beta = best_score;
                }
            }
            if alpha >= beta {
                // prune the remaining siblings
                break;
            }
        }

        Ok(SearchResult {
            mv: Some(best_move),
            score: best_score,
        })
    }

    fn minimax_plain(
        &mut self,
        board: &Board,
        maximizer: Player,
        depth: usize,
        maximizing: bool,
    ) -> Result<SearchResult> {
        self.node_count += 1;

        let status = board.terminal_status();
        if status.is_over() {
            return Ok(SearchResult {
                mv: None,
                score: self.terminal_score(status, maximizer),
            });
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult {
                mv: None,
                score: Score::Finite(self.eval.evaluate(board, maximizer)),
            });
        }

        if depth == 0 {
            return Ok(SearchResult {
                mv: None,
                score: Score::Finite(self.eval.evaluate(board, maximizer)),
            });
        }

        let acting = if maximizing {
            maximizer
        } else {
            maximizer.other()
        };
        let mut best_move = moves[0];
        let mut best_score = if maximizing {
            Score::NegInf
        } else {
            Score::PosInf
        };

        for &mv in moves.iter() {
            let mut child = board.clone();
            child.place(mv, acting)?;
            let result = self.minimax_plain(&child, maximizer, depth - 1, !maximizing)?;

            if maximizing {
                if result.score > best_score {
                    best_score = result.score;
                    best_move = mv;
                }
            } else if result.score < best_score {
                best_score = result.score;
                best_move = mv;
            }
        }

        Ok(SearchResult {
            mv: Some(best_move),
            score: best_score,
        })
    }
}
