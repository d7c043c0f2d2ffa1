//! Position scoring for search leaves

use crate::board::{Board, Player};

/// Score for a full winning run inside one window
pub const RUN_WEIGHT: i32 = 100;
/// Score for a run one short of winning inside one window
pub const NEAR_RUN_WEIGHT: i32 = 4;
/// Score for a run two short of winning inside one window
pub const PAIR_WEIGHT: i32 = 2;
/// Penalty for an opponent run one short of winning inside one window
pub const OPPONENT_NEAR_RUN_WEIGHT: i32 = -6;
/// Bonus per own piece in the center column
pub const CENTER_WEIGHT: i32 = 7;

/// How leaf positions are scored
///
/// `Exact` is for games small enough that the search always reaches a
/// terminal position; `Windowed` approximates deeper positions by scoring
/// every fixed-length window of cells independently and summing.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EvalPolicy {
    Exact,
    Windowed,
}

impl EvalPolicy {
    /// Scores a board from `player`'s perspective
    ///
    /// `Exact` only distinguishes terminal outcomes (+1 win, -1 loss,
    /// 0 otherwise); `Windowed` returns the weighted-window sum.
    pub fn evaluate(&self, board: &Board, player: Player) -> i32 {
        match self {
            EvalPolicy::Exact => match board.terminal_status().winner() {
                Some(winner) if winner == player => 1,
                Some(_) => -1,
                None => 0,
            },
            EvalPolicy::Windowed => windowed_score(board, player),
        }
    }
}

// The weights are an empirically chosen policy constant; they set the
// baseline difficulty and are not meant to be tuned.
fn window_weight(own: usize, opponent: usize, run: usize) -> i32 {
    let mut weight = if own == run {
        RUN_WEIGHT
    } else if own == run - 1 {
        NEAR_RUN_WEIGHT
    } else if own == run - 2 {
        PAIR_WEIGHT
    } else {
        0
    };
    if opponent == run - 1 {
        // defensive penalty, deliberately asymmetric with NEAR_RUN_WEIGHT
        weight += OPPONENT_NEAR_RUN_WEIGHT;
    }
    weight
}

/// Sums `window_weight` over every contiguous window of `win_run` cells in
/// all four orientations, plus the center-column occupancy bonus
///
/// Center cells take part in the most potential lines, so their structural
/// value is rewarded directly rather than only through the line windows.
fn windowed_score(board: &Board, player: Player) -> i32 {
    let own = player.cell();
    let opponent = player.other().cell();
    let width = board.width();
    let height = board.height();
    let run = board.win_run();
    let mut score = 0;

    let center = width / 2;
    for row in 0..height {
        if board.cell(row, center) == own {
            score += CENTER_WEIGHT;
        }
    }

    let tally = |cells: &mut dyn Iterator<Item = (usize, usize)>| {
        let mut own_count = 0;
        let mut opponent_count = 0;
        for (row, col) in cells {
            let cell = board.cell(row, col);
            if cell == own {
                own_count += 1;
            } else if cell == opponent {
                opponent_count += 1;
            }
        }
        window_weight(own_count, opponent_count, run)
    };

    // horizontal
    if width >= run {
        for row in 0..height {
            for col in 0..=width - run {
                score += tally(&mut (0..run).map(|i| (row, col + i)));
            }
        }
    }

    // vertical
    if height >= run {
        for col in 0..width {
            for row in 0..=height - run {
                score += tally(&mut (0..run).map(|i| (row + i, col)));
            }
        }
    }

    // both diagonals
    if width >= run && height >= run {
        for row in 0..=height - run {
            for col in 0..=width - run {
                score += tally(&mut (0..run).map(|i| (row + i, col + i)));
                score += tally(&mut (0..run).map(|i| (row + run - 1 - i, col + i)));
            }
        }
    }

    score
}
