//! Grid state shared by both game variants

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{CONNECT_COLUMNS, CONNECT_ROWS, CONNECT_RUN, TIC_TAC_TOE_RUN, TIC_TAC_TOE_SIZE};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn cell(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        match self {
            GameState::Playing => false,
            _ => true,
        }
    }
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::PlayerOneWin => Some(Player::One),
            GameState::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }
}

/// How a move selects the cell it fills
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Placement {
    /// Any empty cell may be marked directly (tic-tac-toe)
    Direct,
    /// A piece dropped in a column falls to the lowest empty row (Connect 4)
    GravityDrop,
}

/// A move addressed to a board
///
/// `Cell` moves are for [`Placement::Direct`] boards, `Column` moves for
/// [`Placement::GravityDrop`] boards; the drop row is resolved by the board,
/// not chosen by the caller.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Move {
    Cell { row: usize, col: usize },
    Column(usize),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Cell { row, col } => write!(f, "({}, {})", row, col),
            Move::Column(col) => write!(f, "column {}", col),
        }
    }
}

/// A fixed-size grid of cell occupancies
///
/// Cells are stored row-major with row 0 at the top, so gravity drops fill
/// from the highest row index upwards. The occupied-cell count is kept
/// alongside the grid so fullness checks need no rescan.
#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    win_run: usize,
    placement: Placement,
    cells: Vec<Cell>,
    num_moves: usize,
}

impl Board {
    /// Creates an empty board, failing fast on dimensions no game can be
    /// played on
    pub fn new(width: usize, height: usize, win_run: usize, placement: Placement) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!(
                "invalid board dimensions {}x{}, both must be at least 1",
                width,
                height
            ));
        }
        if win_run < 2 {
            return Err(anyhow!(
                "invalid winning run {}, must be at least 2",
                win_run
            ));
        }
        if win_run > width && win_run > height {
            return Err(anyhow!(
                "invalid winning run {}, cannot fit on a {}x{} board",
                win_run,
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            win_run,
            placement,
            cells: vec![Cell::Empty; width * height],
            num_moves: 0,
        })
    }

    /// The standard 3x3 free-placement board
    pub fn tic_tac_toe() -> Result<Self> {
        Self::new(
            TIC_TAC_TOE_SIZE,
            TIC_TAC_TOE_SIZE,
            TIC_TAC_TOE_RUN,
            Placement::Direct,
        )
    }

    /// The standard 7x6 gravity-drop board
    pub fn connect_four() -> Result<Self> {
        Self::new(
            CONNECT_COLUMNS,
            CONNECT_ROWS,
            CONNECT_RUN,
            Placement::GravityDrop,
        )
    }

    /// Builds a gravity-drop board from a string of 0-indexed column digits,
    /// players alternating from player one
    pub fn from_drops(moves: &str) -> Result<Self> {
        let mut board = Self::connect_four()?;
        let mut player = Player::One;

        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = board.place(Move::Column(column as usize), player)?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn win_run(&self) -> usize {
        self.win_run
    }
    pub fn placement(&self) -> Placement {
        self.placement
    }
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == self.width * self.height
    }

    pub fn column_full(&self, col: usize) -> bool {
        !self.cell(0, col).is_empty()
    }

    /// Places a piece for `player`, returning the (row, column) actually
    /// filled
    ///
    /// Fails without mutating the board if the move addresses an occupied
    /// cell, a full column, a coordinate off the grid, or the wrong move
    /// shape for this board's placement rule.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<(usize, usize)> {
        match (self.placement, mv) {
            (Placement::Direct, Move::Cell { row, col }) => {
                if row >= self.height || col >= self.width {
                    return Err(anyhow!(
                        "invalid move ({}, {}), out of range for a {}x{} board",
                        row,
                        col,
                        self.width,
                        self.height
                    ));
                }
                if !self.cell(row, col).is_empty() {
                    return Err(anyhow!("invalid move ({}, {}), cell occupied", row, col));
                }
                self.cells[row * self.width + col] = player.cell();
                self.num_moves += 1;
                Ok((row, col))
            }
            (Placement::GravityDrop, Move::Column(col)) => {
                if col >= self.width {
                    return Err(anyhow!(
                        "invalid move, column {} out of range. Columns must be between 0 and {}",
                        col,
                        self.width - 1
                    ));
                }
                // the piece falls to the lowest empty row
                for row in (0..self.height).rev() {
                    if self.cell(row, col).is_empty() {
                        self.cells[row * self.width + col] = player.cell();
                        self.num_moves += 1;
                        return Ok((row, col));
                    }
                }
                Err(anyhow!("invalid move, column {} full", col))
            }
            (Placement::Direct, mv) => {
                Err(anyhow!("invalid move {}, board takes (row, col) moves", mv))
            }
            (Placement::GravityDrop, mv) => {
                Err(anyhow!("invalid move {}, board takes column moves", mv))
            }
        }
    }

    /// Enumerates the currently playable moves
    ///
    /// The order is fixed: row-major empty cells for direct placement,
    /// left-to-right open columns for gravity drop. The search resolves
    /// equal-score ties in favour of the first move enumerated here, so
    /// this order is part of the contract.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.placement {
            Placement::Direct => {
                let mut moves = Vec::with_capacity(self.cells.len() - self.num_moves);
                for row in 0..self.height {
                    for col in 0..self.width {
                        if self.cell(row, col).is_empty() {
                            moves.push(Move::Cell { row, col });
                        }
                    }
                }
                moves
            }
            Placement::GravityDrop => (0..self.width)
                .filter(|&col| !self.column_full(col))
                .map(Move::Column)
                .collect(),
        }
    }

    /// Reports whether the game is over and who won
    ///
    /// Scans all four line orientations for a winning run; a full board with
    /// no run is a draw.
    pub fn terminal_status(&self) -> GameState {
        if let Some(winner) = self.winning_run() {
            return match winner {
                Player::One => GameState::PlayerOneWin,
                Player::Two => GameState::PlayerTwoWin,
            };
        }
        if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }

    fn winning_run(&self) -> Option<Player> {
        // down, right, down-right, down-left
        const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        let reach = (self.win_run - 1) as i32;
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.cell(row, col);
                if cell.is_empty() {
                    continue;
                }
                for &(dr, dc) in DIRECTIONS.iter() {
                    let end_row = row as i32 + reach * dr;
                    let end_col = col as i32 + reach * dc;
                    if end_row >= self.height as i32 || end_col < 0 || end_col >= self.width as i32
                    {
                        continue;
                    }
                    if (1..self.win_run as i32).all(|i| {
                        self.cell((row as i32 + i * dr) as usize, (col as i32 + i * dc) as usize)
                            == cell
                    }) {
                        return match cell {
                            Cell::PlayerOne => Some(Player::One),
                            Cell::PlayerTwo => Some(Player::Two),
                            Cell::Empty => unreachable!(),
                        };
                    }
                }
            }
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = match self.cell(row, col) {
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
