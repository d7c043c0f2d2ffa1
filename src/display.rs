use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use gridgame_ai::board::{Board, Cell, Placement};

/// Draws the board to the terminal, coloured per player
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..board.width()).map(|col| col.to_string()).collect();
    stdout.queue(PrintStyledContent(style(format!("  {}\n", header))))?;

    for row in 0..board.height() {
        stdout.queue(PrintStyledContent(style(format!("{} ", row))))?;
        for col in 0..board.width() {
            let cell = board.cell(row, col);
            let content = match board.placement() {
                Placement::GravityDrop => style("O".to_string())
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
                Placement::Direct => style(
                    match cell {
                        Cell::PlayerOne => "X",
                        Cell::PlayerTwo => "O",
                        Cell::Empty => ".",
                    }
                    .to_string(),
                )
                .attribute(Attribute::Bold)
                .with(match cell {
                    Cell::PlayerOne => Color::Red,
                    Cell::PlayerTwo => Color::Yellow,
                    Cell::Empty => Color::Grey,
                }),
            };
            stdout.queue(PrintStyledContent(content))?;
        }
        stdout.queue(PrintStyledContent(style("\n".to_string())))?;
    }
    stdout.flush()?;
    Ok(())
}
