//! Text form of a board.
//!
//! A board is written as nine cells in row-major order: `X`, `O`, or one of
//! `.`, `-`, `_` for an empty cell. Rows may be separated by `/`, `|` or
//! whitespace, so `"XX./OO./..."` and `"XX.OO...."` name the same board.

use std::str::FromStr;

use super::error::ParseBoardError;
use super::types::{Board, Cell, Player};

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(ParseBoardError::new(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut rows = [[Cell::Empty; Board::SIZE]; Board::SIZE];
        for (index, cell) in cells.into_iter().enumerate() {
            rows[index / Board::SIZE][index % Board::SIZE] = cell;
        }
        Ok(Board::from_rows(rows))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(Player::X) => "X",
                    Cell::Occupied(Player::O) => "O",
                };
                f.write_str(symbol)?;
                if c < Board::SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if r < Board::SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
