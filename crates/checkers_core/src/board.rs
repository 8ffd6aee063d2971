use std::fmt;
use std::str::FromStr;

use crate::error::{CheckersError, CheckersResult};
use crate::types::*;

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// An 8x8 checkers board. Boards are plain values: every move produces a
/// new board and the old one is left untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Standard starting layout: twelve men per side on the dark squares
    /// (`row + col` odd), White on rows 0..=2 and Black on rows 5..=7.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        for row in 0..BOARD_SIZE {
            let fill = match row {
                0..=2 => Square::WhiteMan,
                5..=7 => Square::BlackMan,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 1 {
                    b.set(Position::new(row, col), fill);
                }
            }
        }
        b
    }

    /// Parses a layout such as `".w.w.w.w/w.w.w.w./8/8/8/8/8/8"`.
    ///
    /// Rows are listed from row 0 down to row 7 and separated by `/`.
    /// `.` is an empty square, `b`/`B` a black man/king, `w`/`W` a white
    /// man/king, and a digit stands for that many empty squares.
    pub fn from_layout(layout: &str) -> CheckersResult<Self> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(CheckersError::InvalidLayout(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut b = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in row_str.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col += run as i8;
                } else {
                    let sq = Square::from_char(ch).ok_or_else(|| {
                        CheckersError::InvalidLayout(format!("unexpected character {ch:?}"))
                    })?;
                    if col < BOARD_SIZE {
                        b.set(Position::new(row as i8, col), sq);
                    }
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(CheckersError::InvalidLayout(format!(
                        "row {row} has more than {BOARD_SIZE} squares"
                    )));
                }
            }
            if col != BOARD_SIZE {
                return Err(CheckersError::InvalidLayout(format!(
                    "row {row} has {col} squares"
                )));
            }
        }
        Ok(b)
    }

    /// Inverse of [`Board::from_layout`], one character per square.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(CELLS + 7);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            for col in 0..BOARD_SIZE {
                out.push(self.squares[Position::new(row, col).index()].to_char());
            }
        }
        out
    }

    pub fn square_at(&self, pos: Position) -> CheckersResult<Square> {
        self.get(pos).ok_or(CheckersError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        })
    }

    pub fn is_empty(&self, pos: Position) -> CheckersResult<bool> {
        self.square_at(pos).map(Square::is_empty)
    }

    /// `None` when `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Square> {
        pos.is_on_board().then(|| self.squares[pos.index()])
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, sq: Square) {
        self.squares[pos.index()] = sq;
    }

    /// Occupied squares of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Square)> + '_ {
        self.squares.iter().enumerate().filter_map(move |(i, &sq)| {
            (sq.owner() == Some(color)).then(|| {
                let pos = Position::new(
                    (i / BOARD_SIZE as usize) as i8,
                    (i % BOARD_SIZE as usize) as i8,
                );
                (pos, sq)
            })
        })
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .filter(|sq| sq.owner() == Some(color))
            .count()
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .filter(|sq| sq.owner() == Some(color) && sq.is_king())
            .count()
    }

    pub fn total_pieces(&self) -> usize {
        self.squares.iter().filter(|sq| !sq.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl FromStr for Board {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_layout(s)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row}")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.squares[Position::new(row, col).index()].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
