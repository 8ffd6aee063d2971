use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 8;

/// The two sides. Black starts on rows 5..=7 and moves toward row 0,
/// White starts on rows 0..=2 and moves toward row 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
    /// Row delta of a man's step.
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }
    /// The opponent's back rank, where this side's men are crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Black => 0,
            Color::White => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Square {
    #[default]
    Empty,
    BlackMan,
    BlackKing,
    WhiteMan,
    WhiteKing,
}

impl Square {
    pub fn man(color: Color) -> Square {
        match color {
            Color::Black => Square::BlackMan,
            Color::White => Square::WhiteMan,
        }
    }
    pub fn king(color: Color) -> Square {
        match color {
            Color::Black => Square::BlackKing,
            Color::White => Square::WhiteKing,
        }
    }
    pub fn owner(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::BlackMan | Square::BlackKing => Some(Color::Black),
            Square::WhiteMan | Square::WhiteKing => Some(Color::White),
        }
    }
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
    pub fn is_king(self) -> bool {
        matches!(self, Square::BlackKing | Square::WhiteKing)
    }
    pub fn is_man(self) -> bool {
        matches!(self, Square::BlackMan | Square::WhiteMan)
    }
    /// Crowns a man. Kings and empty squares are returned unchanged.
    pub fn promote(self) -> Square {
        match self {
            Square::BlackMan => Square::BlackKing,
            Square::WhiteMan => Square::WhiteKing,
            other => other,
        }
    }
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.owner() == Some(color.other())
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::BlackMan => 'b',
            Square::BlackKing => 'B',
            Square::WhiteMan => 'w',
            Square::WhiteKing => 'W',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Square> {
        match c {
            '.' => Some(Square::Empty),
            'b' => Some(Square::BlackMan),
            'B' => Some(Square::BlackKing),
            'w' => Some(Square::WhiteMan),
            'W' => Some(Square::WhiteKing),
            _ => None,
        }
    }

    /// Diagonal directions this piece may step or jump in.
    pub fn directions(self) -> &'static [(i8, i8)] {
        const BLACK_MAN: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
        const WHITE_MAN: [(i8, i8); 2] = [(1, -1), (1, 1)];
        const KING: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        match self {
            Square::Empty => &[],
            Square::BlackMan => &BLACK_MAN,
            Square::WhiteMan => &WHITE_MAN,
            Square::BlackKing | Square::WhiteKing => &KING,
        }
    }
}

/// A board coordinate. Signed so that direction arithmetic can step off the
/// board; use [`Position::is_on_board`] or [`Position::offset`] to stay on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }
    /// The position `(dr, dc)` away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let p = Position::new(self.row + dr, self.col + dc);
        p.is_on_board().then_some(p)
    }
    pub(crate) fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A simple step (`captured` empty) or a capture entry that removes every
/// square in `captured`, in jump order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Vec<Position>,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
        }
    }
    pub fn capture(from: Position, to: Position, captured: Vec<Position>) -> Self {
        Self { from, to, captured }
    }
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.captured.is_empty() {
            return write!(f, "{}-{}", self.from, self.to);
        }
        write!(f, "{}x{} [", self.from, self.to)?;
        for (i, c) in self.captured.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
