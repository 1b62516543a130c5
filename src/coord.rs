use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid file letter '{0}', expected a-h")]
    InvalidCoordinate(char),
    #[error("coordinate ({0}, {1}) is off the board")]
    OutOfRange(u8, u8),
}

/// A board coordinate: file and rank, both 1-based in 1..=8.
///
/// File letters a-h translate to columns 1-8 at the boundary; everything
/// past the constructors works in numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Coord {
    pub fn new(file: u8, rank: u8) -> Self {
        debug_assert!((1..=8).contains(&file) && (1..=8).contains(&rank));
        Self { file, rank }
    }

    /// Build a coordinate from a file letter and a rank number.
    pub fn from_parts(file: char, rank: u8) -> Result<Self, CoordError> {
        let column = file_to_column(file)?;
        if !(1..=8).contains(&rank) {
            return Err(CoordError::OutOfRange(column, rank));
        }
        Ok(Self { file: column, rank })
    }

    /// Parse algebraic notation, e.g. "c3".
    pub fn from_algebraic(s: &str) -> Result<Self, CoordError> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(CoordError::InvalidCoordinate('\0'))?;
        let rank = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| CoordError::InvalidCoordinate(file))?;
        Coord::from_parts(file, rank)
    }

    pub fn is_on_board(&self) -> bool {
        (1..=8).contains(&self.file) && (1..=8).contains(&self.rank)
    }

    /// File letter for this coordinate. Out-of-range files clamp to the
    /// board edge so display never wraps past 'h' or overflows.
    pub fn file_letter(&self) -> char {
        (b'a' + self.file.clamp(1, 8) - 1) as char
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank)
    }
}

/// Map a file letter a-h to its 1-based column.
pub fn file_to_column(file: char) -> Result<u8, CoordError> {
    match file {
        'a'..='h' => Ok(file as u8 - b'a' + 1),
        _ => Err(CoordError::InvalidCoordinate(file)),
    }
}
