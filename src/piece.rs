use std::fmt;

use crate::coord::Coord;
use crate::path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The kinds of piece the engine knows about. Only Bishop and Rook have
/// movement rules; Pawn is a placeholder that can occupy squares (and be
/// captured or block a path) but cannot move itself yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Rook,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
        };
        write!(f, "{}", name)
    }
}

/// A piece is identity only; its location is whichever square holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// The squares this piece must cross to reach `end` from `start`,
    /// excluding both endpoints, or `None` if its movement rule cannot
    /// reach `end` at all.
    pub fn path_to(&self, start: Coord, end: Coord) -> Option<Vec<Coord>> {
        match self.kind {
            PieceKind::Bishop => path::diagonal(start, end),
            PieceKind::Rook => path::straight(start, end),
            PieceKind::Pawn => None,
        }
    }

    /// One-letter board symbol, uppercase for white.
    pub fn symbol(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_has_no_path() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(pawn.path_to(Coord::new(2, 2), Coord::new(2, 3)), None);
        assert_eq!(pawn.path_to(Coord::new(2, 2), Coord::new(2, 4)), None);
    }

    #[test]
    fn test_dispatch() {
        let bishop = Piece::new(Color::White, PieceKind::Bishop);
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        // Bishop accepts diagonals only, rook the exact complement
        assert!(bishop.path_to(Coord::new(3, 3), Coord::new(6, 6)).is_some());
        assert!(bishop.path_to(Coord::new(3, 3), Coord::new(3, 6)).is_none());
        assert!(rook.path_to(Coord::new(3, 3), Coord::new(3, 6)).is_some());
        assert!(rook.path_to(Coord::new(3, 3), Coord::new(6, 6)).is_none());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Piece::new(Color::White, PieceKind::Bishop).symbol(), 'B');
        assert_eq!(Piece::new(Color::Black, PieceKind::Rook).symbol(), 'r');
    }
}
