use std::fmt;

use crate::coord::{Coord, CoordError};
use crate::piece::{Piece, PieceKind};

/// Display shade of a square, from the parity of file + rank. Cosmetic
/// only; legality never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

#[derive(Debug, Clone)]
pub struct Square {
    pub coord: Coord,
    pub shade: Shade,
    pub piece: Option<Piece>,
}

impl Square {
    fn new(coord: Coord) -> Self {
        let shade = if (coord.file + coord.rank) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        };
        Self {
            coord,
            shade,
            piece: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// The verdict of a move evaluation. Every legality outcome is a value;
/// only malformed coordinates are reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Legal(Legality),
    Illegal(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    /// Destination was empty.
    Simple,
    /// Destination held an enemy piece of the given kind.
    Capture(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoPieceAtStart,
    FriendlyOccupant,
    InvalidDestination,
    /// An intermediate square held a piece of the given kind. Reported
    /// for the first blocker in travel order.
    Blocked(PieceKind),
}

/// An 8x8 board of squares. Owns every square and, transitively, every
/// piece placed on it.
pub struct Board {
    // Indexed [file - 1][rank - 1]; file letters never reach this far.
    squares: [[Square; 8]; 8],
    verbose: bool,
}

impl Board {
    pub fn new(verbose: bool) -> Self {
        let squares = std::array::from_fn(|f| {
            std::array::from_fn(|r| Square::new(Coord::new(f as u8 + 1, r as u8 + 1)))
        });
        Self { squares, verbose }
    }

    pub fn get_square(&self, coord: Coord) -> Result<&Square, CoordError> {
        if !coord.is_on_board() {
            return Err(CoordError::OutOfRange(coord.file, coord.rank));
        }
        Ok(&self.squares[coord.file as usize - 1][coord.rank as usize - 1])
    }

    /// Put a piece on a square, replacing whatever was there. This is
    /// setup, not a move: no legality check is applied.
    pub fn place_piece(&mut self, piece: Piece, coord: Coord) -> Result<(), CoordError> {
        if !coord.is_on_board() {
            return Err(CoordError::OutOfRange(coord.file, coord.rank));
        }
        self.squares[coord.file as usize - 1][coord.rank as usize - 1].piece = Some(piece);
        Ok(())
    }

    /// Evaluate a move without executing it. The board is not mutated;
    /// relocating the piece on a legal verdict is the caller's business.
    pub fn try_move(&self, start: Coord, end: Coord) -> Result<MoveResult, CoordError> {
        // Range errors are rejected here, before any piece logic runs.
        let start_square = self.get_square(start)?;
        let end_square = self.get_square(end)?;

        let piece = match start_square.piece {
            Some(p) => p,
            None => {
                self.narrate(format_args!("no piece at {}", start));
                return Ok(MoveResult::Illegal(Rejection::NoPieceAtStart));
            }
        };

        // A zero-length move is a geometry failure, not a collision with
        // the mover itself; settle it before the occupancy check.
        if start == end {
            self.narrate(format_args!(
                "{} cannot reach {} from {}",
                piece.kind, end, start
            ));
            return Ok(MoveResult::Illegal(Rejection::InvalidDestination));
        }

        // Same-color destination is rejected before the geometry check.
        if let Some(occupant) = end_square.piece {
            if occupant.color == piece.color {
                self.narrate(format_args!(
                    "{} is occupied by a friendly {}",
                    end, occupant.kind
                ));
                return Ok(MoveResult::Illegal(Rejection::FriendlyOccupant));
            }
        }

        let path = match piece.path_to(start, end) {
            Some(path) => path,
            None => {
                self.narrate(format_args!(
                    "{} cannot reach {} from {}",
                    piece.kind, end, start
                ));
                return Ok(MoveResult::Illegal(Rejection::InvalidDestination));
            }
        };

        for waypoint in path {
            if let Some(blocker) =
                self.squares[waypoint.file as usize - 1][waypoint.rank as usize - 1].piece
            {
                self.narrate(format_args!(
                    "{} to {} is blocked by a {} at {}",
                    start, end, blocker.kind, waypoint
                ));
                return Ok(MoveResult::Illegal(Rejection::Blocked(blocker.kind)));
            }
        }

        match end_square.piece {
            Some(enemy) => {
                self.narrate(format_args!(
                    "{} {} to {} captures a {}",
                    piece.kind, start, end, enemy.kind
                ));
                Ok(MoveResult::Legal(Legality::Capture(enemy.kind)))
            }
            None => {
                self.narrate(format_args!("{} {} to {} is legal", piece.kind, start, end));
                Ok(MoveResult::Legal(Legality::Simple))
            }
        }
    }

    // Observability side channel; never part of the verdict.
    fn narrate(&self, message: fmt::Arguments) {
        if self.verbose {
            tracing::info!("{}", message);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = String::new();
        for rank in (1..=8).rev() {
            for file in 1..=8usize {
                let square = &self.squares[file - 1][rank - 1];
                match square.piece {
                    Some(piece) => result.push(piece.symbol()),
                    None => result.push('.'),
                }
                if file < 8 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        write!(f, "{}", result)
    }
}
