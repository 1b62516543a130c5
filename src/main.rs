use anyhow::Result;
use clearpath::board::Board;
use clearpath::coord::Coord;
use clearpath::piece::{Color, Piece, PieceKind};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut board = Board::new(true);
    board.place_piece(
        Piece::new(Color::White, PieceKind::Pawn),
        Coord::from_parts('b', 4)?,
    )?;
    board.place_piece(
        Piece::new(Color::White, PieceKind::Pawn),
        Coord::from_parts('e', 4)?,
    )?;
    board.place_piece(
        Piece::new(Color::White, PieceKind::Bishop),
        Coord::from_parts('c', 3)?,
    )?;
    board.place_piece(
        Piece::new(Color::Black, PieceKind::Pawn),
        Coord::from_parts('f', 6)?,
    )?;
    board.place_piece(
        Piece::new(Color::Black, PieceKind::Rook),
        Coord::from_parts('e', 6)?,
    )?;

    println!("{}", board);

    let moves = [
        ("c3", "e1"),
        ("c3", "f6"),
        ("c3", "h5"),
        ("c3", "b4"),
        ("c3", "h8"),
        ("e6", "a6"),
        ("e6", "e4"),
        ("e6", "c5"),
        ("e6", "f6"),
    ];

    for (start, end) in moves {
        let verdict = board.try_move(Coord::from_algebraic(start)?, Coord::from_algebraic(end)?)?;
        println!("{} -> {}: {:?}", start, end, verdict);
    }

    Ok(())
}
