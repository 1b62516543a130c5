//! Path generation for sliding pieces.
//!
//! Both functions return the squares strictly between `start` and `end`,
//! in travel order, or `None` when the destination is unreachable under
//! the piece's geometry. `start == end` is never a valid move.

use crate::coord::Coord;

/// Diagonal path (Bishop): valid iff |Δfile| == |Δrank| and non-zero.
pub fn diagonal(start: Coord, end: Coord) -> Option<Vec<Coord>> {
    let df = end.file as i8 - start.file as i8;
    let dr = end.rank as i8 - start.rank as i8;
    if df == 0 || df.abs() != dr.abs() {
        return None;
    }
    Some(walk(start, end, df.signum(), dr.signum()))
}

/// Straight path (Rook): valid iff exactly one of file/rank changes.
pub fn straight(start: Coord, end: Coord) -> Option<Vec<Coord>> {
    let df = end.file as i8 - start.file as i8;
    let dr = end.rank as i8 - start.rank as i8;
    if (df == 0) == (dr == 0) {
        return None;
    }
    Some(walk(start, end, df.signum(), dr.signum()))
}

fn walk(start: Coord, end: Coord, step_file: i8, step_rank: i8) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut file = start.file as i8 + step_file;
    let mut rank = start.rank as i8 + step_rank;
    while (file as u8, rank as u8) != (end.file, end.rank) {
        path.push(Coord::new(file as u8, rank as u8));
        file += step_file;
        rank += step_rank;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_diagonal_geometry() {
        // Not a diagonal at all
        assert_eq!(diagonal(c("c3"), c("h5")), None);
        assert_eq!(diagonal(c("c3"), c("c6")), None);
        // Zero-length move
        assert_eq!(diagonal(c("c3"), c("c3")), None);
        // Adjacent square: empty path
        assert_eq!(diagonal(c("c3"), c("b4")), Some(vec![]));
    }

    #[test]
    fn test_diagonal_intermediates() {
        // c3 -> h8 crosses d4, e5, f6, g7 in that order
        let path = diagonal(c("c3"), c("h8")).unwrap();
        assert_eq!(path, vec![c("d4"), c("e5"), c("f6"), c("g7")]);

        // Down-left direction
        let path = diagonal(c("f6"), c("c3")).unwrap();
        assert_eq!(path, vec![c("e5"), c("d4")]);

        // Down-right
        let path = diagonal(c("c3"), c("e1")).unwrap();
        assert_eq!(path, vec![c("d2")]);
    }

    #[test]
    fn test_diagonal_length_and_monotonic() {
        // A diagonal of length n yields n - 1 intermediates, strictly
        // monotonic on both axes.
        let path = diagonal(c("a1"), c("h8")).unwrap();
        assert_eq!(path.len(), 6);
        for pair in path.windows(2) {
            assert_eq!(pair[1].file, pair[0].file + 1);
            assert_eq!(pair[1].rank, pair[0].rank + 1);
        }
    }

    #[test]
    fn test_straight_geometry() {
        assert_eq!(straight(c("e6"), c("c5")), None);
        assert_eq!(straight(c("e6"), c("f7")), None);
        assert_eq!(straight(c("e6"), c("e6")), None);
        assert_eq!(straight(c("e6"), c("f6")), Some(vec![]));
    }

    #[test]
    fn test_straight_intermediates() {
        // Horizontal, leftward
        let path = straight(c("e6"), c("a6")).unwrap();
        assert_eq!(path, vec![c("d6"), c("c6"), c("b6")]);

        // Vertical, downward
        let path = straight(c("e6"), c("e4")).unwrap();
        assert_eq!(path, vec![c("e5")]);

        // Full-length file
        let path = straight(c("a1"), c("a8")).unwrap();
        assert_eq!(path.len(), 6);
    }
}
