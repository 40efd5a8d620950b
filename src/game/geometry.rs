//! Board geometry: coordinates, arena bounds, home edges.
//!
//! The arena is a diamond inscribed in a 28x28 grid. The agent owns the
//! bottom half (rows 0..14); each row `y` of the bottom half spans columns
//! `13 - y ..= 14 + y`. Mobile units deploy only on the two home edges of
//! the diamond.

/// Arena side length in tiles.
pub const ARENA_SIZE: u16 = 28;

/// Row count of the agent's home half (rows `0..HALF_ARENA`).
pub const HALF_ARENA: u16 = 14;

/// A coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The two home-side board edges where mobile units may deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSide {
    /// Lower-left diamond edge: `(13 - y, y)` for each home row.
    BottomLeft,
    /// Lower-right diamond edge: `(14 + y, y)` for each home row.
    BottomRight,
}

impl BoardSide {
    /// Enumerate the edge coordinates for this side, bottom row first.
    #[must_use]
    pub fn edge_locations(self) -> Vec<Coord> {
        (0..HALF_ARENA)
            .map(|y| match self {
                BoardSide::BottomLeft => Coord::new(HALF_ARENA - 1 - y, y),
                BoardSide::BottomRight => Coord::new(HALF_ARENA + y, y),
            })
            .collect()
    }
}

/// Check whether a coordinate lies inside the diamond-shaped arena.
#[must_use]
pub const fn in_arena(coord: Coord) -> bool {
    let Coord { x, y } = coord;
    if y < HALF_ARENA {
        // Bottom half: row y spans [HALF_ARENA - 1 - y, HALF_ARENA + y].
        x + y >= HALF_ARENA - 1 && x <= HALF_ARENA + y
    } else if y < ARENA_SIZE {
        // Top half: row y spans [y - HALF_ARENA, 2 * ARENA_SIZE - HALF_ARENA - 1 - y].
        x + HALF_ARENA >= y && x + y <= 2 * ARENA_SIZE - HALF_ARENA - 1
    } else {
        false
    }
}

/// Check whether a coordinate lies on one of the two home edges.
#[must_use]
pub const fn on_home_edge(coord: Coord) -> bool {
    coord.y < HALF_ARENA
        && (coord.x + coord.y == HALF_ARENA - 1 || coord.x == HALF_ARENA + coord.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_rows() {
        // Bottom corner row holds exactly two tiles.
        assert!(in_arena(Coord::new(13, 0)));
        assert!(in_arena(Coord::new(14, 0)));
        assert!(!in_arena(Coord::new(12, 0)));
        assert!(!in_arena(Coord::new(15, 0)));

        // Widest home row spans the full grid.
        assert!(in_arena(Coord::new(0, 13)));
        assert!(in_arena(Coord::new(27, 13)));

        // Top corner row mirrors the bottom.
        assert!(in_arena(Coord::new(13, 27)));
        assert!(in_arena(Coord::new(14, 27)));
        assert!(!in_arena(Coord::new(12, 27)));
        assert!(!in_arena(Coord::new(0, 28)));
    }

    #[test]
    fn test_edge_locations() {
        let left = BoardSide::BottomLeft.edge_locations();
        let right = BoardSide::BottomRight.edge_locations();

        assert_eq!(left.len(), usize::from(HALF_ARENA));
        assert_eq!(right.len(), usize::from(HALF_ARENA));
        assert_eq!(left[0], Coord::new(13, 0));
        assert_eq!(left[13], Coord::new(0, 13));
        assert_eq!(right[0], Coord::new(14, 0));
        assert_eq!(right[13], Coord::new(27, 13));
    }

    #[test]
    fn test_edges_are_in_arena() {
        for coord in BoardSide::BottomLeft
            .edge_locations()
            .into_iter()
            .chain(BoardSide::BottomRight.edge_locations())
        {
            assert!(in_arena(coord), "{coord:?} should be in the arena");
            assert!(on_home_edge(coord), "{coord:?} should be a home edge");
        }
    }

    #[test]
    fn test_non_edge_tiles() {
        assert!(!on_home_edge(Coord::new(13, 1)));
        assert!(!on_home_edge(Coord::new(14, 14)));
        assert!(!on_home_edge(Coord::new(5, 5)));
    }
}
