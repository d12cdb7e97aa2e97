// patterns.rs - Preset patterns, stored as offsets from the grid center.

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        offsets: &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        offsets: &[(0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Toad",
        offsets: &[(-1, 0), (-1, 1), (-1, 2), (0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Beacon",
        offsets: &[
            (-1, -1),
            (-1, 0),
            (0, -1),
            (0, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
        ],
    },
    Pattern {
        name: "Pulsar",
        offsets: &[
            // Top half
            (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
            (-4, -6), (-4, -1), (-4, 1), (-4, 6),
            (-3, -6), (-3, -1), (-3, 1), (-3, 6),
            (-2, -6), (-2, -1), (-2, 1), (-2, 6),
            (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
            // Bottom half (mirrored)
            (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
            (2, -6), (2, -1), (2, 1), (2, 6),
            (3, -6), (3, -1), (3, 1), (3, 6),
            (4, -6), (4, -1), (4, 1), (4, 6),
            (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
        ],
    },
    Pattern {
        name: "R-pentomino",
        offsets: &[(-1, 1), (0, 0), (0, 1), (1, -1), (1, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        offsets: &[
            (0, -17), (0, -16), (1, -17), (1, -16),
            (0, -7), (1, -7), (2, -7), (-1, -6), (3, -6), (-2, -5), (4, -5),
            (-2, -4), (4, -4), (1, -3), (-1, -2), (3, -2), (0, -1), (1, -1),
            (2, -1), (1, 0), (-2, 3), (-1, 3), (0, 3), (-2, 4), (-1, 4),
            (0, 4), (-3, 5), (1, 5), (-4, 7), (-3, 7), (1, 7), (2, 7),
            (-2, 17), (-1, 17), (-2, 18), (-1, 18),
        ],
    },
];

/// Clear the grid and stamp the pattern around the board center. Offsets
/// landing outside the board are skipped. Leaves the neighbor counts stale;
/// the caller re-runs the counting pass, same as after a toggle.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    let n = grid.dimension() as i32;
    let center = n / 2;
    for &(dr, dc) in pattern.offsets {
        let (row, col) = (center + dr, center + dc);
        if row >= 0 && row < n && col >= 0 && col < n {
            grid.set_alive(row as usize, col as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellularAutomaton;

    fn pattern(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_blinker_stamp_and_oscillation() {
        let mut grid = Grid::seed(9, 0.0, false);
        apply_pattern(&mut grid, pattern("Blinker"));
        grid.count_neighbors();
        assert_eq!(grid.live_count(), 3);
        assert!(grid.cell(4, 3).unwrap().alive);
        assert!(grid.cell(4, 4).unwrap().alive);
        assert!(grid.cell(4, 5).unwrap().alive);

        grid.advance();
        grid.count_neighbors();
        assert!(grid.cell(3, 4).unwrap().alive);
        assert!(grid.cell(4, 4).unwrap().alive);
        assert!(grid.cell(5, 4).unwrap().alive);
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn test_stamp_replaces_previous_state() {
        let mut grid = Grid::seed(15, 0.0, false);
        apply_pattern(&mut grid, pattern("Glider"));
        assert_eq!(grid.live_count(), 5);

        apply_pattern(&mut grid, pattern("Blinker"));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn test_stamp_clips_on_small_boards() {
        // Only the (0, 0) offset of the blinker fits on a 1x1 board.
        let mut grid = Grid::seed(1, 0.0, false);
        apply_pattern(&mut grid, pattern("Blinker"));
        assert_eq!(grid.live_count(), 1);

        // The gun is far wider than 9 cells; stamping must not panic and
        // must only set in-range cells.
        let mut grid = Grid::seed(9, 0.0, false);
        apply_pattern(&mut grid, pattern("Gosper Glider Gun"));
        assert!(grid.live_count() > 0);
        assert!(grid.live_count() < pattern("Gosper Glider Gun").offsets.len());
    }

    #[test]
    fn test_pattern_offsets_are_unique() {
        for pattern in PATTERNS {
            let mut seen = pattern.offsets.to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), pattern.offsets.len(), "{}", pattern.name);
        }
    }
}
