//! Board storage and the bordered-text debug format.
//!
//! The grid is a flat `size * size` array where each cell is either empty
//! or holds the (player, shape kind) pair that was placed there. Cells are
//! written once by a legal placement and never cleared.
//!
//! The text format renders each cell as the single-digit player id plus a
//! space (or two spaces when empty) inside a `+---+` frame. It exists for
//! tests and debugging only and is lossy: parsing restores player ids but
//! not shape kinds.

use crate::geometry::Point;
use crate::shapes::ShapeKind;

/// One occupied cell: the owning player id and the shape kind placed there.
pub type Cell = (u8, ShapeKind);

/// A square board of optionally occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    /// Creates an empty grid of `size * size` cells.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// The board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a point lies within the board.
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        let size = self.size as i32;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// The occupant of a cell, or `None` when the cell is empty or the
    /// point lies outside the board.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if !self.in_bounds(point) {
            return None;
        }
        let (row, col) = point;
        self.cells[row as usize * self.size + col as usize]
    }

    /// Like [`Grid::cell`], but clamps out-of-bounds coordinates to the
    /// nearest edge cell before the lookup.
    ///
    /// The legality rule depends on this clamp: neighbor coordinates that
    /// fall off the board are treated as referring to the nearest in-bounds
    /// cell rather than being skipped.
    pub fn cell_clamped(&self, (row, col): Point) -> Option<Cell> {
        let max = self.size as i32 - 1;
        self.cell((row.clamp(0, max), col.clamp(0, max)))
    }

    /// Writes an occupant. The caller guarantees the point is in bounds
    /// and the cell is empty.
    pub(crate) fn set(&mut self, (row, col): Point, cell: Cell) {
        debug_assert!(self.in_bounds((row, col)));
        let index = row as usize * self.size + col as usize;
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(cell);
    }

    /// Renders the grid as a bordered text block.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.size + 2);
        let frame = format!("+{}+", "-".repeat(self.size * 2));

        lines.push(frame.clone());
        for row in 0..self.size {
            let mut line = String::from("|");
            for col in 0..self.size {
                match self.cells[row * self.size + col] {
                    Some((player, _)) => {
                        line.push(char::from(b'0' + player));
                        line.push(' ');
                    }
                    None => line.push_str("  "),
                }
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(frame);

        lines.join("\n")
    }

    /// Parses a bordered text block back into a grid.
    ///
    /// Player ids round-trip; shape kinds do not and are restored as
    /// [`ShapeKind::One`]. Returns `None` for malformed or non-square
    /// input.
    pub fn parse(text: &str) -> Option<Grid> {
        let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
        if lines.len() < 3 {
            return None;
        }

        let size = lines.len() - 2;
        let mut grid = Grid::new(size);

        for (row, line) in lines[1..=size].iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != size * 2 + 2 || chars[0] != '|' || chars[size * 2 + 1] != '|' {
                return None;
            }
            for col in 0..size {
                match chars[1 + col * 2] {
                    ' ' => {}
                    digit => {
                        let player = digit.to_digit(10)? as u8;
                        grid.cells[row * size + col] = Some((player, ShapeKind::One));
                    }
                }
            }
        }

        Some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_small_board() {
        let mut grid = Grid::new(5);
        grid.set((1, 1), (1, ShapeKind::One));
        grid.set((1, 2), (1, ShapeKind::One));
        grid.set((2, 1), (1, ShapeKind::One));
        grid.set((2, 2), (1, ShapeKind::One));

        insta::assert_snapshot!(grid.to_text(), @r"
        +----------+
        |          |
        |  1 1     |
        |  1 1     |
        |          |
        |          |
        +----------+
        ");
    }

    #[test]
    fn round_trips_a_diagonal_board() {
        let mut grid = Grid::new(6);
        grid.set((0, 1), (2, ShapeKind::One));
        grid.set((1, 0), (1, ShapeKind::One));
        grid.set((2, 2), (1, ShapeKind::One));
        grid.set((3, 3), (2, ShapeKind::One));
        grid.set((4, 5), (2, ShapeKind::One));
        grid.set((5, 4), (1, ShapeKind::One));

        let text = grid.to_text();
        assert_eq!(Grid::parse(&text), Some(grid));
    }

    #[test]
    fn round_trips_a_two_player_board() {
        let mut grid = Grid::new(4);
        grid.set((1, 1), (1, ShapeKind::One));
        grid.set((2, 2), (2, ShapeKind::One));

        let text = grid.to_text();
        assert_eq!(
            text,
            "+--------+\n\
             |        |\n\
             |  1     |\n\
             |    2   |\n\
             |        |\n\
             +--------+"
        );
        assert_eq!(Grid::parse(&text), Some(grid));
    }

    #[test]
    fn parsing_is_lossy_for_shape_kinds() {
        let mut grid = Grid::new(5);
        grid.set((0, 0), (3, ShapeKind::X));

        let parsed = Grid::parse(&grid.to_text()).unwrap();
        assert_eq!(parsed.cell((0, 0)), Some((3, ShapeKind::One)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(Grid::parse(""), None);
        assert_eq!(Grid::parse("+--+\n|x |\n+--+"), None);
        assert_eq!(Grid::parse("+----+\n|1 |\n|    |\n+----+"), None);
    }

    #[test]
    fn clamped_lookups_hit_the_nearest_edge_cell() {
        let mut grid = Grid::new(5);
        grid.set((0, 0), (1, ShapeKind::One));
        grid.set((4, 4), (2, ShapeKind::One));

        assert_eq!(grid.cell((-1, 0)), None);
        assert_eq!(grid.cell_clamped((-1, 0)), Some((1, ShapeKind::One)));
        assert_eq!(grid.cell_clamped((0, -1)), Some((1, ShapeKind::One)));
        assert_eq!(grid.cell_clamped((5, 4)), Some((2, ShapeKind::One)));
        assert_eq!(grid.cell_clamped((2, 2)), None);
    }
}
