//! Planar rotation and reflection utilities, and the `Piece` placement
//! candidate.
//!
//! A square layout has 8 possible orientations in the plane (the dihedral
//! group of the square): the 4 rotations plus the mirror image of each.
//! Symmetric shapes collapse to fewer distinct layouts.

use rustc_hash::FxHashSet;

use crate::shapes::{Shape, ShapeKind};
use crate::UnanchoredError;

/// A board coordinate as a (row, col) pair. The top-left cell is (0, 0).
pub type Point = (i32, i32);

/// All 8 orientation-producing transforms for a planar shape.
///
/// Organized as the 4 rotations of the identity followed by the 4 rotations
/// of the horizontal mirror. The rotation formulas match the in-place
/// `Piece::rotate_left` / `Piece::rotate_right` transforms.
pub const TRANSFORMS: [fn(Point) -> Point; 8] = [
    // rotations of the identity
    |(r, c)| (r, c),   // 0 degrees
    |(r, c)| (-c, r),  // 90 degrees counterclockwise
    |(r, c)| (-r, -c), // 180 degrees
    |(r, c)| (c, -r),  // 270 degrees counterclockwise
    // rotations of the horizontal mirror
    |(r, c)| (r, -c),
    |(r, c)| (c, r),
    |(r, c)| (-r, c),
    |(r, c)| (-c, -r),
];

/// Generates all distinct orientations of a square layout.
///
/// Applies all 8 transforms, normalizes each result so the minimum row and
/// column are zero, then removes duplicates. Symmetric shapes produce
/// 1, 2 or 4 orientations instead of 8.
pub fn all_orientations(offsets: &[Point]) -> Vec<Vec<Point>> {
    let mut orientations: Vec<Vec<Point>> = TRANSFORMS
        .iter()
        .map(|transform| {
            let transformed: Vec<Point> = offsets.iter().map(|&p| transform(p)).collect();
            normalize_to_origin(transformed)
        })
        .collect();

    // symmetric shapes produce duplicate layouts
    orientations.sort();
    orientations.dedup();
    orientations
}

/// Translates offsets so the minimum row and column are both zero, and
/// sorts them so equal layouts compare equal.
fn normalize_to_origin(mut offsets: Vec<Point>) -> Vec<Point> {
    let min_row = offsets.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = offsets.iter().map(|&(_, c)| c).min().unwrap_or(0);

    for (r, c) in &mut offsets {
        *r -= min_row;
        *c -= min_col;
    }

    offsets.sort_unstable();
    offsets
}

/// The four orthogonally adjacent points of every square, excluding the
/// squares themselves.
pub(crate) fn cardinal_neighbors_of(squares: &[Point]) -> FxHashSet<Point> {
    let own: FxHashSet<Point> = squares.iter().copied().collect();
    let mut neighbors = FxHashSet::default();

    for &(r, c) in squares {
        for candidate in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
            if !own.contains(&candidate) {
                neighbors.insert(candidate);
            }
        }
    }

    neighbors
}

/// The four diagonally adjacent points of every square, excluding the
/// squares themselves and any point that is already a cardinal neighbor.
pub(crate) fn intercardinal_neighbors_of(squares: &[Point]) -> FxHashSet<Point> {
    let own: FxHashSet<Point> = squares.iter().copied().collect();
    let cardinal = cardinal_neighbors_of(squares);
    let mut neighbors = FxHashSet::default();

    for &(r, c) in squares {
        for candidate in [(r - 1, c - 1), (r - 1, c + 1), (r + 1, c - 1), (r + 1, c + 1)] {
            if !own.contains(&candidate) && !cardinal.contains(&candidate) {
                neighbors.insert(candidate);
            }
        }
    }

    neighbors
}

/// A transient placement candidate: a shape kind, a current orientation,
/// and an optional anchor position on the board.
///
/// Pieces are created by callers (cursors, bots, move enumeration) and
/// never stored inside the game engine; only the outcome of a legal
/// placement persists in the grid. Offsets are kept sorted so the derived
/// equality and hashing compare orientations as sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    offsets: Vec<Point>,
    anchor: Option<Point>,
}

impl Piece {
    /// Creates an unanchored piece in the shape's canonical orientation.
    pub fn new(shape: &Shape) -> Self {
        Piece {
            kind: shape.kind(),
            offsets: shape.offsets().to_vec(),
            anchor: None,
        }
    }

    /// Creates an anchored piece in a specific orientation.
    ///
    /// `offsets` must already be normalized and sorted, as produced by
    /// [`all_orientations`].
    pub(crate) fn from_orientation(kind: ShapeKind, offsets: Vec<Point>, anchor: Point) -> Self {
        Piece {
            kind,
            offsets,
            anchor: Some(anchor),
        }
    }

    /// The shape kind this piece places.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The current orientation's offsets, relative to the anchor.
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    /// Number of squares in the piece.
    pub fn size(&self) -> usize {
        self.offsets.len()
    }

    /// The anchor position, if one has been set.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Fixes the piece's position on the board.
    ///
    /// Bounds and collisions are the game engine's responsibility; any
    /// point is accepted here.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = Some(anchor);
    }

    /// Rotates the orientation 90 degrees counterclockwise around the
    /// anchor, preserving the anchor itself.
    pub fn rotate_left(&mut self) {
        self.transform(|(r, c)| (-c, r));
    }

    /// Rotates the orientation 90 degrees clockwise around the anchor,
    /// preserving the anchor itself.
    pub fn rotate_right(&mut self) {
        self.transform(|(r, c)| (c, -r));
    }

    /// Mirrors the orientation across the vertical axis through the anchor.
    pub fn flip_horizontally(&mut self) {
        self.transform(|(r, c)| (r, -c));
    }

    fn transform(&mut self, f: fn(Point) -> Point) {
        for offset in &mut self.offsets {
            *offset = f(*offset);
        }
        self.offsets.sort_unstable();
    }

    /// Absolute board coordinates of every square: anchor plus offsets.
    pub fn squares(&self) -> Result<Vec<Point>, UnanchoredError> {
        let (anchor_row, anchor_col) = self.anchor.ok_or(UnanchoredError)?;
        Ok(self
            .offsets
            .iter()
            .map(|&(r, c)| (anchor_row + r, anchor_col + c))
            .collect())
    }

    /// Orthogonally adjacent points of the piece's squares, excluding the
    /// squares themselves.
    pub fn cardinal_neighbors(&self) -> Result<FxHashSet<Point>, UnanchoredError> {
        Ok(cardinal_neighbors_of(&self.squares()?))
    }

    /// Diagonally adjacent points of the piece's squares, excluding the
    /// squares themselves and their cardinal neighbors.
    pub fn intercardinal_neighbors(&self) -> Result<FxHashSet<Point>, UnanchoredError> {
        Ok(intercardinal_neighbors_of(&self.squares()?))
    }
}
