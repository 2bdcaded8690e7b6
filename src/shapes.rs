//! The 21 polyomino shape definitions and the validated shape catalog.
//!
//! Each shape is defined as a set of unit square offsets in (row, col)
//! space, normalized so the minimum row and column are zero. The catalog
//! validates every definition once at construction; game code treats the
//! shapes as immutable afterwards.

use std::fmt;

use crate::geometry::{all_orientations, Point};
use crate::DefinitionError;

/// Maximum number of squares in any shape.
pub const MAX_SQUARES: usize = 5;

/// The 21 shape kinds, named after the letters or digits they resemble.
///
/// `One` through `Five`, `Seven` and `LetterO` are the digit/letter names
/// for the small polyominoes; the remaining letters are the standard
/// pentomino names (plus `C` for the corner triomino and `A` for the
/// T tetromino).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    One,
    Two,
    Three,
    C,
    Four,
    Seven,
    S,
    LetterO,
    A,
    F,
    Five,
    L,
    N,
    P,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 21] = [
        ShapeKind::One,
        ShapeKind::Two,
        ShapeKind::Three,
        ShapeKind::C,
        ShapeKind::Four,
        ShapeKind::Seven,
        ShapeKind::S,
        ShapeKind::LetterO,
        ShapeKind::A,
        ShapeKind::F,
        ShapeKind::Five,
        ShapeKind::L,
        ShapeKind::N,
        ShapeKind::P,
        ShapeKind::T,
        ShapeKind::U,
        ShapeKind::V,
        ShapeKind::W,
        ShapeKind::X,
        ShapeKind::Y,
        ShapeKind::Z,
    ];

    /// Stable one-character identifier for display and error messages.
    pub fn label(self) -> char {
        match self {
            ShapeKind::One => '1',
            ShapeKind::Two => '2',
            ShapeKind::Three => '3',
            ShapeKind::C => 'C',
            ShapeKind::Four => '4',
            ShapeKind::Seven => '7',
            ShapeKind::S => 'S',
            ShapeKind::LetterO => 'O',
            ShapeKind::A => 'A',
            ShapeKind::F => 'F',
            ShapeKind::Five => '5',
            ShapeKind::L => 'L',
            ShapeKind::N => 'N',
            ShapeKind::P => 'P',
            ShapeKind::T => 'T',
            ShapeKind::U => 'U',
            ShapeKind::V => 'V',
            ShapeKind::W => 'W',
            ShapeKind::X => 'X',
            ShapeKind::Y => 'Y',
            ShapeKind::Z => 'Z',
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canonical square offsets for every standard shape.
///
/// Offsets are (row, col) pairs normalized so the minimum row and column
/// are zero, listed in row-major order.
const DEFINITIONS: [(ShapeKind, &[Point]); 21] = [
    // monomino
    (ShapeKind::One, &[(0, 0)]),
    // domino
    (ShapeKind::Two, &[(0, 0), (0, 1)]),
    // straight triomino
    (ShapeKind::Three, &[(0, 0), (0, 1), (0, 2)]),
    // corner triomino
    (ShapeKind::C, &[(0, 0), (0, 1), (1, 0)]),
    // straight tetromino
    (ShapeKind::Four, &[(0, 0), (0, 1), (0, 2), (0, 3)]),
    // J tetromino
    (ShapeKind::Seven, &[(0, 0), (0, 1), (1, 1), (2, 1)]),
    // S tetromino
    (ShapeKind::S, &[(0, 1), (0, 2), (1, 0), (1, 1)]),
    // square tetromino
    (ShapeKind::LetterO, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
    // T tetromino
    (ShapeKind::A, &[(0, 1), (1, 0), (1, 1), (1, 2)]),
    // F pentomino
    (ShapeKind::F, &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]),
    // straight pentomino
    (ShapeKind::Five, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    // L pentomino
    (ShapeKind::L, &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
    // N pentomino
    (ShapeKind::N, &[(0, 1), (1, 1), (2, 0), (2, 1), (3, 0)]),
    // P pentomino
    (ShapeKind::P, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
    // T pentomino
    (ShapeKind::T, &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
    // U pentomino
    (ShapeKind::U, &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]),
    // V pentomino
    (ShapeKind::V, &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    // W pentomino
    (ShapeKind::W, &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
    // X pentomino
    (ShapeKind::X, &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]),
    // Y pentomino
    (ShapeKind::Y, &[(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)]),
    // Z pentomino
    (ShapeKind::Z, &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
];

/// One polyomino kind with its canonical square layout.
///
/// Shapes are created once by the catalog and shared read-only by every
/// piece of that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    offsets: Vec<Point>,
}

impl Shape {
    /// Normalizes, sorts and validates a definition.
    fn from_definition(kind: ShapeKind, offsets: &[Point]) -> Result<Self, DefinitionError> {
        if offsets.is_empty() {
            return Err(DefinitionError::Empty(kind));
        }

        let min_row = offsets.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_col = offsets.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let mut offsets: Vec<Point> = offsets
            .iter()
            .map(|&(r, c)| (r - min_row, c - min_col))
            .collect();
        offsets.sort_unstable();

        if let Some(window) = offsets.windows(2).find(|w| w[0] == w[1]) {
            let (r, c) = window[0];
            return Err(DefinitionError::DuplicateSquare(kind, r, c));
        }
        if !is_connected(&offsets) {
            return Err(DefinitionError::Disconnected(kind));
        }

        Ok(Shape { kind, offsets })
    }

    /// The kind this shape defines.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Canonical offsets, normalized to the origin and sorted.
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    /// Number of squares in the shape (1..=5 for the standard catalog).
    pub fn size(&self) -> usize {
        self.offsets.len()
    }

    /// All distinct square layouts reachable by rotation and reflection.
    ///
    /// Between 1 (fully symmetric shapes) and 8 results.
    pub fn orientations(&self) -> Vec<Vec<Point>> {
        all_orientations(&self.offsets)
    }
}

/// Whether the offsets form a single edge-connected region.
fn is_connected(offsets: &[Point]) -> bool {
    let mut visited = vec![false; offsets.len()];
    let mut stack = vec![0];
    visited[0] = true;
    let mut reached = 1;

    while let Some(i) = stack.pop() {
        let (r, c) = offsets[i];
        for neighbor in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
            if let Some(j) = offsets.iter().position(|&p| p == neighbor) {
                if !visited[j] {
                    visited[j] = true;
                    reached += 1;
                    stack.push(j);
                }
            }
        }
    }

    reached == offsets.len()
}

/// The validated, process-lifetime shape catalog.
///
/// Construction is the correctness gate for shape definitions; lookups
/// afterwards are infallible reads. Games hold the catalog behind a shared
/// reference and never mutate it.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Builds the standard 21-shape catalog.
    pub fn standard() -> Result<Self, DefinitionError> {
        Self::from_table(&DEFINITIONS)
    }

    /// Builds a catalog from an explicit definition table.
    ///
    /// Fails if the table is empty, defines a kind twice, or contains an
    /// empty, duplicated or disconnected square layout.
    pub fn from_table(table: &[(ShapeKind, &[Point])]) -> Result<Self, DefinitionError> {
        if table.is_empty() {
            return Err(DefinitionError::EmptyTable);
        }

        let mut shapes: Vec<Shape> = Vec::with_capacity(table.len());
        for &(kind, offsets) in table {
            if shapes.iter().any(|s| s.kind() == kind) {
                return Err(DefinitionError::DuplicateKind(kind));
            }
            shapes.push(Shape::from_definition(kind, offsets)?);
        }

        Ok(ShapeCatalog { shapes })
    }

    /// All shapes, in table order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Looks up a shape by kind.
    pub fn shape(&self, kind: ShapeKind) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.kind() == kind)
    }

    /// All kinds in the catalog, in table order.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.shapes.iter().map(|s| s.kind())
    }

    /// Number of shapes in the catalog.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog holds no shapes. Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_21_shapes() {
        let catalog = ShapeCatalog::standard().unwrap();
        assert_eq!(catalog.len(), 21);

        let mut kinds: Vec<ShapeKind> = catalog.kinds().collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 21);
    }

    #[test]
    fn standard_catalog_covers_89_squares() {
        let catalog = ShapeCatalog::standard().unwrap();
        let total: usize = catalog.shapes().iter().map(Shape::size).sum();
        assert_eq!(total, 89);
    }

    #[test]
    fn shape_sizes_are_within_bounds() {
        let catalog = ShapeCatalog::standard().unwrap();
        for shape in catalog.shapes() {
            assert!((1..=MAX_SQUARES).contains(&shape.size()), "{}", shape.kind());
        }
    }

    #[test]
    fn offsets_are_normalized_and_sorted() {
        let catalog = ShapeCatalog::standard().unwrap();
        for shape in catalog.shapes() {
            let min_row = shape.offsets().iter().map(|&(r, _)| r).min().unwrap();
            let min_col = shape.offsets().iter().map(|&(_, c)| c).min().unwrap();
            assert_eq!((min_row, min_col), (0, 0), "{}", shape.kind());

            let mut sorted = shape.offsets().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, shape.offsets());
        }
    }

    #[test]
    fn empty_definition_is_rejected() {
        let result = ShapeCatalog::from_table(&[(ShapeKind::One, &[])]);
        assert_eq!(result.unwrap_err(), DefinitionError::Empty(ShapeKind::One));
    }

    #[test]
    fn duplicate_square_is_rejected() {
        let result = ShapeCatalog::from_table(&[(ShapeKind::Two, &[(0, 0), (0, 0)])]);
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateSquare(ShapeKind::Two, 0, 0)
        );
    }

    #[test]
    fn disconnected_definition_is_rejected() {
        let result = ShapeCatalog::from_table(&[(ShapeKind::Two, &[(0, 0), (1, 1)])]);
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::Disconnected(ShapeKind::Two)
        );
    }

    #[test]
    fn duplicate_kind_is_rejected() {
        let result = ShapeCatalog::from_table(&[
            (ShapeKind::One, &[(0, 0)]),
            (ShapeKind::One, &[(0, 0)]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateKind(ShapeKind::One)
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            ShapeCatalog::from_table(&[]).unwrap_err(),
            DefinitionError::EmptyTable
        );
    }

    #[test]
    fn definitions_with_negative_offsets_are_normalized() {
        let catalog =
            ShapeCatalog::from_table(&[(ShapeKind::Three, &[(0, -1), (0, 0), (0, 1)])]).unwrap();
        let shape = catalog.shape(ShapeKind::Three).unwrap();
        assert_eq!(shape.offsets(), &[(0, 0), (0, 1), (0, 2)]);
    }
}
