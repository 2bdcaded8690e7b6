//! Blokus Rules Engine
//!
//! A rules engine for the Blokus tile-placement game: a square board,
//! 1 to 4 players, and 21 polyomino shapes per player placed under the
//! corner-contact rule until nobody can move.
//!
//! The crate provides the shape catalog and geometry ([`shapes`],
//! [`geometry`]), the game state engine ([`game`]), a text debug format
//! for boards ([`grid`]), and naive bot strategies ([`bots`]). Rendering
//! and input are left to callers of the public operations.

pub mod bots;
pub mod game;
pub mod geometry;
pub mod grid;
pub mod shapes;

use thiserror::Error;

pub use game::Game;
pub use geometry::{Piece, Point};
pub use grid::{Cell, Grid};
pub use shapes::{Shape, ShapeCatalog, ShapeKind};

/// A shape definition table failed validation.
///
/// Raised only while building a [`ShapeCatalog`]; catalog lookups after
/// construction cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionError {
    /// The table defines no shapes at all.
    #[error("shape table is empty")]
    EmptyTable,
    /// A shape was defined with no squares.
    #[error("shape {0} has no squares")]
    Empty(ShapeKind),
    /// A shape lists the same square twice.
    #[error("shape {0} repeats square ({1}, {2})")]
    DuplicateSquare(ShapeKind, i32, i32),
    /// A shape's squares do not form one edge-connected region.
    #[error("shape {0} squares are not edge-connected")]
    Disconnected(ShapeKind),
    /// The same kind appears twice in the table.
    #[error("shape {0} is defined more than once")]
    DuplicateKind(ShapeKind),
}

/// Invalid arguments to [`Game::new`]; the game is never constructed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Games take 1 to 4 players.
    #[error("game requires 1-4 players, got {0}")]
    PlayerCount(u8),
    /// Boards are at least 5x5.
    #[error("minimum board size is 5, got {0}")]
    BoardSize(usize),
    /// Every player needs a start position.
    #[error("need at least {required} start positions, got {provided}")]
    StartPositions { required: usize, provided: usize },
    /// A start position lies outside the board.
    #[error("start position ({0}, {1}) is outside the board")]
    StartOutOfBounds(i32, i32),
}

/// A piece was queried for absolute coordinates before its anchor was set.
///
/// This is a caller bug, never recovered internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("piece has no anchor set")]
pub struct UnanchoredError;

/// A placement query's preconditions were violated.
///
/// Legality failures are not errors: `any_collisions`, `legal_to_place`
/// and `maybe_place` report an illegal placement as `Ok(false)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The piece has no anchor.
    #[error(transparent)]
    Unanchored(#[from] UnanchoredError),
    /// The piece's shape kind is not in the acting player's remaining set.
    #[error("player {player} no longer holds shape {kind}")]
    ShapeNotHeld { player: u8, kind: ShapeKind },
}
