//! The game state engine: grid ownership, legality rules, turn
//! progression, scoring and exhaustive move enumeration.
//!
//! All placement queries operate against the current player. Precondition
//! violations (no anchor, shape no longer held) surface as errors; an
//! illegal placement is a normal `false` result.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::geometry::{self, Piece, Point};
use crate::grid::Grid;
use crate::shapes::{ShapeCatalog, ShapeKind};
use crate::{ConfigError, PlacementError};

/// A running game: the board, per-player inventories, the turn cursor and
/// the retirement set.
#[derive(Debug, Clone)]
pub struct Game {
    num_players: u8,
    size: usize,
    start_positions: FxHashSet<Point>,
    catalog: Arc<ShapeCatalog>,
    curr_player: u8,
    played: Vec<Vec<ShapeKind>>,
    retired: FxHashSet<u8>,
    grid: Grid,
}

impl Game {
    /// Starts a new game.
    ///
    /// Fails when the player count is outside 1..=4, the board is smaller
    /// than 5x5, there are fewer start positions than players, or a start
    /// position lies outside the board.
    pub fn new(
        num_players: u8,
        size: usize,
        start_positions: FxHashSet<Point>,
        catalog: Arc<ShapeCatalog>,
    ) -> Result<Self, ConfigError> {
        if !(1..=4).contains(&num_players) {
            return Err(ConfigError::PlayerCount(num_players));
        }
        if size < 5 {
            return Err(ConfigError::BoardSize(size));
        }
        if start_positions.len() < num_players as usize {
            return Err(ConfigError::StartPositions {
                required: num_players as usize,
                provided: start_positions.len(),
            });
        }
        let bound = size as i32;
        for &(row, col) in &start_positions {
            if !(0..bound).contains(&row) || !(0..bound).contains(&col) {
                return Err(ConfigError::StartOutOfBounds(row, col));
            }
        }

        Ok(Game {
            num_players,
            size,
            start_positions,
            catalog,
            curr_player: 1,
            played: vec![Vec::new(); num_players as usize],
            retired: FxHashSet::default(),
            grid: Grid::new(size),
        })
    }

    /// The board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of players in the game.
    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// The cells a first placement must touch.
    pub fn start_positions(&self) -> &FxHashSet<Point> {
        &self.start_positions
    }

    /// The shape catalog this game draws from.
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// The player whose turn it is (1-indexed).
    pub fn curr_player(&self) -> u8 {
        self.curr_player
    }

    /// Players who have voluntarily forfeited all further turns.
    pub fn retired_players(&self) -> &FxHashSet<u8> {
        &self.retired
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shape kinds played by a player so far, in play order.
    pub fn shapes_played(&self, player: u8) -> &[ShapeKind] {
        &self.played[(player - 1) as usize]
    }

    /// Catalog kinds the player has not yet played, in catalog order.
    pub fn remaining_shapes(&self, player: u8) -> Vec<ShapeKind> {
        let played = &self.played[(player - 1) as usize];
        self.catalog
            .kinds()
            .filter(|kind| !played.contains(kind))
            .collect()
    }

    /// Whether any of the piece's squares lie outside the board.
    pub fn any_wall_collisions(&self, piece: &Piece) -> Result<bool, PlacementError> {
        let squares = self.eligible_squares(piece)?;
        Ok(squares.iter().any(|&p| !self.grid.in_bounds(p)))
    }

    /// Whether any square lies outside the board or on an occupied cell.
    pub fn any_collisions(&self, piece: &Piece) -> Result<bool, PlacementError> {
        let squares = self.eligible_squares(piece)?;
        Ok(self.collides(&squares))
    }

    /// Whether the current player may legally place the piece.
    ///
    /// A first placement must touch one of the game's start positions.
    /// Every later placement must avoid edge contact with the player's own
    /// pieces and touch at least one of them corner-to-corner.
    pub fn legal_to_place(&self, piece: &Piece) -> Result<bool, PlacementError> {
        let squares = self.eligible_squares(piece)?;
        Ok(self.placement_is_legal(&squares))
    }

    /// Places the piece if legal, then advances the turn.
    ///
    /// When the current player is already retired this is a silent no-op
    /// that still advances the turn and reports success, so simulation
    /// loops need no special casing. An illegal placement returns
    /// `Ok(false)` and leaves the state unchanged.
    pub fn maybe_place(&mut self, piece: &Piece) -> Result<bool, PlacementError> {
        if self.retired.contains(&self.curr_player) {
            self.progress_turn();
            return Ok(true);
        }

        let squares = self.eligible_squares(piece)?;
        if !self.placement_is_legal(&squares) {
            return Ok(false);
        }

        for &point in &squares {
            self.grid.set(point, (self.curr_player, piece.kind()));
        }
        self.played[(self.curr_player - 1) as usize].push(piece.kind());
        log::debug!(
            "player {} placed {} at {:?}",
            self.curr_player,
            piece.kind(),
            piece.anchor()
        );

        self.progress_turn();
        Ok(true)
    }

    /// Retires the current player and advances the turn. Irrevocable.
    pub fn retire(&mut self) {
        log::debug!("player {} retires", self.curr_player);
        self.retired.insert(self.curr_player);
        self.progress_turn();
    }

    /// Advances the turn cursor cyclically, skipping players who are
    /// retired or out of shapes, until a playable player is found or the
    /// game is over.
    pub fn progress_turn(&mut self) {
        self.curr_player = self.curr_player % self.num_players + 1;
        for _ in 0..self.num_players {
            if self.game_over() || self.is_playable(self.curr_player) {
                break;
            }
            self.curr_player = self.curr_player % self.num_players + 1;
        }
    }

    /// Whether every player is retired or out of shapes.
    pub fn game_over(&self) -> bool {
        (1..=self.num_players).all(|player| !self.is_playable(player))
    }

    /// A player's score.
    ///
    /// Players with unplayed shapes score the negative sum of those
    /// shapes' square counts. Players who placed everything score +20 when
    /// their final shape was the single-square one, +15 otherwise.
    pub fn get_score(&self, player: u8) -> i32 {
        let remaining = self.remaining_shapes(player);
        if !remaining.is_empty() {
            return -self
                .catalog
                .shapes()
                .iter()
                .filter(|shape| remaining.contains(&shape.kind()))
                .map(|shape| shape.size() as i32)
                .sum::<i32>();
        }

        let last = self.played[(player - 1) as usize]
            .last()
            .and_then(|&kind| self.catalog.shape(kind));
        match last {
            Some(shape) if shape.size() == 1 => 20,
            _ => 15,
        }
    }

    /// All players with the maximum score, ascending. `None` until the
    /// game is over.
    pub fn winners(&self) -> Option<Vec<u8>> {
        if !self.game_over() {
            return None;
        }
        let scores: Vec<i32> = (1..=self.num_players)
            .map(|player| self.get_score(player))
            .collect();
        let best = *scores.iter().max()?;
        Some(
            (1..=self.num_players)
                .filter(|&player| scores[(player - 1) as usize] == best)
                .collect(),
        )
    }

    /// Every legal placement for the current player.
    ///
    /// Exhaustive scan over (remaining kind, orientation, anchor) triples;
    /// nothing is memoized across calls because the board may have changed
    /// in between. This is the dominant cost center of the engine.
    pub fn available_moves(&self) -> FxHashSet<Piece> {
        let mut moves = FxHashSet::default();
        let remaining = self.remaining_shapes(self.curr_player);
        let bound = self.size as i32;

        for shape in self.catalog.shapes() {
            if !remaining.contains(&shape.kind()) {
                continue;
            }
            for orientation in shape.orientations() {
                for row in 0..bound {
                    for col in 0..bound {
                        let squares: Vec<Point> = orientation
                            .iter()
                            .map(|&(dr, dc)| (row + dr, col + dc))
                            .collect();
                        if self.placement_is_legal(&squares) {
                            moves.insert(Piece::from_orientation(
                                shape.kind(),
                                orientation.clone(),
                                (row, col),
                            ));
                        }
                    }
                }
            }
        }

        moves
    }

    /// Anchor and held-shape preconditions shared by every placement query.
    fn eligible_squares(&self, piece: &Piece) -> Result<Vec<Point>, PlacementError> {
        let squares = piece.squares()?;
        if !self.remaining_shapes(self.curr_player).contains(&piece.kind()) {
            return Err(PlacementError::ShapeNotHeld {
                player: self.curr_player,
                kind: piece.kind(),
            });
        }
        Ok(squares)
    }

    fn is_playable(&self, player: u8) -> bool {
        !self.retired.contains(&player) && !self.remaining_shapes(player).is_empty()
    }

    fn collides(&self, squares: &[Point]) -> bool {
        squares
            .iter()
            .any(|&p| !self.grid.in_bounds(p) || self.grid.cell(p).is_some())
    }

    /// The adjacency legality rule over absolute squares.
    ///
    /// Neighbor coordinates that fall off the board are clamped to the
    /// nearest edge cell before lookup rather than skipped; border-adjacent
    /// legality depends on this.
    fn placement_is_legal(&self, squares: &[Point]) -> bool {
        if self.collides(squares) {
            return false;
        }

        if self.played[(self.curr_player - 1) as usize].is_empty() {
            return squares.iter().any(|p| self.start_positions.contains(p));
        }

        let edges = geometry::cardinal_neighbors_of(squares);
        for &point in &edges {
            if let Some((owner, _)) = self.grid.cell_clamped(point) {
                if owner == self.curr_player {
                    return false;
                }
            }
        }

        let corners = geometry::intercardinal_neighbors_of(squares);
        corners.iter().any(|&point| {
            matches!(self.grid.cell_clamped(point), Some((owner, _)) if owner == self.curr_player)
        })
    }
}
