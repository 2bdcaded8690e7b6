//! Naive bot strategies and the simulation game loop.
//!
//! A strategy is a pure selection function over the engine's enumerated
//! legal moves; returning no piece means the bot retires. Bots own no
//! state beyond a reference to the game.

use clap::ValueEnum;
use rand::seq::IteratorRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::game::Game;
use crate::geometry::Piece;
use crate::PlacementError;

/// Move-selection policies for bot players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Always place the fewest-square piece available.
    Smallest,
    /// Always place the most-square piece available.
    Largest,
    /// Place a uniformly random legal piece.
    Random,
}

impl Strategy {
    /// Picks a move from the enumerated legal placements.
    ///
    /// Returns `None` when no move exists, which the game loop treats as a
    /// retirement. `Smallest` and `Largest` break ties deterministically by
    /// anchor and orientation so seeded simulations are reproducible.
    pub fn choose<R: Rng>(self, moves: &FxHashSet<Piece>, rng: &mut R) -> Option<Piece> {
        match self {
            Strategy::Smallest => moves
                .iter()
                .min_by_key(|p| (p.size(), p.anchor(), p.offsets().to_vec()))
                .cloned(),
            Strategy::Largest => moves
                .iter()
                .max_by_key(|p| (p.size(), std::cmp::Reverse((p.anchor(), p.offsets().to_vec()))))
                .cloned(),
            Strategy::Random => moves.iter().choose(rng).cloned(),
        }
    }
}

/// Plays one game to completion and returns the winning player ids.
///
/// Strategies are assigned per player id; when fewer strategies than
/// players are given they cycle.
pub fn play_game<R: Rng>(
    game: &mut Game,
    strategies: &[Strategy],
    rng: &mut R,
) -> Result<Vec<u8>, PlacementError> {
    while !game.game_over() {
        let player = game.curr_player();
        let strategy = strategies[(player as usize - 1) % strategies.len()];
        let moves = game.available_moves();

        match strategy.choose(&moves, rng) {
            Some(piece) => {
                // enumerated moves are legal; a false here would mean the
                // piece went stale, so retire rather than loop forever
                if !game.maybe_place(&piece)? {
                    game.retire();
                }
            }
            None => {
                log::debug!("player {player} has no legal moves and retires");
                game.retire();
            }
        }
    }

    Ok(game.winners().unwrap_or_default())
}
