//! Random scrambles.

use log::debug;
use rand::Rng;

use crate::cube::Cube;
use crate::geometry::{Direction, Side};

/// Default number of random turns in a scramble.
pub const SHUFFLE_MOVES: usize = 25;

/// Applies random quarter turns to a cube.
///
/// The RNG is injected so scrambles are reproducible from a seed.
pub struct Shuffler<R: Rng> {
    rng: R,
    moves: usize,
}

impl<R: Rng> Shuffler<R> {
    pub fn new(rng: R) -> Self {
        Self::with_moves(rng, SHUFFLE_MOVES)
    }

    pub fn with_moves(rng: R, moves: usize) -> Self {
        Self { rng, moves }
    }

    /// Turns random sides, playing each turn immediately so the cube is left
    /// scrambled with nothing pending.
    pub fn shuffle(&mut self, cube: &mut Cube) {
        cube.play_all_moves();
        for _ in 0..self.moves {
            let side = Side::ALL[self.rng.gen_range(0..Side::ALL.len())];
            let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
            cube.turn(side, direction);
            cube.play_all_moves();
        }
        debug!("shuffled cube with {} random turns", self.moves);
    }
}
