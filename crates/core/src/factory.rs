//! Piece factory - uniform random piece selection
//!
//! Every spawn picks one of the seven catalog kinds with equal probability,
//! independently of previous picks. There is no bag and no history.
//!
//! Seeded construction gives a reproducible sequence for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: StdRng,
    seed: u64,
}

impl PieceFactory {
    /// Create a factory with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a factory seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this factory was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick the next kind uniformly from the catalog.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Produce a new piece at its spawn position.
    pub fn spawn(&mut self) -> Piece {
        Piece::new(self.next_kind())
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::from_entropy()
    }
}
