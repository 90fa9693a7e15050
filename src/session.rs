//! Host-side context shared by every level generated during a session.

use crate::clock::GameClock;
use crate::error::RandomError;
use crate::rng::{RandomSource, SharedRng};
use crate::seed::{EnterDirection, SeedInputs};

/// Inputs the game framework supplies: session identity, the current clock and
/// the generator used for authoritative draws.
pub struct Session {
    session_id: u64,
    clock: GameClock,
    authoritative: SharedRng,
}

impl Session {
    pub fn new(session_id: u64, clock: GameClock, authoritative: SharedRng) -> Self {
        Self {
            session_id,
            clock,
            authoritative,
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }

    /// Moves the session clock; already created sources keep their seed.
    pub fn set_clock(&mut self, clock: GameClock) {
        self.clock = clock;
    }

    pub fn authoritative_rng(&self) -> SharedRng {
        self.authoritative.clone()
    }

    pub fn seed_inputs(
        &self,
        level: i32,
        enter_dir: EnterDirection,
        salt: Option<i32>,
    ) -> Result<SeedInputs, RandomError> {
        Ok(SeedInputs {
            level,
            enter_dir,
            salt,
            session_id: self.session_id,
            elapsed_time: self.clock.elapsed_hours()?,
        })
    }

    /// Fresh source for one level visit.
    pub fn random_source(
        &self,
        level: i32,
        enter_dir: EnterDirection,
        salt: Option<i32>,
    ) -> Result<RandomSource, RandomError> {
        let inputs = self.seed_inputs(level, enter_dir, salt)?;
        RandomSource::from_inputs(&inputs, self.authoritative_rng())
    }
}
