//! Dual-stream random source for one level generation pass.
//!
//! Shared generation (layout, topology) runs on a stream seeded from the level
//! seed, so every client produces the same result. Server-only generation runs
//! in authoritative mode and draws from the host's generator instead, which
//! keeps the shared stream's position untouched.

mod choice;

use std::cell::{RefCell, RefMut};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::RandomError;
use crate::seed::{EnterDirection, SeedInputs};

/// Host-owned generator used while in authoritative mode.
pub type SharedRng = Rc<RefCell<dyn RngCore>>;

/// Wraps a generator so it can be handed to any number of random sources.
pub fn shared_rng<R: RngCore + 'static>(rng: R) -> SharedRng {
    Rc::new(RefCell::new(rng))
}

pub struct RandomSource {
    seed: u32,
    generator: ChaCha8Rng,
    authoritative: SharedRng,
    authoritative_depth: u32,
}

impl RandomSource {
    pub fn new(
        level: i32,
        enter_dir: EnterDirection,
        salt: Option<i32>,
        session_id: u64,
        elapsed_time: i32,
        authoritative: SharedRng,
    ) -> Result<Self, RandomError> {
        let inputs = SeedInputs {
            level,
            enter_dir,
            salt,
            session_id,
            elapsed_time,
        };
        Self::from_inputs(&inputs, authoritative)
    }

    pub fn from_inputs(inputs: &SeedInputs, authoritative: SharedRng) -> Result<Self, RandomError> {
        let seed = inputs.derive()?;
        debug!(
            level = inputs.level,
            enter_dir = %inputs.enter_dir,
            salt = ?inputs.salt,
            elapsed_time = inputs.elapsed_time,
            seed,
            "derived level seed"
        );
        Ok(Self::from_seed(seed, authoritative))
    }

    /// Builds a source straight from a known seed, e.g. one logged by another client.
    pub fn from_seed(seed: u32, authoritative: SharedRng) -> Self {
        Self {
            seed,
            generator: ChaCha8Rng::seed_from_u64(u64::from(seed)),
            authoritative,
            authoritative_depth: 0,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn authoritative_depth(&self) -> u32 {
        self.authoritative_depth
    }

    pub fn is_authoritative(&self) -> bool {
        self.authoritative_depth > 0
    }

    /// Routes all following draws to the host's generator. Nests.
    pub fn enter_authoritative(&mut self) {
        self.authoritative_depth += 1;
        trace!(depth = self.authoritative_depth, "entered authoritative mode");
    }

    /// Undoes one `enter_authoritative`.
    ///
    /// # Panics
    /// Panics when not in authoritative mode.
    pub fn leave_authoritative(&mut self) {
        self.try_leave_authoritative()
            .unwrap_or_else(|err| panic!("{err}"));
    }

    pub fn try_leave_authoritative(&mut self) -> Result<(), RandomError> {
        self.authoritative_depth = self
            .authoritative_depth
            .checked_sub(1)
            .ok_or(RandomError::UnmatchedLeave)?;
        trace!(depth = self.authoritative_depth, "left authoritative mode");
        Ok(())
    }

    /// Enters authoritative mode until the returned scope is dropped.
    pub fn authoritative(&mut self) -> AuthoritativeScope<'_> {
        self.enter_authoritative();
        AuthoritativeScope { source: self }
    }

    /// The stream backing the next draw. Selecting it does not draw.
    pub fn current_generator(&mut self) -> ActiveRng<'_> {
        if self.is_authoritative() {
            ActiveRng::Authoritative(self.authoritative.borrow_mut())
        } else {
            ActiveRng::Shared(&mut self.generator)
        }
    }
}

/// Keeps a [`RandomSource`] in authoritative mode while alive.
pub struct AuthoritativeScope<'a> {
    source: &'a mut RandomSource,
}

impl Deref for AuthoritativeScope<'_> {
    type Target = RandomSource;

    fn deref(&self) -> &Self::Target {
        self.source
    }
}

impl DerefMut for AuthoritativeScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.source
    }
}

impl Drop for AuthoritativeScope<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.source.try_leave_authoritative() {
            if !std::thread::panicking() {
                panic!("{err}");
            }
        }
    }
}

pub enum ActiveRng<'a> {
    Shared(&'a mut ChaCha8Rng),
    Authoritative(RefMut<'a, dyn RngCore + 'static>),
}

impl RngCore for ActiveRng<'_> {
    fn next_u32(&mut self) -> u32 {
        match self {
            ActiveRng::Shared(rng) => rng.next_u32(),
            ActiveRng::Authoritative(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            ActiveRng::Shared(rng) => rng.next_u64(),
            ActiveRng::Authoritative(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            ActiveRng::Shared(rng) => rng.fill_bytes(dest),
            ActiveRng::Authoritative(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            ActiveRng::Shared(rng) => rng.try_fill_bytes(dest),
            ActiveRng::Authoritative(rng) => rng.try_fill_bytes(dest),
        }
    }
}
