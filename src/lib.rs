pub mod clock;
pub mod config;
pub mod error;
pub mod mix;
pub mod probability;
pub mod rng;
pub mod seed;
pub mod session;

pub use clock::GameClock;
pub use config::{SessionConfig, SessionLoader};
pub use error::RandomError;
pub use probability::{Probability, FIFTY_FIFTY};
pub use rng::{shared_rng, ActiveRng, AuthoritativeScope, RandomSource, SharedRng};
pub use seed::{derive_seed, EnterDirection, SeedInputs};
pub use session::Session;
