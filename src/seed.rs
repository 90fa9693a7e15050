//! Seed derivation for a single level visit.
//!
//! Every participant derives the seed locally from shared, low-entropy inputs.
//! Nothing here talks to the network; agreement comes from identical inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RandomError;
use crate::mix::{fold_session_id, mix, mix_signed};

/// Level number of the root of the woods.
pub const ROOT_LEVEL: i32 = 1;

/// Keeps the root seed apart from the plain session hash.
pub const MAGIC_SALT: u32 = 854_574_563;

/// Side from which a level was entered.
///
/// The discriminants feed the seed and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnterDirection {
    Root = 0,
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

impl EnterDirection {
    pub const ALL: [EnterDirection; 5] = [
        EnterDirection::Root,
        EnterDirection::North,
        EnterDirection::East,
        EnterDirection::South,
        EnterDirection::West,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            EnterDirection::Root => "root",
            EnterDirection::North => "north",
            EnterDirection::East => "east",
            EnterDirection::South => "south",
            EnterDirection::West => "west",
        }
    }
}

impl fmt::Display for EnterDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnterDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnterDirection::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown enter direction '{s}'"))
    }
}

/// Everything that goes into one level seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedInputs {
    pub level: i32,
    pub enter_dir: EnterDirection,
    pub salt: Option<i32>,
    pub session_id: u64,
    pub elapsed_time: i32,
}

impl SeedInputs {
    pub fn derive(&self) -> Result<u32, RandomError> {
        derive_seed(
            self.level,
            self.enter_dir,
            self.salt,
            self.session_id,
            self.elapsed_time,
        )
    }
}

/// Derives the seed for a level visit.
///
/// The root level only depends on the session, so it stays the same for the
/// whole game. Deeper levels also depend on the level number, the entry side,
/// the elapsed hour and the caller's salt, which makes them identical for all
/// players entering during the same hour and different otherwise.
///
/// A missing salt is only accepted for the root level.
pub fn derive_seed(
    level: i32,
    enter_dir: EnterDirection,
    salt: Option<i32>,
    session_id: u64,
    elapsed_time: i32,
) -> Result<u32, RandomError> {
    let session_hash = mix(fold_session_id(session_id));
    if level == ROOT_LEVEL {
        return Ok(session_hash ^ MAGIC_SALT);
    }

    let salt = salt.ok_or(RandomError::MissingSalt { level })?;
    Ok(session_hash
        ^ mix_signed(level)
        ^ mix_signed(enter_dir.code())
        ^ mix_signed(elapsed_time)
        ^ salt as u32)
}
