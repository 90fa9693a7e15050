//! In-game clock to elapsed-hour bucket conversion.

use serde::{Deserialize, Serialize};

use crate::error::RandomError;

/// First minute of the game day in the HHMM encoding.
pub const DAY_START: i32 = 600;

/// Hour buckets per game day.
pub const HOURS_PER_DAY: i32 = 20;

fn default_time_of_day() -> i32 {
    DAY_START
}

/// Snapshot of the host's clock, as seen by every participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    /// HHMM, e.g. `1350` for 1:50 pm.
    #[serde(default = "default_time_of_day")]
    pub time_of_day: i32,
    #[serde(default)]
    pub days_since_start: i32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            time_of_day: DAY_START,
            days_since_start: 0,
        }
    }
}

impl GameClock {
    pub fn new(time_of_day: i32, days_since_start: i32) -> Self {
        Self {
            time_of_day,
            days_since_start,
        }
    }

    /// 1-based hour of the current day; 6:00 to 6:59 is hour 1.
    pub fn hour_of_day(&self) -> Result<i32, RandomError> {
        if self.time_of_day < DAY_START {
            return Err(RandomError::InvalidTimeOfDay {
                time_of_day: self.time_of_day,
            });
        }
        Ok(1 + (self.time_of_day - DAY_START) / 100)
    }

    /// Hours elapsed since the start of the game, the time input of a seed.
    pub fn elapsed_hours(&self) -> Result<i32, RandomError> {
        let hour = self.hour_of_day()?;
        Ok(hour.wrapping_add(self.days_since_start.wrapping_mul(HOURS_PER_DAY)))
    }
}
