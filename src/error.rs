use thiserror::Error;

/// Misuse of the random source by generation code.
///
/// Every variant is a caller bug. The plain draw and mode methods panic with
/// the message below; the `try_*` methods hand the value back instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("level {level} is not the root level and needs a salt")]
    MissingSalt { level: i32 },
    #[error("probability denominator must be positive, got {denominator}")]
    InvalidProbability { denominator: i32 },
    #[error("range [{min}, {max}) is empty")]
    EmptyRange { min: i32, max: i32 },
    #[error("cannot choose from an empty set of values")]
    EmptyChoice,
    #[error("cannot choose from {len} values, at most {} are supported", i32::MAX)]
    TooManyChoices { len: usize },
    #[error("a biased choice needs at least one alternative to the first value")]
    BiasWithoutAlternatives,
    #[error("leave_authoritative called outside of authoritative mode")]
    UnmatchedLeave,
    #[error("time of day {time_of_day} is before the start of the day (600)")]
    InvalidTimeOfDay { time_of_day: i32 },
}
