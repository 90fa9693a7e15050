use crate::error::RandomError;

/// Denominator of a percentage.
pub const PERCENT: i32 = 100;

/// Denominator of a per-mille chance.
pub const PERMILLE: i32 = 1000;

/// A "numerator out of denominator" chance.
///
/// A numerator at or above the denominator always succeeds, zero or below
/// never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Probability {
    numerator: i32,
    denominator: i32,
}

/// Even odds.
pub const FIFTY_FIFTY: Probability = Probability::percent(50);

impl Probability {
    /// Chance of `numerator` out of `denominator`.
    ///
    /// # Panics
    /// Panics if `denominator` is not positive.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        assert!(denominator > 0, "probability denominator must be positive");
        Self {
            numerator,
            denominator,
        }
    }

    pub fn try_new(numerator: i32, denominator: i32) -> Result<Self, RandomError> {
        if denominator <= 0 {
            return Err(RandomError::InvalidProbability { denominator });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub const fn percent(numerator: i32) -> Self {
        Self::new(numerator, PERCENT)
    }

    pub const fn permille(numerator: i32) -> Self {
        Self::new(numerator, PERMILLE)
    }

    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    pub const fn denominator(&self) -> i32 {
        self.denominator
    }
}
