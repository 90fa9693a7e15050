//! Chance tests and bounded draws on top of the active stream.
//!
//! Every draw goes through `current_generator`, so the same calls behave the
//! same way in both modes. Indices are drawn as `i32` so the consumed stream
//! does not depend on the platform's pointer width.

use rand::Rng;

use super::RandomSource;
use crate::error::RandomError;
use crate::probability::Probability;

impl RandomSource {
    pub fn chance(&mut self, probability: Probability) -> bool {
        let roll = self
            .current_generator()
            .gen_range(0..probability.denominator());
        roll < probability.numerator()
    }

    /// Uniform value in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        self.try_range(min, max)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_range(&mut self, min: i32, max: i32) -> Result<i32, RandomError> {
        if min >= max {
            return Err(RandomError::EmptyRange { min, max });
        }
        Ok(self.current_generator().gen_range(min..max))
    }

    /// Picks one of `values`.
    ///
    /// With a bias, the first value wins whenever `chance(bias)` does and the
    /// rest share the remaining odds. Without one all values are equally likely.
    ///
    /// # Panics
    /// Panics if `values` is empty, or holds a single value and a bias is given.
    pub fn choose(&mut self, values: &[i32], first_value_bias: Option<Probability>) -> i32 {
        self.try_choose(values, first_value_bias)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_choose(
        &mut self,
        values: &[i32],
        first_value_bias: Option<Probability>,
    ) -> Result<i32, RandomError> {
        if values.is_empty() {
            return Err(RandomError::EmptyChoice);
        }
        let len = choice_len(values.len())?;

        let first = match first_value_bias {
            Some(bias) => {
                if len < 2 {
                    return Err(RandomError::BiasWithoutAlternatives);
                }
                if self.chance(bias) {
                    return Ok(values[0]);
                }
                1
            }
            None => 0,
        };
        let index = self.try_range(first, len)?;
        Ok(values[index as usize])
    }
}

fn choice_len(len: usize) -> Result<i32, RandomError> {
    i32::try_from(len).map_err(|_| RandomError::TooManyChoices { len })
}
