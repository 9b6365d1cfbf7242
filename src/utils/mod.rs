/*!
# Utilities

Provides small helpers shared across the crate:
- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the internal representation for [`WeightedCsrGraph`](crate::repr::WeightedCsrGraph),
- [`Probability`]: validity checks for generator parameters.

You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

pub mod sliced_buffer;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
