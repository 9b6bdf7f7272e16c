//! Validated rod-cutting instance.

use crate::error::{Result, RodCutError};

/// A rod length paired with the price table it is solved against.
///
/// `prices[i - 1]` is the sale price of a piece of length `i`. The table
/// may be longer than the rod; entries past `length` are ignored.
///
/// Construction checks that every piece length has a price, so solver
/// code can index the table without further checks. Profit overflow is
/// detected while solving, since only the optimum decides whether it fits.
///
/// # Examples
///
/// ```
/// use u_rodcut::RodCutProblem;
///
/// let problem = RodCutProblem::new(3, &[1, 3, 8, 9]).unwrap();
/// assert_eq!(problem.length(), 3);
/// assert_eq!(problem.prices(), &[1, 3, 8]);
/// assert_eq!(problem.price(3), 8);
///
/// assert!(RodCutProblem::new(5, &[1, 3]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RodCutProblem<'a> {
    length: usize,
    prices: &'a [u64],
}

impl<'a> RodCutProblem<'a> {
    /// Validates `prices` against `length`.
    ///
    /// # Errors
    ///
    /// [`RodCutError::InsufficientPrices`] if `prices.len() < length`.
    pub fn new(length: usize, prices: &'a [u64]) -> Result<Self> {
        if prices.len() < length {
            return Err(RodCutError::InsufficientPrices {
                length,
                available: prices.len(),
            });
        }

        Ok(Self {
            length,
            prices: &prices[..length],
        })
    }

    /// Rod length being solved.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Prices for piece lengths `1..=length`.
    pub fn prices(&self) -> &'a [u64] {
        self.prices
    }

    /// Price of a piece of the given length.
    ///
    /// # Panics
    ///
    /// Panics if `piece` is 0 or greater than [`length`](Self::length).
    #[inline]
    pub fn price(&self, piece: usize) -> u64 {
        self.prices[piece - 1]
    }
}
