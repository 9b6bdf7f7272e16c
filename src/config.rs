//! Solver configuration.

use crate::error::{Result, RodCutError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which evaluation order the runner uses.
///
/// Both strategies implement the same recurrence with the same
/// tie-break, so they always agree on profit and in practice on cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Top-down descent with a cache. Only reachable subproblems are touched.
    Memoized,

    /// Bottom-up fill over every length `1..=L`.
    #[default]
    Tabulated,
}

impl Strategy {
    /// Short lowercase name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
        }
    }
}

/// Configuration for [`RodCutRunner`](crate::RodCutRunner).
///
/// # Examples
///
/// ```
/// use u_rodcut::{SolverConfig, Strategy};
///
/// let config = SolverConfig::default()
///     .with_strategy(Strategy::Memoized)
///     .with_max_length(10_000);
/// assert_eq!(config.strategy, Strategy::Memoized);
/// assert!(config.check_length(10_000).is_ok());
/// assert!(config.check_length(10_001).is_err());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Evaluation strategy.
    pub strategy: Strategy,

    /// Largest rod length accepted. 0 = no limit.
    ///
    /// Work grows as `L^2`, so callers solving untrusted input should set this.
    pub max_length: usize,
}

impl SolverConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_length(mut self, n: usize) -> Self {
        self.max_length = n;
        self
    }

    /// Rejects lengths above [`max_length`](Self::max_length).
    pub fn check_length(&self, length: usize) -> Result<()> {
        if self.max_length > 0 && length > self.max_length {
            return Err(RodCutError::LengthLimitExceeded {
                length,
                limit: self.max_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.strategy, Strategy::Tabulated);
        assert_eq!(config.max_length, 0);
    }

    #[test]
    fn test_no_limit_accepts_anything() {
        assert!(SolverConfig::default().check_length(usize::MAX).is_ok());
    }

    #[test]
    fn test_limit_exceeded() {
        let config = SolverConfig::default().with_max_length(5);
        assert!(config.check_length(5).is_ok());
        assert_eq!(
            config.check_length(6),
            Err(RodCutError::LengthLimitExceeded {
                length: 6,
                limit: 5
            })
        );
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::Memoized.name(), "memoized");
        assert_eq!(Strategy::Tabulated.name(), "tabulated");
    }
}
