//! Configured entry point over both strategies.

use crate::config::{SolverConfig, Strategy};
use crate::error::Result;
use crate::plan::CutPlan;
use crate::problem::RodCutProblem;
use crate::solver::{MemoSolver, TableSolver};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a configured solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RodCutResult {
    /// The optimal plan.
    pub plan: CutPlan,

    /// Strategy that produced the plan.
    pub strategy: Strategy,

    /// Subproblem lengths finalized.
    pub subproblems_solved: usize,

    /// `(piece, remainder)` candidates scored.
    pub candidates_evaluated: usize,
}

/// Runs a rod-cutting solve according to a [`SolverConfig`].
pub struct RodCutRunner;

impl RodCutRunner {
    /// Validates the input and solves it with the configured strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rodcut::{RodCutRunner, SolverConfig, Strategy};
    ///
    /// let config = SolverConfig::default().with_strategy(Strategy::Memoized);
    /// let result = RodCutRunner::run(5, &[2, 5, 7, 8, 10], &config).unwrap();
    /// assert_eq!(result.plan.max_profit, 12);
    /// assert_eq!(result.plan.cuts.iter().sum::<usize>(), 5);
    /// ```
    pub fn run(length: usize, prices: &[u64], config: &SolverConfig) -> Result<RodCutResult> {
        let problem = Self::validate(length, prices, config)?;
        Self::run_problem(&problem, config.strategy)
    }

    /// Solves an already validated problem.
    ///
    /// # Errors
    ///
    /// [`RodCutError::ProfitOverflow`](crate::RodCutError::ProfitOverflow)
    /// if the optimal profit exceeds `u64::MAX`.
    pub fn run_problem(problem: &RodCutProblem<'_>, strategy: Strategy) -> Result<RodCutResult> {
        let eval = match strategy {
            Strategy::Memoized => MemoSolver::solve(problem),
            Strategy::Tabulated => TableSolver::solve(problem),
        }
        .inspect_err(|e| log::warn!("{} solve failed: {e}", strategy.name()))?;
        let plan = eval.to_plan();

        log::debug!(
            "{} solve: length={} profit={} pieces={}",
            strategy.name(),
            problem.length(),
            plan.max_profit,
            plan.piece_count()
        );

        Ok(RodCutResult {
            plan,
            strategy,
            subproblems_solved: eval.subproblems_solved(),
            candidates_evaluated: eval.candidates_evaluated(),
        })
    }

    /// Solves with both strategies and returns `(memoized, tabulated)`.
    ///
    /// The two profits are always equal; a mismatch is logged as an error.
    pub fn compare(
        length: usize,
        prices: &[u64],
        config: &SolverConfig,
    ) -> Result<(RodCutResult, RodCutResult)> {
        let problem = Self::validate(length, prices, config)?;
        let memo = Self::run_problem(&problem, Strategy::Memoized)?;
        let table = Self::run_problem(&problem, Strategy::Tabulated)?;

        if memo.plan.max_profit != table.plan.max_profit {
            log::error!(
                "strategies disagree for length {}: memoized={} tabulated={}",
                length,
                memo.plan.max_profit,
                table.plan.max_profit
            );
        } else if memo.plan.cuts != table.plan.cuts {
            log::debug!(
                "equal profit, different cuts: memoized={:?} tabulated={:?}",
                memo.plan.cuts,
                table.plan.cuts
            );
        }

        Ok((memo, table))
    }

    fn validate<'a>(
        length: usize,
        prices: &'a [u64],
        config: &SolverConfig,
    ) -> Result<RodCutProblem<'a>> {
        config
            .check_length(length)
            .and_then(|()| RodCutProblem::new(length, prices))
            .inspect_err(|e| log::warn!("rejected rod-cutting input: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RodCutError;

    #[test]
    fn test_run_default_strategy() {
        let result = RodCutRunner::run(3, &[1, 3, 8], &SolverConfig::default()).unwrap();
        assert_eq!(result.strategy, Strategy::Tabulated);
        assert_eq!(result.plan.max_profit, 8);
        assert_eq!(result.plan.cuts, vec![3]);
        assert_eq!(result.subproblems_solved, 3);
        assert_eq!(result.candidates_evaluated, 6);
    }

    #[test]
    fn test_run_memoized() {
        let config = SolverConfig::default().with_strategy(Strategy::Memoized);
        let result = RodCutRunner::run(4, &[3, 5, 6, 7], &config).unwrap();
        assert_eq!(result.strategy, Strategy::Memoized);
        assert_eq!(result.plan.max_profit, 12);
        assert_eq!(result.plan.number_of_cuts, 3);
    }

    #[test]
    fn test_run_rejects_long_rod() {
        let config = SolverConfig::default().with_max_length(3);
        let err = RodCutRunner::run(4, &[1, 2, 3, 4], &config).unwrap_err();
        assert_eq!(
            err,
            RodCutError::LengthLimitExceeded {
                length: 4,
                limit: 3
            }
        );
    }

    #[test]
    fn test_run_rejects_short_price_table() {
        let err = RodCutRunner::run(3, &[1, 2], &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, RodCutError::InsufficientPrices { .. }));
    }

    #[test]
    fn test_run_reports_overflow() {
        let half = u64::MAX / 2 + 1;
        for strategy in [Strategy::Memoized, Strategy::Tabulated] {
            let config = SolverConfig::default().with_strategy(strategy);
            let err = RodCutRunner::run(2, &[half, 0], &config).unwrap_err();
            assert_eq!(err, RodCutError::ProfitOverflow { length: 2 });
        }
    }

    #[test]
    fn test_compare_agrees() {
        let (memo, table) =
            RodCutRunner::compare(5, &[2, 5, 7, 8, 10], &SolverConfig::default()).unwrap();
        assert_eq!(memo.plan, table.plan);
        assert_eq!(memo.strategy, Strategy::Memoized);
        assert_eq!(table.strategy, Strategy::Tabulated);
        assert_eq!(memo.candidates_evaluated, table.candidates_evaluated);
    }
}
