//! Bottom-up tabulated solver.
//!
//! Fills `dp[i]` for `i = 1..=L` in increasing order. Every candidate for
//! `dp[i]` reads `dp[i - j]` with `j >= 1`, which is already final.

use crate::error::{Result, RodCutError};
use crate::plan::{DecisionTable, Evaluation};
use crate::problem::RodCutProblem;

/// Tabulated (bottom-up) rod-cutting solver.
pub struct TableSolver;

impl TableSolver {
    /// Solves the instance by filling the profit table from short to long.
    ///
    /// Ties keep the smallest first piece, matching [`MemoSolver`](crate::MemoSolver).
    ///
    /// # Errors
    ///
    /// [`RodCutError::ProfitOverflow`] if the optimal profit exceeds `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rodcut::{RodCutProblem, TableSolver};
    ///
    /// let problem = RodCutProblem::new(4, &[3, 5, 6, 7]).unwrap();
    /// let eval = TableSolver::solve(&problem).unwrap();
    /// assert_eq!(eval.max_profit(), 12);
    /// assert_eq!(eval.to_plan().number_of_cuts, 3);
    /// ```
    pub fn solve(problem: &RodCutProblem<'_>) -> Result<Evaluation> {
        let length = problem.length();
        let mut dp = vec![0u64; length + 1];
        let mut decisions = DecisionTable::new(length);
        let mut candidates_evaluated = 0usize;

        for i in 1..=length {
            let mut best: Option<u64> = None;
            let mut choice = 0;

            for j in 1..=i {
                let candidate = problem
                    .price(j)
                    .checked_add(dp[i - j])
                    .ok_or(RodCutError::ProfitOverflow { length: i })?;
                if best.map_or(true, |b| candidate > b) {
                    best = Some(candidate);
                    choice = j;
                }
            }
            candidates_evaluated += i;

            dp[i] = best.unwrap_or(0);
            decisions.set(i, choice);
            log::trace!("dp[{i}] = {} (first cut {choice})", dp[i]);
        }

        Ok(Evaluation {
            length,
            max_profit: dp[length],
            decisions,
            subproblems_solved: length,
            candidates_evaluated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(length: usize, prices: &[u64]) -> Evaluation {
        TableSolver::solve(&RodCutProblem::new(length, prices).unwrap()).unwrap()
    }

    #[test]
    fn test_table_basic_case() {
        let plan = solve(5, &[2, 5, 7, 8, 10]).to_plan();
        assert_eq!(plan.max_profit, 12);
        assert_eq!(plan.cuts, vec![1, 2, 2]);
        assert_eq!(plan.number_of_cuts, 2);
    }

    #[test]
    fn test_table_optimal_not_to_cut() {
        let plan = solve(3, &[1, 3, 8]).to_plan();
        assert_eq!(plan.max_profit, 8);
        assert_eq!(plan.cuts, vec![3]);
        assert_eq!(plan.number_of_cuts, 0);
        assert!(plan.is_uncut());
    }

    #[test]
    fn test_table_uniform_cuts() {
        let plan = solve(4, &[3, 5, 6, 7]).to_plan();
        assert_eq!(plan.max_profit, 12);
        assert_eq!(plan.cuts, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_table_zero_length() {
        let eval = solve(0, &[]);
        assert_eq!(eval.max_profit, 0);
        assert_eq!(eval.candidates_evaluated, 0);
        assert_eq!(eval.to_plan().number_of_cuts, -1);
    }

    #[test]
    fn test_table_clrs_prices() {
        let prices = [1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
        let expected = [0, 1, 5, 8, 10, 13, 17, 18, 22, 25, 30];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(solve(n, &prices).max_profit, want, "length {n}");
        }
    }

    #[test]
    fn test_table_decisions_in_range() {
        let eval = solve(8, &[1, 5, 8, 9, 10, 17, 17, 20]);
        for k in 1..=8 {
            let d = eval.decisions.get(k);
            assert!(d >= 1 && d <= k, "decision {d} for length {k}");
        }
    }

    #[test]
    fn test_table_large_optimum_fits() {
        let half = u64::MAX / 2 + 1;
        let eval = solve(2, &[0, half]);
        assert_eq!(eval.max_profit, half);
        assert_eq!(eval.to_plan().cuts, vec![2]);

        assert_eq!(solve(1, &[u64::MAX]).max_profit, u64::MAX);
    }

    #[test]
    fn test_table_overflow_rejected() {
        let half = u64::MAX / 2 + 1;
        let prices = [half, 0, 0];
        let problem = RodCutProblem::new(3, &prices).unwrap();
        assert_eq!(
            TableSolver::solve(&problem).unwrap_err(),
            RodCutError::ProfitOverflow { length: 2 }
        );
    }
}
