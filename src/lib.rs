//! Dynamic-programming solver for the rod-cutting problem.
//!
//! Given a rod of integer length `L` and a price for every piece length
//! `1..=L`, find the maximum revenue obtainable by cutting the rod into
//! pieces and one plan that achieves it. The same recurrence covers any
//! unbounded-knapsack style partition of an integer budget.
//!
//! Two evaluation orders are provided:
//!
//! - **Memoized** ([`MemoSolver`]): top-down descent from `L` with a cache,
//!   driven by an explicit frame stack rather than native recursion.
//! - **Tabulated** ([`TableSolver`]): bottom-up fill over `1..=L`.
//!
//! Both record the first piece of an optimal plan per subproblem in a
//! [`DecisionTable`] and reconstruct the cut list from it the same way.
//! Ties keep the smallest first piece, so both agree on profit and cuts.
//!
//! # Quick start
//!
//! ```
//! let plan = u_rodcut::solve_table(5, &[2, 5, 7, 8, 10]).unwrap();
//! assert_eq!(plan.max_profit, 12);
//! assert_eq!(plan.cuts, vec![1, 2, 2]);
//! assert_eq!(plan.number_of_cuts, 2);
//!
//! let memo = u_rodcut::solve_memo(5, &[2, 5, 7, 8, 10]).unwrap();
//! assert_eq!(memo, plan);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Serialize/deserialize [`CutPlan`], [`RodCutResult`] and [`SolverConfig`]

pub mod config;
pub mod error;
pub mod plan;
pub mod problem;
pub mod runner;
pub mod solver;

pub use config::{SolverConfig, Strategy};
pub use error::{Result, RodCutError};
pub use plan::{CutPlan, DecisionTable, Evaluation};
pub use problem::RodCutProblem;
pub use runner::{RodCutResult, RodCutRunner};
pub use solver::{MemoSolver, TableSolver};

/// Solves with the memoized (top-down) strategy.
///
/// `prices[i - 1]` is the price of a piece of length `i`; entries past
/// `length` are ignored.
///
/// # Errors
///
/// Returns [`RodCutError`] if `prices` has fewer than `length` entries or
/// the optimal profit exceeds `u64::MAX`.
pub fn solve_memo(length: usize, prices: &[u64]) -> Result<CutPlan> {
    let problem = RodCutProblem::new(length, prices)?;
    Ok(RodCutRunner::run_problem(&problem, Strategy::Memoized)?.plan)
}

/// Solves with the tabulated (bottom-up) strategy.
///
/// Same contract as [`solve_memo`].
pub fn solve_table(length: usize, prices: &[u64]) -> Result<CutPlan> {
    let problem = RodCutProblem::new(length, prices)?;
    Ok(RodCutRunner::run_problem(&problem, Strategy::Tabulated)?.plan)
}
