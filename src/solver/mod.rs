//! Rod-cutting solvers.
//!
//! Both solvers evaluate the recurrence
//!
//! `f(0) = 0`, `f(k) = max_{1 <= j <= k} price(j) + f(k - j)`
//!
//! and record the maximizing `j` per length in a [`DecisionTable`](crate::DecisionTable).
//! Among equal candidates the smallest `j` wins: a later candidate replaces
//! the current choice only when strictly greater.
//!
//! # Key Types
//!
//! - [`MemoSolver`]: top-down, demand-driven descent with a cache
//! - [`TableSolver`]: bottom-up fill over `1..=L`
//!
//! # Overflow
//!
//! Profits are summed with checked arithmetic. Since `f` is non-decreasing
//! in `k` for non-negative prices, any candidate that overflows `u64`
//! means the optimum for the whole rod overflows as well, so the solve
//! fails with [`RodCutError::ProfitOverflow`](crate::RodCutError::ProfitOverflow)
//! exactly when the answer does not fit.
//!
//! # References
//!
//! - Cormen, Leiserson, Rivest & Stein, *Introduction to Algorithms* (3rd ed.), §15.1

mod memo;
mod table;

pub use memo::MemoSolver;
pub use table::TableSolver;
