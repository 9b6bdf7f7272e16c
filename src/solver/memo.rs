//! Top-down memoized solver.
//!
//! Evaluation starts at `f(L)` and descends into unsolved subproblems on
//! demand, caching each `f(k)` once finalized. Descent uses an explicit
//! frame stack instead of native recursion so that long rods cannot
//! exhaust the thread stack; frames are visited in the same order a
//! recursive evaluator would visit them.

use crate::error::{Result, RodCutError};
use crate::plan::{DecisionTable, Evaluation};
use crate::problem::RodCutProblem;

/// Suspended evaluation of `f(k)`, waiting on `f(k - next_piece)`.
struct Frame {
    k: usize,
    next_piece: usize,
    best: Option<u64>,
    choice: usize,
}

impl Frame {
    fn new(k: usize) -> Self {
        Self {
            k,
            next_piece: 1,
            best: None,
            choice: 0,
        }
    }
}

/// Memoized (top-down) rod-cutting solver.
pub struct MemoSolver;

impl MemoSolver {
    /// Solves the instance by demand-driven descent with a cache.
    ///
    /// # Errors
    ///
    /// [`RodCutError::ProfitOverflow`] if the optimal profit exceeds `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rodcut::{MemoSolver, RodCutProblem};
    ///
    /// let problem = RodCutProblem::new(3, &[1, 3, 8]).unwrap();
    /// let eval = MemoSolver::solve(&problem).unwrap();
    /// assert_eq!(eval.max_profit(), 8);
    /// assert_eq!(eval.to_plan().cuts, vec![3]);
    /// ```
    pub fn solve(problem: &RodCutProblem<'_>) -> Result<Evaluation> {
        let length = problem.length();

        // None = not yet solved
        let mut memo: Vec<Option<u64>> = vec![None; length + 1];
        memo[0] = Some(0);
        let mut decisions = DecisionTable::new(length);

        let mut subproblems_solved = 0usize;
        let mut candidates_evaluated = 0usize;

        let mut stack: Vec<Frame> = Vec::new();
        if length > 0 {
            stack.push(Frame::new(length));
        }

        while let Some(frame) = stack.last_mut() {
            if frame.next_piece > frame.k {
                // Every piece scored; k >= 1 guarantees at least one candidate.
                let k = frame.k;
                memo[k] = Some(frame.best.unwrap_or(0));
                decisions.set(k, frame.choice);
                log::trace!("f({k}) = {:?} (first cut {})", memo[k], frame.choice);
                subproblems_solved += 1;
                stack.pop();
                continue;
            }

            let piece = frame.next_piece;
            let rest = frame.k - piece;
            match memo[rest] {
                Some(sub) => {
                    candidates_evaluated += 1;
                    let candidate = problem
                        .price(piece)
                        .checked_add(sub)
                        .ok_or(RodCutError::ProfitOverflow { length: frame.k })?;
                    if frame.best.map_or(true, |best| candidate > best) {
                        frame.best = Some(candidate);
                        frame.choice = piece;
                    }
                    frame.next_piece += 1;
                }
                // `rest < k` for every frame below, so it cannot already be in progress.
                None => stack.push(Frame::new(rest)),
            }
        }

        Ok(Evaluation {
            length,
            max_profit: memo[length].unwrap_or(0),
            decisions,
            subproblems_solved,
            candidates_evaluated,
        })
    }
}
