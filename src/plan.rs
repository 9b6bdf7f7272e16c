//! Cut plans and the decision table they are reconstructed from.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optimal cutting plan for one rod.
///
/// `cuts` lists piece lengths in the order the reconstruction walk emits
/// them (outermost first) and always sums to the rod length.
///
/// `number_of_cuts` is `cuts.len() - 1` for every rod, so an uncut rod
/// reports 0 and an empty rod (length 0) reports -1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPlan {
    /// Maximum revenue obtainable.
    pub max_profit: u64,

    /// Piece lengths of one optimal plan.
    pub cuts: Vec<usize>,

    /// Number of cuts performed (pieces minus one).
    pub number_of_cuts: isize,
}

impl CutPlan {
    /// Builds a plan from a completed decision table.
    pub(crate) fn from_decisions(max_profit: u64, decisions: &DecisionTable, length: usize) -> Self {
        let cuts = decisions.reconstruct(length);
        let number_of_cuts = cuts.len() as isize - 1;
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Number of pieces the rod is sold as.
    pub fn piece_count(&self) -> usize {
        self.cuts.len()
    }

    /// Sum of all piece lengths.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Returns true if the best plan sells the rod whole.
    pub fn is_uncut(&self) -> bool {
        self.cuts.len() == 1
    }
}

impl fmt::Display for CutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max profit {}, cuts {:?}, number of cuts {}",
            self.max_profit, self.cuts, self.number_of_cuts
        )
    }
}

/// First-piece choice for every subproblem length `0..=L`.
///
/// Entry `k` holds the length of the first piece cut from a rod of length
/// `k` in an optimal plan. Entry 0 is never read.
///
/// Tables are only produced by the solvers, so every entry in `1..=L` is
/// filled by the time a caller can see one:
///
/// ```compile_fail
/// let table = u_rodcut::DecisionTable::new(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTable {
    first_cut: Vec<usize>,
}

impl DecisionTable {
    /// Creates an unfilled table for lengths `0..=length`.
    pub(crate) fn new(length: usize) -> Self {
        Self {
            first_cut: vec![0; length + 1],
        }
    }

    /// Largest subproblem length this table covers.
    pub fn length(&self) -> usize {
        self.first_cut.len() - 1
    }

    /// Records `piece` as the first cut for a rod of length `k`.
    #[inline]
    pub(crate) fn set(&mut self, k: usize, piece: usize) {
        debug_assert!(piece >= 1 && piece <= k, "first cut {piece} out of range for {k}");
        self.first_cut[k] = piece;
    }

    /// First cut recorded for length `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is greater than [`length`](Self::length).
    #[inline]
    pub fn get(&self, k: usize) -> usize {
        self.first_cut[k]
    }

    /// Walks the table from `length` down to 0, emitting each first cut.
    ///
    /// Every entry in `1..=length` must already be solved; each step then
    /// removes at least one unit, so the walk ends exactly at 0.
    pub(crate) fn reconstruct(&self, length: usize) -> Vec<usize> {
        let mut cuts = Vec::new();
        let mut remaining = length;
        while remaining > 0 {
            let cut = self.first_cut[remaining];
            debug_assert!(
                cut >= 1 && cut <= remaining,
                "unsolved decision at length {remaining}"
            );
            cuts.push(cut);
            remaining -= cut;
        }
        cuts
    }
}

/// Raw output of a solver before the plan is reconstructed.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub(crate) length: usize,
    pub(crate) max_profit: u64,
    pub(crate) decisions: DecisionTable,
    pub(crate) subproblems_solved: usize,
    pub(crate) candidates_evaluated: usize,
}

impl Evaluation {
    /// Rod length that was solved.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Optimal profit for the full rod.
    pub fn max_profit(&self) -> u64 {
        self.max_profit
    }

    /// Completed decision table for lengths `0..=length`.
    pub fn decisions(&self) -> &DecisionTable {
        &self.decisions
    }

    /// Number of subproblem lengths finalized (excluding length 0).
    pub fn subproblems_solved(&self) -> usize {
        self.subproblems_solved
    }

    /// Number of `(piece, remainder)` candidates scored.
    pub fn candidates_evaluated(&self) -> usize {
        self.candidates_evaluated
    }

    /// Reconstructs the cut plan from the decision table.
    pub fn to_plan(&self) -> CutPlan {
        CutPlan::from_decisions(self.max_profit, &self.decisions, self.length)
    }
}
