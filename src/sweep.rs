//! Local sensitivity sweep over the projection model.
//!
//! Evaluates the closed-form runway projection over a cartesian grid of
//! growth-rate and burn-rate values. Cells with degenerate inputs are
//! reported as invalid rather than aborting the grid.

use crate::projection::{project, ProjectionPolicy, RunwayInput, RunwayOutlook};
use rayon::prelude::*;

/// One evaluated cell of the grid.
#[derive(Debug, Clone)]
pub struct SweepCell {
    pub growth_rate_pct: f64,
    pub burn_rate_k_month: f64,
    /// `None` when the cell's inputs were rejected as degenerate.
    pub outcome: Option<SweepOutcome>,
}

#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub months_to_target: f64,
    pub required_funding_m: f64,
    pub outlook: RunwayOutlook,
}

/// Grid definition: one base input, swept along growth and burn.
#[derive(Debug, Clone)]
pub struct ProjectionSweep {
    pub current_arr_m: f64,
    pub target_arr_m: f64,
    pub growth_values: Vec<f64>,
    pub burn_values: Vec<f64>,
}

impl ProjectionSweep {
    /// Evaluate every (growth, burn) combination in parallel. Cells come
    /// back in row-major grid order regardless of evaluation interleaving.
    pub fn run(&self, policy: &ProjectionPolicy) -> Vec<SweepCell> {
        let combos: Vec<(f64, f64)> = self
            .growth_values
            .iter()
            .flat_map(|&g| self.burn_values.iter().map(move |&b| (g, b)))
            .collect();

        combos
            .par_iter()
            .map(|&(growth, burn)| {
                let input = RunwayInput {
                    current_arr_m: self.current_arr_m,
                    target_arr_m: self.target_arr_m,
                    burn_rate_k_month: burn,
                    growth_rate_pct: growth,
                };
                let outcome = project(&input, policy).ok().map(|p| SweepOutcome {
                    months_to_target: p.months_to_target,
                    required_funding_m: p.required_funding_m,
                    outlook: p.outlook,
                });
                SweepCell {
                    growth_rate_pct: growth,
                    burn_rate_k_month: burn,
                    outcome,
                }
            })
            .collect()
    }
}
