//! Closed-form financial runway projection.
//!
//! Turns {current ARR, target ARR, burn rate, growth rate} into a
//! time-to-target, funding requirement, implied valuation, and a
//! recommendation bundle. Everything here is deterministic; the policy
//! constants (funding buffer, valuation multiple, decision thresholds)
//! live in [`ProjectionPolicy`] so they can be overridden from config
//! and asserted on directly in tests.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Policy constants for the projection model.
///
/// `Default` carries the canonical values; a TOML config may override any
/// field individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionPolicy {
    /// Safety buffer applied to total burn (1.5 = raise 50% extra).
    pub funding_buffer: f64,
    /// Implied valuation = target ARR x this revenue multiple.
    pub valuation_multiple: f64,
    /// Favorable when months < this AND funding < `favorable_max_funding_m`.
    pub favorable_max_months: f64,
    pub favorable_max_funding_m: f64,
    /// Cautionary when months > this OR funding > `cautionary_min_funding_m`.
    pub cautionary_min_months: f64,
    pub cautionary_min_funding_m: f64,
    /// Capital-efficiency buckets on the burn multiple.
    pub burn_multiple_excellent: f64,
    pub burn_multiple_good: f64,
}

impl Default for ProjectionPolicy {
    fn default() -> Self {
        ProjectionPolicy {
            funding_buffer: 1.5,
            valuation_multiple: 8.0,
            favorable_max_months: 18.0,
            favorable_max_funding_m: 15.0,
            cautionary_min_months: 24.0,
            cautionary_min_funding_m: 20.0,
            burn_multiple_excellent: 10.0,
            burn_multiple_good: 20.0,
        }
    }
}

/// Inputs to the projection. ARR in $M, burn in $K/month, growth in %/month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunwayInput {
    pub current_arr_m: f64,
    pub target_arr_m: f64,
    pub burn_rate_k_month: f64,
    pub growth_rate_pct: f64,
}

/// Recommendation bucket from the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayOutlook {
    Favorable,
    Balanced,
    Cautionary,
}

impl RunwayOutlook {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Balanced => "Balanced",
            Self::Cautionary => "Cautionary",
        }
    }
}

/// Full projection output, including the insights bundle shared with the
/// other result producers.
#[derive(Debug, Clone, Serialize)]
pub struct RunwayProjection {
    pub months_to_target: f64,
    pub total_burn_k: f64,
    pub required_funding_m: f64,
    pub implied_valuation_m: f64,
    pub burn_multiple: f64,
    pub capital_efficiency: &'static str,
    pub outlook: RunwayOutlook,
    pub recommendation: String,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Validate inputs and compute the projection.
///
/// Rejects non-positive values, `current >= target` (including the
/// degenerate equal case, which would otherwise produce a zero
/// months-to-target), and non-positive growth.
pub fn project(input: &RunwayInput, policy: &ProjectionPolicy) -> Result<RunwayProjection, SimError> {
    if input.current_arr_m <= 0.0 || input.target_arr_m <= 0.0 {
        return Err(SimError::InvalidInput(
            "current and target ARR must be positive".into(),
        ));
    }
    if input.burn_rate_k_month <= 0.0 {
        return Err(SimError::InvalidInput("burn rate must be positive".into()));
    }
    if input.growth_rate_pct <= 0.0 {
        return Err(SimError::InvalidInput(
            "monthly growth rate must be positive".into(),
        ));
    }
    if input.current_arr_m >= input.target_arr_m {
        return Err(SimError::InvalidInput(
            "current ARR must be strictly below target ARR".into(),
        ));
    }

    let months_to_target = (input.target_arr_m / input.current_arr_m).ln()
        / (1.0 + input.growth_rate_pct / 100.0).ln();
    let total_burn_k = input.burn_rate_k_month * months_to_target;
    let required_funding_m = total_burn_k / 1000.0 * policy.funding_buffer;
    let implied_valuation_m = input.target_arr_m * policy.valuation_multiple;
    // Monthly revenue at current ARR, in $K.
    let monthly_revenue_k = input.current_arr_m * 1000.0 / 12.0;
    let burn_multiple = input.burn_rate_k_month / monthly_revenue_k;

    let capital_efficiency = if burn_multiple < policy.burn_multiple_excellent {
        "Excellent"
    } else if burn_multiple < policy.burn_multiple_good {
        "Good"
    } else {
        "Moderate"
    };

    let outlook = if months_to_target < policy.favorable_max_months
        && required_funding_m < policy.favorable_max_funding_m
    {
        RunwayOutlook::Favorable
    } else if months_to_target > policy.cautionary_min_months
        || required_funding_m > policy.cautionary_min_funding_m
    {
        RunwayOutlook::Cautionary
    } else {
        RunwayOutlook::Balanced
    };

    let recommendation = match outlook {
        RunwayOutlook::Favorable => format!(
            "Growth path reaches ${:.1}M ARR in ~{:.0} months with a \
             ${:.1}M raise (incl. {:.0}% buffer). Conditions support an \
             aggressive push: raise now and extend the lead.",
            input.target_arr_m,
            months_to_target,
            required_funding_m,
            (policy.funding_buffer - 1.0) * 100.0
        ),
        RunwayOutlook::Balanced => format!(
            "Target is reachable in ~{:.0} months but the ${:.1}M \
             requirement leaves little slack. Stage the raise and re-check \
             growth quarterly.",
            months_to_target, required_funding_m
        ),
        RunwayOutlook::Cautionary => format!(
            "~{:.0} months and ${:.1}M of funding to reach target is \
             outside the comfortable band. Cut burn or lift growth before \
             committing to this plan.",
            months_to_target, required_funding_m
        ),
    };

    let mut risks = Vec::new();
    if months_to_target > policy.cautionary_min_months {
        risks.push(format!(
            "Timeline risk: {:.0} months to target exceeds the {:.0}-month threshold",
            months_to_target, policy.cautionary_min_months
        ));
    }
    if required_funding_m > policy.cautionary_min_funding_m {
        risks.push(format!(
            "Funding risk: ${:.1}M required exceeds the ${:.0}M threshold",
            required_funding_m, policy.cautionary_min_funding_m
        ));
    }
    if burn_multiple >= policy.burn_multiple_good {
        risks.push(format!(
            "Capital efficiency: burn multiple {:.1} is moderate; revenue \
             growth is expensive at current spend",
            burn_multiple
        ));
    }
    if risks.is_empty() {
        risks.push("Execution risk: plan assumes growth rate holds for the full period".into());
    }

    let mut opportunities = Vec::new();
    if burn_multiple < policy.burn_multiple_excellent {
        opportunities.push(format!(
            "Burn multiple {:.2} signals excellent capital efficiency; \
             additional spend compounds well",
            burn_multiple
        ));
    }
    if outlook == RunwayOutlook::Favorable {
        opportunities.push(format!(
            "Implied valuation of ${:.0}M at target supports raising on \
             favorable terms",
            implied_valuation_m
        ));
    }
    if opportunities.is_empty() {
        opportunities.push(format!(
            "Reaching ${:.1}M ARR implies a ${:.0}M valuation at a {:.0}x multiple",
            input.target_arr_m, implied_valuation_m, policy.valuation_multiple
        ));
    }

    Ok(RunwayProjection {
        months_to_target,
        total_burn_k,
        required_funding_m,
        implied_valuation_m,
        burn_multiple,
        capital_efficiency,
        outlook,
        recommendation,
        risks,
        opportunities,
    })
}
