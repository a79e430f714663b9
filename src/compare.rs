//! Side-by-side comparison of saved scenarios.
//!
//! A fixed metric table names a dotted path into the result JSON and a
//! direction flag. Per metric the engine picks the best scenario by
//! argmax/argmin; a row where any scenario fails to resolve declares no
//! best. The overall winner is the scenario with the highest viability
//! score; all scenarios tied at the top are reported as joint winners.

use crate::error::SimError;
use crate::store::SavedScenario;
use serde_json::Value;

/// One comparison metric: where to find it and which direction wins.
#[derive(Debug, Clone)]
pub struct MetricSpec {
    pub label: &'static str,
    /// Dotted path into the serialized result, e.g. "summary.confidence".
    pub path: &'static str,
    /// False for risk-like metrics where lower wins.
    pub higher_is_better: bool,
}

/// The fixed metric table used for every comparison.
pub fn default_metrics() -> Vec<MetricSpec> {
    vec![
        MetricSpec {
            label: "Viability score",
            path: "summary.viabilityScore",
            higher_is_better: true,
        },
        MetricSpec {
            label: "Confidence",
            path: "summary.confidence",
            higher_is_better: true,
        },
        MetricSpec {
            label: "Expected value",
            path: "riskRewardAnalysis.expectedValue",
            higher_is_better: true,
        },
        MetricSpec {
            label: "Risk-adjusted return",
            path: "riskRewardAnalysis.riskAdjustedReturn",
            higher_is_better: true,
        },
        MetricSpec {
            label: "Downside risk",
            path: "riskRewardAnalysis.downsideRisk",
            higher_is_better: false,
        },
        MetricSpec {
            label: "Upside potential",
            path: "riskRewardAnalysis.upsidePotential",
            higher_is_better: true,
        },
        MetricSpec {
            label: "Monte Carlo success rate",
            path: "monteCarloSummary.successRate",
            higher_is_better: true,
        },
    ]
}

/// Resolve a dotted path to a numeric value, `None` if any segment is
/// missing or the leaf is not a number.
pub fn lookup_path(value: &Value, path: &str) -> Option<f64> {
    let mut cursor = value;
    for segment in path.split('.') {
        cursor = cursor.get(segment)?;
    }
    cursor.as_f64()
}

/// One row of the comparison matrix.
#[derive(Debug, Clone)]
pub struct MetricRow {
    pub label: &'static str,
    pub higher_is_better: bool,
    /// One entry per compared scenario, in input order.
    pub values: Vec<Option<f64>>,
    /// Index of the best scenario, `None` when any value is missing.
    pub best: Option<usize>,
}

/// Full comparison output.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Scenario (id, name) pairs in comparison order.
    pub scenarios: Vec<(u64, String)>,
    pub rows: Vec<MetricRow>,
    /// All scenarios sharing the top viability score.
    pub winner_ids: Vec<u64>,
    pub winner_summary: String,
}

/// Compare two or more saved scenarios over the fixed metric table.
pub fn compare(scenarios: &[&SavedScenario]) -> Result<Comparison, SimError> {
    compare_with_metrics(scenarios, &default_metrics())
}

pub fn compare_with_metrics(
    scenarios: &[&SavedScenario],
    metrics: &[MetricSpec],
) -> Result<Comparison, SimError> {
    if scenarios.len() < 2 {
        return Err(SimError::InvalidInput(
            "comparison needs at least two scenarios".into(),
        ));
    }

    // Results are compared through their JSON form so metric paths match
    // the wire contract exactly.
    let values: Vec<Value> = scenarios
        .iter()
        .map(|s| {
            serde_json::to_value(&s.result)
                .map_err(|e| SimError::InvalidInput(format!("unserializable result: {}", e)))
        })
        .collect::<Result<_, _>>()?;

    let rows = metrics
        .iter()
        .map(|spec| {
            let resolved: Vec<Option<f64>> =
                values.iter().map(|v| lookup_path(v, spec.path)).collect();

            // No best when any scenario is missing the metric.
            let best = if resolved.iter().all(|v| v.is_some()) {
                best_index(
                    &resolved.iter().map(|v| v.unwrap()).collect::<Vec<_>>(),
                    spec.higher_is_better,
                )
            } else {
                None
            };

            MetricRow {
                label: spec.label,
                higher_is_better: spec.higher_is_better,
                values: resolved,
                best,
            }
        })
        .collect();

    let top_score = scenarios
        .iter()
        .map(|s| s.result.summary.viability_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let winners: Vec<&&SavedScenario> = scenarios
        .iter()
        .filter(|s| s.result.summary.viability_score == top_score)
        .collect();
    let winner_ids: Vec<u64> = winners.iter().map(|s| s.id).collect();

    let winner_summary = if winners.len() == 1 {
        format!(
            "\"{}\" wins with a viability score of {:.0}",
            winners[0].name, top_score
        )
    } else {
        let names: Vec<&str> = winners.iter().map(|s| s.name.as_str()).collect();
        format!(
            "Joint winners at viability {:.0}: {}",
            top_score,
            names.join(", ")
        )
    };

    Ok(Comparison {
        scenarios: scenarios
            .iter()
            .map(|s| (s.id, s.name.clone()))
            .collect(),
        rows,
        winner_ids,
        winner_summary,
    })
}

/// First index of the extreme value. Within-row value ties go to the
/// lowest index; the joint-winner policy applies only to the overall
/// viability ranking.
fn best_index(values: &[f64], higher_is_better: bool) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        let better = if higher_is_better {
            *v > values[best]
        } else {
            *v < values[best]
        };
        if better {
            best = i;
        }
    }
    Some(best)
}
