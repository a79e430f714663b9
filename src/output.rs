//! Presentation shapes and file export.
//!
//! Every result producer (runway projection, portfolio assessment, full
//! simulation result) flattens into the same [`Insights`] shape so the
//! rendering layer needs no branching per producer. CSV export covers the
//! comparison matrix and sweep grids.

use crate::compare::Comparison;
use crate::contract::{RecommendedAction, SimulationResult};
use crate::portfolio::PortfolioAssessment;
use crate::projection::RunwayProjection;
use crate::sweep::SweepCell;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Uniform presentation shape for all three result producers.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    /// Display label -> formatted value.
    pub metrics: BTreeMap<String, String>,
    pub recommendation: String,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}

impl Insights {
    pub fn from_projection(p: &RunwayProjection) -> Insights {
        let mut metrics = BTreeMap::new();
        metrics.insert(
            "Months to target".into(),
            format!("{:.0}", p.months_to_target.round()),
        );
        metrics.insert(
            "Required funding".into(),
            format!("${:.1}M", p.required_funding_m),
        );
        metrics.insert(
            "Implied valuation".into(),
            format!("${:.0}M", p.implied_valuation_m),
        );
        metrics.insert("Burn multiple".into(), format!("{:.2}", p.burn_multiple));
        metrics.insert(
            "Capital efficiency".into(),
            p.capital_efficiency.to_string(),
        );
        metrics.insert("Outlook".into(), p.outlook.label().to_string());
        Insights {
            metrics,
            recommendation: p.recommendation.clone(),
            risks: p.risks.clone(),
            opportunities: p.opportunities.clone(),
        }
    }

    pub fn from_assessment(a: &PortfolioAssessment) -> Insights {
        let mut metrics = BTreeMap::new();
        metrics.insert("Portfolio score".into(), format!("{:.1}", a.score));
        metrics.insert("Total impact".into(), format!("{:.0}", a.total_impact));
        metrics.insert("Total effort".into(), format!("{:.0}", a.total_effort));
        metrics.insert("Execution risk".into(), a.execution_risk.to_string());
        metrics.insert(
            "Resource requirement".into(),
            a.resource_requirement.to_string(),
        );
        Insights {
            metrics,
            recommendation: a.recommendation.clone(),
            risks: vec![format!("Execution risk: {}", a.execution_risk)],
            opportunities: a
                .sequenced
                .iter()
                .map(|o| format!("{} (ROI {:.2})", o.name, o.roi()))
                .collect(),
        }
    }

    pub fn from_result(r: &SimulationResult) -> Insights {
        let mut metrics = BTreeMap::new();
        metrics.insert(
            "Viability score".into(),
            format!("{:.0}", r.summary.viability_score),
        );
        metrics.insert("Confidence".into(), format!("{:.0}", r.summary.confidence));
        metrics.insert(
            "Recommended action".into(),
            action_label(r.summary.recommended_action).to_string(),
        );
        metrics.insert(
            "Expected value".into(),
            format!("{:.1}", r.risk_reward_analysis.expected_value),
        );
        metrics.insert(
            "Monte Carlo success rate".into(),
            format!("{:.0}%", r.monte_carlo_summary.success_rate),
        );
        Insights {
            metrics,
            recommendation: r.summary.executive_summary.clone(),
            risks: r
                .risk_reward_analysis
                .risk_factors
                .iter()
                .map(|f| f.factor.clone())
                .collect(),
            opportunities: r
                .risk_reward_analysis
                .opportunity_factors
                .iter()
                .map(|f| f.factor.clone())
                .collect(),
        }
    }

    /// Plain-text block for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, value) in &self.metrics {
            out.push_str(&format!("  {:<26} {}\n", label, value));
        }
        out.push_str(&format!("\n  Recommendation: {}\n", self.recommendation));
        if !self.risks.is_empty() {
            out.push_str("\n  Risks:\n");
            for r in &self.risks {
                out.push_str(&format!("    - {}\n", r));
            }
        }
        if !self.opportunities.is_empty() {
            out.push_str("\n  Opportunities:\n");
            for o in &self.opportunities {
                out.push_str(&format!("    - {}\n", o));
            }
        }
        out
    }
}

pub fn action_label(action: RecommendedAction) -> &'static str {
    match action {
        RecommendedAction::Proceed => "Proceed",
        RecommendedAction::ProceedWithCaution => "Proceed with caution",
        RecommendedAction::Defer => "Defer",
        RecommendedAction::Abort => "Abort",
    }
}

/// Render the comparison matrix as a plain-text table.
pub fn render_comparison(cmp: &Comparison) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<26}", "Metric"));
    for (_, name) in &cmp.scenarios {
        out.push_str(&format!(" {:>20}", name));
    }
    out.push('\n');

    for row in &cmp.rows {
        out.push_str(&format!("{:<26}", row.label));
        for (i, value) in row.values.iter().enumerate() {
            let cell = match value {
                Some(v) => {
                    if row.best == Some(i) {
                        format!("{:.1} *", v)
                    } else {
                        format!("{:.1}", v)
                    }
                }
                None => "-".to_string(),
            };
            out.push_str(&format!(" {:>20}", cell));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", cmp.winner_summary));
    out
}

/// Write the comparison matrix as CSV. One row per metric, one column per
/// scenario, plus a best-scenario column.
pub fn save_comparison_csv(cmp: &Comparison, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["metric".to_string(), "direction".to_string()];
    header.extend(cmp.scenarios.iter().map(|(_, name)| name.clone()));
    header.push("best".to_string());
    wtr.write_record(&header)?;

    for row in &cmp.rows {
        let direction = if row.higher_is_better { "higher" } else { "lower" };
        let mut record = vec![row.label.to_string(), direction.to_string()];
        for value in &row.values {
            record.push(match value {
                Some(v) => format!("{}", v),
                None => String::new(),
            });
        }
        record.push(match row.best {
            Some(i) => cmp.scenarios[i].1.clone(),
            None => String::new(),
        });
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a sweep grid as CSV: one row per cell.
pub fn save_sweep_csv(cells: &[SweepCell], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "growth_rate_pct",
        "burn_rate_k_month",
        "months_to_target",
        "required_funding_m",
        "outlook",
    ])?;

    for cell in cells {
        match &cell.outcome {
            Some(o) => wtr.write_record(&[
                cell.growth_rate_pct.to_string(),
                cell.burn_rate_k_month.to_string(),
                format!("{:.2}", o.months_to_target),
                format!("{:.2}", o.required_funding_m),
                o.outlook.label().to_string(),
            ])?,
            None => wtr.write_record(&[
                cell.growth_rate_pct.to_string(),
                cell.burn_rate_k_month.to_string(),
                String::new(),
                String::new(),
                "invalid".to_string(),
            ])?,
        }
    }

    wtr.flush()?;
    Ok(())
}
