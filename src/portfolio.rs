//! Opportunity portfolio scoring and sequencing.
//!
//! A portfolio is an immutable selection over the opportunity catalog:
//! `with` / `without` return new portfolios instead of mutating in place,
//! so assessments are always computed against exactly the selection the
//! caller holds. Assessment is pure and recomputed per call.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A candidate strategic initiative scored by impact and effort (0-10).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub impact: f64,
    pub effort: f64,
    pub timeframe: String,
    pub revenue_estimate: String,
    pub tags: Vec<String>,
}

impl Opportunity {
    /// Per-item ROI used for sequencing. Zero-effort items sort first.
    pub fn roi(&self) -> f64 {
        if self.effort > 0.0 {
            self.impact / self.effort
        } else {
            f64::INFINITY
        }
    }
}

/// Policy constants for the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioPolicy {
    /// Portfolio score = min(10, avg ROI x this scale).
    pub score_scale: f64,
    /// Execution risk: more than this many selections is High.
    pub high_risk_count: usize,
    /// More than this many is Medium.
    pub medium_risk_count: usize,
    /// Total effort above this requires hiring.
    pub hiring_effort: f64,
    /// Total effort above this needs moderate hires.
    pub moderate_effort: f64,
}

impl Default for PortfolioPolicy {
    fn default() -> Self {
        PortfolioPolicy {
            score_scale: 1.2,
            high_risk_count: 3,
            medium_risk_count: 2,
            hiring_effort: 20.0,
            moderate_effort: 12.0,
        }
    }
}

/// An immutable selection of opportunities. Membership is id-keyed and
/// duplicate-free; insertion order is preserved and breaks sequencing ties.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    selected: Vec<Opportunity>,
}

impl Portfolio {
    pub fn new() -> Self {
        Portfolio::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opportunity> {
        self.selected.iter()
    }

    /// New portfolio with `op` appended. A duplicate id leaves the
    /// selection unchanged.
    pub fn with(&self, op: Opportunity) -> Portfolio {
        if self.contains(&op.id) {
            return self.clone();
        }
        let mut selected = self.selected.clone();
        selected.push(op);
        Portfolio { selected }
    }

    /// New portfolio with `id` removed (no-op if absent).
    pub fn without(&self, id: &str) -> Portfolio {
        Portfolio {
            selected: self
                .selected
                .iter()
                .filter(|o| o.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Score the current selection. Pure; safe on the empty portfolio.
    pub fn assess(&self, policy: &PortfolioPolicy) -> PortfolioAssessment {
        let total_impact: f64 = self.selected.iter().map(|o| o.impact).sum();
        let total_effort: f64 = self.selected.iter().map(|o| o.effort).sum();

        let avg_roi = if total_effort > 0.0 {
            total_impact / total_effort
        } else {
            0.0
        };
        let score = (avg_roi * policy.score_scale).min(10.0);
        let score = (score * 10.0).round() / 10.0;

        // Stable sort: ties keep insertion order.
        let mut sequenced = self.selected.clone();
        sequenced.sort_by(|a, b| b.roi().partial_cmp(&a.roi()).unwrap_or(Ordering::Equal));

        let execution_risk = if self.selected.len() > policy.high_risk_count {
            "High"
        } else if self.selected.len() > policy.medium_risk_count {
            "Medium"
        } else {
            "Low"
        };

        let resource_requirement = if total_effort > policy.hiring_effort {
            "Requires dedicated hiring to execute the full selection"
        } else if total_effort > policy.moderate_effort {
            "Current team plus moderate hires"
        } else {
            "Achievable with current resources"
        };

        let recommendation = match self.selected.len() {
            0 => "No opportunities selected. Pick at least one initiative to score.".to_string(),
            1 => format!(
                "Focus strategy: committing fully to \"{}\" concentrates \
                 resources on the highest-conviction bet.",
                self.selected[0].name
            ),
            2 => "Balanced pair: sequence the higher-ROI initiative first and \
                  let its returns fund the second."
                .to_string(),
            n => format!(
                "{} initiatives selected. Parallel execution dilutes focus; \
                 prioritize the top two by ROI and defer the rest.",
                n
            ),
        };

        PortfolioAssessment {
            score,
            total_impact,
            total_effort,
            execution_risk,
            resource_requirement,
            recommendation,
            sequenced,
        }
    }
}

/// Output of a portfolio assessment.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioAssessment {
    /// Rounded to 1 decimal, capped at 10.
    pub score: f64,
    pub total_impact: f64,
    pub total_effort: f64,
    pub execution_risk: &'static str,
    pub resource_requirement: &'static str,
    pub recommendation: String,
    /// Execution order: descending per-item ROI, insertion order on ties.
    pub sequenced: Vec<Opportunity>,
}

/// Built-in opportunity catalog.
pub fn opportunity_catalog() -> Vec<Opportunity> {
    let op = |id: &str,
              name: &str,
              description: &str,
              impact: f64,
              effort: f64,
              timeframe: &str,
              revenue: &str,
              tags: &[&str]| Opportunity {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        impact,
        effort,
        timeframe: timeframe.into(),
        revenue_estimate: revenue.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        op(
            "enterprise_tier",
            "Enterprise Tier Launch",
            "Dedicated enterprise plan with SSO, audit logs, and an SLA",
            9.0,
            7.0,
            "2-3 quarters",
            "$1.5-2.5M ARR",
            &["revenue", "product"],
        ),
        op(
            "marketplace_integrations",
            "Marketplace Integrations",
            "Native integrations listed on the major app marketplaces",
            6.0,
            4.0,
            "1-2 quarters",
            "$400-800K ARR",
            &["distribution", "product"],
        ),
        op(
            "smb_self_serve",
            "SMB Self-Serve Funnel",
            "Product-led onboarding and pricing for the SMB segment",
            7.0,
            5.0,
            "2 quarters",
            "$600K-1M ARR",
            &["growth", "pricing"],
        ),
        op(
            "usage_pricing",
            "Usage-Based Pricing",
            "Shift the top tier from seats to usage-based billing",
            8.0,
            6.0,
            "2-3 quarters",
            "$800K-1.5M ARR",
            &["pricing", "revenue"],
        ),
        op(
            "intl_expansion",
            "International Expansion",
            "Localization and go-to-market for two EU markets",
            7.0,
            8.0,
            "3-4 quarters",
            "$1-2M ARR",
            &["growth", "market"],
        ),
        op(
            "partner_channel",
            "Partner Channel Program",
            "Reseller and referral program with certified partners",
            5.0,
            3.0,
            "1 quarter",
            "$300-600K ARR",
            &["distribution"],
        ),
    ]
}
