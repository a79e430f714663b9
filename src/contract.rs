//! Request/response contract with the external analysis provider.
//!
//! The provider speaks camelCase JSON. The response is accepted only if it
//! deserializes into the full [`SimulationResult`] shape and every
//! probability/score field is in range; nothing is coerced and missing
//! fields are never synthesized, because a partially-filled result would
//! silently corrupt downstream comparisons.

use crate::error::SimError;
use crate::variables::VariableCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of historical entries of each kind carried in a request.
pub const HISTORY_LIMIT: usize = 5;

/// Fixed strategy categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationType {
    MarketEntry,
    ProductLaunch,
    PricingStrategy,
    CostReduction,
    MarketExpansion,
    Partnership,
}

/// User-specified strategy description plus bounded variable values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub strategy_text: String,
    pub simulation_type: SimulationType,
    pub external_factors: BTreeMap<String, f64>,
    pub internal_variables: BTreeMap<String, f64>,
}

impl SimulationInput {
    /// Check the input against the variable catalogs: non-empty strategy
    /// text, every key known, every value in range.
    pub fn validate(
        &self,
        external: &VariableCatalog,
        internal: &VariableCatalog,
    ) -> Result<(), SimError> {
        if self.strategy_text.trim().is_empty() {
            return Err(SimError::InvalidInput("strategy text is empty".into()));
        }
        external.validate(&self.external_factors)?;
        internal.validate(&self.internal_variables)?;
        Ok(())
    }
}

/// Bounded slice of prior context included with a request. Retrieval and
/// storage of the history itself live with an external collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalContext {
    pub prior_strategies: Vec<String>,
    pub key_decisions: Vec<String>,
    pub lessons_learned: Vec<String>,
}

impl HistoricalContext {
    /// Keep only the most recent `HISTORY_LIMIT` entries of each list.
    pub fn bounded(mut self) -> Self {
        let trim = |v: &mut Vec<String>| {
            if v.len() > HISTORY_LIMIT {
                v.drain(..v.len() - HISTORY_LIMIT);
            }
        };
        trim(&mut self.prior_strategies);
        trim(&mut self.key_decisions);
        trim(&mut self.lessons_learned);
        self
    }
}

/// The payload posted to the analysis provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub input: SimulationInput,
    pub context: HistoricalContext,
}

impl AnalysisRequest {
    pub fn new(input: SimulationInput, context: HistoricalContext) -> Self {
        AnalysisRequest {
            input,
            context: context.bounded(),
        }
    }
}

// ── Response schema ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Proceed,
    ProceedWithCaution,
    Defer,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsequenceKind {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub scenario_name: String,
    pub viability_score: f64,
    pub confidence: f64,
    pub recommended_action: RecommendedAction,
    pub executive_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestCase {
    pub probability: f64,
    pub roi: String,
    pub timeline: String,
    pub narrative: String,
    pub key_drivers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseCase {
    pub probability: f64,
    pub roi: String,
    pub timeline: String,
    pub narrative: String,
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorstCase {
    pub probability: f64,
    pub roi: String,
    pub timeline: String,
    pub narrative: String,
    pub triggers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeProjections {
    pub best_case: BestCase,
    pub base_case: BaseCase,
    pub worst_case: WorstCase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFactor {
    pub factor: String,
    pub probability: f64,
    pub impact: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardAnalysis {
    pub expected_value: f64,
    pub risk_adjusted_return: f64,
    pub downside_risk: f64,
    pub upside_potential: f64,
    pub risk_factors: Vec<WeightedFactor>,
    pub opportunity_factors: Vec<WeightedFactor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottleneck {
    pub bottleneck: String,
    pub severity: Severity,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckAnalysis {
    pub bottlenecks: Vec<Bottleneck>,
    pub resource_constraints: Vec<String>,
    /// Ordered: each step depends on the ones before it.
    pub dependency_chain: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnintendedConsequence {
    pub consequence: String,
    pub likelihood: f64,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: ConsequenceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveVariable {
    pub variable: String,
    pub sensitivity: f64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioVariation {
    pub name: String,
    pub outcome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityAnalysis {
    /// Most sensitive first.
    pub ranked_variables: Vec<SensitiveVariable>,
    pub scenario_variations: Vec<ScenarioVariation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationRoadmap {
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicRecommendation {
    pub recommendation: String,
    pub priority: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileOutcomes {
    pub p10: String,
    pub p50: String,
    pub p90: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloSummary {
    pub simulations_run: u64,
    pub success_rate: f64,
    pub percentile_outcomes: PercentileOutcomes,
}

/// The full structured output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub summary: ResultSummary,
    pub outcome_projections: OutcomeProjections,
    pub risk_reward_analysis: RiskRewardAnalysis,
    pub bottleneck_analysis: BottleneckAnalysis,
    pub unintended_consequences: Vec<UnintendedConsequence>,
    pub sensitivity_analysis: SensitivityAnalysis,
    pub implementation_roadmap: ImplementationRoadmap,
    pub strategic_recommendations: Vec<StrategicRecommendation>,
    pub monte_carlo_summary: MonteCarloSummary,
}

fn check_range(name: &str, value: f64) -> Result<(), SimError> {
    if !(0.0..=100.0).contains(&value) || value.is_nan() {
        return Err(SimError::MalformedAnalysisResponse(format!(
            "{} = {} outside [0, 100]",
            name, value
        )));
    }
    Ok(())
}

impl SimulationResult {
    /// Range pass over every probability/score field. Enum membership and
    /// structural completeness are already enforced by deserialization.
    pub fn check_ranges(&self) -> Result<(), SimError> {
        check_range("summary.viabilityScore", self.summary.viability_score)?;
        check_range("summary.confidence", self.summary.confidence)?;

        let proj = &self.outcome_projections;
        check_range("outcomeProjections.bestCase.probability", proj.best_case.probability)?;
        check_range("outcomeProjections.baseCase.probability", proj.base_case.probability)?;
        check_range("outcomeProjections.worstCase.probability", proj.worst_case.probability)?;

        for f in &self.risk_reward_analysis.risk_factors {
            check_range("riskRewardAnalysis.riskFactors.probability", f.probability)?;
        }
        for f in &self.risk_reward_analysis.opportunity_factors {
            check_range(
                "riskRewardAnalysis.opportunityFactors.probability",
                f.probability,
            )?;
        }
        for c in &self.unintended_consequences {
            check_range("unintendedConsequences.likelihood", c.likelihood)?;
        }
        for v in &self.sensitivity_analysis.ranked_variables {
            check_range("sensitivityAnalysis.rankedVariables.sensitivity", v.sensitivity)?;
        }
        check_range("monteCarloSummary.successRate", self.monte_carlo_summary.success_rate)?;
        Ok(())
    }
}

/// Validate a raw provider payload into a [`SimulationResult`].
///
/// Missing sub-objects and unrecognized enum values fail deserialization;
/// out-of-range scores fail the range pass. Either way the payload is
/// rejected whole.
pub fn validate_result(raw: serde_json::Value) -> Result<SimulationResult, SimError> {
    let result: SimulationResult = serde_json::from_value(raw)
        .map_err(|e| SimError::MalformedAnalysisResponse(e.to_string()))?;
    result.check_ranges()?;
    Ok(result)
}
