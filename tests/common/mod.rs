//! Shared fixtures: a fully-populated simulation result in the provider's
//! wire shape.

#![allow(dead_code)]

use stratsim::contract::*;

pub fn sample_result(name: &str, viability: f64) -> SimulationResult {
    sample_result_with_risk(name, viability, 25.0)
}

pub fn sample_result_with_risk(name: &str, viability: f64, downside_risk: f64) -> SimulationResult {
    SimulationResult {
        summary: ResultSummary {
            scenario_name: name.to_string(),
            viability_score: viability,
            confidence: 70.0,
            recommended_action: RecommendedAction::ProceedWithCaution,
            executive_summary: "Viable with staged investment.".into(),
        },
        outcome_projections: OutcomeProjections {
            best_case: BestCase {
                probability: 20.0,
                roi: "3.5x".into(),
                timeline: "18 months".into(),
                narrative: "Rapid enterprise adoption.".into(),
                key_drivers: vec!["Channel partnerships land early".into()],
            },
            base_case: BaseCase {
                probability: 55.0,
                roi: "1.8x".into(),
                timeline: "24 months".into(),
                narrative: "Steady expansion.".into(),
                assumptions: vec!["Churn stays under 3%".into()],
            },
            worst_case: WorstCase {
                probability: 25.0,
                roi: "0.6x".into(),
                timeline: "30+ months".into(),
                narrative: "Incumbent price war.".into(),
                triggers: vec!["Competitor undercuts pricing".into()],
            },
        },
        risk_reward_analysis: RiskRewardAnalysis {
            expected_value: 1.9,
            risk_adjusted_return: 1.4,
            downside_risk,
            upside_potential: 65.0,
            risk_factors: vec![WeightedFactor {
                factor: "Sales cycle longer than modeled".into(),
                probability: 40.0,
                impact: ImpactLevel::High,
            }],
            opportunity_factors: vec![WeightedFactor {
                factor: "Adjacent segment pull-through".into(),
                probability: 30.0,
                impact: ImpactLevel::Medium,
            }],
        },
        bottleneck_analysis: BottleneckAnalysis {
            bottlenecks: vec![Bottleneck {
                bottleneck: "Enterprise sales hiring".into(),
                severity: Severity::High,
                mitigation: "Start recruiting one quarter early".into(),
            }],
            resource_constraints: vec!["Two senior AEs available".into()],
            dependency_chain: vec![
                "SOC 2 certification".into(),
                "Enterprise tier GA".into(),
                "Channel launch".into(),
            ],
        },
        unintended_consequences: vec![UnintendedConsequence {
            consequence: "SMB tier cannibalization".into(),
            likelihood: 35.0,
            severity: Severity::Medium,
            kind: ConsequenceKind::Negative,
        }],
        sensitivity_analysis: SensitivityAnalysis {
            ranked_variables: vec![
                SensitiveVariable {
                    variable: "competitive_intensity".into(),
                    sensitivity: 80.0,
                    note: "Outcome flips above intensity 8".into(),
                },
                SensitiveVariable {
                    variable: "marketing_budget".into(),
                    sensitivity: 55.0,
                    note: "Diminishing returns past $120K/month".into(),
                },
            ],
            scenario_variations: vec![ScenarioVariation {
                name: "Budget +25%".into(),
                outcome: "Viability improves ~6 points".into(),
            }],
        },
        implementation_roadmap: ImplementationRoadmap {
            phases: vec![
                RoadmapPhase {
                    phase: "Foundation".into(),
                    duration: "Q1".into(),
                    actions: vec!["Close compliance gaps".into()],
                },
                RoadmapPhase {
                    phase: "Launch".into(),
                    duration: "Q2-Q3".into(),
                    actions: vec!["GA enterprise tier".into(), "Stand up partner desk".into()],
                },
            ],
        },
        strategic_recommendations: vec![StrategicRecommendation {
            recommendation: "Gate spend on two lighthouse logos".into(),
            priority: ImpactLevel::High,
        }],
        monte_carlo_summary: MonteCarloSummary {
            simulations_run: 10_000,
            success_rate: 68.0,
            percentile_outcomes: PercentileOutcomes {
                p10: "0.7x ROI".into(),
                p50: "1.8x ROI".into(),
                p90: "3.1x ROI".into(),
            },
        },
    }
}

pub fn sample_result_json(name: &str, viability: f64) -> serde_json::Value {
    serde_json::to_value(sample_result(name, viability)).unwrap()
}
