//! Typed, range-bounded variable definitions for the tuning panel.
//!
//! Two built-in catalogs: external factors (market conditions the strategy
//! is exposed to) and internal variables (levers the company controls).
//! Values are always clamped to the definition's range; updates referencing
//! an unknown id are rejected rather than ignored.

use crate::error::SimError;
use std::collections::BTreeMap;

/// A single tunable parameter: bounded range, unit label, default.
#[derive(Debug, Clone)]
pub struct VariableDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// Display unit, possibly empty (e.g. "%", "index").
    pub unit: &'static str,
    pub default: f64,
}

impl VariableDefinition {
    /// Bound `value` to `[min, max]`. Idempotent for in-range values.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// An ordered set of variable definitions with map-based value handling.
#[derive(Debug, Clone)]
pub struct VariableCatalog {
    definitions: Vec<VariableDefinition>,
}

impl VariableCatalog {
    pub fn new(definitions: Vec<VariableDefinition>) -> Self {
        VariableCatalog { definitions }
    }

    pub fn definitions(&self) -> &[VariableDefinition] {
        &self.definitions
    }

    pub fn get(&self, id: &str) -> Option<&VariableDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Each definition's default value, keyed by id.
    pub fn defaults(&self) -> BTreeMap<String, f64> {
        self.definitions
            .iter()
            .map(|d| (d.id.to_string(), d.default))
            .collect()
    }

    /// Immutable update: returns a new map with `id` set to the clamped
    /// value. An unknown id rejects the single field.
    pub fn set(
        &self,
        values: &BTreeMap<String, f64>,
        id: &str,
        value: f64,
    ) -> Result<BTreeMap<String, f64>, SimError> {
        let def = self
            .get(id)
            .ok_or_else(|| SimError::UnknownVariable(id.to_string()))?;
        let mut next = values.clone();
        next.insert(id.to_string(), def.clamp(value));
        Ok(next)
    }

    /// Check that every key is known and every value is in range.
    /// Used before a value map is admitted into a simulation request.
    pub fn validate(&self, values: &BTreeMap<String, f64>) -> Result<(), SimError> {
        for (id, value) in values {
            let def = self
                .get(id)
                .ok_or_else(|| SimError::UnknownVariable(id.clone()))?;
            if !def.contains(*value) {
                return Err(SimError::InvalidInput(format!(
                    "{} = {} outside [{}, {}]",
                    id, value, def.min, def.max
                )));
            }
        }
        Ok(())
    }
}

/// External factors: market conditions the strategy is exposed to.
pub fn external_factors() -> VariableCatalog {
    VariableCatalog::new(vec![
        VariableDefinition {
            id: "market_growth_rate",
            label: "Market growth rate",
            min: -10.0,
            max: 30.0,
            unit: "%",
            default: 8.0,
        },
        VariableDefinition {
            id: "competitive_intensity",
            label: "Competitive intensity",
            min: 1.0,
            max: 10.0,
            unit: "",
            default: 6.0,
        },
        VariableDefinition {
            id: "economic_conditions",
            label: "Economic conditions index",
            min: 0.0,
            max: 100.0,
            unit: "index",
            default: 55.0,
        },
        VariableDefinition {
            id: "customer_demand_shift",
            label: "Customer demand shift",
            min: -20.0,
            max: 20.0,
            unit: "%",
            default: 0.0,
        },
        VariableDefinition {
            id: "regulatory_pressure",
            label: "Regulatory pressure",
            min: 1.0,
            max: 10.0,
            unit: "",
            default: 3.0,
        },
    ])
}

/// Internal variables: levers the company controls.
pub fn internal_variables() -> VariableCatalog {
    VariableCatalog::new(vec![
        VariableDefinition {
            id: "marketing_budget",
            label: "Marketing budget",
            min: 0.0,
            max: 500.0,
            unit: "$K/month",
            default: 80.0,
        },
        VariableDefinition {
            id: "team_capacity",
            label: "Team capacity",
            min: 1.0,
            max: 100.0,
            unit: "FTE",
            default: 25.0,
        },
        VariableDefinition {
            id: "product_readiness",
            label: "Product readiness",
            min: 0.0,
            max: 100.0,
            unit: "%",
            default: 70.0,
        },
        VariableDefinition {
            id: "execution_speed",
            label: "Execution speed",
            min: 1.0,
            max: 10.0,
            unit: "",
            default: 6.0,
        },
        VariableDefinition {
            id: "pricing_power",
            label: "Pricing power",
            min: 1.0,
            max: 10.0,
            unit: "",
            default: 5.0,
        },
    ])
}
