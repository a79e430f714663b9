use stratsim::error::SimError;
use stratsim::variables::{external_factors, internal_variables, VariableDefinition};

fn def(min: f64, max: f64, default: f64) -> VariableDefinition {
    VariableDefinition {
        id: "x",
        label: "X",
        min,
        max,
        unit: "",
        default,
    }
}

#[test]
fn test_clamp_bounds() {
    let d = def(0.0, 10.0, 5.0);
    assert_eq!(d.clamp(-3.0), 0.0);
    assert_eq!(d.clamp(42.0), 10.0);
    assert_eq!(d.clamp(0.0), 0.0);
    assert_eq!(d.clamp(10.0), 10.0);
}

#[test]
fn test_clamp_idempotent_in_range() {
    let d = def(-5.0, 5.0, 0.0);
    for v in [-5.0, -1.2, 0.0, 3.7, 5.0] {
        assert_eq!(d.clamp(v), v, "in-range value {} must pass unchanged", v);
        assert_eq!(d.clamp(d.clamp(v)), d.clamp(v));
    }
}

#[test]
fn test_catalog_defaults_in_range() {
    for catalog in [external_factors(), internal_variables()] {
        let defaults = catalog.defaults();
        assert_eq!(defaults.len(), catalog.definitions().len());
        for d in catalog.definitions() {
            let v = defaults[d.id];
            assert!(d.contains(v), "{} default {} out of range", d.id, v);
        }
    }
}

#[test]
fn test_set_clamps_value() {
    let catalog = external_factors();
    let values = catalog.defaults();
    let next = catalog.set(&values, "market_growth_rate", 999.0).unwrap();
    assert_eq!(next["market_growth_rate"], 30.0);
    // Original map untouched.
    assert_eq!(values["market_growth_rate"], 8.0);
}

#[test]
fn test_set_unknown_id_rejected() {
    let catalog = external_factors();
    let values = catalog.defaults();
    match catalog.set(&values, "not_a_variable", 1.0) {
        Err(SimError::UnknownVariable(id)) => assert_eq!(id, "not_a_variable"),
        other => panic!("expected UnknownVariable, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_out_of_range() {
    let catalog = internal_variables();
    let mut values = catalog.defaults();
    values.insert("team_capacity".into(), 5000.0);
    assert!(matches!(
        catalog.validate(&values),
        Err(SimError::InvalidInput(_))
    ));
}

#[test]
fn test_validate_rejects_unknown_key() {
    let catalog = internal_variables();
    let mut values = catalog.defaults();
    values.insert("mystery".into(), 1.0);
    assert!(matches!(
        catalog.validate(&values),
        Err(SimError::UnknownVariable(_))
    ));
}

#[test]
fn test_validate_accepts_defaults() {
    let catalog = internal_variables();
    assert!(catalog.validate(&catalog.defaults()).is_ok());
}
