use approx::assert_relative_eq;
use stratsim::projection::{project, ProjectionPolicy, RunwayInput, RunwayOutlook};
use stratsim::sweep::ProjectionSweep;

fn base_sweep() -> ProjectionSweep {
    ProjectionSweep {
        current_arr_m: 2.5,
        target_arr_m: 8.0,
        growth_values: vec![5.0, 8.0, 12.0],
        burn_values: vec![100.0, 150.0],
    }
}

#[test]
fn test_grid_size_and_order() {
    let cells = base_sweep().run(&ProjectionPolicy::default());
    assert_eq!(cells.len(), 6);

    // Row-major: growth outer, burn inner.
    assert_eq!(cells[0].growth_rate_pct, 5.0);
    assert_eq!(cells[0].burn_rate_k_month, 100.0);
    assert_eq!(cells[1].growth_rate_pct, 5.0);
    assert_eq!(cells[1].burn_rate_k_month, 150.0);
    assert_eq!(cells[5].growth_rate_pct, 12.0);
    assert_eq!(cells[5].burn_rate_k_month, 150.0);
}

#[test]
fn test_cells_match_direct_projection() {
    let policy = ProjectionPolicy::default();
    let cells = base_sweep().run(&policy);

    for cell in &cells {
        let direct = project(
            &RunwayInput {
                current_arr_m: 2.5,
                target_arr_m: 8.0,
                burn_rate_k_month: cell.burn_rate_k_month,
                growth_rate_pct: cell.growth_rate_pct,
            },
            &policy,
        )
        .unwrap();
        let outcome = cell.outcome.as_ref().unwrap();
        assert_relative_eq!(outcome.months_to_target, direct.months_to_target);
        assert_relative_eq!(outcome.required_funding_m, direct.required_funding_m);
        assert_eq!(outcome.outlook, direct.outlook);
    }
}

#[test]
fn test_degenerate_cells_reported_invalid() {
    let sweep = ProjectionSweep {
        growth_values: vec![0.0, 12.0],
        ..base_sweep()
    };
    let cells = sweep.run(&ProjectionPolicy::default());
    assert_eq!(cells.len(), 4);
    assert!(cells[0].outcome.is_none(), "zero growth cell is invalid");
    assert!(cells[1].outcome.is_none());
    assert!(cells[2].outcome.is_some());
    assert!(cells[3].outcome.is_some());
}

#[test]
fn test_faster_growth_is_more_favorable() {
    let cells = base_sweep().run(&ProjectionPolicy::default());
    let slow = cells[1].outcome.as_ref().unwrap(); // growth 5, burn 150
    let fast = cells[5].outcome.as_ref().unwrap(); // growth 12, burn 150
    assert!(fast.months_to_target < slow.months_to_target);
    assert_eq!(fast.outlook, RunwayOutlook::Favorable);
}
