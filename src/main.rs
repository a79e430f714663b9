use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use stratsim::config::PolicyConfig;
use stratsim::contract::{AnalysisRequest, HistoricalContext, SimulationInput};
use stratsim::output::{self, Insights};
use stratsim::portfolio::{opportunity_catalog, Portfolio};
use stratsim::projection::{project, RunwayInput};
use stratsim::provider::{run_simulation, HttpAnalysisProvider, RunToken};
use stratsim::store::ScenarioStore;
use stratsim::sweep::ProjectionSweep;
use stratsim::variables::{external_factors, internal_variables};

#[derive(Parser)]
#[command(name = "stratsim", about = "Strategic scenario simulation and comparison engine")]
struct Cli {
    /// Policy config TOML (missing file = built-in defaults)
    #[arg(long, default_value = "stratsim.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the financial runway projection
    Project {
        /// Current ARR in $M
        #[arg(long)]
        current: f64,

        /// Target ARR in $M
        #[arg(long)]
        target: f64,

        /// Burn rate in $K/month
        #[arg(long)]
        burn: f64,

        /// Monthly growth rate in %
        #[arg(long)]
        growth: f64,
    },

    /// Score a portfolio selected from the opportunity catalog
    Score {
        /// Comma-separated opportunity ids (see `score --list`)
        #[arg(long, default_value = "")]
        select: String,

        /// List catalog ids and exit
        #[arg(long)]
        list: bool,
    },

    /// Run a simulation through the analysis provider
    Analyze {
        /// Simulation input JSON file
        #[arg(long)]
        input: String,

        /// Provider endpoint URL
        #[arg(long)]
        endpoint: String,

        /// Write the validated result JSON here
        #[arg(long)]
        output: Option<String>,
    },

    /// Compare two or more saved result files
    Compare {
        /// Result JSON files (at least two)
        files: Vec<String>,

        /// Export the comparison matrix as CSV
        #[arg(long)]
        csv: Option<String>,
    },

    /// Sweep the projection model over growth and burn grids
    Sweep {
        /// Current ARR in $M
        #[arg(long)]
        current: f64,

        /// Target ARR in $M
        #[arg(long)]
        target: f64,

        /// Comma-separated growth rates (%)
        #[arg(long)]
        growth: String,

        /// Comma-separated burn rates ($K/month)
        #[arg(long)]
        burn: String,

        /// Output CSV path
        #[arg(long, default_value = "output/sweep.csv")]
        csv: String,
    },
}

fn parse_values(s: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    s.split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| e.into()))
        .collect()
}

fn run_project(
    current: f64,
    target: f64,
    burn: f64,
    growth: f64,
    config: &PolicyConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = RunwayInput {
        current_arr_m: current,
        target_arr_m: target,
        burn_rate_k_month: burn,
        growth_rate_pct: growth,
    };
    let projection = project(&input, &config.projection)?;
    println!("Runway projection\n");
    print!("{}", Insights::from_projection(&projection).render());
    Ok(())
}

fn run_score(select: &str, list: bool, config: &PolicyConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = opportunity_catalog();
    if list {
        for op in &catalog {
            println!(
                "  {:<26} impact={:<4} effort={:<4} {}",
                op.id, op.impact, op.effort, op.name
            );
        }
        return Ok(());
    }

    let mut portfolio = Portfolio::new();
    for id in select.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let op = catalog
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| format!("unknown opportunity id: {}", id))?;
        portfolio = portfolio.with(op.clone());
    }

    let assessment = portfolio.assess(&config.portfolio);
    println!("Portfolio assessment\n");
    print!("{}", Insights::from_assessment(&assessment).render());
    if !assessment.sequenced.is_empty() {
        println!("\n  Execution order:");
        for (i, op) in assessment.sequenced.iter().enumerate() {
            println!("    {}. {} (ROI {:.2})", i + 1, op.name, op.roi());
        }
    }
    Ok(())
}

fn run_analyze(
    input_path: &str,
    endpoint: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input_path)?;
    let input: SimulationInput = serde_json::from_str(&text)?;
    input.validate(&external_factors(), &internal_variables())?;

    let provider = HttpAnalysisProvider::new(endpoint);
    let request = AnalysisRequest::new(input, HistoricalContext::default());
    let token = RunToken::new();

    // One-shot CLI run: the token is never cancelled here.
    let result = match run_simulation(&provider, &request, &token)? {
        Some(result) => result,
        None => return Ok(()),
    };

    let mut store = ScenarioStore::new();
    let id = store.save(result.summary.scenario_name.clone(), result);
    let saved = store.get(id).expect("just saved");

    println!("Analysis: {}\n", saved.name);
    print!("{}", Insights::from_result(&saved.result).render());

    if let Some(path) = output_path {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&saved.result)?)?;
        println!("\nResult written to {}", path.display());
    }
    Ok(())
}

fn run_compare(files: &[String], csv: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if files.len() < 2 {
        return Err("compare needs at least two result files".into());
    }

    let mut store = ScenarioStore::new();
    for file in files {
        let text = std::fs::read_to_string(file)?;
        let raw: serde_json::Value = serde_json::from_str(&text)?;
        let result = stratsim::contract::validate_result(raw)?;
        store.save(result.summary.scenario_name.clone(), result);
    }

    let scenarios: Vec<_> = store.iter().collect();
    let comparison = stratsim::compare::compare(&scenarios)?;
    print!("{}", output::render_comparison(&comparison));

    if let Some(path) = csv {
        output::save_comparison_csv(&comparison, std::path::Path::new(path))?;
        println!("Matrix written to {}", path);
    }
    Ok(())
}

fn run_sweep(
    current: f64,
    target: f64,
    growth: &str,
    burn: &str,
    csv: &str,
    config: &PolicyConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let growth_values = parse_values(growth)?;
    let burn_values = parse_values(burn)?;

    let bar = ProgressBar::new(growth_values.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40} {pos}/{len} growth values",
    )?);

    // One grid row per growth value so the bar tracks real progress.
    let mut cells = Vec::new();
    for &g in &growth_values {
        let row = ProjectionSweep {
            current_arr_m: current,
            target_arr_m: target,
            growth_values: vec![g],
            burn_values: burn_values.clone(),
        };
        cells.extend(row.run(&config.projection));
        bar.inc(1);
    }
    bar.finish();

    output::save_sweep_csv(&cells, std::path::Path::new(csv))?;
    println!("{} cells written to {}", cells.len(), csv);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = PolicyConfig::load(&cli.config)?;

    match cli.command {
        Commands::Project {
            current,
            target,
            burn,
            growth,
        } => run_project(current, target, burn, growth, &config),
        Commands::Score { select, list } => run_score(&select, list, &config),
        Commands::Analyze {
            input,
            endpoint,
            output,
        } => run_analyze(&input, &endpoint, output.as_deref()),
        Commands::Compare { files, csv } => run_compare(&files, csv.as_deref()),
        Commands::Sweep {
            current,
            target,
            growth,
            burn,
            csv,
        } => run_sweep(current, target, &growth, &burn, &csv, &config),
    }
}
