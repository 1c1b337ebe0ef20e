//! Kitchen Planner - headless scenario runner
//!
//! Replays a JSON scenario against a fresh kitchen and prints the resulting
//! layout together with the work-triangle report.

use clap::Parser;
use kitchen_planner::core::config::PlannerConfig;
use kitchen_planner::core::error::Result;
use kitchen_planner::kitchen::KitchenItem;
use kitchen_planner::triangle::TriangleReport;
use kitchen_planner::world::{ScenarioFile, StepLog};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Run a kitchen layout scenario and report the work triangle
#[derive(Parser, Debug)]
#[command(name = "kitchen-planner")]
#[command(about = "Replay a kitchen layout scenario and validate the work triangle")]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,

    /// TOML file overriding the planner thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult<'a> {
    scenario: Option<String>,
    placed: Vec<&'a KitchenItem>,
    report: &'a TriangleReport,
    completed: bool,
    steps: &'a [StepLog],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kitchen_planner=info")),
        )
        .init();

    let args = Args::parse();

    let scenario = ScenarioFile::load(&args.scenario)?;
    let config = match &args.config {
        Some(path) => Some(PlannerConfig::load_from_toml(path)?),
        None => None,
    };

    tracing::info!(
        "Running scenario {:?} ({} steps)",
        args.scenario,
        scenario.steps.len()
    );
    let (world, steps) = scenario.run(config)?;

    let result = RunResult {
        scenario: scenario.metadata.as_ref().and_then(|m| m.name.clone()),
        placed: world.placed_items().collect(),
        report: world.triangle_report(),
        completed: world.is_completed(),
        steps: &steps,
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_text(&result);
    }

    Ok(())
}

fn print_text(result: &RunResult) {
    if let Some(name) = &result.scenario {
        println!("=== {} ===", name);
    }

    println!("\nSteps:");
    for step in result.steps {
        let status = if step.ok { "ok" } else { "FAILED" };
        match &step.message {
            Some(message) => println!("  [{}] {:<8} {} - {}", step.index, step.action, status, message),
            None => println!("  [{}] {:<8} {}", step.index, step.action, status),
        }
    }

    println!("\nPlaced items:");
    for item in &result.placed {
        println!(
            "  {:>4} {:<24} at ({:.2}, {:.2}, {:.2}) rot {:.2} width {:.3}m",
            item.id.to_string(),
            item.name,
            item.position.x,
            item.position.y,
            item.position.z,
            item.rotation,
            item.dimensions.width
        );
    }

    println!("\nWork triangle:");
    let report = result.report;
    match &report.sides {
        Some(sides) => {
            println!("  Sink - Stove:         {:.2}m", sides.sink_stove);
            println!("  Sink - Refrigerator:  {:.2}m", sides.sink_refrigerator);
            println!("  Stove - Refrigerator: {:.2}m", sides.stove_refrigerator);
            println!("  Valid: {}", report.is_valid);
        }
        None => println!("  Incomplete (sink, stove and refrigerator required)"),
    }
    for violation in &report.violations {
        println!("  ! {}", violation);
    }

    println!("\nSession completed: {}", result.completed);
}
