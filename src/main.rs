//! Startup Projector CLI
//!
//! Runs cash-flow projections, scenario batches and sensitivity grids, and
//! assembles dry-run consultant reports.

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use startup_projector::inputs::{load_input, load_scenarios};
use startup_projector::report::{
    format_table, render_text, write_table_csv, BusinessProfile, PromptPreviewWriter, ReportBuilder,
};
use startup_projector::{AppConfig, ProjectionInput, ProjectionSummary, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "startup-projector", version, about = "Startup cash-flow projections and consultant reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project a single set of financial parameters
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Write the full table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Run every scenario in a CSV file
    Batch {
        scenarios: PathBuf,
    },
    /// Final cash flow across growth and churn rates
    Sensitivity {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, value_delimiter = ',', default_value = "0.1,0.2,0.3")]
        growth: Vec<f64>,

        #[arg(long, value_delimiter = ',', default_value = "0.05,0.1,0.2")]
        churn: Vec<f64>,
    },
    /// Assemble a dry-run consultant report (sections contain their prompts)
    Report {
        #[command(flatten)]
        params: ParamArgs,

        /// File holding the business plan text
        #[arg(long)]
        plan: PathBuf,

        #[arg(long, default_value = "")]
        personality: String,

        /// File holding psychometric insights
        #[arg(long)]
        psychometric: Option<PathBuf>,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Financial parameters; flags override values loaded from `--input`
#[derive(Debug, Args)]
struct ParamArgs {
    /// JSON file with projection parameters
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    initial_users: Option<f64>,
    #[arg(long)]
    fee: Option<f64>,
    #[arg(long)]
    churn: Option<f64>,
    #[arg(long)]
    growth_rate: Option<f64>,
    #[arg(long)]
    fixed_cost: Option<f64>,
    #[arg(long)]
    var_cost: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    months: Option<i64>,
}

impl ParamArgs {
    fn resolve(&self) -> Result<ProjectionInput> {
        let mut input = match &self.input {
            Some(path) => load_input(path)
                .map_err(|e| anyhow!("{}", e))
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => ProjectionInput::default(),
        };

        if let Some(v) = self.initial_users { input.initial_users = v; }
        if let Some(v) = self.fee { input.fee = v; }
        if let Some(v) = self.churn { input.churn_rate = v; }
        if let Some(v) = self.growth_rate { input.growth_rate = v; }
        if let Some(v) = self.fixed_cost { input.fixed_cost = v; }
        if let Some(v) = self.var_cost { input.variable_cost = v; }
        if let Some(v) = self.months { input.months = v; }

        input.validate()?;
        Ok(input)
    }
}

fn print_summary(summary: &ProjectionSummary) {
    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total Revenue: ${:.2}", summary.total_revenue);
    println!("  Total Cost: ${:.2}", summary.total_cost);
    println!("  Final Users: {:.2}", summary.final_users);
    println!("  Final Cash Flow: ${:.2}", summary.final_cash_flow);
    println!("  Peak Funding Need: ${:.2}", 0.0 - summary.min_cash_flow);
    match summary.breakeven_month {
        Some(m) => println!("  Breakeven: month {}", m),
        None => println!("  Breakeven: not reached"),
    }
}

fn run_project(params: &ParamArgs, csv: Option<PathBuf>) -> Result<()> {
    let input = params.resolve()?;
    let result = ScenarioRunner::strict().run(&input)?;

    println!("Projection Results ({} months):", result.rows.len());
    print!("{}", format_table(&result.rows));
    print_summary(&result.summary());

    if let Some(path) = csv {
        let file = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
        write_table_csv(&result.rows, BufWriter::new(file))?;
        println!("\nFull results written to: {}", path.display());
    }
    Ok(())
}

fn run_batch(path: PathBuf) -> Result<()> {
    let scenarios = load_scenarios(&path)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
    let outcomes = ScenarioRunner::strict().run_batch(&scenarios)?;

    println!("{:<20} {:>6} {:>14} {:>14} {:>10}", "Scenario", "Months", "Final CF", "Funding Need", "Breakeven");
    println!("{}", "-".repeat(68));
    for outcome in &outcomes {
        let s = outcome.result.summary();
        println!(
            "{:<20} {:>6} {:>14.2} {:>14.2} {:>10}",
            outcome.name,
            s.total_months,
            s.final_cash_flow,
            0.0 - s.min_cash_flow,
            s.breakeven_month.map_or_else(|| "-".to_string(), |m| m.to_string()),
        );
    }
    Ok(())
}

fn run_sensitivity(params: &ParamArgs, growth: &[f64], churn: &[f64]) -> Result<()> {
    let base = params.resolve()?;
    let cells = ScenarioRunner::strict().sensitivity_grid(&base, growth, churn)?;

    println!("Final cash flow after {} months (rows: growth, columns: churn)", base.months);
    print!("{:>8}", "");
    for c in churn {
        print!(" {:>14.3}", c);
    }
    println!();
    for (row, g) in cells.chunks(churn.len().max(1)).zip(growth) {
        print!("{:>8.3}", g);
        for cell in row {
            print!(" {:>14.2}", cell.summary.final_cash_flow);
        }
        println!();
    }
    Ok(())
}

fn run_report(
    params: &ParamArgs,
    plan: PathBuf,
    personality: String,
    psychometric: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => AppConfig::load(&path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    }
    .with_env_overrides();

    let profile = BusinessProfile {
        business_plan: fs::read_to_string(&plan).with_context(|| format!("failed to read {}", plan.display()))?,
        personality_type: personality,
        psychometric: match psychometric {
            Some(path) => fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?,
            None => String::new(),
        },
    };
    let input = params.resolve()?;

    let writer = PromptPreviewWriter::new(config.generation.clone());
    let report = ReportBuilder::new(&writer).build(&profile, &input, Utc::now())?;

    fs::write(&config.output.report_path, render_text(&report))
        .with_context(|| format!("unable to write {}", config.output.report_path.display()))?;
    let file = File::create(&config.output.table_csv)
        .with_context(|| format!("unable to create {}", config.output.table_csv.display()))?;
    write_table_csv(&report.projection.rows, BufWriter::new(file))?;

    println!("Report generated: {}", config.output.report_path.display());
    println!("Projection table: {}", config.output.table_csv.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Project { params, csv } => run_project(&params, csv),
        Command::Batch { scenarios } => run_batch(scenarios),
        Command::Sensitivity { params, growth, churn } => run_sensitivity(&params, &growth, &churn),
        Command::Report { params, plan, personality, psychometric, config } => {
            run_report(&params, plan, personality, psychometric, config)
        }
    }
}
