//! coordkit CLI
//!
//! Run the correctness checks and the distance benchmarks from the command
//! line.
//!
//! Usage:
//!     coordkit                      # interactive menu
//!     coordkit test
//!     coordkit bench --pairs 100000 --seed 42
//!     coordkit bench --planar-radius 1,100 --spatial-radius 10,100
//!     coordkit all --json

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use coordkit::adapters::{bench, verify, ConsoleReport, JsonReport};
use coordkit::{BenchConfig, RadiusRange, Report, VerifySummary};

/// coordkit - coordinate conversions and distance benchmarks
#[derive(Parser)]
#[command(name = "coordkit")]
#[command(version)]
#[command(about = "Cartesian / polar / spherical conversions and distance benchmarks", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the conversion and distance correctness checks
    Test {
        /// Emit one JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Benchmark the distance formulas
    Bench(BenchArgs),

    /// Checks, then benchmarks
    All(BenchArgs),

    /// Interactive menu (the default)
    Menu,
}

#[derive(Args, Clone)]
struct BenchArgs {
    /// Point pairs per batch
    #[arg(short, long, default_value = "100000")]
    pairs: usize,

    /// Seed for data generation
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Radius band for planar points
    #[arg(long, value_name = "MIN,MAX")]
    planar_radius: Option<RadiusRange>,

    /// Radius band for spatial points
    #[arg(long, value_name = "MIN,MAX")]
    spatial_radius: Option<RadiusRange>,

    /// Emit one JSON document instead of text
    #[arg(long)]
    json: bool,
}

impl BenchArgs {
    fn config(&self) -> BenchConfig {
        let mut config = BenchConfig::new(self.pairs).with_seed(self.seed);
        if let Some(range) = self.planar_radius {
            config = config.with_planar_radius(range);
        }
        if let Some(range) = self.spatial_radius {
            config = config.with_spatial_radius(range);
        }
        config
    }
}

impl Default for BenchArgs {
    fn default() -> Self {
        let config = BenchConfig::default();
        Self {
            pairs: config.pairs,
            seed: config.seed,
            planar_radius: None,
            spatial_radius: None,
            json: false,
        }
    }
}

/// Which drivers a run includes
#[derive(Clone, Copy, PartialEq, Eq)]
enum Plan {
    Checks,
    Benchmarks,
    Both,
}

fn reporter(json: bool) -> Box<dyn Report> {
    if json {
        Box::new(JsonReport::stdout())
    } else {
        Box::new(ConsoleReport::stdout())
    }
}

fn run_plan(
    plan: Plan,
    config: &BenchConfig,
    report: &mut dyn Report,
) -> coordkit::Result<VerifySummary> {
    let mut summary = VerifySummary::default();

    if plan != Plan::Benchmarks {
        summary = verify::run(report)?;
    }
    if plan != Plan::Checks {
        bench::run(config, report)?;
    }

    Ok(summary)
}

/// Run `plan`, then flush `report` whether or not the run failed
fn drive(
    plan: Plan,
    config: &BenchConfig,
    report: &mut dyn Report,
) -> coordkit::Result<VerifySummary> {
    let outcome = run_plan(plan, config, report);
    let finished = report.finish();

    let summary = outcome?;
    finished?;
    Ok(summary)
}

fn execute(plan: Plan, args: &BenchArgs) -> coordkit::Result<VerifySummary> {
    let mut report = reporter(args.json);
    drive(plan, &args.config(), report.as_mut())
}

fn exit_code(result: coordkit::Result<VerifySummary>) -> ExitCode {
    match result {
        Ok(summary) if summary.all_passed() => ExitCode::SUCCESS,
        Ok(summary) => {
            error!(failed = summary.failed, "correctness checks failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_menu() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║              COORDINATE SYSTEMS - CONVERSIONS & DISTANCES        ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  1. Run correctness checks                                       ║");
    println!("║  2. Run benchmarks                                               ║");
    println!("║  3. Run both                                                     ║");
    println!("║  4. Quit                                                         ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
}

fn prompt(stdin: &mut impl BufRead, message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match stdin.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn interactive() -> ExitCode {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let args = BenchArgs::default();
    let mut code = ExitCode::SUCCESS;

    loop {
        print_menu();
        let Some(choice) = prompt(&mut stdin, "\nYour choice (1-4): ") else {
            break;
        };

        let plan = match choice.as_str() {
            "1" => Plan::Checks,
            "2" => Plan::Benchmarks,
            "3" => Plan::Both,
            "4" | "q" | "quit" => {
                println!("\nGoodbye!\n");
                break;
            }
            _ => {
                println!("\nInvalid choice. Try again.");
                continue;
            }
        };

        code = exit_code(execute(plan, &args));

        if prompt(&mut stdin, "\nPress Enter to continue...").is_none() {
            break;
        }
    }

    code
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        None | Some(Commands::Menu) => interactive(),
        Some(Commands::Test { json }) => {
            let args = BenchArgs {
                json,
                ..BenchArgs::default()
            };
            exit_code(execute(Plan::Checks, &args))
        }
        Some(Commands::Bench(args)) => exit_code(execute(Plan::Benchmarks, &args)),
        Some(Commands::All(args)) => exit_code(execute(Plan::Both, &args)),
    }
}
