use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use deviceinfo_cli::classifier::{Classification, WindowGeometry};
use deviceinfo_cli::core_types::{Metric, TargetId};
use deviceinfo_cli::diagnostics::TracingConsole;
use deviceinfo_cli::metric_reader::SnapshotEnvironment;
use deviceinfo_cli::output::{
    parse_position, parse_size, render_classification, render_inspection, OutputFormat,
};
use deviceinfo_cli::presenter::{MemoryPage, PageTemplate};
use deviceinfo_cli::telemetry::init_logging;
use deviceinfo_cli::{load_configuration, DeviceInfo, DeviceInfoConfig};
use tracing::{debug, error, info};

/// DeviceInfo - window and screen geometry at a glance
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (defaults to the configured one)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a captured host and fill the page targets
    Inspect(InspectArgs),

    /// Classify window geometry given on the command line
    Classify(ClassifyArgs),

    /// List the standard page targets
    Targets,

    /// Show version and active configuration
    Info,
}

#[derive(Args)]
struct InspectArgs {
    /// Host snapshot (json/yaml)
    #[arg(long, value_name = "FILE")]
    host: PathBuf,

    /// Page template (json/yaml); defaults to every standard target
    #[arg(long, value_name = "FILE")]
    page: Option<PathBuf>,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Outer window size, WIDTHxHEIGHT
    #[arg(long)]
    outer: String,

    /// Available screen size, WIDTHxHEIGHT
    #[arg(long)]
    avail: String,

    /// Window position on the screen, X,Y
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    position: String,

    /// Window is in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_configuration(cli.config.as_deref()).context("Failed to load configuration")?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level, cli.debug).context("Invalid log level")?;

    debug!("Starting DeviceInfo v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect(args, &config, cli.output),
        Commands::Classify(args) => cmd_classify(args, &config, cli.output),
        Commands::Targets => cmd_targets(),
        Commands::Info => cmd_info(&config),
    };

    match result {
        Ok(()) => {
            debug!("Command completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_inspect(args: InspectArgs, config: &DeviceInfoConfig, output: OutputFormat) -> Result<()> {
    let env = SnapshotEnvironment::from_path(&args.host)
        .with_context(|| format!("Failed to load host snapshot {}", args.host.display()))?;
    let page = match &args.page {
        Some(path) => {
            let template = PageTemplate::from_path(path)
                .with_context(|| format!("Failed to load page template {}", path.display()))?;
            MemoryPage::from_template(&template)?
        }
        None => MemoryPage::standard(),
    };

    let mut app = DeviceInfo::new(env, page, TracingConsole).with_thresholds(config.thresholds);
    let report = app.execute();
    info!(
        run_id = %report.run_id,
        written = report.written_count(),
        "Inspection finished"
    );

    let rendered = render_inspection(output, &report, app.page())?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn cmd_classify(args: ClassifyArgs, config: &DeviceInfoConfig, output: OutputFormat) -> Result<()> {
    let outer = parse_size(&args.outer)?;
    let avail = parse_size(&args.avail)?;
    let position = parse_position(&args.position)?;

    let mut geometry = WindowGeometry::from_numbers(outer, avail, position);
    geometry.fullscreen = Metric::Flag(args.fullscreen);

    let labels = Classification::of(&geometry, &config.thresholds);
    print!("{}", render_classification(output, &labels)?);
    if output != OutputFormat::Human {
        println!();
    }
    Ok(())
}

fn cmd_targets() -> Result<()> {
    for target in TargetId::ALL {
        println!("{:<24} {}", target.as_str(), target.label());
    }
    Ok(())
}

fn cmd_info(config: &DeviceInfoConfig) -> Result<()> {
    println!("DeviceInfo v{}", env!("CARGO_PKG_VERSION"));
    println!("Build Date: {}", env!("BUILD_DATE"));
    println!("Git Commit: {}", env!("GIT_HASH"));
    println!("Log Level: {}", config.log_level);
    println!(
        "Minimized Size: {}x{}",
        Metric::Number(config.thresholds.minimized_width),
        Metric::Number(config.thresholds.minimized_height)
    );
    Ok(())
}
