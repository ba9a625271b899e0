use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromadist::models::AppConfig;
use chromadist::services::ComparisonService;
use color_metrics::Metric;

#[derive(Parser)]
#[command(name = "chromadist")]
#[command(about = "Compare and rank colors with interchangeable RGB/HSB distance metrics")]
struct Cli {
    /// Config file (defaults to $CHROMADIST_CONFIG, then built-in settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance between two colors
    Distance {
        /// First color as hex (e.g. "#ff0000")
        a: String,

        /// Second color as hex
        b: String,

        /// Metric tag (see `chromadist metrics`)
        #[arg(short, long, conflicts_with = "all")]
        metric: Option<String>,

        /// Report every metric
        #[arg(long)]
        all: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Closest entry of a configured palette
    Nearest {
        /// Query color as hex
        color: String,

        /// Palette name from the config
        #[arg(short, long)]
        palette: String,

        /// Metric tag (see `chromadist metrics`)
        #[arg(short, long)]
        metric: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// All entries of a configured palette by ascending distance
    Rank {
        /// Query color as hex
        color: String,

        /// Palette name from the config
        #[arg(short, long)]
        palette: String,

        /// Metric tag (see `chromadist metrics`)
        #[arg(short, long)]
        metric: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List available metric tags
    Metrics,
    /// List configured palettes
    Palettes,
    /// Write the default config file
    Init {
        /// Output path
        #[arg(short, long, default_value = "chromadist.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromadist=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { output, force } => {
            AppConfig::write_default(&output, force)?;
            println!("Wrote {}", output.display());
            Ok(())
        }
        Commands::Metrics => {
            run_metrics_command();
            Ok(())
        }
        Commands::Distance {
            a,
            b,
            metric,
            all,
            json,
        } => {
            let service = load_service(cli.config)?;
            let a = ComparisonService::parse_color(&a)?;
            let b = ComparisonService::parse_color(&b)?;
            let comparisons = if all {
                service.compare_all(a, b)
            } else {
                let metric = service.resolve_metric(metric.as_deref())?;
                vec![service.compare(a, b, metric)]
            };

            if json {
                if all {
                    println!("{}", serde_json::to_string_pretty(&comparisons)?);
                } else {
                    println!("{}", serde_json::to_string_pretty(&comparisons[0])?);
                }
            } else {
                for comparison in &comparisons {
                    println!("{comparison}");
                }
            }
            Ok(())
        }
        Commands::Nearest {
            color,
            palette,
            metric,
            json,
        } => {
            let service = load_service(cli.config)?;
            let color = ComparisonService::parse_color(&color)?;
            let metric = service.resolve_metric(metric.as_deref())?;
            let nearest = service.nearest(color, &palette, metric)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&nearest)?);
            } else {
                println!("{nearest}");
            }
            Ok(())
        }
        Commands::Rank {
            color,
            palette,
            metric,
            json,
        } => {
            let service = load_service(cli.config)?;
            let color = ComparisonService::parse_color(&color)?;
            let metric = service.resolve_metric(metric.as_deref())?;
            let ranked = service.rank(color, &palette, metric)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                for entry in &ranked {
                    println!("{entry}");
                }
            }
            Ok(())
        }
        Commands::Palettes => {
            let service = load_service(cli.config)?;
            for (name, colors) in &service.config().palettes {
                println!("{name}: {}", colors.join(" "));
            }
            Ok(())
        }
    }
}

/// Load config (explicit path, env var, or defaults) and build the service
fn load_service(config_path: Option<PathBuf>) -> anyhow::Result<ComparisonService> {
    let config = AppConfig::resolve(config_path.as_deref())?;
    Ok(ComparisonService::new(config)?)
}

/// Print every metric tag with its basis and caveats
fn run_metrics_command() {
    for metric in Metric::ALL {
        let mut notes = Vec::new();
        if metric.is_cancelling() {
            notes.push("signed terms cancel");
        }
        if metric.may_be_non_finite() {
            notes.push("similarity, NaN for black");
        }
        if notes.is_empty() {
            println!("{:<16} {}", metric.name(), metric.basis());
        } else {
            println!(
                "{:<16} {}  ({})",
                metric.name(),
                metric.basis(),
                notes.join("; ")
            );
        }
    }
}
