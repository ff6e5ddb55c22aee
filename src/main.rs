use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routesage::cli::OutputFormat;
use routesage::cli::commands;
use routesage::types::Preferences;

#[derive(Parser)]
#[command(name = "routesage")]
#[command(
    version,
    about = "AI travel-route insight and recommendation engine for intercity bus journeys"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the route catalog
    Routes {
        #[command(subcommand)]
        action: RoutesAction,
    },

    /// Generate AI insights for a catalog route
    Insights {
        #[arg(help = "Route id (see 'routes list')")]
        route_id: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate personalized journey recommendations
    Recommend {
        origin: String,
        destination: String,
        #[arg(long, help = "Budget preference, free text")]
        budget: Option<String>,
        #[arg(long, help = "Preferred travel time, free text")]
        travel_time: Option<String>,
        #[arg(long, help = "Comfort level preference")]
        comfort: Option<String>,
        #[arg(long = "need", help = "Additional-need tag (repeatable)")]
        needs: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Ask the model to analyze and enhance routes for a journey
    Enhance {
        origin: String,
        destination: String,
        #[arg(long, help = "Travel mode, e.g. \"BUS ONLY\", \"TRAIN + BUS\"")]
        mode: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RoutesAction {
    /// List every route in the catalog
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find routes for a journey
    Find {
        origin: String,
        destination: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show configuration file paths
    Path,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Routes { action } => match action {
            RoutesAction::List { format } => commands::routes::list(format)?,
            RoutesAction::Find {
                origin,
                destination,
                format,
            } => commands::routes::find(&origin, &destination, format)?,
        },
        Commands::Insights { route_id, format } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::insights::run(&route_id, format))?;
        }
        Commands::Recommend {
            origin,
            destination,
            budget,
            travel_time,
            comfort,
            needs,
            format,
        } => {
            let preferences = Preferences {
                budget,
                travel_time,
                comfort,
                additional_needs: needs,
            };
            let rt = Runtime::new()?;
            rt.block_on(commands::recommend::run(
                &origin,
                &destination,
                preferences,
                format,
            ))?;
        }
        Commands::Enhance {
            origin,
            destination,
            mode,
            format,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::enhance::run(
                &origin,
                &destination,
                mode.as_deref(),
                format,
            ))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => commands::config::show(format)?,
            ConfigAction::Path => commands::config::path()?,
        },
    }

    Ok(())
}
