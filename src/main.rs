use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use esg_dashboard::config::DashboardConfig;
use esg_dashboard::dashboard::DashboardView;
use esg_dashboard::export::ExportFormat;
use esg_dashboard::output;
use esg_dashboard::rank::SortKey;
use esg_dashboard::report::{self, ReportOptions};
use esg_dashboard::store::MetricsStore;
use esg_dashboard::Result;

#[derive(Parser)]
#[command(
    name = "esg-dashboard",
    about = "ESG impact dashboard for corporate waste-collection programmes"
)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset JSON, overrides the config and the built-in sample
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Time-series CSV applied on top of the dataset
    #[arg(long, global = true)]
    series: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print headline totals, grade, waste-type shares and equivalents
    Summary,

    /// Print the company ranking
    Rank {
        /// co2, collection or participants
        #[arg(long)]
        by: Option<SortKey>,
    },

    /// Render the HTML dashboard
    Report {
        /// Output HTML file (defaults to <output_dir>/dashboard.html)
        #[arg(long)]
        output: Option<PathBuf>,

        /// co2, collection or participants
        #[arg(long)]
        sort_by: Option<SortKey>,
    },

    /// Write the dashboard view model as JSON
    Snapshot {
        /// Output JSON file (defaults to <output_dir>/dashboard.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// co2, collection or participants
        #[arg(long)]
        sort_by: Option<SortKey>,
    },

    /// Describe a PDF / Excel / PNG export (demo only, nothing is written)
    Export {
        /// pdf, excel or png
        #[arg(long)]
        format: ExportFormat,
    },

    /// Write a config file with default settings
    InitConfig {
        #[arg(long, default_value = "dashboard.toml")]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(dataset) = &cli.dataset {
        config.dataset = Some(dataset.clone());
    }
    if let Some(series) = &cli.series {
        config.series = Some(series.clone());
    }
    Ok(config)
}

fn load_store(config: &DashboardConfig) -> Result<MetricsStore> {
    let mut store = match &config.dataset {
        Some(path) => {
            info!(path = %path.display(), "loading dataset");
            MetricsStore::from_json_path(path)?
        }
        None => MetricsStore::builtin()?,
    };
    if let Some(path) = &config.series {
        info!(path = %path.display(), "loading time series");
        store.load_time_series_csv(path)?;
    }
    Ok(store)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Summary => {
            let store = load_store(&config)?;
            let view = DashboardView::build(&store, config.default_sort)?;
            print!("{}", output::format_summary(&view));
        }

        Commands::Rank { by } => {
            let store = load_store(&config)?;
            let view = DashboardView::build(&store, by.unwrap_or(config.default_sort))?;
            print!("{}", output::format_ranking(&view));
        }

        Commands::Report { output, sort_by } => {
            let store = load_store(&config)?;
            let view = DashboardView::build(&store, sort_by.unwrap_or(config.default_sort))?;
            let generated_at = chrono::Local::now().naive_local();
            let options = ReportOptions::from_config(&config, Some(generated_at));
            let html = report::generate_report(&view, &options);

            let path = output.unwrap_or_else(|| config.output_dir.join("dashboard.html"));
            report::save_report(&html, &path)?;
            println!(
                "Dashboard for {} companies (grade {}) -> {}",
                view.company_count,
                view.grade.letter(),
                path.display()
            );
        }

        Commands::Snapshot {
            output: out_path,
            sort_by,
        } => {
            let store = load_store(&config)?;
            let view = DashboardView::build(&store, sort_by.unwrap_or(config.default_sort))?;
            let path = out_path.unwrap_or_else(|| config.output_dir.join("dashboard.json"));
            output::save_snapshot_json(&view, &path)?;
            println!("Saved dashboard snapshot to {}", path.display());
        }

        Commands::Export { format } => {
            print!("{}", format.notice());
        }

        Commands::InitConfig { output } => {
            config.save(&output)?;
            println!("Wrote config to {}", output.display());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
