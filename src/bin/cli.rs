//! Quick Commerce Dashboard CLI
//!
//! Command-line view of the dashboard:
//! - Show a tab
//! - Print metric groups
//! - Print chart configurations
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use quickcommerce::config::{generate_default_config, LoggingConfig};
use quickcommerce::dashboard::remote::{HttpMetricsSource, RemoteConfig};
use quickcommerce::dashboard::router::LOADING_PLACEHOLDER;
use quickcommerce::dashboard::{
    chart, render_state, ChartKind, DataLoader, GroupKind, LoadReport, MetricsSource,
    StaticSource, Tab, ViewState,
};
use quickcommerce::text;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qc-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quick Commerce Dynamics dashboard in the terminal")]
#[command(long_about = "Systems-thinking dashboard on 10-minute delivery.
Shows metrics, trends, causal loops, leverage points and the roadmap.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one dashboard tab
    Show {
        /// overview, data, analysis or solutions (unknown names show the overview)
        #[arg(short, long, default_value = "overview")]
        tab: String,
        /// Metrics provider base URL (default: built-in snapshot)
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Print metric groups
    Metrics {
        /// Only this group (delivery, consumer, environment, labor)
        #[arg(short, long)]
        group: Option<String>,
        /// Metrics provider base URL (default: built-in snapshot)
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Print trend chart configurations
    Charts {
        /// Render delivery performance as line or bar
        #[arg(short, long, value_enum, default_value_t = KindArg::Bar)]
        kind: KindArg,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Line,
    Bar,
}

impl From<KindArg> for ChartKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Line => ChartKind::Line,
            KindArg::Bar => ChartKind::Bar,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    quickcommerce::logging::init(&LoggingConfig {
        level: cli.log_level.clone(),
        ..Default::default()
    })?;

    match cli.command {
        Commands::Show { tab, source } => {
            let mut state = load_state(source.as_deref()).await?;
            state.select(Tab::from_tag(&tab));
            let block = render_state(&state);

            match cli.format {
                Format::Text => print!("{}", text::render_page(&block)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&block)?),
            }
        }

        Commands::Metrics { group, source } => {
            let state = load_state(source.as_deref()).await?;
            let kinds = match group {
                Some(name) => vec![name.parse::<GroupKind>()?],
                None => GroupKind::ALL.to_vec(),
            };

            match cli.format {
                Format::Json => {
                    let groups: Vec<_> = kinds
                        .iter()
                        .filter_map(|kind| state.groups().get(*kind))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&groups)?);
                }
                Format::Text => {
                    for kind in kinds {
                        println!("{}", kind.title());
                        match state.groups().get(kind) {
                            Some(group) => {
                                for field in group.fields() {
                                    println!("  {:<30} {}", field.label, field.display);
                                }
                            }
                            None => println!("  {}", LOADING_PLACEHOLDER),
                        }
                        println!();
                    }
                }
            }
        }

        Commands::Charts { kind } => {
            let charts = [
                chart::order_volume_chart(),
                chart::delivery_performance_chart(kind.into()),
            ];
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&charts)?),
                Format::Text => {
                    for chart in &charts {
                        println!("{} ({:?})", chart.title, chart.kind);
                        for ds in &chart.data.datasets {
                            let values: Vec<_> = chart
                                .data
                                .labels
                                .iter()
                                .zip(&ds.data)
                                .map(|(label, value)| format!("{}={}", label, value))
                                .collect();
                            println!("  {}: {}", ds.label, values.join(" "));
                        }
                        let y = chart.options.scales.y;
                        match y.max {
                            Some(max) => println!("  y-axis: 0 to {}", max),
                            None => println!("  y-axis: auto"),
                        }
                        println!();
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Fresh view state with metric groups loaded from the chosen source
async fn load_state(source: Option<&str>) -> anyhow::Result<ViewState> {
    let mut state = ViewState::new();

    let report = match source {
        Some(url) => {
            let remote = HttpMetricsSource::new(RemoteConfig::new(url))?;
            load_from(remote, &mut state).await
        }
        None => load_from(StaticSource, &mut state).await,
    };

    for (kind, error) in &report.failed {
        eprintln!("warning: {} metrics unavailable: {}", kind, error);
    }
    if report.loaded.is_empty() && !report.failed.is_empty() {
        bail!("no metric groups could be loaded");
    }

    Ok(state)
}

async fn load_from<S: MetricsSource>(source: S, state: &mut ViewState) -> LoadReport {
    DataLoader::new(source).load_into(state).await
}
