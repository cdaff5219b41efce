//! Skill graph CLI: résumé and job-description analysis against a local snapshot

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use skillgraph::{
    AnalysisProfile, AnalysisRequest, Analyzer, EngineConfig, FileSource, GapReport, SkillGraph,
    SnapshotWatcher,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skillgraph", version, about = "Skill graph analysis CLI")]
struct Cli {
    /// Snapshot JSON file (defaults to reload.snapshot_path from the config)
    #[arg(long, global = true, env = "SKILLGRAPH_SNAPSHOT")]
    graph: Option<PathBuf>,

    /// YAML engine config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a résumé or bio and suggest bridge skills
    Profile {
        /// Text file, or - for stdin
        input: String,

        /// Comma-separated skills that replace text matching
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Years of experience, overriding extraction
        #[arg(long)]
        years: Option<u32>,

        /// Extra context for seniority cues
        #[arg(long)]
        details: Option<String>,
    },
    /// Analyze a job description
    Job {
        /// Text file, or - for stdin
        input: String,
    },
    /// Compare a résumé against a job description
    Gap {
        #[arg(long)]
        profile: String,

        #[arg(long)]
        job: String,
    },
    /// Skills one link away
    Neighbors { skill: String },
    /// Shortest link path between two skills
    Path { from: String, to: String },
    /// Snapshot counters
    Stats,
    /// Keep the snapshot loaded and reload it on change until Ctrl-C
    Watch,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileOutput<'a> {
    profile: &'a AnalysisProfile,
    bridges: &'a [String],
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let Some(snapshot_path) = cli.graph.clone().or_else(|| config.reload.snapshot_path.clone()) else {
        bail!("no snapshot given: pass --graph or set reload.snapshot_path");
    };
    let source = FileSource::new(snapshot_path);
    let graph = Arc::new(SkillGraph::new());

    if !matches!(cli.command, Commands::Watch) {
        graph
            .reload_from(&source)
            .with_context(|| format!("loading snapshot {}", source.path().display()))?;
    }
    let analyzer = Analyzer::new(graph, config);

    match cli.command {
        Commands::Profile { input, skills, years, details } => {
            let mut request = AnalysisRequest::new(read_input(&input)?);
            if !skills.is_empty() {
                request = request.with_manual_skills(skills);
            }
            request.manual_years = years;
            request.additional_details = details;
            run_profile(&analyzer, &request, &cli.format)
        }
        Commands::Job { input } => {
            let profile = analyzer.analyze_target(&AnalysisRequest::new(read_input(&input)?));
            print_profile(&profile, None, &cli.format)
        }
        Commands::Gap { profile, job } => {
            let subject = analyzer.analyze_subject(&AnalysisRequest::new(read_input(&profile)?));
            let target = analyzer.analyze_target(&AnalysisRequest::new(read_input(&job)?));
            let report = analyzer.analyze_gap(&subject, &target);
            print_gap(&report, &cli.format)
        }
        Commands::Neighbors { skill } => {
            let neighbors: Vec<String> = analyzer.graph().neighbors(&skill).into_iter().collect();
            println!("{}", render_list("Neighbor", &neighbors, None, &cli.format)?);
            Ok(())
        }
        Commands::Path { from, to } => {
            let path = analyzer.graph().shortest_path(&from, &to);
            println!("{}", render_list("Step", &path, Some("(no path)"), &cli.format)?);
            Ok(())
        }
        Commands::Stats => {
            let stats = analyzer.graph().current().statistics();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Table => {
                    println!("Nodes:      {}", stats.node_count);
                    println!("Links:      {}", stats.link_count);
                    println!("Dangling:   {}", stats.dangling_link_count);
                    println!("Components: {} (largest {})", stats.component_count, stats.largest_component);
                    println!("Max phrase: {} tokens", stats.max_phrase_len);
                }
            }
            Ok(())
        }
        Commands::Watch => run_watch(analyzer.graph().clone(), source, analyzer.config()).await,
    }
}

async fn run_watch(graph: Arc<SkillGraph>, source: FileSource, config: &EngineConfig) -> Result<()> {
    // A broken snapshot at startup leaves the empty graph active; the next good write recovers.
    if let Err(e) = graph.reload_from(&source) {
        eprintln!("Warning: {}", e);
    }

    let handle = SnapshotWatcher::spawn(graph, source, config.reload.debounce())
        .context("starting snapshot watcher")?;
    tracing::info!("Watching for snapshot changes; press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;
    handle.shutdown();
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(Path::new(input)).with_context(|| format!("reading {}", input))
}

fn run_profile(analyzer: &Analyzer, request: &AnalysisRequest, format: &OutputFormat) -> Result<()> {
    let profile = analyzer.analyze_subject(request);
    let bridges = analyzer.suggest_bridges(&profile);
    print_profile(&profile, Some(bridges.as_slice()), format)
}

fn print_profile(profile: &AnalysisProfile, bridges: Option<&[String]>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => match bridges {
            Some(bridges) => println!(
                "{}",
                serde_json::to_string_pretty(&ProfileOutput { profile, bridges })?
            ),
            None => println!("{}", serde_json::to_string_pretty(profile)?),
        },
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Field", "Value"]);
            table.add_row(vec!["Kind".to_string(), format!("{:?}", profile.kind)]);
            table.add_row(vec!["Level".to_string(), profile.level.to_string()]);
            table.add_row(vec!["Years".to_string(), profile.years_of_experience.to_string()]);
            table.add_row(vec!["Seniority".to_string(), format!("{:.2}", profile.seniority_score)]);
            table.add_row(vec!["Skills".to_string(), profile.skills.to_vec().join(", ")]);
            if let Some(bridges) = bridges {
                table.add_row(vec!["Bridges".to_string(), bridges.join(", ")]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_gap(report: &GapReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Field", "Value"]);
            table.add_row(vec!["Missing".to_string(), report.missing_skills.join(", ")]);
            table.add_row(vec!["Implicit".to_string(), report.implicit_skills.join(", ")]);
            table.add_row(vec!["Mismatch".to_string(), report.seniority_mismatch.to_string()]);
            table.add_row(vec!["Message".to_string(), report.message.clone()]);
            println!("{}", table);
        }
    }
    Ok(())
}

/// Render `items` as JSON or a numbered table.
///
/// JSON output is always a valid array; `empty_note` only replaces an empty table.
fn render_list(
    header: &str,
    items: &[String],
    empty_note: Option<&str>,
    format: &OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Table => {
            if let (true, Some(note)) = (items.is_empty(), empty_note) {
                return Ok(note.to_string());
            }
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", header]);
            for (i, item) in items.iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), item.clone()]);
            }
            Ok(format!("{}\n{} row(s)", table, items.len()))
        }
    }
}
