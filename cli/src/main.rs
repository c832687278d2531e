//! Tricount CLI: loads an edge list and compares triangle counting methods

use anyhow::{bail, Context};
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing::info;
use tricount::graph::DEFAULT_MAX_DIMENSION;
use tricount::{
    check_adjacency, compare_methods, load_edge_list_file, summarize, ComparisonReport,
    IndexBase, LoaderConfig, Method, MethodOutcome, NormalizationPolicy, TriCountConfig,
    TriangleCounter,
};

#[derive(Parser)]
#[command(name = "tricount", version, about = "Count triangles with masked sparse matrix formulas")]
struct Cli {
    /// Edge list file, one whitespace-separated vertex pair per line
    #[arg(env = "TRICOUNT_INPUT")]
    input: PathBuf,

    /// Method name or id (0-6); repeat to run several. Default: all
    #[arg(short, long = "method", value_name = "METHOD")]
    methods: Vec<Method>,

    /// Vertex ids start at 1
    #[arg(long)]
    one_based: bool,

    /// Largest accepted matrix dimension
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dimension: usize,

    /// Store (v, v) edges on the diagonal instead of dropping them
    #[arg(long)]
    keep_self_loops: bool,

    /// Truncate raw sums that are not a multiple of the method divisor
    #[arg(long)]
    truncate: bool,

    /// Check symmetry and the diagonal before counting
    #[arg(long)]
    validate: bool,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let loader = LoaderConfig {
        index_base: if cli.one_based { IndexBase::One } else { IndexBase::Zero },
        max_dimension: cli.max_dimension,
        drop_self_loops: !cli.keep_self_loops,
        ..LoaderConfig::default()
    };
    let graph = load_edge_list_file(&cli.input, &loader)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    if cli.validate {
        check_adjacency(&graph.adjacency).context("adjacency matrix is not a simple undirected graph")?;
    }
    let summary = summarize(&graph.adjacency)?;
    info!(
        "Graph has {} vertices, {} edges, max degree {}",
        summary.vertices, summary.edges, summary.max_degree
    );

    let counter = TriangleCounter::new(TriCountConfig {
        normalization: if cli.truncate {
            NormalizationPolicy::Truncate
        } else {
            NormalizationPolicy::Strict
        },
    });
    let methods: &[Method] = if cli.methods.is_empty() {
        &Method::COMPARISON_ORDER
    } else {
        &cli.methods
    };

    let report = compare_methods(&graph.adjacency, methods, &counter);
    print_report(&report, &cli.format)?;

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{} of {} methods failed", failed, report.outcomes.len());
    }
    Ok(())
}

fn print_report(report: &ComparisonReport, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Csv => {
            println!("method,id,triangles,multiply_secs,reduce_secs,total_secs,error");
            for outcome in &report.outcomes {
                println!("{}", csv_row(outcome));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Method", "Id", "Formula", "Triangles", "Time (s)"]);

            for outcome in &report.outcomes {
                let method = outcome.method;
                let (triangles, time) = match &outcome.result {
                    Ok(count) => (count.triangles.to_string(), format!("{:.6}", count.total_secs())),
                    Err(e) => (format!("error: {}", e), "-".to_string()),
                };
                table.add_row(vec![
                    method.name().to_string(),
                    method.id().to_string(),
                    method.formula().to_string(),
                    triangles,
                    time,
                ]);
            }

            println!("{}", table);
            match report.consensus() {
                Some(n) => println!("{} triangle(s)", n),
                None => println!("(no consensus)"),
            }
        }
    }
    Ok(())
}

fn csv_row(outcome: &MethodOutcome) -> String {
    let method = outcome.method;
    match &outcome.result {
        Ok(count) => format!(
            "{},{},{},{:.6},{:.6},{:.6},",
            method.name(),
            method.id(),
            count.triangles,
            count.multiply_secs,
            count.reduce_secs,
            count.total_secs()
        ),
        Err(e) => format!(
            "{},{},,,,,\"{}\"",
            method.name(),
            method.id(),
            e.to_string().replace('"', "\"\"")
        ),
    }
}
