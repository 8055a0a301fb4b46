use std::path::{Path, PathBuf};
use std::thread;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use kira_fleisskappa::input::{load_matrix, parse_matrix_literal};
use kira_fleisskappa::logging::init_tracing;
use kira_fleisskappa::pipeline::stage5_report::{ReportFormat, ReportInput, render, write_reports};
use kira_fleisskappa::{AlphaLevel, DEFAULT_ALPHA, StatsResult, compute_fleiss_kappa};

#[derive(Debug, Parser)]
#[command(
    name = "kira-fleisskappa",
    version,
    about = "Fleiss' kappa for agreement among a fixed number of raters"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute kappa for one or more subject-by-category count matrices
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Count matrix file (TSV, CSV, whitespace or JSON; `.gz` accepted). Repeatable.
    #[arg(
        long = "input",
        value_name = "PATH",
        required_unless_present = "matrix",
        conflicts_with = "matrix"
    )]
    inputs: Vec<PathBuf>,
    /// Inline matrix, e.g. "[[0,14],[2,12]]" or "0 14; 2 12"
    #[arg(long, value_name = "ROWS")]
    matrix: Option<String>,
    /// Significance level for the confidence interval and z-tests
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,
    /// Write report.txt, summary.json and categories.tsv here
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Format printed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Compute without printing the report
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MatrixSource {
    File(PathBuf),
    Literal(String),
}

impl MatrixSource {
    fn label(&self) -> String {
        match self {
            MatrixSource::File(path) => path.display().to_string(),
            MatrixSource::Literal(_) => "inline".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct RunConfig {
    sources: Vec<MatrixSource>,
    alpha: AlphaLevel,
    out_dir: Option<PathBuf>,
    format: ReportFormat,
    quiet: bool,
}

fn main() {
    let Command::Run(args) = Cli::parse().command;
    init_tracing(args.quiet);
    let result = config_from_args(args).and_then(|config| run(&config));
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
fn parse_args(args: &[&str]) -> Result<RunConfig, String> {
    let cli = Cli::try_parse_from(std::iter::once("kira-fleisskappa").chain(args.iter().copied()))
        .map_err(|e| e.to_string())?;
    let Command::Run(args) = cli.command;
    config_from_args(args)
}

fn config_from_args(args: RunArgs) -> Result<RunConfig, String> {
    let alpha = AlphaLevel::new(args.alpha).map_err(|e| e.to_string())?;
    let sources = match args.matrix {
        Some(literal) => vec![MatrixSource::Literal(literal)],
        None => args.inputs.into_iter().map(MatrixSource::File).collect(),
    };
    if sources.is_empty() {
        return Err("missing --input or --matrix".to_string());
    }
    Ok(RunConfig {
        sources,
        alpha,
        out_dir: args.out,
        format: match args.format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        },
        quiet: args.quiet,
    })
}

fn run(config: &RunConfig) -> Result<(), String> {
    let results = evaluate_all(&config.sources, config.alpha);
    let mut failed = 0usize;

    for (index, (source, result)) in config.sources.iter().zip(results).enumerate() {
        let label = source.label();
        let outcome = result.and_then(|result| {
            info!(
                source = %label,
                kappa = result.overall.kappa,
                class = result.overall.class.label(),
                "kappa computed"
            );
            emit_reports(config, source, index, &result)
        });
        if let Err(err) = outcome {
            error!(source = %label, "{err}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!(
            "{} of {} matrices failed",
            failed,
            config.sources.len()
        ));
    }
    Ok(())
}

fn emit_reports(
    config: &RunConfig,
    source: &MatrixSource,
    index: usize,
    result: &StatsResult,
) -> Result<(), String> {
    let multiple = config.sources.len() > 1;
    let label = source.label();
    let input = ReportInput {
        result,
        source: Some(&label),
    };
    if !config.quiet {
        let rendered = render(&input, config.format).map_err(|e| e.to_string())?;
        if multiple && config.format == ReportFormat::Text {
            println!("# {label}");
        }
        println!("{rendered}");
    }
    if let Some(base) = &config.out_dir {
        let out_dir = resolve_output_dir(base, source, index, multiple);
        write_reports(&input, &out_dir)
            .map_err(|e| format!("writing reports to {}: {e}", out_dir.display()))?;
    }
    Ok(())
}

/// One scoped worker per matrix; results come back in source order.
fn evaluate_all(sources: &[MatrixSource], alpha: AlphaLevel) -> Vec<Result<StatsResult, String>> {
    thread::scope(|s| {
        let handles = sources
            .iter()
            .map(|source| s.spawn(move || evaluate(source, alpha)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .unwrap_or_else(|_| Err("kappa worker panicked".to_string()))
            })
            .collect()
    })
}

fn evaluate(source: &MatrixSource, alpha: AlphaLevel) -> Result<StatsResult, String> {
    let matrix = match source {
        MatrixSource::File(path) => load_matrix(path),
        MatrixSource::Literal(literal) => parse_matrix_literal(literal),
    }
    .map_err(|e| e.to_string())?;
    compute_fleiss_kappa(&matrix, alpha).map_err(|e| e.to_string())
}

/// With several sources each gets `<base>/<position>_<stem>`, so equal file
/// names from different directories never share a directory.
fn resolve_output_dir(base: &Path, source: &MatrixSource, index: usize, multiple: bool) -> PathBuf {
    if !multiple {
        return base.to_path_buf();
    }
    let stem = match source {
        MatrixSource::File(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "matrix".to_string());
            let stem = name.strip_suffix(".gz").unwrap_or(&name);
            stem.rsplit_once('.').map(|(s, _)| s).unwrap_or(stem).to_string()
        }
        MatrixSource::Literal(_) => "inline".to_string(),
    };
    base.join(format!("{}_{}", index + 1, stem))
}
