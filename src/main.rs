//! Command line driver: paraphrases trees given as argument, file or stdin.

use clap::{Parser, ValueEnum};
use coordswap::Tree;
use coordswap::bracket::{self, BracketParser, BracketStyle};
use coordswap::paraphrase::{ParaphraseError, Paraphraser};
use coordswap::parser::{ByteParser, ParsingError};
use coordswap::service::{self, ParaphraseResponse, RequestError, ServiceError};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paraphrase parse trees by permuting coordinated noun phrases
#[derive(Parser)]
#[command(name = "coordswap", version, long_about = None)]
struct Cli {
    /// Bracketed parse tree, e.g. "(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))"
    #[arg(short, long, env = "COORDSWAP_TREE", conflicts_with = "file")]
    tree: Option<String>,

    /// Maximum number of paraphrases per tree [default: 20]
    #[arg(short, long, allow_hyphen_values = true)]
    limit: Option<String>,

    /// File with one or more bracketed trees, '-' for stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Break trees longer than this over several lines (brackets format only)
    #[arg(long)]
    margin: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `{"paraphrases": [{"tree": ...}]}` per input tree
    Json,
    /// Bare bracketed trees, a blank line between input trees
    Brackets,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<ParsingError> for CliError {
    fn from(err: ParsingError) -> Self {
        CliError::Service(ParaphraseError::from(err).into())
    }
}

impl From<RequestError> for CliError {
    fn from(err: RequestError) -> Self {
        CliError::Service(err.into())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Paraphrasing failed");
            match (&err, cli.format) {
                (CliError::Service(service_err), OutputFormat::Json) => {
                    match serde_json::to_string_pretty(&service_err.to_response()) {
                        Ok(body) => println!("{body}"),
                        Err(_) => eprintln!("{err}"),
                    }
                }
                _ => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let limit = service::parse_limit(cli.limit.as_deref())?;
    let trees = read_trees(cli)?;
    debug!(num_trees = trees.len(), limit, "Read input trees");

    let style = match (cli.format, cli.margin) {
        (OutputFormat::Brackets, Some(margin)) => BracketStyle::Indented { margin },
        _ => BracketStyle::SingleLine,
    };
    let paraphraser = Paraphraser::new().with_limit(limit).with_style(style);

    let mut stdout = io::stdout().lock();
    for (i, tree) in trees.iter().enumerate() {
        match cli.format {
            OutputFormat::Json => {
                let paraphrases = paraphraser
                    .generate_from_tree(tree)
                    .map_err(ServiceError::from)?;
                let response = ParaphraseResponse::from_trees(paraphrases);
                serde_json::to_writer_pretty(&mut stdout, &response).map_err(io::Error::from)?;
                writeln!(stdout)?;
            }
            OutputFormat::Brackets => {
                let paraphrases = paraphraser
                    .paraphrase_trees(tree)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(ServiceError::from)?;
                if i > 0 {
                    writeln!(stdout)?;
                }
                bracket::write_bracketed(&mut stdout, &paraphrases, paraphraser.style())?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Reads the input trees from `--tree`, `--file` or stdin (`--file -`).
fn read_trees(cli: &Cli) -> Result<Vec<Tree>, CliError> {
    if let Some(tree) = cli.tree.as_deref().filter(|tree| !tree.is_empty()) {
        return Ok(vec![bracket::parse_str(tree)?]);
    }

    let contents = match cli.file.as_deref() {
        None => return Err(RequestError::MissingParameter.into()),
        Some(path) if path.as_os_str() == "-" => {
            let mut contents = Vec::new();
            io::stdin().read_to_end(&mut contents)?;
            contents
        }
        Some(path) => std::fs::read(path)?,
    };

    let trees = BracketParser::new().parse_all(ByteParser::for_vec(contents))?;
    if trees.is_empty() {
        return Err(RequestError::MissingParameter.into());
    }
    Ok(trees)
}
