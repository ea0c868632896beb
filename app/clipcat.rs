//! Command-line shell for clipcat.
//!
//! Runs one traversal request and prints the resulting text to stdout, ready
//! to be piped into a clipboard tool.

use clap::{Parser, Subcommand};
use clipcat::output::{self, OutputFormat};
use clipcat::{
    ClipcatBuilder, ClipcatOptions, IGNORE_MARKER, METADATA_DIR, SUGGESTED_EXTENSIONS,
    TraversalRequest, run,
};
use std::path::PathBuf;
use std::process::exit;

/// clipcat — copy a project's files (or its tree) as one block of text
#[derive(Parser)]
#[command(name = "clipcat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print a JSON report with the error kind instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Indent the JSON report
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Visit collected files in name order
    #[arg(long, global = true)]
    sorted: bool,

    /// Descend into symlinked directories while collecting
    #[arg(long, global = true)]
    follow_links: bool,

    /// Directory name that is never traversed
    #[arg(long, global = true, default_value = METADATA_DIR)]
    metadata_dir: String,

    /// Directories directly containing this file are skipped
    #[arg(long, global = true, default_value = IGNORE_MARKER)]
    ignore_marker: String,
}

#[derive(Subcommand)]
enum Command {
    /// Concatenate every file under ROOT whose name ends with EXTENSION
    Collect {
        root: PathBuf,
        /// Suffix to match, case-insensitive (e.g. `.py`)
        #[arg(short, long)]
        extension: String,
    },
    /// Render the directory structure under ROOT
    Tree { root: PathBuf },
    /// Concatenate the given files in order
    Files { paths: Vec<PathBuf> },
    /// List the suggested extensions
    Extensions,
}

impl Cli {
    fn into_parts(self) -> (Option<TraversalRequest>, ClipcatOptions, OutputFormat, bool) {
        let options = ClipcatBuilder::new()
            .metadata_dir(self.metadata_dir)
            .ignore_marker(self.ignore_marker)
            .sort_entries(self.sorted)
            .follow_links(self.follow_links)
            .build();
        let request = match self.command {
            Command::Collect { root, extension } => Some(TraversalRequest::collect(root, extension)),
            Command::Tree { root } => Some(TraversalRequest::tree(root)),
            Command::Files { paths } => Some(TraversalRequest::files(paths)),
            Command::Extensions => None,
        };
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        (request, options, format, self.pretty)
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clipcat=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (request, options, format, pretty) = cli.into_parts();

    let Some(request) = request else {
        for extension in SUGGESTED_EXTENSIONS {
            println!("{}", extension);
        }
        return;
    };

    let outcome = run(&request, &options);
    let rendered = output::format_outcome(&outcome, format, pretty).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });

    match (&outcome, format) {
        // Plain text goes out byte-for-byte so it can be piped into a clipboard.
        (Ok(_), OutputFormat::Text) => print!("{}", rendered),
        (_, OutputFormat::Json) => println!("{}", rendered),
        (Err(_), OutputFormat::Text) => eprintln!("{}", rendered),
    }
    if outcome.is_err() {
        exit(1);
    }
}
