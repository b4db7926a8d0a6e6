//! goplay — run and share Go snippets through a playground proxy.
//!
//! ## Commands
//!
//! - `run`: submit a source file for remote compilation and play the
//!   program's output on the terminal with its original pacing
//! - `share`: upload a snippet and print its shareable playground URL

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use goplay_client::{
    init_tracing, play, GoplayProxy, Snippet, TranscriptSink, DEFAULT_PROXY_URL, GO_LANG,
    KIND_ERROR, KIND_SYSTEM, MSG_WAITING,
};

#[derive(Parser)]
#[command(name = "goplay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Go Playground proxy client", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Base URL of the goplay proxy
    #[arg(long, global = true, default_value = DEFAULT_PROXY_URL)]
    proxy: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Go source file remotely and play its output
    Run {
        /// Source file to submit ("-" reads stdin)
        file: PathBuf,

        /// Alternate playground backend (e.g. gotip)
        #[arg(short, long)]
        backend: Option<String>,

        /// Treat the input as Markdown and extract its fenced Go block
        #[arg(long)]
        markdown: bool,
    },

    /// Upload a snippet and print its shareable playground URL
    Share {
        /// Source file to upload ("-" reads stdin)
        file: PathBuf,

        /// Go toolchain version tag appended to the URL as ?v=
        #[arg(long)]
        go_version: Option<String>,

        /// Treat the input as Markdown and extract its fenced Go block
        #[arg(long)]
        markdown: bool,
    },
}

/// Sink that plays a transcript onto the terminal.
///
/// Program output goes to stdout verbatim; stderr-kind events, error
/// text and status notices go to stderr. A terminal cannot be
/// unprinted, so `clear` is a no-op and phase changes simply scroll.
#[derive(Default)]
struct TermSink;

impl TranscriptSink for TermSink {
    fn clear(&mut self) {}

    fn append(&mut self, kind: &str, message: &str) {
        match kind {
            KIND_SYSTEM => eprintln!("* {message}"),
            KIND_ERROR | "stderr" => eprint!("{message}"),
            _ => print!("{message}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let proxy = GoplayProxy::new(&cli.proxy);
    debug!(proxy = %cli.proxy, "using playground proxy");

    match cli.command {
        Commands::Run {
            file,
            backend,
            markdown,
        } => cmd_run(&proxy, &file, backend.as_deref(), markdown).await,
        Commands::Share {
            file,
            go_version,
            markdown,
        } => cmd_share(&proxy, &file, go_version.as_deref(), markdown).await,
    }
}

/// Compile remotely and play the transcript onto the terminal.
async fn cmd_run(
    proxy: &GoplayProxy,
    file: &Path,
    backend: Option<&str>,
    markdown: bool,
) -> Result<()> {
    let source = read_source(file, markdown)?;

    let mut sink = TermSink;
    sink.append(KIND_SYSTEM, MSG_WAITING);
    let result = proxy.compile(&source, backend).await?;
    play(&result, &mut sink).await;

    if result.is_build_failure() {
        std::process::exit(1);
    }
    Ok(())
}

/// Share the snippet and print the retrievable URL.
async fn cmd_share(
    proxy: &GoplayProxy,
    file: &Path,
    go_version: Option<&str>,
    markdown: bool,
) -> Result<()> {
    let source = read_source(file, markdown)?;
    let url = proxy.share(&source, go_version).await?;
    println!("{url}");
    Ok(())
}

/// Read the snippet source from a file or stdin, optionally extracting
/// the fenced Go block from a Markdown document.
fn read_source(file: &Path, markdown: bool) -> Result<String> {
    let raw = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?
    };

    if markdown {
        let snippet = Snippet::from_markdown(&raw, GO_LANG)
            .map_err(|reason| anyhow::anyhow!("GoPlay: {reason}."))?;
        Ok(snippet.source)
    } else {
        Ok(raw)
    }
}
