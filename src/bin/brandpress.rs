use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brandpress::output::sink::FsSink;
use brandpress::pipeline::config::RunConfig;
use brandpress::pipeline::{Selection, run};

#[derive(Parser, Debug)]
#[command(name = "brandpress", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write every image and document.
    All(RunArgs),
    /// Write the logos, screenshots and video thumbnail.
    Images(RunArgs),
    /// Write the three PDF documents.
    Documents(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Existing output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// JSON run configuration (font paths, document resolution).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (args, selection) = match cli.cmd {
        Command::All(args) => (args, Selection::All),
        Command::Images(args) => (args, Selection::Images),
        Command::Documents(args) => (args, Selection::Documents),
    };
    cmd_run(&args, selection)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RunConfig> {
    match path {
        Some(p) => {
            RunConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(RunConfig::default()),
    }
}

fn cmd_run(args: &RunArgs, selection: Selection) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut sink = FsSink::open(&args.out)
        .with_context(|| format!("open output directory '{}'", args.out.display()))?;
    let summary = run(&config, &mut sink, selection).context("generate artifacts")?;
    println!(
        "wrote {} images and {} documents ({} pages) to {}",
        summary.images,
        summary.documents,
        summary.pages,
        sink.dir().display()
    );
    Ok(())
}
