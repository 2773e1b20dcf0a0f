use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ferrodoc_model::sample::sample_document;
use ferrodoc_model::{Document, Latex};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ferrodoc")]
#[command(about = "ferrodoc document tools", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document to LaTeX
    Render {
        /// Path to the .json document
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        metadata: MetadataArgs,
    },
    /// Write the built-in sample document
    Demo {
        #[arg(short, long, value_name = "OUT", default_value = "output.tex")]
        output: PathBuf,
    },
    /// Validate a JSON task list and print it normalized
    Tasks {
        /// Path to the .json task list
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

/// Metadata overrides applied on top of the loaded document.
#[derive(Args, Default)]
struct MetadataArgs {
    #[arg(long)]
    class: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    date: Option<String>,
}

impl MetadataArgs {
    fn apply(&self, mut doc: Document) -> Document {
        if let Some(class) = &self.class {
            doc = doc.with_class(class);
        }
        if let Some(title) = &self.title {
            doc = doc.with_title(title);
        }
        if let Some(author) = &self.author {
            doc = doc.with_author(author);
        }
        if let Some(date) = &self.date {
            doc = doc.with_date(date);
        }
        doc
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .try_init()
        .ok();
}

fn write_output(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))?;
            log::info!("Wrote {} bytes to {:?}", text.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn render_file(path: &Path, metadata: &MetadataArgs) -> anyhow::Result<String> {
    let doc = Document::from_json_file(path)
        .with_context(|| format!("Failed to load document {:?}", path))?;
    Ok(metadata.apply(doc).to_latex())
}

fn normalize_tasks(path: &Path) -> anyhow::Result<String> {
    let tasks = ferrodoc_tasks::load_records_file(path)
        .with_context(|| format!("Failed to load task list {:?}", path))?;
    let records: Vec<_> = tasks.iter().map(|t| t.record()).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Render {
            path,
            output,
            metadata,
        } => {
            let tex = render_file(path, metadata)?;
            write_output(&tex, output.as_deref())?;
        }
        Commands::Demo { output } => {
            write_output(&sample_document().to_latex(), Some(output.as_path()))?;
        }
        Commands::Tasks { path } => {
            let json = normalize_tasks(path)?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
