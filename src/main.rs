use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use multichunk::{
    Batcher, ChunkRecord, ChunkReport, Chunker, Document, OverlapBoundary, Settings,
    chunk_documents, collect_documents,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "multichunk",
    version,
    about = "Split multilingual text into overlapping, size-bounded chunks for embedding"
)]
struct Cli {
    /// TOML settings file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chunk text files or every matching file under a directory
    Chunk(ChunkArgs),
    /// Print the effective settings as TOML
    Config(Overrides),
}

#[derive(Args)]
struct ChunkArgs {
    /// Files or directories to chunk
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct Overrides {
    /// Maximum chunk length in characters
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Characters carried over from the previous chunk
    #[arg(long)]
    overlap: Option<usize>,

    /// Chunks shorter than this after trimming are dropped
    #[arg(long)]
    min_chunk_length: Option<usize>,

    /// Where the carried-over slice may start
    #[arg(long, value_enum)]
    overlap_boundary: Option<OverlapBoundary>,

    /// Chunks per embedding batch
    #[arg(long)]
    batch_size: Option<usize>,
}

impl Overrides {
    fn apply(&self, settings: &mut Settings) {
        if let Some(max_chunk_size) = self.max_chunk_size {
            settings.chunking.max_chunk_size = max_chunk_size;
        }
        if let Some(overlap) = self.overlap {
            settings.chunking.overlap = overlap;
        }
        if let Some(min_chunk_length) = self.min_chunk_length {
            settings.chunking.min_chunk_length = min_chunk_length;
        }
        if let Some(boundary) = self.overlap_boundary {
            settings.chunking.overlap_boundary = boundary;
        }
        if let Some(batch_size) = self.batch_size {
            settings.ingest.batch_size = batch_size;
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Numbered chunks with their lengths
    Text,
    /// Full report with documents, stats and chunk records
    Json,
    /// One embedding batch per line
    Jsonl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match &cli.command {
        Command::Chunk(args) => {
            let settings = effective_settings(config, &args.overrides)?;
            init_tracing(&settings.logging.level);
            run_chunk(&settings, args)
        }
        Command::Config(overrides) => {
            let settings = effective_settings(config, overrides)?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

/// Defaults, then the settings file, then flags; validated once merged
fn effective_settings(config: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    overrides.apply(&mut settings);
    settings.validate()?;
    Ok(settings)
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_chunk(settings: &Settings, args: &ChunkArgs) -> Result<()> {
    let start = Instant::now();
    let chunker = Chunker::new(settings.chunking.clone())?;

    let mut documents = Vec::new();
    for path in &args.paths {
        let found = collect_documents(path, &settings.ingest)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        documents.extend(found);
    }

    let records = chunk_documents(&chunker, &documents);
    let batcher = Batcher::new(settings.ingest.batch_size);
    let (document_count, chunk_count) = (documents.len(), records.len());

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file: {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    write_output(&mut out, args.format, settings, &documents, records, &batcher)?;
    out.flush().context("Failed to flush output")?;

    info!(
        documents = document_count,
        chunks = chunk_count,
        batches = batcher.batch_count(chunk_count),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chunking complete"
    );

    Ok(())
}

fn write_output(
    out: &mut dyn Write,
    format: OutputFormat,
    settings: &Settings,
    documents: &[Document],
    records: Vec<ChunkRecord>,
    batcher: &Batcher,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, &records),
        OutputFormat::Json => {
            let report = ChunkReport::new(&settings.chunking, documents, records, batcher);
            writeln!(out, "{}", report.to_json()?)?;
            Ok(())
        }
        OutputFormat::Jsonl => {
            for batch in batcher.batches(&records) {
                writeln!(out, "{}", serde_json::to_string(&batch)?)?;
            }
            Ok(())
        }
    }
}

fn write_text(out: &mut dyn Write, records: &[ChunkRecord]) -> Result<()> {
    let mut current_document = None;

    for record in records {
        if current_document != Some(record.document) {
            writeln!(out, "=== {} ===\n", record.source)?;
            current_document = Some(record.document);
        }
        writeln!(out, "{}. {}", record.index + 1, record.text)?;
        writeln!(out, "   Length: {} characters\n", record.char_count)?;
    }

    Ok(())
}
