use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use xmlite::{Config, Document, Encoding};

#[derive(Debug, Parser)]
#[command(
    name = "xmlite",
    version,
    about = "Validate, print and re-encode xmlite documents"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Input encoding (default: UTF-8, with an optional BOM)
    #[arg(short, long, value_enum)]
    encoding: Option<EncodingArg>,
    /// Output encoding
    #[arg(short, long, value_enum, default_value = "utf8")]
    to: EncodingArg,
    /// Prefix the output with the byte order mark of the output encoding
    #[arg(long)]
    bom: bool,
    /// Print the indented tree instead of the serialized document
    #[arg(long)]
    tree: bool,
    /// Maximum element nesting depth (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: u16,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodingArg {
    #[value(alias = "utf-8")]
    Utf8,
    #[value(alias = "utf-16le")]
    Utf16le,
    #[value(alias = "utf-16be")]
    Utf16be,
    #[value(alias = "utf-32le")]
    Utf32le,
    #[value(alias = "utf-32be")]
    Utf32be,
}

impl From<EncodingArg> for Encoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Utf8 => Self::Utf8,
            EncodingArg::Utf16le => Self::Utf16Le,
            EncodingArg::Utf16be => Self::Utf16Be,
            EncodingArg::Utf32le => Self::Utf32Le,
            EncodingArg::Utf32be => Self::Utf32Be,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input = read_input(&args.input)?;
    let config = Config::new(args.max_depth);
    let doc = Document::from_bytes_with_config(&input, args.encoding.map(Encoding::from), config)
        .with_context(|| format!("failed to load {}", describe(&args.input)))?;
    debug!(root = doc.root.name(), "document loaded");

    let output = if args.tree {
        doc.log_string().into_bytes()
    } else {
        let mut buffer = Vec::new();
        doc.write(&mut buffer, args.to.into(), args.bom)
            .context("failed to serialize document")?;
        buffer
    };

    write_output(&args.output, &output)
}

fn read_input(path: &Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.iter().all(u8::is_ascii_whitespace) {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}
