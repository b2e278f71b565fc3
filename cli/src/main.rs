use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use visual_transcoder_core::{
    expand, flatten, roundtrip, validate, SchemaRegistry, TranscodeOptions, ValidationMode,
    Visual,
};

#[derive(Parser)]
#[command(name = "visual-transcoder")]
#[command(about = "Expand, flatten and validate BI visual attribute trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a dynamic attribute tree into typed visuals
    Expand {
        /// Input file holding one visual record or an array of them
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Validation mode applied before expansion
        #[arg(long, value_enum, default_value_t = ModeArg::Lenient)]
        mode: ModeArg,

        /// Maximum number of visuals accepted in one input
        #[arg(long, default_value_t = 50)]
        max_visuals: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Flatten typed visuals back into a dynamic attribute tree
    Flatten {
        /// Input file holding one typed visual or an array of them
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Expand then flatten, failing if the result differs from the input
    Roundtrip {
        /// Input file holding one visual record or an array of them
        input: PathBuf,

        /// Output file for the flattened tree (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Validate a dynamic attribute tree, printing warnings as JSON
    Validate {
        /// Input file holding one visual record or an array of them
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum ModeArg {
    Lenient,
    Warn,
    Strict,
}

impl From<ModeArg> for ValidationMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Lenient => ValidationMode::Lenient,
            ModeArg::Warn => ValidationMode::Warn,
            ModeArg::Strict => ValidationMode::Strict,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let registry = SchemaRegistry::new();

    match cli.command {
        Commands::Expand {
            input,
            output,
            mode,
            max_visuals,
            format,
        } => {
            let tree = read_json(&input)?;
            let options = TranscodeOptions {
                mode: mode.into(),
                max_visuals,
            };

            let result = expand(&tree, &registry, &options)
                .map_err(|e| anyhow::Error::from(e).context("Expansion failed"))?;

            write_json(&result.visuals, output.as_ref(), format)?;
        }
        Commands::Flatten {
            input,
            output,
            format,
        } => {
            let tree = read_json(&input)?;
            let visuals: Vec<Visual> = if tree.is_array() {
                serde_json::from_value(tree)
            } else {
                serde_json::from_value(tree).map(|visual: Visual| vec![visual])
            }
            .with_context(|| format!("Failed to parse typed visuals from: {}", input.display()))?;

            write_json(&flatten(&visuals), output.as_ref(), format)?;
        }
        Commands::Roundtrip {
            input,
            output,
            format,
        } => {
            let tree = read_json(&input)?;
            let result = roundtrip(&tree, &registry, &TranscodeOptions::default())
                .map_err(|e| anyhow::Error::from(e).context("Roundtrip failed"))?;

            write_json(&result.output, output.as_ref(), format)?;

            if !result.lossless {
                bail!("Roundtrip is lossy: output differs from {}", input.display());
            }
        }
        Commands::Validate { input, format } => {
            let tree = read_json(&input)?;
            let warnings = validate(&tree, &registry)
                .map_err(|e| anyhow::Error::from(e).context("Validation failed"))?;

            write_json(&warnings, None, format)?;

            if !warnings.is_empty() {
                bail!("{} validation warning(s)", warnings.len());
            }
        }
    }

    Ok(())
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
