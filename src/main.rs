//! Slingshot level converter - main binary
//!
//! With no arguments, converts the full level set in `levels/`.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use slingshot_levels::{
    batch::{run_batch, standard_batch, BatchConfig},
    convert::{convert_file, ConvertOptions},
    level::JsonStyle,
    BlockType, Level,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log verbosity (accepts level names or numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(&'static str);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" | "0" => Ok(VerbosityArg("error")),
            "warn" | "1" => Ok(VerbosityArg("warn")),
            "info" | "2" => Ok(VerbosityArg("info")),
            "debug" | "3" => Ok(VerbosityArg("debug")),
            "trace" | "4" => Ok(VerbosityArg("trace")),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: error/0, warn/1, info/2, debug/3, trace/4)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "levelconv")]
#[command(about = "Convert slingshot TSV levels to JSON", long_about = None)]
struct Cli {
    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, short = 'v', global = true, default_value = "info")]
    verbosity: VerbosityArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the standard and custom level set (default)
    Batch {
        /// Directory containing levelN.tsv and customlevelN.tsv
        #[arg(long, default_value = "levels")]
        dir: PathBuf,

        /// Write indented JSON
        #[arg(long)]
        pretty: bool,

        /// Stop at the first level that fails to convert
        #[arg(long)]
        fail_fast: bool,
    },

    /// Convert a single TSV level file
    Convert {
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        #[arg(value_name = "DEST")]
        destination: PathBuf,

        /// Write indented JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Read JSON level files back and summarize them
    Check {
        #[arg(value_name = "JSON", required = true)]
        files: Vec<PathBuf>,
    },
}

fn style(pretty: bool) -> JsonStyle {
    if pretty {
        JsonStyle::Pretty
    } else {
        JsonStyle::Compact
    }
}

fn init_tracing(verbosity: VerbosityArg) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.0));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let command = cli.command.unwrap_or(Commands::Batch {
        dir: PathBuf::from("levels"),
        pretty: false,
        fail_fast: false,
    });

    match command {
        Commands::Batch {
            dir,
            pretty,
            fail_fast,
        } => run_level_batch(BatchConfig {
            levels_dir: dir,
            style: style(pretty),
            fail_fast,
        }),
        Commands::Convert {
            source,
            destination,
            pretty,
        } => {
            let options = ConvertOptions {
                style: style(pretty),
            };
            convert_file(&source, &destination, &options).with_context(|| {
                format!(
                    "converting {} to {}",
                    source.display(),
                    destination.display()
                )
            })?;
            Ok(())
        }
        Commands::Check { files } => check_levels(&files),
    }
}

fn run_level_batch(config: BatchConfig) -> anyhow::Result<()> {
    let levels = standard_batch();
    let report = run_batch(&config, &levels);

    if report.is_success() {
        return Ok(());
    }

    eprintln!(
        "{} of {} levels failed to convert:",
        report.failures().count(),
        levels.len()
    );
    for entry in report.failures() {
        if let Err(e) = &entry.outcome {
            eprintln!("  - {}: {}", entry.descriptor, e);
        }
    }
    bail!("level conversion failed");
}

fn check_levels(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut failed = 0usize;

    for path in files {
        let result = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .and_then(|json| {
                Level::from_json(&json).with_context(|| format!("parsing {}", path.display()))
            });

        match result {
            Ok(level) => {
                let materials: Vec<String> = BlockType::ALL
                    .iter()
                    .map(|kind| format!("{}={}", kind, level.count_blocks(*kind)))
                    .collect();
                println!(
                    "{}: start={} birds={} pigs={} blocks={} ({})",
                    path.display(),
                    level.start,
                    level.birds,
                    level.pigs.len(),
                    level.blocks.len(),
                    materials.join(" ")
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}: {:#}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} level files are invalid", files.len());
    }
    Ok(())
}
