mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use icopack_core::{
    convert, ensure_decoder, read_directory, ConversionReport, IconError, SizeList,
};

use config::IconConfig;

#[derive(Parser, Debug)]
#[command(
    name = "icopack",
    version,
    about = "Pack a raster image into a multi-resolution Windows ICO"
)]
struct Cli {
    /// Source raster image (JPEG, PNG, ...).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Destination ICO file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Square pixel sizes to embed, comma-separated.
    #[arg(short, long, value_delimiter = ',')]
    sizes: Option<Vec<u32>>,

    /// Configuration file (defaults to ./icopack.json when present).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Check input, check decoder, convert, verify the written container.
fn run(input: &Path, output: &Path, sizes: &[u32]) -> Result<ConversionReport, IconError> {
    if !input.exists() {
        return Err(IconError::InputNotFound(input.to_path_buf()));
    }

    let format = ensure_decoder(input)?;
    info!("Decoder ready for {format:?} input");

    let sizes = SizeList::new(sizes)?;

    // The default output lives under windows/runner/resources/.
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Converting {} -> {}", input.display(), output.display());
    let report = convert(input, output, &sizes)?;

    // Postcondition: the container embeds exactly the requested sizes.
    let directory = read_directory(output)?;
    if !directory.matches_sizes(&report.sizes) {
        return Err(IconError::MalformedIco {
            reason: format!(
                "embedded sizes [{}] do not match requested [{}]",
                join_sizes(&directory.sizes()),
                join_sizes(&report.sizes)
            ),
        });
    }

    Ok(report)
}

fn join_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = IconConfig::load(cli.config.as_deref());

    // CLI flags override the config file, which overrides built-in defaults.
    let input = cli.input.unwrap_or(config.input);
    let output = cli.output.unwrap_or(config.output);
    let sizes = cli.sizes.unwrap_or(config.sizes);

    match run(&input, &output, &sizes) {
        Ok(report) => {
            println!("Icon created: {}", report.output.display());
            println!(
                "Embedded sizes: {} (source {}x{})",
                join_sizes(&report.sizes),
                report.source_width,
                report.source_height
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
