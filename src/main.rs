use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mashup::codec::{encoder_for_path, FormatRegistry, ImageDecoder};
use mashup::color_mashup::ColorProfile;
use mashup::models::MashupConfig;
use mashup::pipeline::{self, Input, Output};

#[derive(Parser)]
#[command(name = "mashup")]
#[command(about = "Swap the most prominent colors of one image into another")]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor DESTINATION with the most prominent colors of SOURCE
    Run {
        /// Image providing the new colors
        source: PathBuf,

        /// Image whose top colors are replaced
        destination: PathBuf,

        /// Output file (.png, .jpg or .jpeg)
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum number of colors to swap
        #[arg(short, long)]
        max_colors: Option<usize>,

        /// JPEG output quality (1-100)
        #[arg(short, long)]
        quality: Option<u8>,

        /// YAML config file (defaults to $MASHUP_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print an image's most frequent colors
    Profile {
        /// Image to analyze
        image: PathBuf,

        /// Number of colors to list
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
    /// List supported image formats
    Formats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            source,
            destination,
            output,
            max_colors,
            quality,
            config,
        } => run_mashup_command(&source, &destination, &output, max_colors, quality, config),
        Commands::Profile { image, top } => run_profile_command(&image, top),
        Commands::Formats => {
            run_formats_command();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "mashup=debug" } else { "mashup=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Resolve a decoder for `path` from its extension.
fn decoder_for(registry: &FormatRegistry, path: &Path) -> anyhow::Result<Arc<dyn ImageDecoder>> {
    registry.for_path(path).with_context(|| {
        format!(
            "Unsupported input format for {} (expected .png, .jpg or .jpeg)",
            path.display()
        )
    })
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Decode both inputs, swap colors, write the result
fn run_mashup_command(
    source: &Path,
    destination: &Path,
    output: &Path,
    max_colors: Option<usize>,
    quality: Option<u8>,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config_path = MashupConfig::resolve_path(config);
    let config = MashupConfig::load(config_path.as_deref());
    let max_colors = max_colors.unwrap_or(config.max_colors);
    let quality = quality.unwrap_or(config.jpeg_quality);

    let registry = FormatRegistry::with_builtins();
    let src = Input::new(open(source)?, decoder_for(&registry, source)?);
    let dst = Input::new(open(destination)?, decoder_for(&registry, destination)?);

    let encoder = encoder_for_path(output, quality).with_context(|| {
        format!(
            "Unsupported output format for {} (expected .png, .jpg or .jpeg)",
            output.display()
        )
    })?;

    // Encode into memory; the output file is only created after success.
    let mut encoded = Vec::new();
    let summary = pipeline::mashup(src, dst, Output::boxed(&mut encoded, encoder), max_colors)?;
    std::fs::write(output, &encoded)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    for swap in &summary.swaps {
        println!(
            "{:>3}  {} -> {}  ({} px)",
            swap.rank + 1,
            swap.from,
            swap.to,
            swap.pixels
        );
    }
    println!(
        "Wrote {} ({}x{}, {} colors swapped, {} bytes)",
        output.display(),
        summary.width,
        summary.height,
        summary.colors_swapped(),
        encoded.len()
    );
    Ok(())
}

/// Print dimensions and the top colors of one image
fn run_profile_command(image: &Path, top: usize) -> anyhow::Result<()> {
    let registry = FormatRegistry::with_builtins();
    let decoder = decoder_for(&registry, image)?;
    let bytes = std::fs::read(image).with_context(|| format!("Failed to read {}", image.display()))?;

    let info = decoder
        .decode_config(&mut Cursor::new(&bytes))
        .with_context(|| format!("Failed to read {} header", image.display()))?;
    println!(
        "{}: {}x{} {}",
        image.display(),
        info.width,
        info.height,
        decoder.name()
    );

    let decoded = decoder
        .decode(&mut Cursor::new(&bytes))
        .with_context(|| format!("Failed to decode {}", image.display()))?;
    let profile = ColorProfile::from_raster(&decoded);
    let total = (info.width as f64 * info.height as f64).max(1.0);

    println!("{} distinct colors", profile.distinct_colors());
    for (rank, bucket) in profile.ranked_buckets().take(top).enumerate() {
        println!(
            "{:>3}  {}  {:>8} px  {:>6.2}%",
            rank + 1,
            bucket.color(),
            bucket.len(),
            bucket.len() as f64 * 100.0 / total
        );
    }
    Ok(())
}

fn run_formats_command() {
    let registry = FormatRegistry::with_builtins();
    println!("Supported formats:");
    for format in registry.iter() {
        println!("  {:<6} (.{})", format.name(), format.magic());
    }
}
