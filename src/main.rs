use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bilevel_dither::{DitherMode, DEFAULT_THRESHOLD};
use g4hex::models::options::{DEFAULT_ARRAY_NAME, DEFAULT_BYTES_PER_LINE, DEFAULT_COMMENT};
use g4hex::{ArrayStyle, ConvertOptions, Converter, OutputFormat};

#[derive(Parser)]
#[command(name = "g4hex")]
#[command(about = "Convert a PNG into a G4 compressed TIFF embedded as a C array")]
struct Cli {
    /// PNG image to convert
    #[arg(default_value = "test.png")]
    input: PathBuf,

    /// Write the array to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Byte layout embedded in the array
    #[arg(short, long, value_enum, default_value_t = FormatArg::Tiff)]
    format: FormatArg,

    /// 1-bit conversion method
    #[arg(short, long, value_enum, default_value_t = DitherArg::FloydSteinberg)]
    dither: DitherArg,

    /// Luma (0-255) at and above which a pixel becomes white
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Name of the C array
    #[arg(short, long, default_value = DEFAULT_ARRAY_NAME)]
    name: String,

    /// Text of the leading comment line
    #[arg(long, default_value = DEFAULT_COMMENT, conflicts_with = "actual_size")]
    comment: String,

    /// Describe the real image size in the comment line
    #[arg(long)]
    actual_size: bool,

    /// Bytes per line of the array
    #[arg(long, default_value_t = DEFAULT_BYTES_PER_LINE, value_parser = parse_bytes_per_line)]
    bytes_per_line: usize,

    /// Decode the G4 data again and compare it with the bitmap
    #[arg(long)]
    verify: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Complete TIFF file (G4 compressed)
    Tiff,
    /// Bare G4 strip without TIFF header
    G4,
    /// Uncompressed 1bpp rows, bit set = white
    Packed,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tiff => OutputFormat::Tiff,
            FormatArg::G4 => OutputFormat::G4,
            FormatArg::Packed => OutputFormat::Packed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DitherArg {
    /// Floyd-Steinberg error diffusion
    FloydSteinberg,
    /// Plain threshold, no diffusion
    Threshold,
}

impl From<DitherArg> for DitherMode {
    fn from(arg: DitherArg) -> Self {
        match arg {
            DitherArg::FloydSteinberg => DitherMode::FloydSteinberg,
            DitherArg::Threshold => DitherMode::Threshold,
        }
    }
}

fn parse_bytes_per_line(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the array
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "g4hex=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let options = ConvertOptions {
        format: cli.format.into(),
        dither: cli.dither.into(),
        threshold: cli.threshold,
        verify: cli.verify,
        actual_size_comment: cli.actual_size,
        style: ArrayStyle {
            comment: cli.comment,
            name: cli.name,
            bytes_per_line: cli.bytes_per_line,
        },
    };

    let converter = Converter::new(options)?;
    let conversion = converter
        .convert_path(&cli.input)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &conversion.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote array");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(conversion.text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
