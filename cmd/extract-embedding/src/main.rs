//! extract_embedding - compute a fixed-size embedding from a mono 16-bit WAV file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vembed_embedding::{store, Pipeline, StridedAverageModel};

mod config;

/// Extract a 256-dimensional embedding from a WAV file.
///
/// The input must be a canonical 16-bit PCM mono WAV. The audio is peak
/// normalized, trimmed of leading/trailing silence, capped at 30 seconds
/// and must be at least 5 seconds long. The output is 1024 bytes of
/// little-endian f32.
#[derive(Parser)]
#[command(name = "extract_embedding")]
#[command(about = "Extract a fixed-size embedding vector from a mono 16-bit WAV file")]
#[command(version)]
pub struct Cli {
    /// Input audio file (16-bit PCM mono WAV)
    pub audio_file: PathBuf,

    /// Output embedding file (raw little-endian f32)
    pub output: PathBuf,

    /// Extractor model artifact (default: models/extractor.onnx)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Config file (default is ~/.vembed/extract-embedding/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = config::load_config(cli.config.as_deref())?;
    let model_path = cfg.model_path(cli.model.as_deref());

    // The strided-average extractor has no artifact to load.
    tracing::debug!(model = %model_path.display(), "using strided-average extractor");
    let pipeline = Pipeline::new(
        Box::new(StridedAverageModel::default()),
        cfg.pipeline_config(),
    );

    let extraction = pipeline.run_file(&cli.audio_file)?;
    println!(
        "Loaded {} seconds of audio",
        format_general(extraction.seconds())
    );

    store::write_file(&cli.output, &extraction.embedding)?;
    tracing::info!(
        checksum = %store::checksum(&extraction.embedding),
        "embedding written"
    );
    println!("Embedding extracted to {}", cli.output.display());
    Ok(())
}

/// Formats like printf `%g`: six significant digits, trailing zeros dropped,
/// scientific notation outside [1e-4, 1e6).
fn format_general(v: f32) -> String {
    let v = f64::from(v);
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return v.to_string();
    }

    let sci = format!("{v:.5e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if (-4..6).contains(&exp) {
        trim_fraction(&format!("{:.*}", (5 - exp) as usize, v))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
