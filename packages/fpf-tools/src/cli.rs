//! Command-line interface for the FPF tools.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::assemble::assemble_manifest;
use crate::config::{
    default_aggressive_path, default_lite_path, default_output_dir, default_spec_path, spec_url,
    AGGRESSIVE_FILE_NAME, LITE_FILE_NAME, SPEC_FILE_NAME,
};
use crate::download::download_spec;
use crate::error::{FpfError, Result};
use crate::resolve::resolve_profile;
use crate::split::{split_file, SplitOptions};
use crate::strip::{strip_file, KeywordSet, StripMode};

/// FPF tools - download, strip, split and assemble the FPF specification.
#[derive(Parser)]
#[command(name = "fpf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the canonical FPF-Spec.md.
    Download {
        /// Source URL (default: $FPF_SPEC_URL or the upstream spec)
        #[arg(long)]
        url: Option<String>,

        /// Destination path for the downloaded spec
        #[arg(long, default_value_os_t = default_spec_path())]
        output: PathBuf,
    },

    /// Generate both the lite and the aggressive stripped spec.
    #[command(alias = "compress")]
    Strip {
        /// Source spec
        #[arg(long, default_value_os_t = default_spec_path())]
        input: PathBuf,

        /// Directory for the stripped outputs
        #[arg(long, default_value_os_t = default_output_dir())]
        output_dir: PathBuf,
    },

    /// Generate the lite stripped spec.
    #[command(alias = "compress-lite")]
    StripLite {
        /// Source spec
        #[arg(long, default_value_os_t = default_spec_path())]
        input: PathBuf,

        /// Output path
        #[arg(long, default_value_os_t = default_lite_path())]
        output: PathBuf,
    },

    /// Generate the aggressive stripped spec.
    #[command(alias = "compress-aggressive")]
    StripAggressive {
        /// Source spec
        #[arg(long, default_value_os_t = default_spec_path())]
        input: PathBuf,

        /// Output path
        #[arg(long, default_value_os_t = default_aggressive_path())]
        output: PathBuf,
    },

    /// Split the spec into per-part files plus a manifest.
    Split {
        /// Source spec (default: <work-dir>/FPF-Spec.md or FPF/FPF-Spec.md)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Directory for the part files (default: work dir or the input's directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Working directory holding FPF-Spec.md
        #[arg(long)]
        work_dir: Option<PathBuf>,

        /// Also write the verified reconstruction
        #[arg(long)]
        verify_copy: bool,
    },

    /// Assemble a document from a manifest or a named profile.
    Assemble {
        /// Path to an assembly manifest
        #[arg(long, conflicts_with = "profile", required_unless_present = "profile")]
        manifest: Option<PathBuf>,

        /// Profile name or path, looked up in the profiles directory
        #[arg(long)]
        profile: Option<String>,

        /// Directory holding profiles (default: $FPF_PROFILES_DIR or profiles/)
        #[arg(long)]
        profiles_dir: Option<PathBuf>,

        /// Base directory for relative references in the manifest
        #[arg(long)]
        work_dir: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Download { url, output } => {
            let url = url.unwrap_or_else(spec_url);
            download_command(&url, &output)
        }
        Commands::Strip { input, output_dir } => {
            strip_command(&input, &output_dir.join(LITE_FILE_NAME), StripMode::Lite)?;
            strip_command(
                &input,
                &output_dir.join(AGGRESSIVE_FILE_NAME),
                StripMode::Aggressive,
            )
        }
        Commands::StripLite { input, output } => strip_command(&input, &output, StripMode::Lite),
        Commands::StripAggressive { input, output } => {
            strip_command(&input, &output, StripMode::Aggressive)
        }
        Commands::Split {
            input,
            output_dir,
            work_dir,
            verify_copy,
        } => {
            let (input, output_dir) = split_paths(input, output_dir, work_dir.as_deref());
            split_command(&input, &output_dir, verify_copy)
        }
        Commands::Assemble {
            manifest,
            profile,
            profiles_dir,
            work_dir,
        } => {
            let manifest_path = match (manifest, profile) {
                (Some(path), _) => path,
                (None, Some(name)) => {
                    let dir = profiles_dir.unwrap_or_else(crate::config::profiles_dir);
                    let path = resolve_profile(&name, &dir);
                    if !path.is_file() {
                        return Err(FpfError::not_found("Profile", path));
                    }
                    path
                }
                // clap enforces one of the two
                (None, None) => return Err(FpfError::not_found("Manifest", "")),
            };
            assemble_command(&manifest_path, work_dir.as_deref())
        }
    }
}

/// Input and output locations for `split`.
fn split_paths(
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    work_dir: Option<&Path>,
) -> (PathBuf, PathBuf) {
    let input = input.unwrap_or_else(|| match work_dir {
        Some(dir) => dir.join(SPEC_FILE_NAME),
        None => default_spec_path(),
    });
    let output_dir = output_dir.unwrap_or_else(|| match work_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    });
    (input, output_dir)
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Execute the download command.
fn download_command(url: &str, output: &Path) -> Result<()> {
    let pb = spinner(format!("Downloading {url}..."));
    let result = download_spec(url, output);
    pb.finish_and_clear();

    let bytes = result?;
    println!(
        "{} {} ({} bytes)",
        style("Downloaded FPF spec to").green().bold(),
        output.display(),
        bytes
    );
    Ok(())
}

/// Execute one strip pass.
fn strip_command(input: &Path, output: &Path, mode: StripMode) -> Result<()> {
    let keywords = KeywordSet::for_mode(mode);
    let outcome = strip_file(input, output, &keywords)?;

    if !outcome.content_started {
        eprintln!(
            "{} no 'Part A' or 'A.0' header in {}; {} output is empty",
            style("Warning:").yellow().bold(),
            input.display(),
            mode.as_str()
        );
    }

    println!("{}", outcome.stats.report(output));
    println!("{} {}", style("Wrote").green().bold(), output.display());
    Ok(())
}

/// Execute the split command.
fn split_command(input: &Path, output_dir: &Path, verify_copy: bool) -> Result<()> {
    let options = SplitOptions {
        write_verified_copy: verify_copy,
    };
    let report = split_file(input, output_dir, &options)?;

    println!(
        "{} {} ({} lines) into {} parts",
        style("Split").bold(),
        style(input.display()).cyan(),
        report.total_lines,
        report.parts.len()
    );
    for part in &report.parts {
        println!("  - {} ({} lines)", part.path.display(), part.lines);
    }
    println!(
        "{} {}",
        style("Manifest:").green().bold(),
        report.manifest_path.display()
    );
    if let Some(copy) = &report.verified_copy {
        println!("{} {}", style("Verified copy:").green().bold(), copy.display());
    }
    Ok(())
}

/// Execute the assemble command.
fn assemble_command(manifest: &Path, work_dir: Option<&Path>) -> Result<()> {
    let assembly = assemble_manifest(manifest, work_dir)?;

    for warning in &assembly.warnings {
        eprintln!("{} {warning}", style("Warning:").yellow().bold());
    }
    if let Some(stats) = &assembly.stats {
        println!("{}", stats.report(&assembly.output_path));
    }
    println!(
        "{} {} ({} lines)",
        style("Wrote").green().bold(),
        assembly.output_path.display(),
        assembly.lines
    );
    Ok(())
}
