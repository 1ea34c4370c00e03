mod cli;

use cli::Args;
use cves_diff::adapters::outbound::console::StderrProgressReporter;
use cves_diff::adapters::outbound::filesystem::FileSystemReader;
use cves_diff::application::dto::{DiffRequest, OutputFormat};
use cves_diff::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use cves_diff::application::use_cases::DiffScansUseCase;
use cves_diff::config::{self, ConfigFile};
use cves_diff::shared::error::{DiffError, ExitCode};
use cves_diff::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Effective settings after merging CLI arguments, config file and defaults
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    output: PathBuf,
    fail_on_diff: bool,
}

impl Settings {
    /// Precedence: CLI > config file > defaults
    fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let format = args
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();

        let output = args
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()))
            .unwrap_or_else(|| PathBuf::from(format.default_output_name()));

        let fail_on_diff =
            args.fail_on_diff || config.and_then(|c| c.fail_on_diff).unwrap_or(false);

        Self {
            format,
            output,
            fail_on_diff,
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let scan_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = DiffScansUseCase::new(scan_reader, progress_reporter);

    // Display progress message
    eprintln!("{}", RendererFactory::progress_message(settings.format));

    // Execute use case
    let request = DiffRequest::from_paths(args.first, args.second);
    let mut renderer = RendererFactory::create(settings.format);
    let response = use_case.execute(request, renderer.as_mut())?;

    // Present output
    let presenter_type = PresenterType::from_output_path(settings.output);
    if let PresenterType::File(ref path) = presenter_type {
        eprintln!("💾 Writing report to: {}", path.display());
    }
    let presenter = PresenterFactory::create(presenter_type);
    presenter.present(renderer.content())?;

    if settings.fail_on_diff && response.has_differences() {
        eprintln!(
            "{}",
            format!(
                "⚠️  Scans differ: {} only in first, {} only in second, {} changed",
                response.summary.left_only, response.summary.right_only, response.summary.changed
            )
            .yellow()
        );
        return Ok(ExitCode::DifferencesDetected);
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or the one in the current directory if present
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

/// Configuration problems are argument errors; everything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<DiffError>() {
        Some(DiffError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
