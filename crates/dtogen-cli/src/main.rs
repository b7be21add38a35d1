mod config;
mod logging;

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use dtogen_core::{Error as CoreError, datamodel_json_schema, load_datamodel};
use dtogen_generate::{GenerateOptions, GenerationEngine, GenerationError, GenerationReport};
use thiserror::Error;

use config::{ConfigError, load_config};
use logging::{LogFormat, LoggingError, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "dtogen",
    version,
    about = "Generate validated TypeScript DTO classes from a data model"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,
    /// Format of log lines written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    /// Also append JSON log lines to this file.
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate DTO sources from a data-model document.
    Generate(GenerateArgs),
    /// Check a data-model document without writing anything.
    Validate(ValidateArgs),
    /// Print the JSON Schema of the data-model document.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Data-model document (JSON).
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
    /// Output directory for generated sources.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Config file (defaults to ./dtogen.toml when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Extension of generated files.
    #[arg(long)]
    extension: Option<String>,
    /// Skip enum units and the enum barrel.
    #[arg(long, default_value_t = false)]
    no_enums: bool,
    /// Skip the decorators and helpers modules.
    #[arg(long, default_value_t = false)]
    no_helpers: bool,
    /// Write the generation report (JSON) to this path.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// List the files that would be written and exit.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Data-model document (JSON).
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format, cli.log_file.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Validate(args) => run_validate(args),
        Command::Schema => run_schema(),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        schema,
        out,
        config,
        extension,
        no_enums,
        no_helpers,
        report,
        dry_run,
    } = args;

    let config = load_config(config.as_deref())?;
    let mut options = GenerateOptions::default();
    if let Some(config) = &config {
        config.apply(&mut options);
    }
    if let Some(out) = out {
        options.out_dir = out;
    }
    if let Some(extension) = extension {
        options.extension = extension;
    }
    if no_enums {
        options.emit_enums = false;
    }
    if no_helpers {
        options.emit_helpers = false;
    }
    let report_path = report.or_else(|| config.and_then(|config| config.report));

    tracing::info!(event = "schema_loading", path = %schema.display());
    let datamodel = load_datamodel(&schema)?;

    let engine = GenerationEngine::new(options);
    if dry_run {
        let target = engine.target();
        for planned in engine.plan(&datamodel) {
            println!("{}", target.path_for(&planned.build()).display());
        }
        return Ok(());
    }

    let result = engine.run(&datamodel)?;
    if let Some(path) = report_path {
        write_report(&path, &result.report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    println!(
        "out_dir={} units={} bytes={}",
        result.out_dir.display(),
        result.report.units.len(),
        result.report.bytes_written
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let datamodel = load_datamodel(&args.schema)?;
    println!(
        "ok: {} models, {} enums",
        datamodel.models.len(),
        datamodel.enums.len()
    );
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = datamodel_json_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn write_report(path: &Path, report: &GenerationReport) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_vec_pretty(report)?)?;
    Ok(())
}
