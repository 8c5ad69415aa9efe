use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use engine_compat::config::{CompatConfig, config_path};
use engine_compat::engine::product::EngineProduct;
use engine_compat::engine::report::{ReportFormat, VersionReport};
use engine_compat::engine::sources::{BuildVersionFile, ReportedVersion};
use engine_compat::logging::{LogFormat, init_logging};
use engine_compat::version::checker::RequirementChecker;
use engine_compat::{normalize_semantic_version, supports_version};

#[derive(Parser)]
#[command(name = "engine-compat")]
#[command(version, about = "Version compatibility gate for native engine bindings")]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Text)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the normalized integer form of a MAJOR.MINOR.PATCH version
    Normalize {
        #[arg(value_name = "VERSION")]
        semantic_version: String,
    },

    /// Check that CURRENT lies within [MINIMUM, MAXIMUM], bounds included
    Supports {
        minimum: String,
        maximum: String,
        current: String,
    },

    /// Check the runtime and the engine binary against the supported versions
    Check {
        /// Runtime floor; defaults to the configured one
        #[arg(long)]
        minimum_runtime_version: Option<String>,

        /// Configuration file; defaults to the standard location
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the engine version report
    Report {
        #[arg(long, value_enum, default_value_t = ReportFormatArg::Text)]
        format: ReportFormatArg,

        /// Configuration file; defaults to the standard location
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct EngineArgs {
    /// Engine version reported by the host
    #[arg(long)]
    engine_version: Option<String>,

    /// Path to the engine's build-version file
    #[arg(long)]
    build_version_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormatArg {
    Text,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Pick the engine version source: explicit flags first, then the
/// installation directory from the configuration.
fn engine_source(
    args: EngineArgs,
    config: &CompatConfig,
) -> anyhow::Result<Box<dyn EngineProduct>> {
    if let Some(version) = args.engine_version {
        return Ok(Box::new(ReportedVersion::new(&version)));
    }
    if let Some(path) = args.build_version_file {
        return Ok(Box::new(BuildVersionFile::new(path)));
    }
    match &config.engine.install_dir {
        Some(dir) => Ok(Box::new(BuildVersionFile::in_install_dir(dir))),
        None => anyhow::bail!(
            "No engine version source: pass --engine-version or --build-version-file, \
             or set engine.installDir in {:?}",
            config_path()
        ),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<CompatConfig> {
    let config = match path {
        Some(path) => CompatConfig::load_from(&path)?,
        None => CompatConfig::load()?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_format.into(), cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    match cli.command {
        Command::Normalize { semantic_version } => {
            println!("{}", normalize_semantic_version(&semantic_version)?);
        }
        Command::Supports {
            minimum,
            maximum,
            current,
        } => {
            println!("{}", supports_version(&minimum, &maximum, &current)?);
        }
        Command::Check {
            minimum_runtime_version,
            config,
            engine,
        } => {
            let config = load_config(config)?;
            let engine = engine_source(engine, &config)?;
            let checker = RequirementChecker::new(engine, config.requirements());
            println!(
                "{}",
                checker.check_requirements(minimum_runtime_version.as_deref())?
            );
        }
        Command::Report {
            format,
            config,
            engine,
        } => {
            let config = load_config(config)?;
            let engine = engine_source(engine, &config)?;
            let report = VersionReport::parse(&engine.version()?)?;
            println!("{}", report.render(format.into())?);
        }
    }

    Ok(())
}
