use crate::{
    config::Config,
    lang::LanguageCode,
    orchestrator::Orchestrator,
    service::HttpTranslateService,
    util::ensure_dir,
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pdf-translate")]
#[command(about = "Client for a remote PDF translation service")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./pdf-translate.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate one PDF or every PDF in a directory.
    Run {
        /// PDF file or directory of PDFs to translate.
        #[arg(short, long)]
        input: PathBuf,
        /// Where translated PDFs are written.
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Target language.
        #[arg(short, long, value_enum, default_value_t = LanguageCode::Ja)]
        lang: LanguageCode,
    },
    /// Ask the server to drop its temporary state.
    ClearTemp {},
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let cfg = Config::load(&cfg_path)?;
    let _guard = init_logging(&args, &cfg)?;

    match &args.cmd {
        Command::Run {
            input,
            out_dir,
            lang,
        } => run(&cfg, input, out_dir.as_deref(), *lang),
        Command::ClearTemp {} => clear_temp(&cfg),
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("pdf-translate.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("pdf-translate.example.toml"))
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(true).boxed()
    };

    let (file_layer, guard) = if cfg.logging.write_to_file && !cfg.logging.file_path.is_empty() {
        let path = PathBuf::from(&cfg.logging.file_path);
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn run(cfg: &Config, input: &Path, out_override: Option<&Path>, lang: LanguageCode) -> Result<()> {
    let out_dir = out_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.batch.out_dir));

    let service = HttpTranslateService::new(cfg)?;
    let orchestrator = Orchestrator::new(service);

    // Expansion errors (bad path, non-PDF, empty directory) abort the run;
    // per-job failures are inside the report and do not.
    let report = orchestrator.run_batch(input, &out_dir, lang)?;

    if cfg.batch.write_report_json {
        ensure_dir(&out_dir)?;
        let report_path = out_dir.join(&cfg.batch.report_filename);
        std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("writing {}", report_path.display()))?;
    }

    if cfg.batch.print_summary {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn clear_temp(cfg: &Config) -> Result<()> {
    let service = HttpTranslateService::new(cfg)?;
    let orchestrator = Orchestrator::new(service);
    orchestrator.clear_temp();
    Ok(())
}
