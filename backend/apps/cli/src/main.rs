//! CLI Entry Point
//!
//! Runs the PoW + RSA signature pipeline once and prints the report.
//! Uses `anyhow` for startup errors; pipeline errors travel as
//! `kernel::error::AppError` so the exit code can name the failed stage.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use kernel::error::app_error::ResultExt;
use pow::presentation::console::{ConsoleObserver, write_report};
use pow::presentation::dto::RunReport;
use pow::{
    AppError, CancelToken, ErrorKind, OutputFormat, PowConfig, RunPipelineUseCase,
    SearchObserver, SilentObserver,
};
use rand::rngs::OsRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so stdout carries only the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pow_cli=info,pow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run().await {
        Ok(code) => code,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or_else(|| ErrorKind::Internal.exit_code());
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let config = Arc::new(PowConfig::from_env().map_err(AppError::from)?);

    // Ctrl-C trips the token; the search checks it every attempt
    let cancel = CancelToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, cancelling search");
                cancel.cancel();
            }
        }
    });

    let observer: Arc<dyn SearchObserver> = match config.output_format {
        OutputFormat::Text => Arc::new(ConsoleObserver),
        OutputFormat::Json => Arc::new(SilentObserver),
    };

    tracing::info!(
        nickname = %config.nickname,
        difficulties = ?config.difficulties,
        rsa_bits = config.rsa_bits,
        "Starting PoW pipeline"
    );

    let pipeline = RunPipelineUseCase::new(observer, config.clone(), cancel);
    let output = tokio::task::spawn_blocking(move || pipeline.execute(&mut OsRng))
        .await
        .context("pipeline task panicked")?
        .map_err(AppError::from)?;

    let mut stdout = io::stdout().lock();
    match config.output_format {
        OutputFormat::Text => write_report(&mut stdout, &output)
            .map_app_err(ErrorKind::Internal, "Failed to write report")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &RunReport::from(&output))
                .map_err(AppError::from)?;
            writeln!(stdout).map_err(AppError::from)?;
        }
    }

    if output.verified {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(ErrorKind::Verification.exit_code()))
    }
}
