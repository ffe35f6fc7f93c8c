use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use cea_frontier::adapters::{FileStrategySource, StreamReportWriter};
use cea_frontier::application::AnalyzeStrategiesHandler;
use cea_frontier::config::{AppConfig, ReportFormat};
use cea_frontier::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "cea-frontier")]
#[command(about = "Cost-effectiveness frontier and ICER table for a set of strategies")]
struct Args {
    /// Strategy document (.json, .yaml or .yml)
    file: PathBuf,

    /// Report format, overriding CEA_FRONTIER__REPORT__FORMAT
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Decimal places in text reports, overriding CEA_FRONTIER__REPORT__PRECISION
    #[arg(short, long)]
    precision: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load()
        .and_then(|config| config.with_overrides(args.format, args.precision))
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.logging);

    let handler = AnalyzeStrategiesHandler::new(
        Arc::new(FileStrategySource::new(&args.file)),
        Arc::new(StreamReportWriter::stdout(config.report.clone())),
    );

    match handler.handle() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = %err.code, "Analysis failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
