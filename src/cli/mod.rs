// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to one use case per
// subcommand. No data handling happens here.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Commands;

use crate::application::{
    combine_use_case::CombineUseCase, convert_use_case::ConvertUseCase,
    export_use_case::ExportUseCase, normalize_use_case::NormalizeUseCase,
    profile_use_case::ProfileUseCase, split_use_case::SplitUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "vnlegal-qa",
    version,
    about = "Prepare and profile the Vietnamese legal Q&A fine-tuning data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::CsvToJson(args) => {
                let summary = ConvertUseCase::new(args.into()).execute()?;
                tracing::info!("Converted {} file(s), {} failed", summary.converted, summary.failed);
            }
            Commands::Normalize(args) => {
                let reports = NormalizeUseCase::new(args.into()).execute()?;
                tracing::info!("Normalized {} file(s)", reports.len());
            }
            Commands::Combine(args) => {
                let total = CombineUseCase::new(args.into()).execute()?;
                tracing::info!("Combined {} items", total);
            }
            Commands::Split(args) => {
                let sizes = SplitUseCase::new(args.into()).execute()?;
                tracing::info!("Split sizes: {:?}", sizes);
            }
            Commands::Profile(args) => {
                let results = ProfileUseCase::new(args.into()).execute()?;
                tracing::info!("Profiled {} dataset(s)", results.len());
            }
            Commands::ExportAlpaca(args) => {
                let written = ExportUseCase::new(args.into()).execute()?;
                tracing::info!("Wrote {} Alpaca file(s)", written.len());
            }
        }
        Ok(())
    }
}
