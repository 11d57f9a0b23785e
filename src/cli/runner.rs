use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tracing::warn;

use crate::article::{extract_article, ArticleFetcher, ArticleRecord, Classification};
use crate::cli::{FetchCli, UpdateCli};
use crate::config::Settings;
use crate::error::TrackerError;
use crate::report::{apply_entry, ReportEntry};
use crate::utils;

/// Fetch, extract and print the article record. Fetch failures exit with 1.
pub fn run_fetch(cli: &FetchCli, settings: &Settings) -> Result<ExitCode> {
    println!("正在获取文章: {}", cli.url);

    let fetcher = ArticleFetcher::new(&settings.fetch)?;
    let html = match fetcher.fetch(&cli.url) {
        Ok(html) => html,
        Err(err) => {
            println!("{} {:#}", "获取文章失败:".red(), err);
            return Ok(ExitCode::from(1));
        }
    };

    let classification = Classification {
        industry: cli.industry.clone(),
        impact_type: cli.impact_type.clone(),
        summary: cli.summary.clone(),
    };
    let record = ArticleRecord::new(
        &cli.url,
        utils::today(),
        extract_article(&html),
        settings.fetch.content_limit,
        classification,
    );
    println!("{}", record.to_pretty_json()?);
    Ok(ExitCode::SUCCESS)
}

/// Insert the entry into the report. Malformed input and structure problems
/// print a diagnostic and leave the report untouched without failing the run.
pub fn run_update(cli: &UpdateCli, settings: &Settings) -> Result<ExitCode> {
    let entry = match ReportEntry::from_json(&cli.entry) {
        Ok(entry) => entry,
        Err(TrackerError::EntryError(msg)) => {
            println!("{} {}", "JSON 解析失败:".red(), msg);
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.into()),
    };

    let path = cli
        .readme
        .clone()
        .unwrap_or_else(|| settings.report.path.clone());

    match apply_entry(&path, &entry, utils::now()) {
        Ok(outcome) => {
            println!("{}", outcome.message());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<TrackerError>() {
            Some(TrackerError::StructureError(msg)) => {
                warn!("Report {} not updated: {}", path.display(), msg);
                println!("{} {}", "README 更新失败:".red(), msg);
                Ok(ExitCode::SUCCESS)
            }
            _ => Err(err),
        },
    }
}
