use anyhow::Result;
use impact_tracker::cli::{self, runner, UpdateCli};
use impact_tracker::config::Settings;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    cli::init_tracing();

    let cli: UpdateCli = cli::parse_args();
    let settings = Settings::load()?;

    runner::run_update(&cli, &settings)
}
