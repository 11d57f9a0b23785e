use anyhow::Result;
use impact_tracker::cli::{self, runner, FetchCli};
use impact_tracker::config::Settings;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    cli::init_tracing();

    let cli: FetchCli = cli::parse_args();
    let settings = Settings::load()?;

    runner::run_fetch(&cli, &settings)
}
