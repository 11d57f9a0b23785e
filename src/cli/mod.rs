use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod runner;

#[derive(Parser, Debug)]
#[command(name = "fetch_article")]
#[command(version, about = "Fetch an article and print it as a JSON record")]
#[command(
    long_about = "Fetch a web page, extract its title (first <h1>, else <title>) and paragraph text, and print a JSON record. Classification fields are only included when given explicitly."
)]
pub struct FetchCli {
    /// Article URL
    pub url: String,

    /// Industry the article is classified under (e.g. 教育培训)
    #[arg(long)]
    pub industry: Option<String>,

    /// Impact type (e.g. 自动化, 替代, 增强)
    #[arg(long = "impact-type")]
    pub impact_type: Option<String>,

    /// One-line summary for the report table
    #[arg(long)]
    pub summary: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "update_readme")]
#[command(version, about = "Insert a classified article into the markdown report")]
#[command(
    long_about = "Insert a JSON record {date, industry, impact_type, summary, url} into the report, creating the month and industry sections when missing."
)]
pub struct UpdateCli {
    /// JSON record to insert
    pub entry: String,

    /// Report file (defaults to README.md or $IMPACT_TRACKER_README)
    #[arg(long)]
    pub readme: Option<PathBuf>,

    /// Extra arguments after the record are accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    pub ignored: Vec<String>,
}

/// Parse arguments; usage errors exit with status 1, help/version with 0.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Logs go to stderr, filtered by RUST_LOG (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
