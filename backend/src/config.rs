use clap::Parser;
use std::path::PathBuf;

/// Runtime settings, read from command-line flags or `LEADS_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "leads-dashboard",
    version,
    about = "Serves the merged schools / sales navigator lead list over HTTP"
)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "LEADS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "LEADS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database holding `leads_schools` and `leads_salesnav`.
    /// Without it the built-in demonstration dataset is served.
    #[arg(long, env = "LEADS_DATABASE", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Number of HTTP worker threads (defaults to the number of CPUs).
    #[arg(long, env = "LEADS_WORKERS")]
    pub workers: Option<usize>,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
