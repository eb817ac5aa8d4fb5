use clap::Parser;

/// Generate a Black Duck security report for a scanned project
#[derive(Parser, Debug)]
#[command(name = "blackduck-report")]
#[command(version)]
#[command(
    about = "Generate a Black Duck security report for a scanned project",
    long_about = None
)]
pub struct Args {
    /// Black Duck project name to search for
    #[arg(short = 'p', long)]
    pub project_name: String,

    /// Exact project version to report on (defaults to the first match)
    #[arg(short = 'f', long)]
    pub project_version: Option<String>,

    /// Base URL of the Black Duck server, e.g. https://blackduck.example.com
    #[arg(short = 'u', long)]
    pub blackduck_url: String,

    /// Black Duck API token, exchanged for a bearer token at login
    #[arg(short = 't', long, env = "BLACKDUCK_TOKEN", hide_env_values = true)]
    pub blackduck_token: String,

    /// Raise log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
