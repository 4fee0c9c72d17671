use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "digital-me")]
#[command(about = "Portfolio backend: contact relay API")]
pub struct CliConfig {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.bind from the config file
    #[arg(long)]
    pub bind: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON logs instead of the compact console format
    #[arg(long)]
    pub json_logs: bool,
}
