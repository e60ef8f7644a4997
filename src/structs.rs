use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Enable debug output, overrides the configured log level.
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// qBittorrent Web API address, overrides the configured backend address.
    #[arg(short = 'r', long)]
    pub api_addr: Option<String>,
    /// Transmission RPC listen port, overrides the port of the configured bind address.
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
}
