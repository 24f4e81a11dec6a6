use clap::Parser;

use scrabble::logging::setup_logging;
use scrabble::servers::{SupplyServer, SupplyServerConfig};

#[derive(Parser, Debug)]
#[command(name = "scrabble")]
struct Config {
    /// Host address for the tile supply server
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the tile supply server
    #[arg(short = 'p', long, default_value_t = 5000)]
    port: u16,

    /// Directory for rotating log files
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_dir);

    log::info!("🎮 scrabble v{} starting", scrabble::VERSION);

    let server = SupplyServer::new(SupplyServerConfig {
        host: config.host,
        port: config.port,
    });
    server.start().await
}
