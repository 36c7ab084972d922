//! TenderMind dashboard server entry point

use clap::Parser;
use shared::logging;

use webserver::{Args, WebServer, WebServerConfig, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let args = Args::parse();
    logging::init_tracing_with_level(Some(args.log_level.as_str()));

    let config = WebServerConfig::from_args(args)?;
    logging::log_startup(
        "webserver",
        &format!(
            "HTTP on {} ({} mode, backend {})",
            config.bind_address, config.initial_mode, config.backend_url
        ),
    );

    let webserver = WebServer::from_config(config)?;
    webserver.run().await?;

    logging::log_success("webserver", "WebServer stopped gracefully");
    Ok(())
}
