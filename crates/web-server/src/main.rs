use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// Its job is to install the tracing subscriber, load the configuration, and
// hand off to the `run_server` function from the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = configuration::load_config()?;
    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);

    web_server::run_server(addr, settings.ai).await
}
