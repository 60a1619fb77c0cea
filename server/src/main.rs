use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    todo_server::run(listener).await?;
    Ok(())
}
