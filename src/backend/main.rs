/**
 * Auth Service Entry Point
 *
 * Loads configuration from the environment (failing fast on a missing
 * signing secret), initializes tracing, and serves the Axum app.
 */

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // A missing JWT_SECRET aborts here, before the listener ever opens.
    let config = authgate::backend::server::config::ServerConfig::from_env()?;
    let port = config.port;

    let app = authgate::backend::server::init::create_app(config)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("The server requires the 'server' feature to be enabled.");
    eprintln!("Run with: cargo run --bin authgate-server --features server");
    std::process::exit(1);
}
