use anyhow::{Context, Result};
use clap::Parser;
use comic_generator::models::Config;
use comic_generator::pipeline::ComicPipeline;
use comic_generator::server::{self, AppState};
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "comic-generator")]
#[command(about = "Serve story-to-comic generation over HTTP")]
struct CliArgs {
    /// Bind host, overriding HOST.
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding PORT.
    #[arg(long)]
    port: Option<u16>,
}

fn bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip = host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid bind host '{}'", host))?;
    Ok(SocketAddr::new(ip, port))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comic_generator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting comic-generator");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let pipeline = ComicPipeline::from_config(&config).context("Failed to build pipeline")?;
    let app = server::router(AppState::new(pipeline));

    let host = args.host.unwrap_or(config.host);
    let port = args.port.unwrap_or(config.port);
    let addr = bind_addr(&host, port)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    server::serve(listener, app, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{bind_addr, CliArgs};
    use clap::Parser;

    #[test]
    fn test_bind_addr_valid() {
        let addr = bind_addr("127.0.0.1", 8080).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bind_addr_invalid() {
        let err = bind_addr("not-a-host", 8080).unwrap_err();
        assert!(err.to_string().contains("not-a-host"));
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::parse_from(["comic-generator", "--host", "127.0.0.1", "--port", "9090"]);
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9090));
    }
}
