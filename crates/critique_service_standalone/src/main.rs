use clap::Parser;
use completion_client::Config;
use critique_service::config::load_service_config;
use critique_service::server::{self, ServerSettings};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Startup idea critique service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    port: u16,

    /// Number of HTTP worker threads
    #[arg(long, env = "APP_WORKERS", default_value_t = 4)]
    workers: usize,
}

impl From<Args> for ServerSettings {
    fn from(args: Args) -> Self {
        ServerSettings {
            host: args.host,
            port: args.port,
            workers: args.workers,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let args = Args::parse();
    tracing::info!("Starting standalone critique service...");

    let client_config = Config::new();
    let service_config = load_service_config();

    server::run(args.into(), client_config, service_config)
        .await
        .map_err(anyhow::Error::msg)
}
