use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use completion_client::{CompletionClientTrait, Config, OpenAIClient};
use log::{error, info, warn};

use crate::config::ServiceConfig;
use crate::controllers::{analyze_controller, health_controller};
use crate::middleware::{cors_headers, TracingMiddleware};
use crate::services::analysis_service::AnalysisService;

pub struct AppState {
    pub analysis_service: AnalysisService,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClientTrait>, config: ServiceConfig) -> Self {
        Self {
            analysis_service: AnalysisService::new(client, config),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: DEFAULT_WORKER_COUNT,
        }
    }
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(analyze_controller::config)
        .configure(health_controller::config);
}

pub async fn run(
    settings: ServerSettings,
    client_config: Config,
    service_config: ServiceConfig,
) -> Result<(), String> {
    info!("Starting critique service...");

    if client_config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; every analysis will fail with \"AI request failed\"");
    }
    info!(
        "Upstream: {} (model={}, temperature={}, timeout={}s)",
        client_config.api_base,
        client_config.model,
        client_config.temperature,
        client_config.timeout_secs
    );

    let client: Arc<dyn CompletionClientTrait> = Arc::new(
        OpenAIClient::new(client_config)
            .map_err(|e| format!("Failed to build completion client: {e}"))?,
    );
    let app_state = web::Data::new(AppState::new(client, service_config));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(cors_headers())
            .wrap(TracingMiddleware)
            .configure(app_config)
    })
    .workers(settings.workers.max(1))
    .bind((settings.host.as_str(), settings.port))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!(
        "Critique service listening on http://{}:{}",
        settings.host, settings.port
    );

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
