use axum::{http::HeaderValue, Router};
use parkway_api::{create_api_routes, AppState};
use parkway_domain::config::ServerConfig;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let web_addr: SocketAddr =
        format!("{}:{}", config.bind_address, config.web_port).parse()?;

    let app = create_app(state, &config.cors_allowed_origins);

    info!("🌍 Web Server: http://{}", web_addr);
    info!("   API: http://{}/api", web_addr);

    let listener = tokio::net::TcpListener::bind(web_addr).await?;
    info!("✅ Server ready! Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(parsed))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
