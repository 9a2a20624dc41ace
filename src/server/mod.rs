//! HTTP 服务
//!
//! 基于 axum 的路由：分析接口、CORS 预检和运行状态

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

use crate::config::ServiceConfig;
use crate::utils::ConfigValidator;

pub const ANALYSIS_PATH: &str = "/api/product-analysis";
pub const DIAGNOSTICS_PATH: &str = "/api/diagnostics";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const CORS_DIAGNOSTICS_METHODS: &str = "GET, OPTIONS";

/// 创建应用路由
///
/// 所有响应（包括错误响应）都带与预检相同的 CORS 头；
/// `Access-Control-Allow-Methods` 按路由列出各自允许的方法
pub fn create_router(state: AppState) -> Router {
    let analysis = Router::new()
        .route("/", post(routes::analyze_product).options(routes::preflight))
        .route(
            ANALYSIS_PATH,
            post(routes::analyze_product).options(routes::preflight),
        )
        .layer(allow_methods(CORS_ALLOW_METHODS));

    let diagnostics = Router::new()
        .route(
            DIAGNOSTICS_PATH,
            get(routes::diagnostics).options(routes::preflight),
        )
        .layer(allow_methods(CORS_DIAGNOSTICS_METHODS));

    analysis
        .merge(diagnostics)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .with_state(state)
}

fn allow_methods(methods: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(methods),
    )
}

/// 启动服务，直到收到 Ctrl-C
pub async fn run_server(config: ServiceConfig) -> anyhow::Result<()> {
    let addr = ConfigValidator::validate_bind(&config.bind)?;
    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("analysis server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
