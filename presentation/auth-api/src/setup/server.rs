use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = config.server.base_url.clone();
        let api_service = OpenApiService::new(
            container.health_api,
            "Auth Backend API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(base_url.clone());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server listening on {}", addr);
        tracing::info!("Swagger UI at {}/docs", base_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", base_url);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("Shutdown signal received");
                },
                Some(config.server.shutdown_timeout),
            )
            .await?;
        Ok(())
    }
}
