use std::time::Duration;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub struct Server;

impl Server {
    pub fn api_service(container: DependencyContainer) -> OpenApiService<(HealthApi, ProductApi), ()> {
        OpenApiService::new(
            (container.health_api, container.product_api),
            "Product API",
            env!("CARGO_PKG_VERSION"),
        )
    }

    /// Serves until Ctrl-C, then waits up to `SHUTDOWN_GRACE` for in-flight requests.
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = Self::api_service(container).server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("shutdown signal received");
                },
                Some(SHUTDOWN_GRACE),
            )
            .await?;
        Ok(())
    }
}
