use anyhow::Context;
use receipt_storage::ReceiptStore;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::receipts::handlers::process_receipt,
        features::receipts::handlers::get_receipt_points,
    ),
    components(
        schemas(
            receipt_storage::dto::receipt::ReceiptRequest,
            receipt_storage::dto::receipt::ItemRequest,
            receipt_storage::dto::receipt::ProcessReceiptResponse,
            receipt_storage::dto::receipt::PointsResponse,
        )
    ),
    tags(
        (name = "receipts", description = "Receipt processing and points lookup"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting receipt processor");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = ReceiptStore::new();
    let mut app = routes::configure(store);

    let bind_address = config.bind_address();

    if config.swagger_ui {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        tracing::info!(
            "Swagger UI available at http://{}/swagger-ui/",
            bind_address
        );
    }

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Server started at http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
