use axum::{routing::delete, routing::get, routing::post, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::geocode::Geocoder;
use crate::oem::OemClient;
use crate::trajectory::TrajectoryStore;

use super::api_doc::ApiDoc;
use super::config::Config;
use super::handlers;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<TrajectoryStore>>,
    pub oem: Arc<OemClient>,
    pub geocoder: Arc<Geocoder>,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let oem = OemClient::new(&config.upstream).map_err(to_io)?;
    let geocoder = Geocoder::new(&config.geocoder).map_err(to_io)?;

    // Populate the store at startup; on failure the service starts with an
    // empty sequence and /post-data can load it later.
    let mut store = TrajectoryStore::new();
    match oem.fetch().await {
        Ok(dataset) => store.replace(dataset),
        Err(e) => log::warn!("initial ephemeris load failed, starting empty: {}", e),
    }

    let state = AppState {
        store: Arc::new(RwLock::new(store)),
        oem: Arc::new(oem),
        geocoder: Arc::new(geocoder),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Ephemeris endpoints
        .route("/", get(handlers::list_records))
        .route("/epochs", get(handlers::list_epochs))
        .route("/epochs/{epoch}", get(handlers::get_state_vector))
        .route("/comment", get(handlers::get_comments))
        .route("/header", get(handlers::get_header))
        .route("/metadata", get(handlers::get_metadata))
        // Derived quantities
        .route("/epochs/{epoch}/speed", get(handlers::get_speed))
        .route("/epochs/{epoch}/location", get(handlers::get_location))
        .route("/now", get(handlers::get_now))
        // Admin
        .route("/help", get(handlers::help))
        .route("/delete-data", delete(handlers::delete_data))
        .route("/post-data", post(handlers::post_data))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}

fn to_io<E>(err: E) -> std::io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    std::io::Error::new(std::io::ErrorKind::Other, err)
}
