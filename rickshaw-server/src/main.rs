use std::net::SocketAddr;

use rickshaw_server::cache::{CacheConfig, CachedProvider};
use rickshaw_server::engine::EngineConfig;
use rickshaw_server::provider::{OsrmClient, OsrmConfig};
use rickshaw_server::store::MemoryStore;
use rickshaw_server::web::{AppState, create_router};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rickshaw_server=info,warn".into()),
        )
        .init();

    // Reference data: a JSON seed file, or an empty registry when unset.
    let store = match std::env::var("SEED_DATA") {
        Ok(path) => MemoryStore::load(&path).expect("failed to load seed data"),
        Err(_) => {
            tracing::warn!("SEED_DATA not set; serving with an empty reference registry");
            MemoryStore::empty()
        }
    };
    tracing::info!(
        stands = store.stand_count(),
        stations = store.station_count(),
        "reference data loaded"
    );

    // Routing provider, with a TTL cache in front.
    let osrm_config = match std::env::var("OSRM_BASE_URL") {
        Ok(url) => OsrmConfig::new(url),
        Err(_) => OsrmConfig::default(),
    };
    let osrm = OsrmClient::new(osrm_config).expect("failed to create OSRM client");
    let provider = CachedProvider::new(osrm, &CacheConfig::default());

    let state = AppState::new(store, provider, EngineConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("invalid BIND_ADDR");

    tracing::info!("listening on http://{addr}");
    tracing::info!("  GET  /health            - health check");
    tracing::info!("  POST /routes/calculate  - compute route options");
    tracing::info!("  GET  /stands/nearby     - stands near a point");
    tracing::info!("  GET  /stations/nearest  - nearest station on a line");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
