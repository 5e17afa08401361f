use std::net::SocketAddr;

use board_server::board::BoardConfig;
use board_server::cache::{CacheConfig, CachedTfnswClient};
use board_server::stops::{RecentStopStore, SearchConfig};
use board_server::tfnsw::{TfnswClient, TfnswConfig};
use board_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Get the API key from the environment
    let api_key = std::env::var("TFNSW_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: TFNSW_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create the TfNSW client with a short-lived departures cache
    let client =
        TfnswClient::new(TfnswConfig::new(&api_key)).expect("Failed to create TfNSW client");
    let cached = CachedTfnswClient::new(client, &CacheConfig::default());

    // Last-stop persistence
    let store_path =
        std::env::var("LAST_STOP_PATH").unwrap_or_else(|_| "last_stop.json".to_string());
    let store = RecentStopStore::new(&store_path);
    let last_stop = store.load();

    // Build app state
    let state = AppState::new(
        cached,
        Some(store),
        BoardConfig::default(),
        SearchConfig::default(),
    );

    // Restore the last viewed stop so the board is populated on first load
    if let Some(stop_id) = last_stop {
        println!("Restoring last stop {stop_id}");
        let controller = state.controller.clone();
        tokio::spawn(async move {
            if let Err(e) = controller.submit_stop(&stop_id).await {
                tracing::warn!("failed to restore last stop: {e}");
            }
        });
    }

    // Create router
    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "board-server/static".to_string());
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Sydney Departures listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the departure board.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /board           - Board HTML fragment");
    println!("  POST /board/stop      - Select a stop");
    println!("  GET  /api/departures  - Departures as JSON");
    println!("  GET  /api/stops       - Stop autocomplete as JSON");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
