use axum::{
    extract::{Json, Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::game::board::create_standard_board;
use crate::game::letter::Letter;
use crate::game::rack::RACK_SIZE;
use crate::services::supply_client::{
    DrawTilesRequest, DrawTilesResponse, NewGameResponse, TilePointsResponse,
};
use crate::services::tile_bag::{create_shuffled_bag, TileBag};

// Configuration for the tile supply server
#[derive(Debug, Clone)]
pub struct SupplyServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for SupplyServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

// One shared bag per server; a new game resets it. In-memory only, for
// the life of the process.
#[derive(Debug)]
struct BagStore {
    game_id: Uuid,
    bag: TileBag,
}

#[derive(Clone)]
struct SupplyState {
    store: Arc<RwLock<BagStore>>,
}

/// The tile supply service: deals a fresh board and rack, draws
/// replacement tiles from a shared bag, and looks up tile point values.
pub struct SupplyServer {
    config: SupplyServerConfig,
}

impl SupplyServer {
    pub fn new(config: SupplyServerConfig) -> Self {
        Self { config }
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 Tile supply server starting on http://localhost:{}",
            self.config.port
        );

        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Build the service router with a fresh shared bag. Public so tests can
/// serve it on an ephemeral port.
pub fn create_router() -> Router {
    let state = SupplyState {
        store: Arc::new(RwLock::new(BagStore {
            game_id: Uuid::new_v4(),
            bag: create_shuffled_bag(),
        })),
    };

    Router::new()
        .route("/api/new_game", post(api_new_game))
        .route("/api/draw_tiles", post(api_draw_tiles))
        .route("/api/tile_points/{letter}", get(api_tile_points))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn api_new_game(State(state): State<SupplyState>) -> ResponseJson<NewGameResponse> {
    let mut store = state.store.write().await;
    store.game_id = Uuid::new_v4();
    store.bag = create_shuffled_bag();
    let tiles = store.bag.draw(RACK_SIZE);

    log::info!(
        "🆕 New game {}: dealt {} tiles, {} left in the bag",
        store.game_id,
        tiles.len(),
        store.bag.remaining()
    );

    ResponseJson(NewGameResponse {
        board: create_standard_board(),
        tiles,
        score: 0,
    })
}

async fn api_draw_tiles(
    State(state): State<SupplyState>,
    Json(request): Json<DrawTilesRequest>,
) -> ResponseJson<DrawTilesResponse> {
    let mut store = state.store.write().await;
    let tiles = store.bag.draw(request.count);

    log::info!(
        "🎒 Game {}: drew {} of {} requested, {} left",
        store.game_id,
        tiles.len(),
        request.count,
        store.bag.remaining()
    );

    ResponseJson(DrawTilesResponse { tiles })
}

async fn api_tile_points(Path(letter): Path<String>) -> ResponseJson<TilePointsResponse> {
    let points = letter
        .chars()
        .next()
        .and_then(|c| Letter::new(c).ok())
        .map_or(0, |l| l.value());

    ResponseJson(TilePointsResponse { points })
}
