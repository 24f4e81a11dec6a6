use crate::game::board::Board;
use crate::game::letter::Letter;
use crate::ScrabbleError;
use serde::{Deserialize, Serialize};

// ============================================================================
// WIRE TYPES
// ============================================================================

/// `POST /api/new_game` response: a freshly generated board with premium
/// metadata, the initial deal, and the starting score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub board: Board,
    pub tiles: Vec<Letter>,
    pub score: u32,
}

/// `POST /api/draw_tiles` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawTilesRequest {
    pub count: usize,
}

/// `POST /api/draw_tiles` response; may hold fewer tiles than requested
/// when the bag runs low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawTilesResponse {
    pub tiles: Vec<Letter>,
}

/// `GET /api/tile_points/{letter}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilePointsResponse {
    pub points: u32,
}

// ============================================================================
// CLIENT
// ============================================================================

/// Async client for the tile supply service. Any transport or decode
/// failure surfaces as `SupplyUnavailable`; the caller's session state is
/// never touched by a failed request.
#[derive(Debug, Clone)]
pub struct SupplyClient {
    base_url: String,
    http: reqwest::Client,
}

impl SupplyClient {
    pub fn new(base_url: impl Into<String>) -> SupplyClient {
        SupplyClient {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a fresh board and initial deal.
    pub async fn new_game(&self) -> crate::Result<NewGameResponse> {
        let url = format!("{}/api/new_game", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrabbleError::SupplyUnavailable(e.to_string()))?;

        response
            .json::<NewGameResponse>()
            .await
            .map_err(|e| ScrabbleError::SupplyUnavailable(e.to_string()))
    }

    /// Request up to `count` replacement tiles.
    pub async fn draw_tiles(&self, count: usize) -> crate::Result<Vec<Letter>> {
        let url = format!("{}/api/draw_tiles", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&DrawTilesRequest { count })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrabbleError::SupplyUnavailable(e.to_string()))?;

        let body = response
            .json::<DrawTilesResponse>()
            .await
            .map_err(|e| ScrabbleError::SupplyUnavailable(e.to_string()))?;

        Ok(body.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_response_decodes_wire_shape() {
        // Board cells arrive as objects with an optional premium field;
        // unknown extra fields from the service are ignored.
        let json = serde_json::json!({
            "board": [[{"premium": "TW", "row": 0, "col": 0, "tile": null}, {}]],
            "tiles": ["A", "_", "Q"],
            "score": 0
        });

        let decoded: NewGameResponse = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.tiles.len(), 3);
        assert!(decoded.tiles[1].is_blank(), "\"_\" should decode to the blank tile.");
        assert_eq!(
            decoded.board.premium_at(0, 0),
            Some(crate::game::board::Premium::TripleWord)
        );
        assert_eq!(decoded.board.premium_at(0, 1), None);
    }

    #[test]
    fn test_draw_tiles_request_encodes_count() {
        let body = serde_json::to_value(DrawTilesRequest { count: 3 }).unwrap();
        assert_eq!(body, serde_json::json!({ "count": 3 }));
    }
}
