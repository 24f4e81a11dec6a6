use crate::game::letter::Letter;
use crate::game::rack::RACK_SIZE;
use crate::game::session::{GameSession, PlacedTile};
use crate::scoring::scoring::score_placement;
use crate::services::supply_client::SupplyClient;
use crate::ScrabbleError;

/// What a successful submission produced: the score gained and the
/// replacement tiles that made it back into the rack.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub score_delta: u32,
    pub drawn: Vec<Letter>,
}

/// The tile and score engine. Owns the current `GameSession` (if any)
/// and the supply client, and orchestrates the operations the
/// presentation layer dispatches. Pure state transforms live on
/// `GameSession`; this layer adds the network calls and the in-flight
/// guards that keep one deal and one draw outstanding at most.
pub struct GameEngine {
    supply: SupplyClient,
    session: Option<GameSession>,
    deal_in_flight: bool,
    draw_in_flight: bool,
}

impl GameEngine {
    pub fn new(supply: SupplyClient) -> GameEngine {
        GameEngine {
            supply,
            session: None,
            deal_in_flight: false,
            draw_in_flight: false,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    fn session_mut(&mut self) -> crate::Result<&mut GameSession> {
        self.session.as_mut().ok_or(ScrabbleError::NoActiveSession)
    }

    // ========================================================================
    // NETWORK-BACKED OPERATIONS
    // ========================================================================

    /// Start a fresh game: new board, new rack of 7, score 0. The
    /// previous session is discarded only once the deal succeeds.
    pub async fn start_new_game(&mut self) -> crate::Result<&GameSession> {
        if self.deal_in_flight {
            return Err(ScrabbleError::RequestInFlight("new_game"));
        }

        self.deal_in_flight = true;
        let result = self.supply.new_game().await;
        self.deal_in_flight = false;

        let deal = result?;
        log::info!(
            "🆕 New game started with {} tiles in the rack",
            deal.tiles.len()
        );
        Ok(self.session.insert(GameSession::new(deal.board, &deal.tiles)))
    }

    /// Draw `count` replacement tiles and append them to the rack. On
    /// failure the rack keeps its deficit until the next attempt.
    pub async fn draw_replacement(&mut self, count: usize) -> crate::Result<Vec<Letter>> {
        if self.draw_in_flight {
            return Err(ScrabbleError::RequestInFlight("draw_tiles"));
        }
        self.session_mut()?;

        self.draw_in_flight = true;
        let result = self.supply.draw_tiles(count).await;
        self.draw_in_flight = false;

        let drawn = result?;
        if drawn.len() < count {
            log::info!("🎒 Bag running low: asked for {}, got {}", count, drawn.len());
        }
        self.session_mut()?.record_draw(&drawn);
        Ok(drawn)
    }

    /// Score the placed tiles, bank the delta, clear the ledger, then
    /// refill the rack up to 7. A short or failed refill is not an
    /// error: the rack simply stays short.
    pub async fn submit(&mut self) -> crate::Result<SubmitOutcome> {
        let session = self.session_mut()?;
        let placed = session.take_placed()?;
        let score_delta = score_placement(&session.board, &placed);
        session.score += score_delta;
        log::info!(
            "✅ Word submitted: {} tiles for {} points (total {})",
            placed.len(),
            score_delta,
            session.score
        );

        let needed = session.rack.missing_count().min(RACK_SIZE);
        let drawn = if needed > 0 {
            match self.draw_replacement(needed).await {
                Ok(tiles) => tiles,
                Err(e) => {
                    log::warn!("⚠️ Rack refill failed, playing short: {}", e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(SubmitOutcome { score_delta, drawn })
    }

    // ========================================================================
    // LOCAL OPERATIONS
    // ========================================================================

    pub fn place_tile(&mut self, rack_index: usize, row: usize, col: usize) -> crate::Result<PlacedTile> {
        self.session_mut()?.place_tile(rack_index, row, col)
    }

    pub fn recall_all(&mut self) -> crate::Result<&GameSession> {
        let session = self.session_mut()?;
        session.recall_all();
        Ok(session)
    }

    pub fn shuffle_rack(&mut self) -> crate::Result<()> {
        self.session_mut()?.shuffle_rack();
        Ok(())
    }

    #[cfg(test)]
    fn force_in_flight(&mut self, deal: bool, draw: bool) {
        self.deal_in_flight = deal;
        self.draw_in_flight = draw;
    }
}
