//! # Scrabble Game Library
//!
//! A tile-placement word game engine with premium-square scoring.
//!
//! ## Features
//!
//! - **Game Engine**: board, rack and placed-tile state machine with scoring
//! - **Supply Client**: async client for the tile supply web API
//! - **Supply Server**: axum implementation of the tile supply web API
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scrabble::services::engine::GameEngine;
//! use scrabble::services::supply_client::SupplyClient;
//!
//! # async fn run() -> scrabble::Result<()> {
//! let mut engine = GameEngine::new(SupplyClient::new("http://localhost:5000"));
//! engine.start_new_game().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game state: board, letters, rack, session
pub mod game;

/// Placement scoring under premium-square multiplier rules
pub mod scoring;

/// Server components (tile supply web API)
pub mod servers;

/// Engine orchestration and tile supply client
pub mod services;

/// Logging initialization
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Scrabble library
#[derive(Debug, thiserror::Error)]
pub enum ScrabbleError {
    #[error("tile supply unavailable: {0}")]
    SupplyUnavailable(String),

    #[error("rack slot {0} is empty")]
    SlotEmpty(usize),

    #[error("cell ({0}, {1}) is already occupied")]
    CellOccupied(usize, usize),

    #[error("position ({0}, {1}) is outside the board")]
    OutOfBounds(usize, usize),

    #[error("no tiles placed on the board")]
    NothingPlaced,

    #[error("a {0} request is already in flight")]
    RequestInFlight(&'static str),

    #[error("no active game session")]
    NoActiveSession,

    #[error("'{0}' is not a playable letter")]
    InvalidLetter(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrabbleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
