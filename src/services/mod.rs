pub mod engine;
pub mod supply_client;
pub mod tile_bag;
