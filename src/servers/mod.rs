// Modules for server components
pub mod web;

// Re-export public APIs
pub use web::{SupplyServer, SupplyServerConfig};
