pub mod board;
pub mod letter;
pub mod rack;
pub mod session;
