pub mod config;
pub mod errors;
pub mod graph;
pub mod stack;
pub mod types;
