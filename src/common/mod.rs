pub mod config;

pub use config::{CollinearEdges, CollisionConfig, Contact};
