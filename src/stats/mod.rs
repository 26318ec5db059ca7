mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::StatsError;
pub use models::*;
pub use repository::{InMemoryStatsRepository, StatsRepository};
pub use service::StatsService;
