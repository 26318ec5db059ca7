pub mod builder;
pub mod calculator;
pub mod models;
pub mod session;

pub use builder::{FieldUpdate, ScoreSheetBuilder};
pub use calculator::{calculator_for, compute_totals, ScoreCalculator, WeightedSumCalculator};
pub use models::*;
pub use session::ScoreSheetSession;
