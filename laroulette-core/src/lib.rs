pub mod config;
pub mod dozens;
pub mod engine;
pub mod error;
pub mod models;
pub mod observer;
pub mod stats;
pub mod streak;

pub use config::Thresholds;
pub use engine::{recommend, recommend_logged, Bet, PatternKind, Recommendation};
pub use error::{Result, RouletteError};
pub use models::{classify, Attributes, Color, Dozen, Half, Outcome, Parity, PossibilitySet};
