pub mod app;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod leaderboard;
pub mod logger;
pub mod models;
pub mod persist_worker;
pub mod rounds;
pub mod session;
pub mod store;
pub mod timer;
pub mod ui;
pub mod utils;
pub mod words;

#[cfg(test)]
mod flow_tests;

// Re-exports for convenience
pub use app::App;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use error::StoreError;
pub use evaluator::{is_correct, normalize_answer};
pub use game::Game;
pub use leaderboard::{Leaderboard, LeaderboardStore};
pub use models::{AppState, GameResult, Phase, Round, TranslationPair};
pub use rounds::build_rounds;
pub use session::{AdvanceOutcome, Session};
pub use store::{KeyValueStore, MemoryStore};
pub use words::{load_default_words, parse_word_csv, WordList};
