use crate::db::get_data_dir;
use crate::rounds::MAX_ROUNDS;
use crate::session::FeedbackDelays;
use std::path::PathBuf;

pub const DEFAULT_WORDS_FILE: &str = "english-hebrew.csv";
pub const WORDLISTS_DIR: &str = "wordlists";
pub const DB_FILE: &str = "vocab.db";
pub const LOG_FILE: &str = "vocab_typing.log";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub delays: FeedbackDelays,
    /// Directory scanned for CSV word lists on the menu screen.
    pub wordlists_dir: PathBuf,
    pub default_words_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        let wordlists_dir = PathBuf::from(WORDLISTS_DIR);
        GameConfig {
            max_rounds: MAX_ROUNDS,
            delays: FeedbackDelays::default(),
            default_words_path: wordlists_dir.join(DEFAULT_WORDS_FILE),
            wordlists_dir,
            data_dir: get_data_dir(),
        }
    }
}

impl GameConfig {
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 20);
        assert_eq!(config.delays.correct, Duration::from_millis(2500));
        assert_eq!(config.delays.incorrect, Duration::from_millis(4000));
        assert_eq!(
            config.default_words_path,
            PathBuf::from("wordlists").join("english-hebrew.csv")
        );
    }

    #[test]
    fn test_paths_live_in_data_dir() {
        let config = GameConfig {
            data_dir: PathBuf::from("/tmp/vocab"),
            ..GameConfig::default()
        };
        assert_eq!(config.db_path(), PathBuf::from("/tmp/vocab/vocab.db"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/vocab/vocab_typing.log"));
    }
}
