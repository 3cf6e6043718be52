use crate::error::StoreError;
use crate::logger;
use crate::models::GameResult;
use crate::session::Completion;
use crate::store::KeyValueStore;
use chrono::{DateTime, SecondsFormat, Utc};

pub const LEADERBOARD_KEY: &str = "vocabTypingLeaderboard";

impl GameResult {
    pub fn new(completion: Completion, at: DateTime<Utc>) -> Self {
        GameResult {
            score: completion.score,
            total: completion.total,
            percentage: completion.percentage(),
            date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp: at.timestamp_millis(),
        }
    }
}

/// Past results, best score first. Equal scores keep the order they were
/// appended in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    results: Vec<GameResult>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: GameResult) -> &[GameResult] {
        self.results.push(result);
        // sort_by is stable
        self.results.sort_by(|a, b| b.score.cmp(&a.score));
        &self.results
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn position_of(&self, timestamp: i64) -> Option<usize> {
        self.results.iter().position(|r| r.timestamp == timestamp)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.results)?)
    }

    /// Stored order is trusted as-is; it was sorted when written.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let results: Vec<GameResult> = serde_json::from_str(json)?;
        Ok(Leaderboard { results })
    }
}

pub struct LeaderboardStore<S> {
    store: S,
}

impl<S: KeyValueStore> LeaderboardStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Missing or unreadable data loads as an empty leaderboard.
    pub fn load(&self) -> Leaderboard {
        match self.store.get(LEADERBOARD_KEY) {
            Ok(Some(json)) => match Leaderboard::from_json(&json) {
                Ok(board) => board,
                Err(e) => {
                    logger::warn(&format!("Discarding malformed leaderboard: {}", e));
                    Leaderboard::new()
                }
            },
            Ok(None) => Leaderboard::new(),
            Err(e) => {
                logger::warn(&format!("Could not read leaderboard: {}", e));
                Leaderboard::new()
            }
        }
    }

    pub fn save(&mut self, leaderboard: &Leaderboard) -> Result<(), StoreError> {
        let json = leaderboard.to_json()?;
        self.store.set(LEADERBOARD_KEY, &json)
    }
}
