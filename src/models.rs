use serde::{Deserialize, Serialize};

/// A word and its translation. `source` is the answer-language (English)
/// word, `target` the prompt-language (Hebrew) word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationPair {
    pub source: String,
    pub target: String,
}

impl TranslationPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Round {
    pub prompt: String,
    pub expected_answer: String,
}

impl From<&TranslationPair> for Round {
    fn from(pair: &TranslationPair) -> Self {
        Round {
            prompt: pair.target.clone(),
            expected_answer: pair.source.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    /// Feedback for the current round is on screen; submissions are ignored.
    AwaitingNext,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
}

/// Outcome of one finished game, as persisted in the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    /// ISO-8601, UTC, millisecond precision.
    pub date: String,
    /// Epoch milliseconds; doubles as the identity of the result.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing,
    QuitConfirm,
    Summary,
}

/// Answer being typed on the game screen. `cursor` counts chars, not bytes,
/// so Hebrew or accented input stays on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    pub buffer: String,
    pub cursor: usize,
}

impl AnswerInput {
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index();
        self.buffer.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.clamp();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn clamp(&mut self) {
        self.cursor = self.cursor.min(self.buffer.chars().count());
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_from_pair_asks_for_source() {
        let pair = TranslationPair::new("pencil", "עיפרון");
        let round = Round::from(&pair);
        assert_eq!(round.prompt, "עיפרון");
        assert_eq!(round.expected_answer, "pencil");
    }

    #[test]
    fn test_answer_input_insert_at_cursor() {
        let mut input = AnswerInput {
            buffer: "Helo".to_string(),
            cursor: 3,
        };
        input.insert('l');
        assert_eq!(input.buffer, "Hello");
        assert_eq!(input.cursor, 4);

        input.cursor = 0;
        input.insert('W');
        assert_eq!(input.buffer, "WHello");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_answer_input_backspace() {
        let mut input = AnswerInput {
            buffer: "Hello World".to_string(),
            cursor: 5,
        };
        input.backspace();
        assert_eq!(input.buffer, "Hell World");
        assert_eq!(input.cursor, 4);

        input.cursor = 0;
        input.backspace();
        assert_eq!(input.buffer, "Hell World");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_answer_input_multibyte_chars() {
        let mut input = AnswerInput::default();
        for c in "ספר".chars() {
            input.insert(c);
        }
        assert_eq!(input.cursor, 3);
        input.move_left();
        input.backspace();
        assert_eq!(input.buffer, "סר");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_answer_input_cursor_bounds() {
        let mut input = AnswerInput::default();
        input.move_left();
        input.move_right();
        assert_eq!(input.cursor, 0);

        input.insert('H');
        input.cursor = 10;
        input.move_left();
        assert_eq!(input.cursor, 0);

        for _ in 0..5 {
            input.move_right();
        }
        assert_eq!(input.cursor, 1);
    }
}
