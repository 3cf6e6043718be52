//! Round progression and scoring for a single game.
//!
//! The session never sleeps or spawns anything. An accepted submission hands
//! back an [`AdvanceTicket`] plus the delay after which the caller must call
//! [`Session::advance`]. Tickets carry the session generation, so one issued
//! before a restart is ignored afterwards.

use crate::evaluator::is_correct;
use crate::models::{Feedback, Phase, Round, TranslationPair};
use crate::rounds::{build_rounds_with_limit, MAX_ROUNDS};
use rand::Rng;
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "🎉 Perfect! Great job!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackDelays {
    pub correct: Duration,
    pub incorrect: Duration,
}

impl Default for FeedbackDelays {
    fn default() -> Self {
        Self {
            correct: Duration::from_millis(2500),
            incorrect: Duration::from_millis(4000),
        }
    }
}

impl FeedbackDelays {
    pub fn for_answer(&self, correct: bool) -> Duration {
        if correct { self.correct } else { self.incorrect }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
    round_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub delay: Duration,
    pub ticket: AdvanceTicket,
}

/// Final tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub score: u32,
    pub total: u32,
}

impl Completion {
    /// `round(100 * score / total)`, halves rounding up; 0 when there were no
    /// rounds at all.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let score = u64::from(self.score);
        let total = u64::from(self.total);
        ((200 * score + total) / (2 * total)) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextRound,
    Complete(Completion),
    /// Ticket from an earlier generation or round; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Session {
    rounds: Vec<Round>,
    current_index: usize,
    score: u32,
    answered_count: u32,
    phase: Phase,
    feedback: Option<Feedback>,
    generation: u64,
    delays: FeedbackDelays,
    max_rounds: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FeedbackDelays::default(), MAX_ROUNDS)
    }
}

impl Session {
    pub fn new(delays: FeedbackDelays, max_rounds: usize) -> Self {
        Session {
            rounds: Vec::new(),
            current_index: 0,
            score: 0,
            answered_count: 0,
            phase: Phase::NotStarted,
            feedback: None,
            generation: 0,
            delays,
            max_rounds,
        }
    }

    /// Begin a fresh game. Returns the completion straight away when the word
    /// source produced no rounds.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        pairs: &[TranslationPair],
        rng: &mut R,
    ) -> Option<Completion> {
        let rounds = build_rounds_with_limit(pairs, self.max_rounds, rng);
        self.begin(rounds)
    }

    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        pairs: &[TranslationPair],
        rng: &mut R,
    ) -> Option<Completion> {
        self.start(pairs, rng)
    }

    /// Begin a game over prebuilt rounds.
    pub fn begin(&mut self, rounds: Vec<Round>) -> Option<Completion> {
        self.generation += 1;
        self.rounds = rounds;
        self.current_index = 0;
        self.score = 0;
        self.answered_count = 0;
        self.feedback = None;

        if self.rounds.is_empty() {
            self.phase = Phase::Complete;
            Some(self.completion())
        } else {
            self.phase = Phase::Active;
            None
        }
    }

    pub fn submit(&mut self, answer: &str) -> Option<Submission> {
        if self.phase != Phase::Active || answer.trim().is_empty() {
            return None;
        }
        let round = self.rounds.get(self.current_index)?;

        let correct = is_correct(answer, &round.expected_answer);
        let message = if correct {
            SUCCESS_MESSAGE.to_string()
        } else {
            format!(
                "Not quite! The correct answer is: {}",
                round.expected_answer
            )
        };

        self.answered_count += 1;
        if correct {
            self.score += 1;
        }
        self.feedback = Some(Feedback { correct, message });
        self.phase = Phase::AwaitingNext;

        Some(Submission {
            correct,
            delay: self.delays.for_answer(correct),
            ticket: AdvanceTicket {
                generation: self.generation,
                round_index: self.current_index,
            },
        })
    }

    pub fn advance(&mut self, ticket: AdvanceTicket) -> AdvanceOutcome {
        if self.phase != Phase::AwaitingNext
            || ticket.generation != self.generation
            || ticket.round_index != self.current_index
        {
            return AdvanceOutcome::Stale;
        }

        if self.current_index + 1 >= self.rounds.len() {
            self.phase = Phase::Complete;
            AdvanceOutcome::Complete(self.completion())
        } else {
            self.current_index += 1;
            self.feedback = None;
            self.phase = Phase::Active;
            AdvanceOutcome::NextRound
        }
    }

    pub fn completion(&self) -> Completion {
        Completion {
            score: self.score,
            total: self.rounds.len() as u32,
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        match self.phase {
            Phase::Active | Phase::AwaitingNext => self.rounds.get(self.current_index),
            Phase::NotStarted | Phase::Complete => None,
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}
