use crate::clock::Clock;
use crate::config::GameConfig;
use crate::leaderboard::Leaderboard;
use crate::logger;
use crate::models::GameResult;
use crate::persist_worker::PersistRequest;
use crate::session::{AdvanceOutcome, Completion, Session};
use crate::timer::AdvanceTimer;
use crate::words::WordList;
use crossbeam_channel::Sender;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// The live session plus everything around it: the pending advance, the
/// leaderboard, the active word list and the persistence channel.
pub struct Game<C: Clock> {
    session: Session,
    timer: AdvanceTimer,
    leaderboard: Leaderboard,
    latest: Option<GameResult>,
    words: WordList,
    rng: StdRng,
    clock: C,
    persist_tx: Option<Sender<PersistRequest>>,
}

impl<C: Clock> Game<C> {
    pub fn new(config: &GameConfig, words: WordList, leaderboard: Leaderboard, clock: C) -> Self {
        Game {
            session: Session::new(config.delays, config.max_rounds),
            timer: AdvanceTimer::new(),
            leaderboard,
            latest: None,
            words,
            rng: StdRng::from_entropy(),
            clock,
            persist_tx: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_persistence(mut self, persist_tx: Sender<PersistRequest>) -> Self {
        self.persist_tx = Some(persist_tx);
        self
    }

    pub fn start(&mut self) {
        self.timer.cancel();
        self.latest = None;
        if let Some(completion) = self.session.start(&self.words.pairs, &mut self.rng) {
            logger::info("Started a game with no words; finished immediately");
            self.record(completion);
        }
    }

    pub fn restart(&mut self) {
        self.start();
    }

    /// Drop the live session's pending advance, e.g. when leaving to the menu.
    pub fn abandon(&mut self) {
        self.timer.cancel();
    }

    /// Returns whether the answer was accepted.
    pub fn submit(&mut self, answer: &str) -> bool {
        match self.session.submit(answer) {
            Some(submission) => {
                self.timer
                    .schedule(submission.ticket, self.clock.now(), submission.delay);
                true
            }
            None => false,
        }
    }

    /// Fire the scheduled advance if its time has come.
    pub fn tick(&mut self) -> Option<AdvanceOutcome> {
        let ticket = self.timer.take_due(self.clock.now())?;
        let outcome = self.session.advance(ticket);
        if let AdvanceOutcome::Complete(completion) = outcome {
            self.record(completion);
        }
        Some(outcome)
    }

    fn record(&mut self, completion: Completion) {
        let result = GameResult::new(completion, self.clock.wall_now());
        logger::info(&format!(
            "Game finished: {}/{} ({}%)",
            result.score, result.total, result.percentage
        ));
        self.leaderboard.append(result.clone());
        self.latest = Some(result);

        if let Some(tx) = &self.persist_tx
            && tx
                .send(PersistRequest::Save(self.leaderboard.clone()))
                .is_err()
        {
            logger::warn("Persist worker is gone; leaderboard kept in memory only");
        }
    }

    pub fn set_words(&mut self, words: WordList) {
        self.words = words;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Result of the most recently finished game, cleared on the next start.
    pub fn latest_result(&self) -> Option<&GameResult> {
        self.latest.as_ref()
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }
}
