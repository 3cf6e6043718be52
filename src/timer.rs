use crate::session::AdvanceTicket;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: AdvanceTicket,
    deadline: Instant,
}

/// Holds the one scheduled `advance` of the live session.
#[derive(Debug, Default)]
pub struct AdvanceTimer {
    pending: Option<Pending>,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was pending.
    pub fn schedule(&mut self, ticket: AdvanceTicket, now: Instant, delay: Duration) {
        self.pending = Some(Pending {
            ticket,
            deadline: now + delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    pub fn take_due(&mut self, now: Instant) -> Option<AdvanceTicket> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.ticket)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Round;
    use crate::session::Session;

    fn ticket() -> AdvanceTicket {
        let mut session = Session::default();
        session.begin(vec![Round {
            prompt: "ספר".to_string(),
            expected_answer: "book".to_string(),
        }]);
        session.submit("book").unwrap().ticket
    }

    #[test]
    fn test_fires_at_deadline_not_before() {
        let mut timer = AdvanceTimer::new();
        let t0 = Instant::now();
        let delay = Duration::from_millis(2500);
        timer.schedule(ticket(), t0, delay);

        assert!(timer.take_due(t0).is_none());
        assert!(timer.take_due(t0 + delay - Duration::from_millis(1)).is_none());
        assert!(timer.is_pending());
        assert!(timer.take_due(t0 + delay).is_some());
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_fires_once() {
        let mut timer = AdvanceTimer::new();
        let t0 = Instant::now();
        timer.schedule(ticket(), t0, Duration::from_secs(4));
        let late = t0 + Duration::from_secs(10);
        assert!(timer.take_due(late).is_some());
        assert!(timer.take_due(late).is_none());
    }

    #[test]
    fn test_cancel() {
        let mut timer = AdvanceTimer::new();
        let t0 = Instant::now();
        timer.schedule(ticket(), t0, Duration::from_secs(1));
        timer.cancel();
        assert!(timer.deadline().is_none());
        assert!(timer.take_due(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut timer = AdvanceTimer::new();
        let t0 = Instant::now();
        timer.schedule(ticket(), t0, Duration::from_secs(4));
        timer.schedule(ticket(), t0, Duration::from_secs(1));
        assert_eq!(timer.deadline(), Some(t0 + Duration::from_secs(1)));
    }
}
