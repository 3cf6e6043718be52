use crate::leaderboard::{Leaderboard, LeaderboardStore};
use crate::logger;
use crate::store::KeyValueStore;
use crossbeam_channel::{unbounded, Sender};
use std::io;
use std::thread;

#[derive(Debug)]
pub enum PersistRequest {
    Save(Leaderboard),
}

/// Moves leaderboard writes off the UI task. The worker stops once every
/// sender is dropped, after draining what was already queued.
pub fn spawn_persist_worker<S>(
    mut store: LeaderboardStore<S>,
) -> io::Result<(Sender<PersistRequest>, thread::JoinHandle<()>)>
where
    S: KeyValueStore + Send + 'static,
{
    let (tx, rx) = unbounded::<PersistRequest>();

    let handle = thread::Builder::new()
        .name("vocab-typing::persist_worker".to_string())
        .spawn(move || {
            for request in rx.iter() {
                match request {
                    PersistRequest::Save(board) => match store.save(&board) {
                        Ok(()) => logger::info(&format!(
                            "Saved leaderboard with {} results",
                            board.len()
                        )),
                        Err(e) => logger::warn(&format!("Failed to save leaderboard: {}", e)),
                    },
                }
            }
            logger::info("Persist channel disconnected, exiting");
        })?;

    Ok((tx, handle))
}
