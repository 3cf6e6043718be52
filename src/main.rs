use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use vocab_typing::db::{init_db, SqliteStore};
use vocab_typing::persist_worker::spawn_persist_worker;
use vocab_typing::words::get_csv_files;
use vocab_typing::{
    load_default_words, logger, App, Clock, Game, GameConfig, Leaderboard, LeaderboardStore,
    SystemClock,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = GameConfig::default();
    logger::init(&config.log_path());
    logger::info("Starting vocab-typing");

    let words = load_default_words(&config.default_words_path);

    let (leaderboard, persistence) = match init_db(&config.db_path()) {
        Ok(conn) => {
            let store = LeaderboardStore::new(SqliteStore::new(conn));
            let leaderboard = store.load();
            match spawn_persist_worker(store) {
                Ok(worker) => (leaderboard, Some(worker)),
                Err(e) => {
                    logger::warn(&format!("Failed to spawn persist worker: {}", e));
                    (leaderboard, None)
                }
            }
        }
        Err(e) => {
            logger::warn(&format!("Leaderboard storage unavailable: {}", e));
            (Leaderboard::new(), None)
        }
    };

    let (persist_tx, persist_handle) = match persistence {
        Some((tx, handle)) => (Some(tx), Some(handle)),
        None => (None, None),
    };

    let mut game = Game::new(&config, words, leaderboard, SystemClock);
    if let Some(tx) = persist_tx {
        game = game.with_persistence(tx);
    }
    let mut app = App::new(game, get_csv_files(&config.wordlists_dir));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the app closes the persist channel; wait for the last write.
    drop(app);
    if let Some(handle) = persist_handle
        && handle.join().is_err()
    {
        logger::warn("Persist worker panicked");
    }

    logger::info("Exiting vocab-typing");
    result
}

async fn run<C: Clock>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<C>,
) -> io::Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|f| app.draw(f))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            _ = sleep_until(app.next_deadline()) => app.tick(),
        }
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}
