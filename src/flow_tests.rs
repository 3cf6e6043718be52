#[cfg(test)]
mod app_flow_tests {
    use crate::clock::ManualClock;
    use crate::config::GameConfig;
    use crate::leaderboard::{Leaderboard, LeaderboardStore};
    use crate::models::{AppState, Phase, TranslationPair};
    use crate::persist_worker::spawn_persist_worker;
    use crate::store::MemoryStore;
    use crate::words::{WordList, WordOrigin};
    use crate::{App, Game};
    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;
    use std::time::Duration;

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap())
    }

    fn word_list(pairs: &[(&str, &str)]) -> WordList {
        WordList {
            pairs: pairs
                .iter()
                .map(|(s, t)| TranslationPair::new(*s, *t))
                .collect(),
            origin: WordOrigin::Sample,
        }
    }

    fn create_app<'a>(clock: &'a ManualClock, pairs: &[(&str, &str)]) -> App<&'a ManualClock> {
        let game = Game::new(
            &GameConfig::default(),
            word_list(pairs),
            Leaderboard::new(),
            clock,
        )
        .with_seed(1);
        App::new(game, Vec::new())
    }

    fn press(app: &mut App<&ManualClock>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn ctrl(app: &mut App<&ManualClock>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App<&ManualClock>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn expected_answer(app: &App<&ManualClock>) -> String {
        app.game
            .session()
            .current_round()
            .unwrap()
            .expected_answer
            .clone()
    }

    fn render(app: &App<&ManualClock>) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_full_game_reaches_summary() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון"), ("book", "ספר"), ("happy", "שמח")]);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state, AppState::Playing);

        for round in 0..3 {
            let answer = expected_answer(&app);
            let typed = if round == 1 { "wrong".to_string() } else { answer.to_uppercase() };
            type_str(&mut app, &typed);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.game.session().phase(), Phase::AwaitingNext);
            assert_eq!(app.game.session().answered_count(), round + 1);

            clock.advance(Duration::from_secs(4));
            app.tick();
        }

        assert_eq!(app.state, AppState::Summary);
        let latest = app.game.latest_result().unwrap();
        assert_eq!((latest.score, latest.total, latest.percentage), (2, 3, 67));
        assert!(app.input.buffer.is_empty());
    }

    #[test]
    fn test_typing_frozen_during_feedback() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון"), ("book", "ספר")]);
        press(&mut app, KeyCode::Char('s'));

        let answer = expected_answer(&app);
        type_str(&mut app, "pen");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "cil");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input.buffer, "pen");
        assert_eq!(app.game.session().answered_count(), 1);
        assert!(app.game.session().feedback().unwrap().message.contains(&answer));
    }

    #[test]
    fn test_input_cleared_when_next_round_begins() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון"), ("book", "ספר")]);
        press(&mut app, KeyCode::Char('s'));

        let answer = expected_answer(&app);
        type_str(&mut app, &answer);
        press(&mut app, KeyCode::Enter);

        clock.advance(Duration::from_millis(2499));
        app.tick();
        assert_eq!(app.input.buffer, answer);

        clock.advance(Duration::from_millis(1));
        app.tick();
        assert!(app.input.buffer.is_empty());
        assert_eq!(app.game.session().current_index(), 1);
    }

    #[test]
    fn test_blank_enter_does_nothing() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.session().phase(), Phase::Active);
        assert!(app.next_deadline().is_none());
    }

    #[test]
    fn test_ctrl_r_restarts_and_drops_pending_advance() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון"), ("book", "ספר")]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Enter);

        ctrl(&mut app, 'r');
        assert_eq!(app.state, AppState::Playing);
        assert!(app.input.buffer.is_empty());
        assert!(app.next_deadline().is_none());

        clock.advance(Duration::from_secs(5));
        app.tick();
        assert_eq!(app.game.session().current_index(), 0);
        assert_eq!(app.game.session().answered_count(), 0);
    }

    #[test]
    fn test_empty_word_list_goes_straight_to_summary() {
        let clock = clock();
        let mut app = create_app(&clock, &[]);
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.state, AppState::Summary);
        let board = app.game.leaderboard().results();
        assert_eq!(board.len(), 1);
        assert_eq!((board[0].score, board[0].total, board[0].percentage), (0, 0, 0));
    }

    fn play(app: &mut App<&ManualClock>, clock: &ManualClock, correct: usize) -> i64 {
        let start_key = if app.state == AppState::Menu { 's' } else { 'r' };
        press(app, KeyCode::Char(start_key));
        let rounds = app.game.session().rounds().len();
        for round in 0..rounds {
            let typed = if round < correct {
                expected_answer(app)
            } else {
                "no".to_string()
            };
            type_str(app, &typed);
            press(app, KeyCode::Enter);
            clock.advance(Duration::from_secs(4));
            app.tick();
        }
        assert_eq!(app.state, AppState::Summary);
        app.game.latest_result().unwrap().timestamp
    }

    #[test]
    fn test_leaderboard_order_across_games() {
        let clock = clock();
        let mut app = create_app(
            &clock,
            &[("pencil", "עיפרון"), ("book", "ספר"), ("teacher", "מורה"), ("train", "רכבת"), ("happy", "שמח")],
        );

        let first = play(&mut app, &clock, 5);
        let second = play(&mut app, &clock, 3);
        let third = play(&mut app, &clock, 5);

        let rows: Vec<(u32, i64)> = app
            .game
            .leaderboard()
            .results()
            .iter()
            .map(|r| (r.score, r.timestamp))
            .collect();
        assert_eq!(rows, vec![(5, first), (5, third), (3, second)]);
    }

    #[test]
    fn test_quit_confirm_flow() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון"), ("book", "ספר")]);
        press(&mut app, KeyCode::Char('s'));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::QuitConfirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Playing);

        type_str(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Menu);
        assert!(app.next_deadline().is_none());
        assert!(app.game.leaderboard().is_empty());
    }

    #[test]
    fn test_completion_while_quit_dialog_open() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "pencil");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        clock.advance(Duration::from_millis(2500));
        app.tick();
        assert_eq!(app.state, AppState::QuitConfirm);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Summary);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        press(&mut app, KeyCode::Char('s'));
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_can_type_r_and_s_in_answers() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "rsmy");
        assert_eq!(app.input.buffer, "rsmy");
        assert_eq!(app.state, AppState::Playing);
    }

    #[test]
    fn test_menu_loads_selected_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let good = temp_dir.path().join("a_animals.csv");
        let empty = temp_dir.path().join("b_empty.csv");
        std::fs::write(&good, "English,Hebrew\ndog,כלב\ncat,חתול\n").unwrap();
        std::fs::write(&empty, "English,Hebrew\n").unwrap();

        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        app.menu.csv_files = vec![good.clone(), empty, PathBuf::from("/definitely/missing.csv")];

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.words().len(), 2);
        assert!(app.menu.status.as_deref().unwrap().starts_with("File loaded successfully!"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.words().len(), 2);
        assert!(app.menu.status.as_deref().unwrap().starts_with("No word pairs"));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu.selected, 2);
        press(&mut app, KeyCode::Enter);
        assert!(app.menu.status.as_deref().unwrap().starts_with("Could not read"));
        assert_eq!(app.game.words().len(), 2);
    }

    #[test]
    fn test_finished_games_persist_through_worker() {
        let kv = MemoryStore::new();
        let (tx, handle) = spawn_persist_worker(LeaderboardStore::new(kv.clone())).unwrap();

        let clock = clock();
        let game = Game::new(
            &GameConfig::default(),
            word_list(&[("pencil", "עיפרון")]),
            Leaderboard::new(),
            &clock,
        )
        .with_persistence(tx);
        let mut app = App::new(game, Vec::new());

        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "Pencil ");
        press(&mut app, KeyCode::Enter);
        clock.advance(Duration::from_millis(2500));
        app.tick();
        let expected = app.game.leaderboard().clone();
        drop(app);
        handle.join().unwrap();

        let stored = LeaderboardStore::new(kv).load();
        assert_eq!(stored, expected);
        assert_eq!(stored.results()[0].percentage, 100);
    }

    #[test]
    fn test_render_menu() {
        let clock = clock();
        let app = create_app(&clock, &[("pencil", "עיפרון"), ("book", "ספר")]);
        let screen = render(&app);
        assert!(screen.contains("Vocabulary Typing Challenge!"));
        assert!(screen.contains("Using 2 words"));
        assert!(screen.contains("No CSV files found"));
    }

    #[test]
    fn test_render_game_and_feedback() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        press(&mut app, KeyCode::Char('s'));

        let screen = render(&app);
        assert!(screen.contains("Question 1 / 1"));
        assert!(screen.contains("עיפרון"));
        assert!(screen.contains("[Type your answer here...]"));

        type_str(&mut app, "pen");
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Not quite! The correct answer is: pencil"));
    }

    #[test]
    fn test_render_summary_marks_latest() {
        let clock = clock();
        let mut app = create_app(&clock, &[("pencil", "עיפרון")]);
        press(&mut app, KeyCode::Char('s'));
        type_str(&mut app, "pencil");
        press(&mut app, KeyCode::Enter);
        clock.advance(Duration::from_millis(2500));
        app.tick();

        let screen = render(&app);
        assert!(screen.contains("Game Complete!"));
        assert!(screen.contains("1 / 1 (100%)"));
        assert!(screen.contains("Latest"));
    }

    #[test]
    fn test_summary_to_menu() {
        let clock = clock();
        let mut app = create_app(&clock, &[]);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state, AppState::Menu);
    }
}
