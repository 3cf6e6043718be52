use crate::clock::Clock;
use crate::game::Game;
use crate::logger;
use crate::models::{AnswerInput, AppState, Phase};
use crate::session::AdvanceOutcome;
use crate::ui::{draw_game, draw_menu, draw_quit_confirmation, draw_summary};
use crate::words::load_word_file;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct MenuState {
    pub csv_files: Vec<PathBuf>,
    pub selected: usize,
    pub status: Option<String>,
}

pub struct App<C: Clock> {
    pub state: AppState,
    pub game: Game<C>,
    pub menu: MenuState,
    pub input: AnswerInput,
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(game: Game<C>, csv_files: Vec<PathBuf>) -> Self {
        App {
            state: AppState::Menu,
            game,
            menu: MenuState {
                csv_files,
                ..MenuState::default()
            },
            input: AnswerInput::default(),
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.handle_menu_key(key),
            AppState::Playing => self.handle_game_key(key),
            AppState::QuitConfirm => self.handle_quit_confirm_key(key),
            AppState::Summary => self.handle_summary_key(key),
        }
    }

    /// Run a due advance. Called by the event loop when the timer deadline
    /// passes; harmless to call at any other time.
    pub fn tick(&mut self) {
        match self.game.tick() {
            Some(AdvanceOutcome::NextRound) => self.input.clear(),
            Some(AdvanceOutcome::Complete(_)) => {
                self.input.clear();
                if self.state == AppState::Playing {
                    self.state = AppState::Summary;
                }
            }
            Some(AdvanceOutcome::Stale) | None => {}
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.game.next_deadline()
    }

    pub fn draw(&self, f: &mut Frame) {
        match self.state {
            AppState::Menu => draw_menu(
                f,
                &self.menu.csv_files,
                self.menu.selected,
                self.game.words(),
                self.menu.status.as_deref(),
            ),
            AppState::Playing => draw_game(f, self.game.session(), &self.input),
            AppState::QuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                draw_summary(f, self.game.leaderboard(), self.game.latest_result())
            }
        }
    }

    fn start_game(&mut self) {
        self.game.start();
        self.input.clear();
        self.menu.status = None;
        self.state = if self.game.session().phase() == Phase::Complete {
            AppState::Summary
        } else {
            AppState::Playing
        };
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') | KeyCode::Char(' ') => self.start_game(),
            KeyCode::Up => {
                self.menu.selected = self.menu.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.menu.selected + 1 < self.menu.csv_files.len() {
                    self.menu.selected += 1;
                }
            }
            KeyCode::Enter => self.load_selected_file(),
            _ => {}
        }
    }

    fn load_selected_file(&mut self) {
        let Some(path) = self.menu.csv_files.get(self.menu.selected).cloned() else {
            return;
        };

        self.menu.status = Some(match load_word_file(&path) {
            Ok(list) if !list.is_empty() => {
                let count = list.len();
                logger::info(&format!("Loaded {} words from {}", count, path.display()));
                self.game.set_words(list);
                format!("File loaded successfully! 🎉 ({} words)", count)
            }
            Ok(_) => format!("No word pairs found in {}", path.display()),
            Err(e) => {
                logger::warn(&format!("Could not read {}: {}", path.display(), e));
                format!("Could not read {}", path.display())
            }
        });
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state = AppState::QuitConfirm;
                return;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_game();
                return;
            }
            _ => {}
        }

        // Input is frozen while feedback is on screen.
        if self.game.session().phase() != Phase::Active {
            return;
        }

        match key.code {
            KeyCode::Enter => {
                self.game.submit(&self.input.buffer);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Char(c) => self.input.insert(c),
            _ => {}
        }
    }

    fn handle_quit_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.game.abandon();
                self.input.clear();
                self.state = AppState::Menu;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // The game may have finished while the dialog was open.
                self.state = if self.game.session().phase() == Phase::Complete {
                    AppState::Summary
                } else {
                    AppState::Playing
                };
            }
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => self.start_game(),
            KeyCode::Char('m') => self.state = AppState::Menu,
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}
