pub mod layout;
mod game;
mod menu;
mod summary;

pub use game::{draw_game, draw_quit_confirmation};
pub use layout::{calculate_game_chunks, calculate_menu_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use summary::{draw_summary, format_result_date};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// A highlighted key followed by its description, for the help bars.
pub(crate) fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}
