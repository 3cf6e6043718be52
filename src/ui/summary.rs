use crate::leaderboard::Leaderboard;
use crate::models::GameResult;
use crate::ui::key_hint;
use crate::ui::layout::calculate_summary_chunks;
use chrono::{DateTime, Local, TimeZone};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::fmt::Display;

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%b %-d, %H:%M";

pub fn format_result_date<Tz: TimeZone>(timestamp_millis: i64, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let Some(played) = now.timezone().timestamp_millis_opt(timestamp_millis).single() else {
        return "unknown date".to_string();
    };

    let today = now.date_naive();
    let day = played.date_naive();

    if day == today {
        played.format(DATE_FORMAT_TODAY).to_string()
    } else if today.pred_opt() == Some(day) {
        played.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        played.format(DATE_FORMAT_OTHER).to_string()
    }
}

fn praise(percentage: u32) -> &'static str {
    match percentage {
        90.. => "🏆 Amazing work!",
        70..=89 => "🌟 Great job!",
        50..=69 => "👍 Good effort!",
        _ => "💪 Keep practicing!",
    }
}

pub fn draw_summary(f: &mut Frame, leaderboard: &Leaderboard, latest: Option<&GameResult>) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Game Complete! 🎉")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let result_lines = match latest {
        Some(result) => vec![
            Line::from(Span::styled(
                format!(
                    "{} / {} ({}%)",
                    result.score, result.total, result.percentage
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(praise(result.percentage)),
        ],
        None => vec![Line::from("No game played yet")],
    };
    let result_panel = Paragraph::new(result_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your Score"));
    f.render_widget(result_panel, layout.result_area);

    let now = Local::now();
    let latest_index = latest.and_then(|r| leaderboard.position_of(r.timestamp));
    let items: Vec<ListItem> = if leaderboard.is_empty() {
        vec![ListItem::new("No games yet").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        leaderboard
            .results()
            .iter()
            .enumerate()
            .map(|(i, game)| {
                let is_latest = Some(i) == latest_index;
                let mut text = format!(
                    "#{:<3} {:>2} / {:<2} ({:>3}%)   {}",
                    i + 1,
                    game.score,
                    game.total,
                    game.percentage,
                    format_result_date(game.timestamp, &now)
                );
                if is_latest {
                    text.push_str("   ← Latest");
                }
                let style = if is_latest {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(text).style(style)
            })
            .collect()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("🏆 Leaderboard"),
    );
    f.render_widget(list, layout.leaderboard_area);

    let help = Paragraph::new(Line::from(
        [
            key_hint("r/Enter", " Play Again!  "),
            key_hint("m", " Main Menu  "),
            key_hint("Esc", " Quit"),
        ]
        .concat(),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
