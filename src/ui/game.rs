use crate::models::{AnswerInput, Phase};
use crate::session::Session;
use crate::ui::key_hint;
use crate::ui::layout::calculate_game_chunks;
use crate::utils::cursor_column;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_game(f: &mut Frame, session: &Session, input: &AnswerInput) {
    let layout = calculate_game_chunks(f.area());

    let Some(round) = session.current_round() else {
        return;
    };

    let header = Paragraph::new(format!(
        "Question {} / {}   ⭐ Score: {}",
        session.current_index() + 1,
        session.rounds().len(),
        session.score()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            round.prompt.as_str(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("What is this in English?"),
    );
    f.render_widget(prompt, layout.prompt_area);

    let awaiting = session.phase() == Phase::AwaitingNext;
    let answer_text = if input.buffer.is_empty() && !awaiting {
        Span::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::from(input.buffer.as_str())
    };
    let answer = Paragraph::new(Line::from(answer_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if awaiting {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow)
            })
            .title("Your Answer"),
    );
    f.render_widget(answer, layout.answer_area);

    if !awaiting {
        let max_col = layout.answer_area.width.saturating_sub(2);
        let col = (cursor_column(&input.buffer, input.cursor) as u16).min(max_col);
        f.set_cursor_position((layout.answer_area.x + 1 + col, layout.answer_area.y + 1));
    }

    if let Some(feedback) = session.feedback() {
        let color = if feedback.correct {
            Color::Green
        } else {
            Color::Red
        };
        let feedback_panel = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                feedback.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(feedback_panel, layout.feedback_area);
    }

    let mut hints = Vec::new();
    if !awaiting {
        hints.extend(key_hint("Enter", " Check Answer  "));
    }
    hints.extend(key_hint("Ctrl+R", " Restart  "));
    hints.extend(key_hint("Esc", " Quit to Menu  "));
    hints.extend(key_hint("Ctrl+C", " Exit App"));
    let help = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave this game? It will not be scored.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help = Paragraph::new(Line::from(
        [
            vec![Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )],
            vec![Span::from(" Yes (Return to Menu)  ")],
            vec![Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )],
            vec![Span::from(" No (Keep Playing)  ")],
            key_hint("Ctrl+C", " Exit App"),
        ]
        .concat(),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
