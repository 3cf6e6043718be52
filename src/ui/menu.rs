use crate::ui::layout::calculate_menu_chunks;
use crate::ui::key_hint;
use crate::utils::truncate_string;
use crate::words::WordList;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;

pub fn draw_menu(
    f: &mut Frame,
    csv_files: &[PathBuf],
    selected_file_index: usize,
    words: &WordList,
    status: Option<&str>,
) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Vocabulary Typing Challenge! ⌨️")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let instructions = Paragraph::new(vec![
        Line::from("Write the English translation of Hebrew words"),
        Line::from(Span::styled(
            "Type the answer in English when you see a Hebrew word",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default());
    f.render_widget(instructions, layout.instructions_area);

    let file_items: Vec<ListItem> = if csv_files.is_empty() {
        vec![ListItem::new("No CSV files found").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        csv_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let name = truncate_string(&name, 60);
                let style = if i == selected_file_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(name).style(style)
            })
            .collect()
    };

    let file_list = List::new(file_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("📁 Word Lists (CSV: English,Hebrew)"),
    );
    f.render_widget(file_list, layout.files_area);

    let mut status_lines = vec![Line::from(format!(
        "Using {} words ({})",
        words.len(),
        words.label()
    ))];
    if let Some(status) = status {
        status_lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Green),
        )));
    }
    let status_panel = Paragraph::new(status_lines)
        .alignment(Alignment::Center)
        .block(Block::default());
    f.render_widget(status_panel, layout.status_area);

    let help = Paragraph::new(Line::from(
        [
            key_hint("s", " Start Playing!  "),
            key_hint("↑/↓", " Select List  "),
            key_hint("Enter", " Load List  "),
            key_hint("Esc/Ctrl+C", " Quit"),
        ]
        .concat(),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
