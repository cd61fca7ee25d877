use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::library::Library;
use crate::models::Deck;
use crate::ui::layout::calculate_menu_chunks;
use crate::ui::key_hint;

fn format_deck_item(position: usize, deck: &Deck) -> String {
    let noun = if deck.questions.len() == 1 {
        "question"
    } else {
        "questions"
    };
    format!("{}. {} ({} {})", position, deck.title, deck.questions.len(), noun)
}

pub fn draw_menu(f: &mut Frame, library: &Library, selected_index: usize, status: Option<&str>) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Flashcard Study System")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let decks = library.decks();
    let deck_items: Vec<ListItem> = match decks.try_iter() {
        Ok(lap) => lap
            .enumerate()
            .map(|(i, deck)| ListItem::new(format_deck_item(i + 1, deck)))
            .collect(),
        Err(_) => vec![
            ListItem::new("No flashcards loaded. Press 'l' to load or 'a' to add.").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ],
    };

    let deck_title = format!(
        "Decks in '{}' ({} decks, {} questions)",
        library.deck_dir().display(),
        decks.len(),
        library.total_questions()
    );
    let deck_list = List::new(deck_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(deck_title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !decks.is_empty() {
        list_state.select(Some(selected_index.min(decks.len() - 1)));
    }
    f.render_stateful_widget(deck_list, layout.deck_area, &mut list_state);

    let status = Paragraph::new(status.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, layout.status_area);

    let help_text = vec![Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Select  "),
        key_hint("Enter"),
        Span::from(" Review  "),
        key_hint("a"),
        Span::from(" Add  "),
        key_hint("l"),
        Span::from(" Load Folder  "),
        key_hint("d"),
        Span::from(" Delete  "),
        key_hint("q/Esc"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_delete_confirmation(f: &mut Frame, deck: &Deck) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Delete Deck")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(format!(
        "Remove '{}' ({} questions)?",
        deck.title,
        deck.questions.len()
    ))
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" Remove and delete file  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Remove from memory only  "),
        Span::styled(
            "n",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Cancel"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
