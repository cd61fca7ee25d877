use crate::review::{ReviewPhase, ReviewSession};
use crate::ui::key_hint;
use crate::ui::layout::calculate_review_chunks;
use crate::utils::calculate_wrapped_cursor_position;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn header_text(session: &ReviewSession) -> String {
    let mut header = format!(
        "Deck {} / {} - {} (lap {})",
        session.deck_position, session.deck_count, session.deck.title, session.lap
    );
    if !session.order.is_empty() {
        let number = (session.current_index + 1).min(session.order.len());
        header.push_str(&format!(" - Question {} / {}", number, session.order.len()));
    }
    header
}

fn answer_text(session: &ReviewSession) -> Text<'_> {
    match session.phase {
        ReviewPhase::Answering => Text::from(if session.input_buffer.is_empty() {
            "[Type your answer here...]"
        } else {
            session.input_buffer.as_str()
        }),
        ReviewPhase::Revealed => {
            let mut text = Text::default();
            if let Some(question) = session.current_question() {
                text.push_line(Line::from(Span::styled(
                    "Correct Answer:",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                text.push_line(Line::from(question.answer.as_str()));
            }
            if let Some(user_answer) = session.current_card().and_then(|c| c.user_answer.as_deref()) {
                text.push_line(Line::from(""));
                text.push_line(Line::from(Span::styled(
                    "Your Answer:",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                text.push_line(Line::from(user_answer));
            }
            text.push_line(Line::from(""));
            text.push_line(Line::from("Did you answer correctly? (y/n)"));
            text
        }
        ReviewPhase::DeckFinished => {
            let mut text = Text::default();
            text.push_line(Line::from(Span::styled(
                format!("Finished '{}'", session.deck.title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            if session.order.is_empty() {
                text.push_line(Line::from("This deck has no questions."));
            } else {
                text.push_line(Line::from(format!(
                    "Correct: {} / {}",
                    session.deck_correct(),
                    session.order.len()
                )));
            }
            text.push_line(Line::from(""));
            text.push_line(Line::from("Continue to next flashcard deck? (y/n)"));
            text
        }
    }
}

pub fn draw_review(f: &mut Frame, session: &mut ReviewSession) {
    let layout = calculate_review_chunks(f.area());

    let header = Paragraph::new(header_text(session))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_text = match (session.phase, session.current_question()) {
        (ReviewPhase::DeckFinished, _) | (_, None) => Text::from(""),
        (_, Some(question)) => Text::from(question.question.as_str()),
    };
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let answer_title = match session.phase {
        ReviewPhase::Answering => "Your Answer",
        ReviewPhase::Revealed => "Answer",
        ReviewPhase::DeckFinished => "Deck Complete",
    };

    let text_width = layout.answer_area.width.saturating_sub(2) as usize;
    let visible_height = layout.answer_area.height.saturating_sub(2) as usize;

    // Keep the cursor row on screen while typing.
    let scroll_y = if session.phase == ReviewPhase::Answering {
        let (cursor_line, _) = calculate_wrapped_cursor_position(
            &session.input_buffer,
            session.cursor_position,
            text_width,
        );
        let mut scroll = session.input_scroll_y as usize;
        if cursor_line < scroll {
            scroll = cursor_line;
        } else if visible_height > 0 && cursor_line >= scroll + visible_height {
            scroll = cursor_line + 1 - visible_height;
        }
        session.input_scroll_y = scroll as u16;
        session.input_scroll_y
    } else {
        0
    };

    let answer = Paragraph::new(answer_text(session))
        .wrap(Wrap { trim: true })
        .scroll((scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title(answer_title));
    f.render_widget(answer, layout.answer_area);

    if session.phase == ReviewPhase::Answering {
        let (cursor_line, cursor_col) = calculate_wrapped_cursor_position(
            &session.input_buffer,
            session.cursor_position,
            text_width,
        );
        let cursor_x = layout.answer_area.x + 1 + cursor_col as u16;
        let cursor_y = layout.answer_area.y + 1 + (cursor_line as u16).saturating_sub(scroll_y);
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let help_spans = match session.phase {
        ReviewPhase::Answering => vec![
            key_hint("Enter"),
            Span::from(" Submit  "),
            key_hint("←/→"),
            Span::from(" Move  "),
            key_hint("Esc"),
            Span::from(" Stop Review"),
        ],
        ReviewPhase::Revealed => vec![
            key_hint("y"),
            Span::from(" Correct  "),
            key_hint("n"),
            Span::from(" Incorrect  "),
            key_hint("Esc"),
            Span::from(" Stop Review"),
        ],
        ReviewPhase::DeckFinished => vec![
            key_hint("y/Enter"),
            Span::from(" Next Deck  "),
            key_hint("n"),
            Span::from(" Finish  "),
            key_hint("Esc"),
            Span::from(" Stop Review"),
        ],
    };
    let help = Paragraph::new(Line::from(help_spans))
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

    let title = Paragraph::new("Stop Review")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("End this review and show the summary?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Show Summary)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Review)  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
