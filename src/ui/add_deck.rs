use crate::add_deck::{AddDeckForm, FormStage};
use crate::ui::key_hint;
use crate::ui::layout::calculate_form_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_add_deck(f: &mut Frame, form: &AddDeckForm) {
    let layout = calculate_form_chunks(f.area());

    let heading = if form.title.is_empty() {
        "Add New Flashcard Deck".to_string()
    } else {
        format!("Add New Flashcard Deck - {}", form.title)
    };
    let header = Paragraph::new(heading)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut progress = Text::default();
    for (i, question) in form.questions.iter().enumerate() {
        progress.push_line(Line::from(format!(
            "{}. {}",
            i + 1,
            truncate_string(&question.question, 60)
        )));
        progress.push_line(Line::from(Span::styled(
            format!("   {}", truncate_string(&question.answer, 57)),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if form.stage == FormStage::Answer {
        progress.push_line(Line::from(Span::styled(
            format!(
                "{}. {}",
                form.questions.len() + 1,
                truncate_string(&form.pending_question, 60)
            ),
            Style::default().fg(Color::Yellow),
        )));
    }
    let progress_widget = Paragraph::new(progress)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Questions ({})", form.questions.len())),
        );
    f.render_widget(progress_widget, layout.progress_area);

    let mut input = Text::from(form.input_buffer.as_str());
    if let Some(error) = &form.error {
        input.push_line(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    let input_widget = Paragraph::new(input)
        .block(Block::default().borders(Borders::ALL).title(form.prompt()));
    f.render_widget(input_widget, layout.input_area);

    if form.stage != FormStage::SaveConfirm {
        let cursor_x = layout.input_area.x + 1 + form.input_buffer.chars().count() as u16;
        f.set_cursor_position((cursor_x, layout.input_area.y + 1));
    }

    let help_spans = if form.stage == FormStage::SaveConfirm {
        vec![
            key_hint("y"),
            Span::from(" Save to file  "),
            key_hint("n"),
            Span::from(" Keep in memory only  "),
            key_hint("Esc"),
            Span::from(" Back"),
        ]
    } else {
        vec![
            key_hint("Enter"),
            Span::from(" Confirm field  "),
            key_hint("Backspace"),
            Span::from(" Delete  "),
            key_hint("Esc"),
            Span::from(" Cancel"),
        ]
    };
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
