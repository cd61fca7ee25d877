use crate::review::ReviewSession;
use crate::ui::key_hint;
use crate::ui::layout::calculate_summary_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn score_line(correct: usize, answered: usize) -> String {
    if answered == 0 {
        "No questions answered".to_string()
    } else {
        format!(
            "Correct: {} / {} ({:.0}%)",
            correct,
            answered,
            correct as f64 * 100.0 / answered as f64
        )
    }
}

pub fn draw_summary(f: &mut Frame, session: &ReviewSession) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Review Summary")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(format!(
        "Decks reviewed: {}",
        session.decks_reviewed
    )));
    summary_text.push_line(Line::from(format!("Laps: {}", session.lap)));
    summary_text.push_line(Line::from(format!(
        "Questions answered: {}",
        session.questions_answered
    )));
    summary_text.push_line(Line::from(""));
    summary_text.push_line(Line::from(Span::styled(
        score_line(session.questions_correct, session.questions_answered),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        key_hint("m/Enter"),
        Span::from(" Main Menu  "),
        key_hint("q"),
        Span::from(" Quit  "),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(0, 0), "No questions answered");
        assert_eq!(score_line(3, 4), "Correct: 3 / 4 (75%)");
        assert_eq!(score_line(1, 3), "Correct: 1 / 3 (33%)");
    }
}
