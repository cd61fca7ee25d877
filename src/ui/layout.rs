use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MenuLayout {
    pub header_area: Rect,
    pub deck_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct ReviewLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub help_area: Rect,
}

pub struct FormLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub input_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    MenuLayout {
        header_area: chunks[0],
        deck_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_review_chunks(area: Rect) -> ReviewLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Percentage(60),
            Constraint::Length(3),
        ])
        .split(area);

    ReviewLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_form_chunks(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    FormLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        input_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout() {
        let layout = calculate_menu_chunks(Rect::new(0, 0, 80, 40));

        // Margin 1 leaves 38 rows; fixed rows take 9.
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.deck_area.height, 38 - 9);
    }

    #[test]
    fn test_review_layout() {
        let layout = calculate_review_chunks(Rect::new(0, 0, 100, 100));

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.question_area.height >= 3);
        assert!(layout.answer_area.height > 0);
        assert_eq!(
            layout.header_area.height
                + layout.question_area.height
                + layout.answer_area.height
                + layout.help_area.height,
            98
        );
    }

    #[test]
    fn test_form_layout() {
        let layout = calculate_form_chunks(Rect::new(0, 0, 80, 30));

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.input_area.height, 4);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.progress_area.height, 28 - 10);
    }

    #[test]
    fn test_summary_layout() {
        let layout = calculate_summary_chunks(Rect::new(0, 0, 100, 100));

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }
}
