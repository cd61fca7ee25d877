mod add_deck;
pub mod layout;
mod menu;
mod review;
mod summary;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub use add_deck::draw_add_deck;
pub use layout::{calculate_menu_chunks, calculate_review_chunks, calculate_summary_chunks};
pub use menu::{draw_delete_confirmation, draw_menu};
pub use review::{draw_quit_confirmation, draw_review};
pub use summary::draw_summary;

fn key_hint(label: &'static str) -> Span<'static> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
