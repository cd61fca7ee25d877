use crate::collection::{CircularCollection, CollectionError};
use crate::logger;
use crate::models::{AppState, Deck, Question, ReviewCard};
use crate::shuffle::shuffled_order;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPhase {
    Answering,
    Revealed,
    DeckFinished,
}

/// Walks the decks of the ring one at a time, lap after lap, until the user stops.
#[derive(Debug)]
pub struct ReviewSession {
    pub deck: Deck,
    pub deck_position: usize,
    pub deck_count: usize,
    pub lap: usize,
    pub order: Vec<usize>,
    pub current_index: usize,
    pub cards: Vec<ReviewCard>,
    pub phase: ReviewPhase,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub input_scroll_y: u16,
    pub decks_reviewed: usize,
    pub questions_answered: usize,
    pub questions_correct: usize,
}

impl ReviewSession {
    /// Starts reviewing at the deck in 1-based `position`.
    pub fn start<R: Rng + ?Sized>(
        decks: &CircularCollection<Deck>,
        position: usize,
        rng: &mut R,
    ) -> Result<Self, CollectionError> {
        let deck = decks.get(position)?.clone();
        let mut session = ReviewSession {
            deck: Deck::new(""),
            deck_position: position,
            deck_count: decks.len(),
            lap: 1,
            order: Vec::new(),
            current_index: 0,
            cards: Vec::new(),
            phase: ReviewPhase::Answering,
            input_buffer: String::new(),
            cursor_position: 0,
            input_scroll_y: 0,
            decks_reviewed: 0,
            questions_answered: 0,
            questions_correct: 0,
        };
        session.enter_deck(deck, position, rng);
        Ok(session)
    }

    fn enter_deck<R: Rng + ?Sized>(&mut self, deck: Deck, position: usize, rng: &mut R) {
        logger::log(&format!(
            "Reviewing deck '{}' (position {}, lap {})",
            deck.title, position, self.lap
        ));
        self.order = shuffled_order(deck.questions.len(), rng);
        self.cards = vec![ReviewCard::default(); deck.questions.len()];
        self.deck = deck;
        self.deck_position = position;
        self.current_index = 0;
        self.clear_input();

        if self.order.is_empty() {
            self.finish_deck();
        } else {
            self.phase = ReviewPhase::Answering;
        }
    }

    fn finish_deck(&mut self) {
        self.phase = ReviewPhase::DeckFinished;
        self.decks_reviewed += 1;
    }

    fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.input_scroll_y = 0;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.order
            .get(self.current_index)
            .and_then(|&i| self.deck.questions.get(i))
    }

    pub fn current_card(&self) -> Option<&ReviewCard> {
        self.order.get(self.current_index).and_then(|&i| self.cards.get(i))
    }

    fn current_card_mut(&mut self) -> Option<&mut ReviewCard> {
        let index = *self.order.get(self.current_index)?;
        self.cards.get_mut(index)
    }

    /// Correct answers in the deck currently on screen.
    pub fn deck_correct(&self) -> usize {
        self.cards.iter().filter(|card| card.correct == Some(true)).count()
    }

    /// Records the typed answer and reveals the correct one. Blank input is ignored.
    pub fn submit_answer(&mut self) -> bool {
        if self.phase != ReviewPhase::Answering || self.input_buffer.trim().is_empty() {
            return false;
        }
        let answer = self.input_buffer.clone();
        let Some(card) = self.current_card_mut() else {
            return false;
        };
        card.user_answer = Some(answer);

        self.questions_answered += 1;
        self.clear_input();
        self.phase = ReviewPhase::Revealed;
        true
    }

    /// Stores the user's own verdict and moves on to the next question.
    pub fn assess(&mut self, correct: bool) {
        if self.phase != ReviewPhase::Revealed {
            return;
        }
        if let Some(card) = self.current_card_mut() {
            card.correct = Some(correct);
        }
        if correct {
            self.questions_correct += 1;
        }

        if self.current_index + 1 < self.order.len() {
            self.current_index += 1;
            self.phase = ReviewPhase::Answering;
        } else {
            self.finish_deck();
        }
    }

    /// Moves to the next deck in the ring, wrapping to the head and starting a new lap.
    pub fn advance_deck<R: Rng + ?Sized>(
        &mut self,
        decks: &CircularCollection<Deck>,
        rng: &mut R,
    ) -> Result<(), CollectionError> {
        let next = decks.next_position(self.deck_position)?;
        let deck = decks.get(next)?.clone();
        if next <= self.deck_position {
            self.lap += 1;
        }
        self.deck_count = decks.len();
        self.enter_deck(deck, next, rng);
        Ok(())
    }

    fn insert_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    fn delete_before_cursor(&mut self) {
        if let Some(c) = self.input_buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
            self.input_buffer.remove(self.cursor_position);
        }
    }

    fn move_cursor_left(&mut self) {
        if let Some(c) = self.input_buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }
}

pub fn handle_review_input<R: Rng + ?Sized>(
    session: &mut ReviewSession,
    decks: &CircularCollection<Deck>,
    rng: &mut R,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Result<(), CollectionError> {
    if key.code == KeyCode::Esc {
        *app_state = AppState::ReviewQuitConfirm;
        return Ok(());
    }

    match session.phase {
        ReviewPhase::Answering => match key.code {
            KeyCode::Enter => {
                session.submit_answer();
            }
            KeyCode::Left => session.move_cursor_left(),
            KeyCode::Right => session.move_cursor_right(),
            KeyCode::Home => session.cursor_position = 0,
            KeyCode::End => session.cursor_position = session.input_buffer.len(),
            KeyCode::Backspace => session.delete_before_cursor(),
            KeyCode::Char(c) => session.insert_char(c),
            _ => {}
        },
        ReviewPhase::Revealed => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => session.assess(true),
            KeyCode::Char('n') | KeyCode::Char('N') => session.assess(false),
            _ => {}
        },
        ReviewPhase::DeckFinished => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                session.advance_deck(decks, rng)?;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                logger::log(&format!(
                    "Review ended after {} decks, {}/{} correct",
                    session.decks_reviewed, session.questions_correct, session.questions_answered
                ));
                *app_state = AppState::Summary;
            }
            _ => {}
        },
    }
    Ok(())
}
