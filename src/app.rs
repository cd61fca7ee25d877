use crate::add_deck::{AddDeckForm, FormOutcome};
use crate::config::AppConfig;
use crate::library::{Library, LibraryError};
use crate::logger;
use crate::models::AppState;
use crate::review::{handle_review_input, ReviewSession};
use crate::shuffle::{rng_from_seed, ShuffleRng};
use crate::ui::{
    draw_add_deck, draw_delete_confirmation, draw_menu, draw_quit_confirmation, draw_review,
    draw_summary,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

/// Everything the event loop needs between two key presses.
pub struct App {
    pub library: Library,
    pub rng: ShuffleRng,
    pub app_state: AppState,
    pub selected_deck: usize,
    pub status: Option<String>,
    pub review: Option<ReviewSession>,
    pub form: Option<AddDeckForm>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            library: Library::new(config.deck_dir.clone()),
            rng: rng_from_seed(config.shuffle_seed),
            app_state: AppState::Menu,
            selected_deck: 0,
            status: None,
            review: None,
            form: None,
        }
    }

    /// 1-based position of the highlighted deck.
    fn selected_position(&self) -> usize {
        self.selected_deck + 1
    }

    fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        logger::log(&message);
        self.status = Some(message);
    }

    fn clamp_selection(&mut self) {
        let len = self.library.decks().len();
        self.selected_deck = self.selected_deck.min(len.saturating_sub(1));
    }

    pub fn load_decks(&mut self) {
        match self.library.load_from_dir() {
            Ok(report) => {
                let mut message = format!(
                    "Loaded {} flashcard decks from folder '{}'.",
                    report.loaded,
                    self.library.deck_dir().display()
                );
                if report.skipped > 0 {
                    message.push_str(&format!(" {} unreadable files skipped.", report.skipped));
                }
                self.set_status(message);
            }
            Err(e) => self.set_status(e.to_string()),
        }
        self.selected_deck = 0;
    }

    /// Dispatches one key press. Returns `false` once the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match self.app_state {
            AppState::Menu => return self.handle_menu_key(key),
            AppState::AddDeck => self.handle_form_key(key),
            AppState::DeleteConfirm => self.handle_delete_key(key),
            AppState::Review => self.handle_review_key(key),
            AppState::ReviewQuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.app_state = AppState::Summary,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.app_state = AppState::Review
                }
                _ => {}
            },
            AppState::Summary => match key.code {
                KeyCode::Char('m') | KeyCode::Enter | KeyCode::Esc => {
                    self.review = None;
                    self.app_state = AppState::Menu;
                }
                KeyCode::Char('q') => return false,
                _ => {}
            },
        }
        true
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        let len = self.library.decks().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Down if len > 0 => {
                if let Ok(next) = self.library.decks().next_position(self.selected_position()) {
                    self.selected_deck = next - 1;
                }
            }
            KeyCode::Up if len > 0 => {
                self.selected_deck = if self.selected_deck == 0 {
                    len - 1
                } else {
                    self.selected_deck - 1
                };
            }
            KeyCode::Enter => {
                let position = self.selected_position();
                match ReviewSession::start(self.library.decks(), position, &mut self.rng) {
                    Ok(session) => {
                        self.review = Some(session);
                        self.status = None;
                        self.app_state = AppState::Review;
                    }
                    Err(e) => self.set_status(format!("Cannot start review: {}", e)),
                }
            }
            KeyCode::Char('a') => {
                self.form = Some(AddDeckForm::with_existing_titles(self.library.titles()));
                self.app_state = AppState::AddDeck;
            }
            KeyCode::Char('l') => self.load_decks(),
            KeyCode::Char('d') => {
                if len == 0 {
                    self.set_status("No flashcards available.");
                } else {
                    self.app_state = AppState::DeleteConfirm;
                }
            }
            _ => {}
        }
        true
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.app_state = AppState::Menu;
            return;
        };

        match form.handle_key(key) {
            FormOutcome::Pending => {}
            FormOutcome::Cancel => {
                self.form = None;
                self.app_state = AppState::Menu;
                self.set_status("Add deck cancelled.");
            }
            FormOutcome::Submit { deck, save_to_file } => {
                let title = deck.title.clone();
                let result = self.library.add_deck(deck, save_to_file);
                self.form = None;
                self.app_state = AppState::Menu;
                self.selected_deck = self.library.decks().len().saturating_sub(1);

                match result {
                    Ok(Some(path)) => {
                        self.set_status(format!("Flashcard saved to {}", path.display()))
                    }
                    Ok(None) => self.set_status(format!("Added '{}' (not saved to file).", title)),
                    Err(e @ LibraryError::DuplicateTitle(_)) => self.set_status(e.to_string()),
                    Err(e) => self.set_status(format!("Added '{}' but saving failed: {}", title, e)),
                }
            }
        }
    }

    fn handle_delete_key(&mut self, key: KeyEvent) {
        let delete_file = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char('m') | KeyCode::Char('M') => false,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.app_state = AppState::Menu;
                return;
            }
            _ => return,
        };

        let position = self.selected_position();
        let result = self.library.remove_deck(position, delete_file);
        self.app_state = AppState::Menu;
        match result {
            Ok(deck) => self.set_status(format!("Removed '{}'.", deck.title)),
            Err(LibraryError::Io(e)) => self.set_status(format!(
                "Removed deck, but its file could not be deleted: {}",
                e
            )),
            Err(e) => self.set_status(format!("Cannot remove deck: {}", e)),
        }
        self.clamp_selection();
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        let Some(session) = self.review.as_mut() else {
            self.app_state = AppState::Menu;
            return;
        };

        if let Err(e) = handle_review_input(
            session,
            self.library.decks(),
            &mut self.rng,
            key,
            &mut self.app_state,
        ) {
            self.set_status(format!("Review stopped: {}", e));
            self.app_state = AppState::Summary;
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        match self.app_state {
            AppState::Menu => draw_menu(f, &self.library, self.selected_deck, self.status.as_deref()),
            AppState::AddDeck => {
                if let Some(form) = &self.form {
                    draw_add_deck(f, form);
                }
            }
            AppState::DeleteConfirm => match self.library.decks().get(self.selected_position()) {
                Ok(deck) => draw_delete_confirmation(f, deck),
                Err(_) => draw_menu(f, &self.library, self.selected_deck, self.status.as_deref()),
            },
            AppState::Review => {
                if let Some(session) = self.review.as_mut() {
                    draw_review(f, session);
                }
            }
            AppState::ReviewQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &self.review {
                    draw_summary(f, session);
                }
            }
        }
    }
}
