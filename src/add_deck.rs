use crate::deck_file::{validate_title, FIELD_SEPARATOR};
use crate::models::{Deck, Question};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    Title,
    Question,
    Answer,
    SaveConfirm,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Pending,
    Cancel,
    Submit { deck: Deck, save_to_file: bool },
}

/// Collects a deck title and its question/answer pairs one field at a time.
#[derive(Debug)]
pub struct AddDeckForm {
    pub stage: FormStage,
    pub title: String,
    pub questions: Vec<Question>,
    pub pending_question: String,
    pub input_buffer: String,
    pub error: Option<String>,
    existing_titles: Vec<String>,
}

impl Default for AddDeckForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddDeckForm {
    pub fn new() -> Self {
        Self {
            stage: FormStage::Title,
            title: String::new(),
            questions: Vec::new(),
            pending_question: String::new(),
            input_buffer: String::new(),
            error: None,
            existing_titles: Vec::new(),
        }
    }

    /// A form that refuses the titles of decks already in the library.
    pub fn with_existing_titles(existing_titles: Vec<String>) -> Self {
        Self {
            existing_titles,
            ..Self::new()
        }
    }

    pub fn prompt(&self) -> String {
        match self.stage {
            FormStage::Title => "Deck title".to_string(),
            FormStage::Question => format!(
                "Question {} (Enter on empty line to finish)",
                self.questions.len() + 1
            ),
            FormStage::Answer => format!("Answer {}", self.questions.len() + 1),
            FormStage::SaveConfirm => "Save this deck to file? (y/n)".to_string(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if self.stage == FormStage::SaveConfirm {
            return self.handle_save_confirm(key);
        }

        match key.code {
            KeyCode::Esc => FormOutcome::Cancel,
            KeyCode::Enter => {
                self.commit_field();
                FormOutcome::Pending
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                FormOutcome::Pending
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                FormOutcome::Pending
            }
            _ => FormOutcome::Pending,
        }
    }

    fn handle_save_confirm(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.submit(true),
            KeyCode::Char('n') | KeyCode::Char('N') => self.submit(false),
            KeyCode::Esc => {
                self.stage = FormStage::Question;
                FormOutcome::Pending
            }
            _ => FormOutcome::Pending,
        }
    }

    fn submit(&mut self, save_to_file: bool) -> FormOutcome {
        let deck = Deck::with_questions(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.questions),
        );
        FormOutcome::Submit { deck, save_to_file }
    }

    fn commit_field(&mut self) {
        let text = self.input_buffer.trim().to_string();
        self.error = None;

        match self.stage {
            FormStage::Title => match validate_title(&text) {
                Ok(()) if self.existing_titles.contains(&text) => {
                    self.error = Some(format!("A deck named '{}' already exists", text))
                }
                Ok(()) => {
                    self.title = text;
                    self.stage = FormStage::Question;
                }
                Err(e) => self.error = Some(format!("Invalid title: {}", e)),
            },
            FormStage::Question => {
                if text.is_empty() {
                    self.stage = FormStage::SaveConfirm;
                } else if text.contains(FIELD_SEPARATOR) {
                    self.error = Some(format!(
                        "Questions cannot contain '{}'",
                        FIELD_SEPARATOR
                    ));
                } else {
                    self.pending_question = text;
                    self.stage = FormStage::Answer;
                }
            }
            FormStage::Answer => {
                if text.is_empty() {
                    self.error = Some("Answer cannot be empty".to_string());
                } else {
                    let question = std::mem::take(&mut self.pending_question);
                    self.questions.push(Question::new(question, text));
                    self.stage = FormStage::Question;
                }
            }
            FormStage::SaveConfirm => return,
        }

        if self.error.is_none() {
            self.input_buffer.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn enter_line(form: &mut AddDeckForm, text: &str) -> FormOutcome {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
        form.handle_key(key(KeyCode::Enter))
    }

    #[test]
    fn test_full_form_flow_with_save() {
        let mut form = AddDeckForm::new();
        enter_line(&mut form, "Networking");
        assert_eq!(form.stage, FormStage::Question);

        enter_line(&mut form, "What is a MANET?");
        assert_eq!(form.stage, FormStage::Answer);
        enter_line(&mut form, "A mobile ad hoc network | no infrastructure");
        assert_eq!(form.stage, FormStage::Question);
        assert_eq!(form.questions.len(), 1);

        enter_line(&mut form, "");
        assert_eq!(form.stage, FormStage::SaveConfirm);

        let outcome = form.handle_key(key(KeyCode::Char('y')));
        assert_eq!(
            outcome,
            FormOutcome::Submit {
                deck: Deck::with_questions(
                    "Networking",
                    vec![Question::new(
                        "What is a MANET?",
                        "A mobile ad hoc network | no infrastructure"
                    )]
                ),
                save_to_file: true,
            }
        );
    }

    #[test]
    fn test_existing_title_is_rejected() {
        let mut form = AddDeckForm::with_existing_titles(vec!["Networking".to_string()]);
        enter_line(&mut form, "Networking");
        assert_eq!(form.stage, FormStage::Title);
        assert_eq!(
            form.error.as_deref(),
            Some("A deck named 'Networking' already exists")
        );

        form.input_buffer.clear();
        enter_line(&mut form, "Networking II");
        assert_eq!(form.stage, FormStage::Question);
        assert_eq!(form.title, "Networking II");
    }

    #[test]
    fn test_submit_without_saving() {
        let mut form = AddDeckForm::new();
        enter_line(&mut form, "Scratch");
        enter_line(&mut form, "");
        match form.handle_key(key(KeyCode::Char('n'))) {
            FormOutcome::Submit { deck, save_to_file } => {
                assert_eq!(deck.title, "Scratch");
                assert!(deck.questions.is_empty());
                assert!(!save_to_file);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_invalid_title_keeps_input() {
        let mut form = AddDeckForm::new();
        enter_line(&mut form, "a/b");
        assert_eq!(form.stage, FormStage::Title);
        assert!(form.error.is_some());
        assert_eq!(form.input_buffer, "a/b");

        enter_line(&mut form, "");
        assert_eq!(form.stage, FormStage::Title);
    }

    #[test]
    fn test_question_with_separator_rejected() {
        let mut form = AddDeckForm::new();
        enter_line(&mut form, "Deck");
        enter_line(&mut form, "a|b?");
        assert_eq!(form.stage, FormStage::Question);
        assert!(form.error.as_deref().unwrap().contains('|'));
    }

    #[test]
    fn test_empty_answer_rejected() {
        let mut form = AddDeckForm::new();
        enter_line(&mut form, "Deck");
        enter_line(&mut form, "Q?");
        enter_line(&mut form, "   ");
        assert_eq!(form.stage, FormStage::Answer);
        assert!(form.questions.is_empty());
    }

    #[test]
    fn test_esc_cancels_and_returns_from_save_prompt() {
        let mut form = AddDeckForm::new();
        enter_line(&mut form, "Deck");
        enter_line(&mut form, "");
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Pending);
        assert_eq!(form.stage, FormStage::Question);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Cancel);
    }

    #[test]
    fn test_backspace_edits_field() {
        let mut form = AddDeckForm::new();
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Char('b')));
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.input_buffer, "a");
    }

    #[test]
    fn test_prompt_tracks_question_number() {
        let mut form = AddDeckForm::new();
        assert_eq!(form.prompt(), "Deck title");
        enter_line(&mut form, "Deck");
        assert!(form.prompt().starts_with("Question 1"));
        enter_line(&mut form, "Q");
        assert_eq!(form.prompt(), "Answer 1");
        enter_line(&mut form, "A");
        assert!(form.prompt().starts_with("Question 2"));
    }
}
