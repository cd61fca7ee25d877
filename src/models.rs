#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A titled set of question/answer pairs, stored as one file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Deck {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_questions(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }
}

/// Per-question progress within a review pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCard {
    pub user_answer: Option<String>,
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    AddDeck,
    DeleteConfirm,
    Review,
    ReviewQuitConfirm,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_new_is_empty() {
        let deck = Deck::new("Rust");
        assert_eq!(deck.title, "Rust");
        assert!(deck.questions.is_empty());
    }

    #[test]
    fn test_review_card_default_is_unanswered() {
        let card = ReviewCard::default();
        assert!(card.user_answer.is_none());
        assert!(card.correct.is_none());
    }
}
