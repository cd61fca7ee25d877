use crate::collection::{CircularCollection, CollectionError};
use crate::deck_file::{delete_deck_file, get_deck_files, load_deck, save_deck};
use crate::logger;
use crate::models::Deck;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Deck folder '{0}' does not exist")]
    MissingDirectory(PathBuf),
    #[error("A deck named '{0}' already exists")]
    DuplicateTitle(String),
    #[error("{0}")]
    Collection(#[from] CollectionError),
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Every deck the user is studying, plus the folder they are stored in.
#[derive(Debug)]
pub struct Library {
    decks: CircularCollection<Deck>,
    deck_dir: PathBuf,
}

impl Library {
    pub fn new(deck_dir: impl Into<PathBuf>) -> Self {
        Self {
            decks: CircularCollection::new(),
            deck_dir: deck_dir.into(),
        }
    }

    pub fn decks(&self) -> &CircularCollection<Deck> {
        &self.decks
    }

    pub fn deck_dir(&self) -> &Path {
        &self.deck_dir
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.decks.iter().any(|deck| deck.title == title)
    }

    pub fn titles(&self) -> Vec<String> {
        self.decks.iter().map(|deck| deck.title.clone()).collect()
    }

    /// Adds `deck` to the ring and optionally writes it to the deck folder.
    ///
    /// Titles are unique, since each one names a single file. The deck stays in
    /// memory even when writing the file fails.
    pub fn add_deck(
        &mut self,
        deck: Deck,
        save_to_file: bool,
    ) -> Result<Option<PathBuf>, LibraryError> {
        if self.contains_title(&deck.title) {
            return Err(LibraryError::DuplicateTitle(deck.title));
        }

        let saved = if save_to_file {
            Some(save_deck(&self.deck_dir, &deck))
        } else {
            None
        };

        logger::log(&format!(
            "Added deck '{}' with {} questions",
            deck.title,
            deck.questions.len()
        ));
        self.decks.insert(deck);

        match saved {
            Some(Ok(path)) => {
                logger::log(&format!("Saved deck to {}", path.display()));
                Ok(Some(path))
            }
            Some(Err(e)) => {
                logger::log(&format!("Failed to save deck: {}", e));
                Err(e.into())
            }
            None => Ok(None),
        }
    }

    /// Rebuilds the ring from the deck folder, replacing whatever was loaded.
    pub fn load_from_dir(&mut self) -> Result<LoadReport, LibraryError> {
        if !self.deck_dir.is_dir() {
            return Err(LibraryError::MissingDirectory(self.deck_dir.clone()));
        }

        let mut report = LoadReport::default();
        let mut decks = CircularCollection::new();
        for path in get_deck_files(&self.deck_dir) {
            match load_deck(&path) {
                Ok(deck) => {
                    decks.insert(deck);
                    report.loaded += 1;
                }
                Err(e) => {
                    logger::log(&format!("Skipping {}: {}", path.display(), e));
                    report.skipped += 1;
                }
            }
        }

        self.decks.replace_all(decks);
        logger::log(&format!(
            "Loaded {} decks from '{}' ({} skipped)",
            report.loaded,
            self.deck_dir.display(),
            report.skipped
        ));
        Ok(report)
    }

    /// Removes the deck at the 1-based `position`, optionally deleting its file.
    pub fn remove_deck(&mut self, position: usize, delete_file: bool) -> Result<Deck, LibraryError> {
        let deck = self.decks.remove_at(position)?;
        logger::log(&format!("Removed deck '{}' at position {}", deck.title, position));

        if delete_file {
            let deleted = delete_deck_file(&self.deck_dir, &deck.title)?;
            logger::log(&format!(
                "Deck file for '{}' {}",
                deck.title,
                if deleted { "deleted" } else { "was not on disk" }
            ));
        }
        Ok(deck)
    }

    pub fn listing(&self) -> Result<Vec<String>, CollectionError> {
        Ok(self
            .decks
            .try_iter()?
            .enumerate()
            .map(|(i, deck)| format!("{}. {} ({} questions)", i + 1, deck.title, deck.questions.len()))
            .collect())
    }

    pub fn total_questions(&self) -> usize {
        self.decks.iter().map(|deck| deck.questions.len()).sum()
    }
}
