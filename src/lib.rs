pub mod add_deck;
pub mod app;
pub mod collection;
pub mod config;
pub mod deck_file;
pub mod library;
pub mod logger;
pub mod models;
pub mod review;
pub mod shuffle;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use collection::{CircularCollection, CollectionError, Lap};
pub use config::AppConfig;
pub use deck_file::{get_deck_files, load_deck, save_deck};
pub use library::{Library, LibraryError, LoadReport};
pub use models::{AppState, Deck, Question, ReviewCard};
pub use review::{handle_review_input, ReviewPhase, ReviewSession};
pub use shuffle::{rng_from_seed, shuffled_order};
pub use utils::calculate_wrapped_cursor_position;
