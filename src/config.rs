use std::path::PathBuf;

pub const DEFAULT_DECK_DIR: &str = "flashcards";
pub const DEFAULT_LOG_FILE: &str = "flashcards_debug.log";

pub const ENV_DECK_DIR: &str = "FLASHCARDS_DIR";
pub const ENV_SEED: &str = "FLASHCARDS_SEED";
pub const ENV_LOG_FILE: &str = "FLASHCARDS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub deck_dir: PathBuf,
    pub shuffle_seed: Option<u64>,
    pub log_path: PathBuf,
    /// Raw seed value that could not be parsed, kept so it can be logged.
    pub invalid_seed: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deck_dir: PathBuf::from(DEFAULT_DECK_DIR),
            shuffle_seed: None,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            invalid_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DECK_DIR)
            && !dir.trim().is_empty()
        {
            config.deck_dir = PathBuf::from(dir);
        }

        if let Some(log) = lookup(ENV_LOG_FILE)
            && !log.trim().is_empty()
        {
            config.log_path = PathBuf::from(log);
        }

        if let Some(seed) = lookup(ENV_SEED) {
            match seed.trim().parse::<u64>() {
                Ok(seed) => config.shuffle_seed = Some(seed),
                Err(_) => config.invalid_seed = Some(seed),
            }
        }

        config
    }
}
