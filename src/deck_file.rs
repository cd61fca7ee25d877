use crate::models::{Deck, Question};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DECK_EXTENSION: &str = "txt";
pub const FIELD_SEPARATOR: char = '|';

pub fn get_deck_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == DECK_EXTENSION
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn load_deck(path: &Path) -> io::Result<Deck> {
    let content = fs::read_to_string(path)?;
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", path.display()),
            )
        })?;

    let questions = content.lines().filter_map(parse_deck_line).collect();
    Ok(Deck::with_questions(title, questions))
}

/// Splits a `question|answer` line at the first separator.
pub fn parse_deck_line(line: &str) -> Option<Question> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (question, answer) = line.split_once(FIELD_SEPARATOR)?;

    if question.trim().is_empty() || answer.trim().is_empty() {
        return None;
    }
    Some(Question::new(question, answer))
}

pub fn format_deck_line(question: &Question) -> String {
    format!("{}{}{}", question.question, FIELD_SEPARATOR, question.answer)
}

pub fn validate_title(title: &str) -> io::Result<()> {
    let reason = if title.trim().is_empty() {
        Some("title must not be empty")
    } else if title.contains(['/', '\\']) {
        Some("title must not contain path separators")
    } else if title.starts_with('.') {
        Some("title must not start with '.'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(io::Error::new(io::ErrorKind::InvalidInput, reason)),
        None => Ok(()),
    }
}

pub fn deck_path(dir: &Path, title: &str) -> io::Result<PathBuf> {
    validate_title(title)?;
    Ok(dir.join(format!("{}.{}", title, DECK_EXTENSION)))
}

pub fn save_deck(dir: &Path, deck: &Deck) -> io::Result<PathBuf> {
    let path = deck_path(dir, &deck.title)?;
    fs::create_dir_all(dir)?;

    let mut file = fs::File::create(&path)?;
    for question in &deck.questions {
        writeln!(file, "{}", format_deck_line(question))?;
    }
    file.flush()?;

    Ok(path)
}

/// Removes the backing file of `title`. `Ok(false)` if there was none.
pub fn delete_deck_file(dir: &Path, title: &str) -> io::Result<bool> {
    let path = deck_path(dir, title)?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
