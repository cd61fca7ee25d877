use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashcard_ring::{logger, App, AppConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key)
        {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();
    logger::init(&config.log_path);
    logger::log("Starting flashcard study system");
    if let Some(seed) = &config.invalid_seed {
        logger::log(&format!("Ignoring invalid shuffle seed '{}'", seed));
    }

    let mut app = App::new(&config);
    if config.deck_dir.is_dir() {
        app.load_decks();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    logger::log("Goodbye!");
    result
}
