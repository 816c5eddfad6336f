use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use unscramble::{
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{CrosstermEventSource, GameEvent, Runner},
    App, TICK_RATE_MS,
};

/// single-screen word game: spell sub-words from one root word
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A single-screen word game TUI. You get one root word; submit real words spelled only from its letters. Reused, made-up and unspellable words cost points."
)]
pub struct Cli {
    /// path to a custom root-word list (newline separated, one candidate per line)
    #[clap(short = 'r', long)]
    root_list: Option<PathBuf>,

    /// path to a custom dictionary file (newline separated, one word per line)
    #[clap(short = 'd', long)]
    dictionary: Option<PathBuf>,

    /// language the dictionary oracle answers for
    #[clap(short = 'l', long)]
    language: Option<String>,
}

impl Cli {
    /// Layer CLI flags over the stored configuration.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(lang) = &self.language {
            config.language = lang.clone();
        }
        if let Some(path) = &self.root_list {
            config.root_list = Some(path.clone());
        }
        if let Some(path) = &self.dictionary {
            config.dictionary = Some(path.clone());
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config = cli.apply_to(FileConfigStore::new().load());
    let mut app = App::new(config)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        let key = match runner.step() {
            GameEvent::Tick | GameEvent::Resize => continue,
            GameEvent::Key(key) => key,
        };

        // An active error popup owns the keyboard: any key acknowledges it.
        if app.error.is_some() {
            app.acknowledge_error();
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Enter => {
                app.submit_input();
            }
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.new_game();
            }
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        }
    }

    Ok(())
}
