use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use typeahead::StalePolicy;
use typeahead::config::{Config, load_config};
use typeahead::source::{ThreadedSource, WordListSource};
use typeahead::tui::App;

/// How long to wait for terminal input before polling for completions
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Type to search a word list; pick a suggestion with the arrow keys or the mouse
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Word list to suggest from, one word per line (built-in list if omitted)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Config file (defaults to <config_dir>/typeahead/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated data-source latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Which late responses may replace the shown suggestions
    #[arg(long, value_enum)]
    stale_policy: Option<StalePolicy>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(File::create(path)?);
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(delay_ms) = args.delay_ms {
        config.request.delay_ms = delay_ms;
    }
    if let Some(policy) = args.stale_policy {
        config.request.stale_policy = policy;
    }

    let words = match &args.words {
        Some(path) => WordListSource::load(path)?,
        None => WordListSource::builtin(),
    }
    .with_max_results(config.request.max_results);

    let app = build_app(&config, words);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = match execute!(io::stdout(), EnableMouseCapture) {
        Ok(()) => run(terminal, app),
        Err(e) => Err(e.into()),
    };

    // Restore terminal (automatic cleanup) before any error propagates
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Some(value) = result? {
        println!("{}", value);
    }
    Ok(())
}

fn init_logging(file: File) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn build_app(config: &Config, words: WordListSource) -> App {
    if config.request.delay_ms == 0 {
        return App::new(config, words);
    }

    let delay = Duration::from_millis(config.request.delay_ms);
    App::new(config, ThreadedSource::spawn(words, delay))
}

/// Event loop; returns the accepted value, if any
fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(app.output.take())
}
