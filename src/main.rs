// fractty: L-system fractal explorer for the terminal

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fractty::cli::{self, Command, FracttyArgs};
use fractty::ui::App;

/// Environment variable holding the log filter
const LOG_ENV: &str = "FRACTTY_LOG";

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive sessions only log when a log
/// file is given.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .compact()
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = FracttyArgs::parse();
    init_tracing(args.log_file.as_deref(), args.is_interactive())?;

    let catalog = match cli::load_catalog(&args) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(models = catalog.len(), "catalog ready");

    let start_model = match &args.command {
        None | Some(Command::View { model: None }) => None,
        Some(Command::View { model: Some(name) }) => Some(name.as_str()),
        Some(command) => {
            let stdout = io::stdout();
            if let Err(e) = cli::run_command(command, &catalog, &mut stdout.lock()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
    };

    let start_index = match start_model {
        Some(name) => match cli::resolve_model(&catalog, name) {
            Ok((index, _)) => index,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => 0,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(catalog, start_index, args.wrap);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
