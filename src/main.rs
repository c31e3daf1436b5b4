//! traykeys - keyboard-driven jog panel for the Robotray.

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ratatui::{backend::CrosstermBackend, Terminal};

use traykeys::app::App;
use traykeys::config::Config;
use traykeys::error::AppError;
use traykeys::events::EventHandler;
use traykeys::terminal::TerminalSession;
use traykeys::{logging, ui};

#[derive(Debug, Parser)]
#[command(name = "traykeys", version, about = "Keyboard jog panel for the Robotray")]
struct Cli {
    /// Configuration file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Jog distance in millimetres.
    #[arg(long, value_name = "MM")]
    step: Option<f64>,

    /// Start with the jog buttons enabled.
    #[arg(long)]
    edit_mode: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the interactive jog panel (default).
    Run,
    /// Print the active key bindings.
    Bindings,
    /// Print the default configuration file path.
    ConfigPath,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Run) {
        Command::ConfigPath => {
            println!("config: {}", Config::default_path()?.display());
            match logging::log_directory() {
                Some(dir) => println!("logs:   {}", dir.display()),
                None => println!("logs:   (no local data directory)"),
            }
            Ok(())
        }
        Command::Bindings => {
            let config = load_config(&cli)?;
            let table = config.settings.binding_table()?;
            for (token, command) in table.entries() {
                println!("{:<12} {:<18} {}", token, command.as_str(), command.label());
            }
            Ok(())
        }
        Command::Run => {
            if let Err(e) = logging::init() {
                eprintln!("Warning: logging disabled: {}", e.user_message());
            }
            let result = run(&cli);
            logging::shutdown();
            result
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!(AppError::from(e).user_message()))?;

    if let Some(step) = cli.step {
        config.settings.step_mm = step;
    }
    if cli.edit_mode {
        config.settings.start_in_edit_mode = true;
    }
    config
        .settings
        .validate()
        .map_err(|e| anyhow::anyhow!(AppError::from(e).user_message()))?;

    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let mut app = App::new(&config.settings)?;

    let session = TerminalSession::start()?;
    let result = event_loop(&mut app);
    let cleanup = session.finish();

    result.and(cleanup.map_err(anyhow::Error::from))
}

fn event_loop(app: &mut App) -> anyhow::Result<()> {
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("failed to initialize terminal")?;
    let events = EventHandler::new();

    while !app.should_quit() {
        terminal
            .draw(|frame| ui::render(frame, app))
            .context("failed to draw frame")?;
        app.handle_event(events.next()?);
    }

    Ok(())
}
