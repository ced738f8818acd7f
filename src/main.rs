mod config;
mod grid;
mod logging;
mod tui;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use grid::models::ItemList;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use tracing::{info, warn};
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "button-grid")]
#[command(about = "A grid of colored, numbered tiles you can select and clear")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key ('title' or 'columns')")]
        key: String,
        #[arg(help = "Configuration value ('auto' clears 'columns')")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app() {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load_or_default()?;
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "falling back to default configuration");
            Config::default()
        }
    };

    let mut app = App::new(ItemList::default_palette(), &config);
    info!(items = app.total_items(), columns = ?config.columns, "starting button grid");

    run_tui(&mut app)?;

    info!(selected = ?app.selection.indices(), "exiting");
    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore_err) = restore_terminal() {
                warn!(error = %restore_err, "failed to restore terminal");
            }
            return Err(e);
        }
    };

    let result = run_app(&mut terminal, app);
    let restored = restore_terminal().context("Failed to restore terminal");

    result.and(restored)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Runs every restore step even if an earlier one fails; reports the first error.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, DisableMouseCapture),
        execute!(stdout, Show),
    ])
}

/// Steps are evaluated before this is called, so none is skipped.
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Draws, then applies exactly one event before drawing again.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        app.handle_event(event::read()?)?;
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
