mod action;
mod app;
mod cli;
mod command;
mod config;
mod domain;
mod ui;
mod update;

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use action::Action;
use app::App;
use command::{execute_command, Command};
use config::AppConfig;
use domain::settings::Settings;

#[derive(Parser, Debug, Default)]
#[command(name = "hashtag")]
#[command(about = "Hashtag Generator - Convert text to hashtags from the command line")]
pub struct Cli {
    /// Text to convert to hashtag
    #[arg(short, long, help_heading = "Input Options")]
    pub text: Option<String>,

    /// Input file path
    #[arg(short, long, value_name = "FILE", help_heading = "Input Options")]
    pub input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Remove special characters
    #[arg(long, conflicts_with = "keep_special", help_heading = "Settings")]
    pub no_special: bool,

    /// Keep special characters
    #[arg(long, help_heading = "Settings")]
    pub keep_special: bool,

    /// Capitalize first letter of each word
    #[arg(long, conflicts_with = "no_capitalize", help_heading = "Settings")]
    pub capitalize: bool,

    /// Don't capitalize first letter of each word
    #[arg(long, help_heading = "Settings")]
    pub no_capitalize: bool,

    /// Maximum number of history items to keep
    #[arg(long, value_name = "N", allow_negative_numbers = true, help_heading = "Settings")]
    pub history_size: Option<i64>,

    /// Show hashtag history
    #[arg(long, help_heading = "History Commands")]
    pub history: bool,

    /// Clear hashtag history
    #[arg(long, help_heading = "History Commands")]
    pub clear_history: bool,

    /// Number of history items to show
    #[arg(long, value_name = "N", help_heading = "History Commands")]
    pub history_limit: Option<usize>,

    /// Show current settings
    #[arg(long)]
    pub settings: bool,

    /// Directory holding config.json and history.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Open the interactive form instead of running once
    #[arg(long)]
    pub tui: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.tui {
        let config = AppConfig::new(cli.config_dir.clone(), Settings::form_defaults())?;
        init_file_logging(&config)?;
        return run_form(config).await;
    }

    init_stderr_logging();
    let config = AppConfig::new(cli.config_dir.clone(), Settings::cli_defaults())?;
    cli::run(&cli, &config)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// The form owns the screen, so logs go to a file in the config directory.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    fs::create_dir_all(&config.config_dir).with_context(|| {
        format!("failed to create config directory {}", config.config_dir.display())
    })?;
    let log_path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_form(config: AppConfig) -> Result<()> {
    let stored = config.store().load(config.defaults);
    let mut app = App::new(stored);
    info!(dir = %config.config_dir.display(), "starting form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let commands = update::update(
                    app,
                    Action::Input {
                        code: key.code,
                        modifiers: key.modifiers,
                    },
                );
                run_commands(app, commands, config).await;
            }
        }
    }

    info!("form closed");
    Ok(())
}

/// Execute commands until no further actions are produced
async fn run_commands(app: &mut App, commands: Vec<Command>, config: &AppConfig) {
    let mut queue: VecDeque<Command> = commands.into();
    while let Some(command) = queue.pop_front() {
        if let Some(action) = execute_command(command, config).await {
            queue.extend(update::update(app, action));
        }
    }
}
