use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::Session;
use connect_four::ui::{opponent_factory, App, Console, Frontend};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against a friend or the computer.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Front end to start; asks on startup when omitted
    #[arg(long, value_enum)]
    ui: Option<Frontend>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the computer opponent's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("CONNECT_FOUR_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.computer.seed = Some(seed);
    }

    let mut session = Session::new(config.roster()).context("setting up players")?;
    let stdin = io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        io::stdout(),
        opponent_factory(config.computer.seed),
    );

    let frontend = match cli.ui {
        Some(frontend) => frontend,
        None => console
            .prompt_frontend()
            .context("reading front end choice")?,
    };

    match frontend {
        Frontend::Console => console.run(&mut session).context("console game failed")?,
        Frontend::Tui => {
            drop(console);
            let app = App::new(session, opponent_factory(config.computer.seed));
            run_tui(app).context("terminal UI failed")?;
        }
    }

    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
