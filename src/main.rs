use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        poll as event_poll, read as event_read, DisableMouseCapture, EnableMouseCapture, Event,
        KeyEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use menu_positioner::{
    app::DemoApp,
    config::Config,
    view::scene::SceneSpec,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// Place a floating menu next to its activator and report or show the result
#[derive(Parser, Debug)]
#[command(name = "menu-place")]
#[command(about = "Viewport-aware floating menu positioning", long_about = None)]
#[command(version)]
struct Args {
    /// JSON config file with menu preferences and keybindings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON scenario describing viewport, activator and list
    #[arg(long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Open an interactive terminal view instead of printing a report
    #[arg(long)]
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.validate().context("Invalid config")?;

    let scenario = match &args.scenario {
        Some(path) => Some(
            SceneSpec::load_from_file(path)
                .with_context(|| format!("Failed to load scenario from {}", path.display()))?,
        ),
        None => None,
    };

    if args.interactive {
        run_interactive(config, scenario)
    } else {
        run_report(config, scenario.unwrap_or_default())
    }
}

/// Open the menu once and print where it landed
fn run_report(config: Config, scenario: SceneSpec) -> Result<()> {
    let mut app = DemoApp::new(config, scenario);
    app.open();
    let report = serde_json::to_string_pretty(&app.report())?;
    println!("{}", report);
    Ok(())
}

fn run_interactive(config: Config, scenario: Option<SceneSpec>) -> Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    let scenario = scenario.unwrap_or_else(|| DemoApp::terminal_scene(width, height));
    let mut app = DemoApp::new(config, scenario);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let _ = crossterm::execute!(stdout(), EnableMouseCapture);

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_event_loop(&mut terminal, &mut app));

    // Clean up
    let _ = crossterm::execute!(stdout(), DisableMouseCapture);
    let _ = stdout().execute(LeaveAlternateScreen);
    disable_raw_mode()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DemoApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            return Ok(());
        }

        // Poll for events with a timeout
        if !event_poll(Duration::from_millis(100))? {
            continue;
        }

        match event_read()? {
            // Only process key press events (not release/repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }
    }
}
