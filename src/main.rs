//! Diamond Miners - Entry Point
//!
//! This is the main executable that initializes the terminal,
//! sets up the game, and runs the main loop.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use diamond_miners::data::{export_default_config, GameConfig, CONFIG_FILE};
use diamond_miners::game::GameState;
use diamond_miners::ui::App;

/// Longest wait for input before redrawing
const FRAME_TIME: Duration = Duration::from_millis(1000 / 30);

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Diamond Miners v{}", env!("CARGO_PKG_VERSION"));

    if std::env::args().nth(1).as_deref() == Some("--export-config") {
        export_default_config(Path::new(CONFIG_FILE))?;
        println!("Default settings written to {}", CONFIG_FILE);
        return Ok(());
    }

    let config = GameConfig::load();
    let game = GameState::from_config(&config).unwrap_or_else(|e| {
        log::warn!("Configured level rejected ({}), using the shipped level", e);
        GameState::new()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, config.render_mode);

    let result = run_game_loop(&mut terminal, &mut app, config.blink_interval());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Diamond Miners shut down cleanly");
    result
}

/// Log to a file so output does not tear the TUI
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("diamond-miners.log")
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

/// Main game loop
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    blink_interval: Duration,
) -> Result<()> {
    let mut last_blink = Instant::now();

    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        let until_blink = blink_interval.saturating_sub(last_blink.elapsed());
        if event::poll(until_blink.min(FRAME_TIME))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }

        if last_blink.elapsed() >= blink_interval {
            app.tick_blink();
            last_blink = Instant::now();
        }
    }

    Ok(())
}
