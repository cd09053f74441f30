mod config;
mod debug;
mod game;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use game::{advance, KeyMap, SimulationState};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug_enabled = parse_args(&args);

    debug::init(debug_enabled).context("failed to initialize debug log")?;
    debug::log("SESSION_START", "tickpong starting");

    let config = config::load_config().context("failed to load configuration")?;

    // Key-up events need the kitty keyboard protocol. Without it crossterm
    // only delivers presses, so a held paddle direction latches until the
    // other direction is pressed.
    let report_releases = supports_keyboard_enhancement().unwrap_or(false);
    if !report_releases {
        eprintln!("Warning: terminal does not report key releases; paddle keys will latch");
        debug::log("TERMINAL", "No keyboard enhancement support, release events unavailable");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if report_releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_session(&mut terminal, &config);

    // Restore terminal
    if report_releases {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn parse_args(args: &[String]) -> bool {
    let mut debug_enabled = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug_enabled = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    debug_enabled
}

fn print_usage(program: &str) {
    println!("tickpong - two-player terminal pong on a fixed simulation tick");
    println!();
    println!("Usage:");
    println!("  {}              # play", program);
    println!("  {} --debug      # also write diagnostics to /tmp/tickpong-debug.log", program);
    println!();
    println!("Controls: W/S move the left paddle, Up/Down the right, Q quits.");
    println!("Bindings and game parameters live in the config file (created on first run).");
}

/// The single-threaded session loop. Key transitions apply to the control
/// flags the moment they arrive; every `tick_interval_ms` one simulation
/// step runs and the frame is redrawn. All transitions received before a
/// tick are reflected in that tick, last-applied-wins per flag.
fn run_session<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<()> {
    debug::log("GAME_START", "session loop started");

    let keymap = KeyMap::resolve(&config.keybindings);
    let hint = ui::render::controls_hint(&config.keybindings);
    let mut state = SimulationState::new(&config.simulation);
    let tick = Duration::from_millis(config.simulation.tick_interval_ms.max(1));
    let mut next_tick = Instant::now() + tick;

    let snapshot = state.snapshot();
    terminal.draw(|f| ui::render(f, &snapshot, &config.display, &hint))?;

    loop {
        // Sleep at most until the tick deadline while draining key events
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let is_down = match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => true,
                    KeyEventKind::Release => false,
                };

                if is_down && keymap.is_quit(key.code) {
                    debug::log("SESSION_END", "quit key pressed");
                    return Ok(());
                }

                keymap.apply_transition(&mut state.controls, key.code, is_down);
            }
        }

        if Instant::now() >= next_tick {
            state = advance(&state, tick);
            next_tick += tick;

            let snapshot = state.snapshot();
            terminal.draw(|f| ui::render(f, &snapshot, &config.display, &hint))?;
        }
    }
}
