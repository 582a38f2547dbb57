use std::io;
use std::sync::Arc;

use atlas::api::CountriesClient;
use atlas::app::{App, AppMessage, LoadPhase, Screen};
use atlas::cli::{parse_args, print_version, CliCommand};
use atlas::config::{init_tracing, AppConfig};
use atlas::ui;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            print_version();
            return Ok(());
        }
        CliCommand::RunTui => {}
    }

    let config = AppConfig::from_env();

    // Diagnostics go to a log file; losing them must not take the TUI down
    if let Err(err) = init_tracing(&config) {
        eprintln!("warning: diagnostics disabled: {}", err);
    }

    let client = Arc::new(CountriesClient::with_base_url(config.api_base_url.clone()));
    let mut app = App::with_client(client);
    if config.skip_welcome {
        app.confirm_welcome();
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if let Ok(size) = terminal.size() {
        app.update_terminal_dimensions(size.width, size.height);
    }

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;

    result
}

/// Restore the terminal to its pre-TUI state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // Poll keyboard events and the fetch-task channel together. The
        // tick keeps the loading spinner moving.
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            // Handle keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                            continue;
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key(app, key);
                        }
                        _ => {
                            // Ignore other events (focus, mouse, etc.)
                        }
                    }
                }
            }

            // Handle messages from the background fetch task
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Route one key press by phase and screen.
fn handle_key(app: &mut App, key: KeyEvent) {
    app.mark_dirty();

    // Global keybinds (always active)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.phase {
        LoadPhase::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => app.confirm_welcome(),
            KeyCode::Esc => app.quit(),
            _ => {}
        },
        // Nothing to interact with while the fetch is in flight, and the
        // failed state is terminal apart from quitting
        LoadPhase::Loading | LoadPhase::Failed(_) => {}
        LoadPhase::Loaded => match app.screen {
            Screen::Browse => handle_browse_key(app, key),
            Screen::Detail => handle_detail_key(app, key),
        },
    }
}

/// Key handling on the browse screen. Plain characters feed the search box.
fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cycle_sort();
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_theme();
        }
        KeyCode::Tab => app.cycle_region(),
        KeyCode::BackTab => app.cycle_region_back(),
        KeyCode::Left => app.select_prev(),
        KeyCode::Right => app.select_next(),
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Esc => app.search_clear(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_push(c);
        }
        _ => {}
    }
}

/// Key handling on the detail screen.
fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_theme();
        }
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('o') => app.open_detail_flag(),
        _ => {}
    }
}
