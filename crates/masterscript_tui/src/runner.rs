//! TUI runner - main loop and key bindings.

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use masterscript_error::{TuiError, TuiErrorKind, TuiResult};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, instrument};

use crate::{Controller, ControllerEvent, Event, EventHandler};

const SCROLL_STEP: u16 = 10;

/// Run the interactive screen until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// event loop.
#[instrument(skip_all)]
pub async fn run_tui(
    mut controller: Controller,
    mut controller_events: UnboundedReceiver<ControllerEvent>,
) -> TuiResult<()> {
    let mut terminal = setup_terminal()?;
    let mut terminal_events = EventHandler::spawn(controller.settings().tick_rate_ms);
    info!("TUI started");

    let result = event_loop(
        &mut terminal,
        &mut controller,
        &mut terminal_events,
        &mut controller_events,
    )
    .await;

    let restored = restore_terminal(&mut terminal);
    info!("TUI stopped");
    result.and(restored)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut Controller,
    terminal_events: &mut EventHandler,
    controller_events: &mut UnboundedReceiver<ControllerEvent>,
) -> TuiResult<()> {
    while !controller.should_quit() {
        terminal
            .draw(|f| crate::ui::draw(f, &*controller))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        tokio::select! {
            event = terminal_events.next() => match event {
                Some(Ok(Event::Key(key))) => handle_key(controller, key).await,
                Some(Ok(Event::Tick | Event::Resize)) => {}
                Some(Err(e)) => return Err(e),
                None => {
                    debug!("Input channel closed");
                    return Err(TuiError::new(TuiErrorKind::InputClosed));
                }
            },
            Some(event) = controller_events.recv() => controller.handle_event(event),
        }
    }
    Ok(())
}

fn setup_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> TuiResult<()> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

/// Apply one key press to the controller.
///
/// While a notice is shown only `Esc`/`Enter` (dismiss) and `Ctrl+C` are
/// accepted. Generate keys are ignored while a generation is in flight.
pub async fn handle_key(controller: &mut Controller, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        controller.quit();
        return;
    }

    if controller.notice().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            controller.dismiss_notice();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => controller.quit(),
        KeyCode::Enter if !controller.is_generating() => controller.submit(),
        KeyCode::Char('r') if ctrl && !controller.is_generating() => controller.surprise_me(),
        KeyCode::Char('t') if ctrl => {
            controller.export_text().await;
        }
        KeyCode::Char('p') if ctrl => controller.export_pdf(),
        KeyCode::Char('n') if ctrl => controller.reset(),
        KeyCode::PageUp => controller.scroll_up(SCROLL_STEP),
        KeyCode::PageDown => controller.scroll_down(SCROLL_STEP),
        KeyCode::Up => controller.scroll_up(1),
        KeyCode::Down => controller.scroll_down(1),
        KeyCode::Backspace => controller.pop_char(),
        KeyCode::Char(c) if !ctrl => controller.push_char(c),
        _ => {}
    }
}
