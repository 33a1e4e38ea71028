use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tokio::sync::watch;

use crate::error::AppResult;
use crate::shutdown::ShutdownSender;
use crate::ui::model::{UiData, UiRenderData};

use super::frame::draw_frame;

/// Raw-mode alternate screen owned by the render task. The terminal is
/// handed back to the shell when the session drops, on every exit path.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn open() -> AppResult<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            restore_terminal();
            return Err(err.into());
        }
        // From here on a failed setup still leaves the alternate screen.
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout())).inspect_err(|_| {
            restore_terminal();
        })?;
        terminal.clear().inspect_err(|_| restore_terminal())?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.show_cursor() {
            tracing::debug!("Failed to show cursor: {}", err);
        }
        restore_terminal();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        tracing::debug!("Failed to leave raw mode: {}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        tracing::debug!("Failed to leave alternate screen: {}", err);
    }
}

/// Draws one snapshot. A failed frame is logged and skipped; the next
/// snapshot redraws the whole screen anyway.
pub fn render_snapshot<B: Backend>(terminal: &mut Terminal<B>, data: &UiRenderData) {
    if let Err(err) = terminal.draw(|f| draw_frame(f, data)) {
        tracing::error!("Failed to render UI: {}", err);
    }
}

/// Spawns the render task: one frame per snapshot published on `ui_tx`,
/// until shutdown or until the sender goes away.
#[must_use]
pub fn setup_render_ui(
    shutdown_tx: &ShutdownSender,
    ui_tx: &watch::Sender<UiData>,
) -> tokio::task::JoinHandle<()> {
    let mut ui_rx = ui_tx.subscribe();
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut session = match TerminalSession::open() {
            Ok(session) => session,
            Err(err) => {
                tracing::error!("Failed to setup terminal: {}", err);
                return;
            }
        };

        let first = UiRenderData::from(&*ui_rx.borrow_and_update());
        render_snapshot(&mut session.terminal, &first);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = ui_rx.changed() => {
                    if res.is_err() {
                        break;
                    }
                    let data = UiRenderData::from(&*ui_rx.borrow_and_update());
                    render_snapshot(&mut session.terminal, &data);
                }
            }
        }
    })
}
