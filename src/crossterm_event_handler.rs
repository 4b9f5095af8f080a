use crate::app::AppEvent;
use crate::tui::TerminalEvent;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use std::time::Duration;
use tokio::{select, sync::mpsc, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn to_terminal_event(event: CrosstermEvent) -> Option<TerminalEvent> {
    match event {
        // Windows also reports releases.
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            Some(TerminalEvent::Key(key))
        }
        CrosstermEvent::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
        _ => None,
    }
}

/// Forwards key presses and resizes to the app until cancelled.
pub fn start_event_handler(
    event_sender: mpsc::Sender<AppEvent>,
    cancellation_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            select! {
                _ = cancellation_token.cancelled() => {
                    log::info!("Terminal event handler stopped.");
                    break;
                }

                _ = time::sleep(POLL_INTERVAL) => {
                    if !matches!(event::poll(Duration::ZERO), Ok(true)) {
                        continue;
                    }
                    let terminal_event = match event::read() {
                        Ok(event) => to_terminal_event(event),
                        Err(e) => {
                            log::error!("Failed to read terminal event: {e}");
                            break;
                        }
                    };
                    if let Some(terminal_event) = terminal_event {
                        if event_sender.send(AppEvent::TerminalEvent(terminal_event)).await.is_err() {
                            break;
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::to_terminal_event;
    use crate::tui::TerminalEvent;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn test_only_key_presses_are_forwarded() {
        let press = KeyEvent::from(KeyCode::Left);
        assert!(matches!(
            to_terminal_event(Event::Key(press)),
            Some(TerminalEvent::Key(k)) if k.code == KeyCode::Left
        ));

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(to_terminal_event(Event::Key(release)).is_none());
        assert!(matches!(
            to_terminal_event(Event::Resize(80, 24)),
            Some(TerminalEvent::Resize(80, 24))
        ));
        assert!(to_terminal_event(Event::FocusGained).is_none());
    }
}
