use crate::args::AppArgs;
use crate::crossterm_event_handler::start_event_handler;
use crate::tick_event_handler::{start_tick_event_loop, TICK_FPS};
use crate::tui::{TerminalEvent, Tui};
use crate::types::{AppResult, SystemTimeTick, Tick};
use crate::ui::popup_message::PopupMessage;
use crate::ui::ui::Ui;
use crate::world_cup::WorldCup;
use crossterm::event::{KeyCode, KeyModifiers};
use futures::future::join;
use log::{debug, error, info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Tick(Tick),
    TerminalEvent(TerminalEvent),
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Started,
    Quitting,
}

#[derive(Debug)]
pub struct App {
    pub world_cup: WorldCup,
    pub state: AppState,
    pub ui: Ui,
    cancellation_token: CancellationToken,
}

impl App {
    pub fn new(args: &AppArgs) -> AppResult<Self> {
        let config = args.tournament_config()?;
        let catalog = args.load_catalog()?;
        let pool = args.entrants(&catalog);
        info!(
            "Loaded {} exhibitions, {} can enter the world cup.",
            catalog.len(),
            pool.len()
        );

        let world_cup = WorldCup::new(catalog, pool, config);
        let mut ui = Ui::new();
        ui.update(&world_cup)?;

        Ok(Self {
            world_cup,
            state: AppState::Started,
            ui,
            cancellation_token: CancellationToken::new(),
        })
    }

    pub async fn run(&mut self, mut tui: Tui) -> AppResult<()> {
        let (event_sender, mut event_receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let tick_loop = start_tick_event_loop(
            TICK_FPS,
            event_sender.clone(),
            self.cancellation_token.clone(),
        );
        let terminal_loop = start_event_handler(event_sender, self.cancellation_token.clone());

        tui.draw(&mut self.ui, &self.world_cup)?;
        while self.state != AppState::Quitting {
            let Some(app_event) = event_receiver.recv().await else {
                break;
            };

            match app_event {
                AppEvent::Tick(tick) => {
                    self.handle_tick_events(tick);
                    if let Err(e) = tui.draw(&mut self.ui, &self.world_cup) {
                        error!("Drawing error: {e}");
                    }
                }
                AppEvent::TerminalEvent(TerminalEvent::Key(key_event)) => {
                    self.handle_key_events(key_event);
                    if let Err(e) = tui.draw(&mut self.ui, &self.world_cup) {
                        error!("Drawing error: {e}");
                    }
                }
                AppEvent::TerminalEvent(TerminalEvent::Resize(w, h)) => tui.resize((w, h))?,
            }
        }

        self.quit();
        drop(event_receiver);
        let (tick_result, terminal_result) = join(tick_loop, terminal_loop).await;
        if let Err(e) = tick_result.and(terminal_result) {
            error!("Event loop failed: {e}");
        }

        info!("App loop closed");
        tui.exit()?;
        Ok(())
    }

    /// Stops the event loops and leaves the main loop.
    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
        self.cancellation_token.cancel();
    }

    pub fn is_quitting(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    /// Fires the pending round transition once it is due.
    pub fn handle_tick_events(&mut self, current_tick: Tick) {
        if let Some(event) = self.world_cup.tick(current_tick) {
            debug!("Tick {current_tick}: {event:?}");
        }

        if let Err(e) = self.ui.update(&self.world_cup) {
            error!("Ui update error\n{e}");
        }
    }

    pub fn handle_key_events(&mut self, key_event: crossterm::event::KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.quit(),
            // Exit application on `Ctrl-C`
            KeyCode::Char('c') | KeyCode::Char('C')
                if key_event.modifiers == KeyModifiers::CONTROL =>
            {
                self.quit()
            }
            _ => {
                if let Some(callback) = self.ui.handle_key_events(key_event, &self.world_cup) {
                    match callback.call(self) {
                        Ok(Some(message)) => {
                            self.ui.push_popup(PopupMessage::Ok {
                                message,
                                tick: Tick::now(),
                            });
                        }
                        Ok(None) => {}
                        Err(e) => {
                            self.ui.push_popup(PopupMessage::Error {
                                message: e.to_string(),
                                tick: Tick::now(),
                            });
                        }
                    }
                }
                if let Err(e) = self.ui.update(&self.world_cup) {
                    error!("Ui update error\n{e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppState};
    use crate::args::AppArgs;
    use crate::tournament::BracketPhase;
    use crate::types::AppResult;
    use crate::ui::popup_message::PopupMessage;
    use crate::ui::ui::UiTab;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_events(KeyEvent::from(code));
    }

    #[test]
    fn test_play_a_world_cup_with_keys() -> AppResult<()> {
        let args = AppArgs {
            bracket_size: 4,
            transition_delay: 0,
            ..AppArgs::test()
        };
        let mut app = App::new(&args)?;
        assert_eq!(app.ui.tab(), UiTab::Gallery);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.ui.tab(), UiTab::WorldCup);
        assert_eq!(app.world_cup.controller.phase(), BracketPhase::InProgress);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('2'));
        assert!(app.world_cup.controller.pending_transition().is_some());
        // Picks are ignored until the next round is built.
        press(&mut app, KeyCode::Left);
        assert_eq!(app.world_cup.controller.rounds().len(), 1);

        let fires_at = app
            .world_cup
            .controller
            .pending_transition()
            .map(|p| p.fires_at)
            .expect("A transition should be scheduled");
        app.handle_tick_events(fires_at);
        assert_eq!(app.world_cup.controller.current_round_number(), 2);

        press(&mut app, KeyCode::Right);
        let champion = app
            .world_cup
            .controller
            .champion()
            .cloned()
            .expect("The final should have a winner");
        assert_eq!(champion.id, app.world_cup.controller.rounds()[0].matches[1].slot_b.id);

        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(
            app.ui.popup_messages().first(),
            Some(PopupMessage::Ok { message, .. }) if message.contains(&champion.ask_prompt())
        ));
        press(&mut app, KeyCode::Enter);
        assert!(app.ui.popup_messages().is_empty());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.world_cup.controller.phase(), BracketPhase::InProgress);
        Ok(())
    }

    #[test]
    fn test_too_few_entrants_shows_an_error() -> AppResult<()> {
        let args = AppArgs {
            theme: Some("조각".to_string()),
            ..AppArgs::test()
        };
        let mut app = App::new(&args)?;

        press(&mut app, KeyCode::Char('s'));
        assert!(app.world_cup.controller.is_empty());
        assert_eq!(app.ui.tab(), UiTab::Gallery);
        assert!(matches!(
            app.ui.popup_messages().first(),
            Some(PopupMessage::Error { message, .. })
                if message == "Need at least 2 exhibitions to start a world cup, found 1."
        ));
        Ok(())
    }

    #[test]
    fn test_quit_keys() -> AppResult<()> {
        let mut app = App::new(&AppArgs::test())?;
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Quitting);
        assert!(app.is_quitting());

        let mut app = App::new(&AppArgs::test())?;
        app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.state, AppState::Quitting);
        Ok(())
    }
}
