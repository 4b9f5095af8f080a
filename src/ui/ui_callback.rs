use super::ui::UiTab;
use crate::app::App;
use crate::tournament::BracketEvent;
use crate::types::{AppResult, ExhibitionId, SystemTimeTick, Tick};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum UiCallback {
    NextTab,
    CycleTheme,
    StartWorldCup,
    RestartWorldCup,
    SelectWinner { exhibition_id: ExhibitionId },
    ToggleBracketView,
    GoToExhibition { exhibition_id: ExhibitionId },
    AskCurator { exhibition_id: ExhibitionId },
    CloseUiPopup,
}

impl UiCallback {
    fn select_winner(exhibition_id: ExhibitionId) -> impl Fn(&mut App) -> AppResult<Option<String>> {
        move |app: &mut App| {
            let now = Tick::now();
            match app.world_cup.select(exhibition_id, now) {
                Some(BracketEvent::Champion) => {
                    let champion = app.world_cup.get_exhibition_or_err(exhibition_id)?;
                    info!("Champion picked: {}.", champion.short_title());
                }
                Some(_) => {}
                None => debug!("Selection of exhibition {exhibition_id} had no effect."),
            }
            Ok(None)
        }
    }

    fn go_to_exhibition(exhibition_id: ExhibitionId) -> impl Fn(&mut App) -> AppResult<Option<String>> {
        move |app: &mut App| {
            // The exhibition may be hidden by the theme filter.
            if !app.world_cup.entrants().iter().any(|e| e.id == exhibition_id) {
                app.world_cup.set_theme(None);
            }
            app.ui.gallery_panel.update_exhibitions(&app.world_cup);
            app.ui.gallery_panel.select_exhibition(exhibition_id);
            app.ui.switch_to(UiTab::Gallery);
            Ok(None)
        }
    }

    pub fn call(&self, app: &mut App) -> AppResult<Option<String>> {
        match self {
            UiCallback::NextTab => {
                app.ui.next_tab();
                Ok(None)
            }
            UiCallback::CycleTheme => {
                app.world_cup.cycle_theme();
                app.ui.gallery_panel.update_exhibitions(&app.world_cup);
                Ok(None)
            }
            UiCallback::StartWorldCup => {
                app.world_cup.start(Tick::now())?;
                app.ui.switch_to(UiTab::WorldCup);
                Ok(None)
            }
            UiCallback::RestartWorldCup => {
                app.world_cup.restart(Tick::now())?;
                app.ui.switch_to(UiTab::WorldCup);
                Ok(None)
            }
            UiCallback::SelectWinner { exhibition_id } => Self::select_winner(*exhibition_id)(app),
            UiCallback::ToggleBracketView => {
                app.ui.world_cup_panel.toggle_view();
                Ok(None)
            }
            UiCallback::GoToExhibition { exhibition_id } => {
                Self::go_to_exhibition(*exhibition_id)(app)
            }
            UiCallback::AskCurator { exhibition_id } => {
                let exhibition = app.world_cup.get_exhibition_or_err(*exhibition_id)?;
                Ok(Some(format!("Ask the curator:\n\"{}\"", exhibition.ask_prompt())))
            }
            UiCallback::CloseUiPopup => {
                app.ui.close_popup();
                Ok(None)
            }
        }
    }
}
