use super::constants::{UiKey, UiStyle, LEFT_PANEL_WIDTH};
use super::traits::{Screen, SplitPanel};
use super::ui_callback::UiCallback;
use super::utils::fit_to_width;
use super::widgets::{default_block, exhibition_lines, selectable_list};
use crate::types::{AppResult, ExhibitionId, SystemTimeTick, Tick};
use crate::world_cup::WorldCup;
use crossterm::event::KeyCode;
use itertools::Itertools;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{ListState, Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Default)]
pub struct GalleryPanel {
    index: Option<usize>,
    exhibition_ids: Vec<ExhibitionId>,
}

impl GalleryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_exhibition_id(&self) -> Option<ExhibitionId> {
        self.exhibition_ids.get(self.index?).copied()
    }

    pub fn update_exhibitions(&mut self, world_cup: &WorldCup) {
        let selected = self.selected_exhibition_id();
        self.exhibition_ids = world_cup.entrants().iter().map(|e| e.id).collect();

        match selected {
            Some(id) if self.exhibition_ids.contains(&id) => self.select_exhibition(id),
            _ => self.set_index(0),
        }
    }

    pub fn select_exhibition(&mut self, exhibition_id: ExhibitionId) {
        if let Some(index) = self.exhibition_ids.iter().position(|&id| id == exhibition_id) {
            self.set_index(index);
        }
    }

    fn build_left_panel(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) {
        let split = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area);

        frame.render_widget(
            Paragraph::new(format!(
                "Theme: {} ({})",
                world_cup.theme().unwrap_or("All"),
                self.exhibition_ids.len()
            ))
            .centered()
            .block(default_block()),
            split[0],
        );

        let today = Tick::now().as_local_date();
        let options = self
            .exhibition_ids
            .iter()
            .filter_map(|&id| world_cup.catalog().get(id))
            .map(|exhibition| {
                let style = if exhibition.is_running_on(today) {
                    UiStyle::DEFAULT
                } else {
                    UiStyle::UNSELECTABLE
                };
                let text = fit_to_width(
                    &exhibition.short_title(),
                    LEFT_PANEL_WIDTH.saturating_sub(5) as usize,
                );
                (text, style)
            })
            .collect_vec();

        frame.render_stateful_widget(
            selectable_list(options).block(default_block().title("Exhibitions ↓/↑")),
            split[1],
            &mut ListState::default().with_selected(self.index),
        );
    }

    fn build_right_panel(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) -> AppResult<()> {
        let Some(exhibition_id) = self.selected_exhibition_id() else {
            frame.render_widget(
                Paragraph::new("No exhibition matches this theme.")
                    .centered()
                    .block(default_block()),
                area,
            );
            return Ok(());
        };

        let exhibition = world_cup.get_exhibition_or_err(exhibition_id)?;
        frame.render_widget(default_block().title(format!(" {} ", exhibition.id)), area);
        frame.render_widget(
            Paragraph::new(exhibition_lines(exhibition)).wrap(Wrap { trim: true }),
            area.inner(Margin::new(2, 1)),
        );
        Ok(())
    }
}

impl Screen for GalleryPanel {
    fn update(&mut self, world_cup: &WorldCup) -> AppResult<()> {
        let exhibition_ids = world_cup.entrants().iter().map(|e| e.id).collect_vec();
        if exhibition_ids != self.exhibition_ids {
            self.update_exhibitions(world_cup);
        } else if self.index.is_none() && !self.exhibition_ids.is_empty() {
            self.set_index(0);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) -> AppResult<()> {
        let split =
            Layout::horizontal([Constraint::Length(LEFT_PANEL_WIDTH), Constraint::Fill(1)])
                .split(area);
        self.build_left_panel(frame, world_cup, split[0]);
        self.build_right_panel(frame, world_cup, split[1])
    }

    fn handle_key_events(
        &mut self,
        key_event: crossterm::event::KeyEvent,
        _world_cup: &WorldCup,
    ) -> Option<UiCallback> {
        match key_event.code {
            KeyCode::Up => self.previous_index(),
            KeyCode::Down => self.next_index(),
            UiKey::CYCLE_THEME => return Some(UiCallback::CycleTheme),
            UiKey::START_WORLD_CUP => return Some(UiCallback::StartWorldCup),
            UiKey::ASK_CURATOR => {
                return self
                    .selected_exhibition_id()
                    .map(|exhibition_id| UiCallback::AskCurator { exhibition_id });
            }
            _ => {}
        }
        None
    }

    fn footer_spans(&self) -> Vec<String> {
        vec![
            format!(" {} ", UiKey::CYCLE_THEME),
            " Next theme ".to_string(),
            format!(" {} ", UiKey::START_WORLD_CUP),
            " Start world cup ".to_string(),
            format!(" {} ", UiKey::ASK_CURATOR),
            " Ask curator ".to_string(),
        ]
    }
}

impl SplitPanel for GalleryPanel {
    fn index(&self) -> Option<usize> {
        self.index
    }

    fn max_index(&self) -> usize {
        self.exhibition_ids.len()
    }

    fn set_index(&mut self, index: usize) {
        if self.max_index() == 0 {
            self.index = None;
        } else {
            self.index = Some(index % self.max_index());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GalleryPanel;
    use crate::catalog::Catalog;
    use crate::tournament::TournamentConfig;
    use crate::types::AppResult;
    use crate::ui::traits::{Screen, SplitPanel};
    use crate::world_cup::WorldCup;

    #[test]
    fn test_selection_follows_theme_filter() -> AppResult<()> {
        let catalog = Catalog::embedded()?;
        let pool = catalog.exhibitions().to_vec();
        let mut world_cup = WorldCup::new(catalog, pool, TournamentConfig::default());

        let mut panel = GalleryPanel::new();
        panel.update(&world_cup)?;
        assert_eq!(panel.index(), Some(0));
        assert_eq!(panel.max_index(), 16);

        panel.previous_index();
        assert_eq!(panel.index(), Some(15));
        panel.next_index();
        assert_eq!(panel.index(), Some(0));

        // Exhibition 1 is a painting, so it stays selected under that filter.
        panel.select_exhibition(1);
        world_cup.set_theme(Some("회화".to_string()));
        panel.update_exhibitions(&world_cup);
        assert_eq!(panel.selected_exhibition_id(), Some(1));
        assert_eq!(panel.max_index(), 4);

        world_cup.set_theme(Some("No such theme".to_string()));
        panel.update_exhibitions(&world_cup);
        assert_eq!(panel.index(), None);
        assert_eq!(panel.selected_exhibition_id(), None);
        Ok(())
    }
}
