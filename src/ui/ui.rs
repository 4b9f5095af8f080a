use super::constants::{UiKey, UiStyle};
use super::gallery_panel::GalleryPanel;
use super::popup_message::PopupMessage;
use super::traits::Screen;
use super::ui_callback::UiCallback;
use super::widgets::default_block;
use super::world_cup_panel::WorldCupPanel;
use crate::types::AppResult;
use crate::world_cup::WorldCup;
use itertools::Itertools;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Tabs};
use ratatui::Frame;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

const MAX_POPUP_MESSAGES: usize = 8;

#[derive(Debug, Clone, Copy, Default, Display, EnumIter, PartialEq)]
pub enum UiTab {
    #[default]
    Gallery,
    #[strum(to_string = "World cup")]
    WorldCup,
}

#[derive(Debug, Default)]
pub struct Ui {
    tab: UiTab,
    pub gallery_panel: GalleryPanel,
    pub world_cup_panel: WorldCupPanel,
    popup_messages: Vec<PopupMessage>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> UiTab {
        self.tab
    }

    pub fn popup_messages(&self) -> &[PopupMessage] {
        &self.popup_messages
    }

    pub fn push_popup(&mut self, popup_message: PopupMessage) {
        // Avoid pushing twice the same popup
        if let Some(last_popup) = self.popup_messages.last() {
            if last_popup.message() == popup_message.message() {
                return;
            }
        }

        self.popup_messages.push(popup_message);
        if self.popup_messages.len() > MAX_POPUP_MESSAGES {
            self.popup_messages.remove(0);
        }
    }

    pub fn close_popup(&mut self) {
        if !self.popup_messages.is_empty() {
            self.popup_messages.remove(0);
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = UiTab::iter().collect_vec();
        let index = tabs.iter().position(|&t| t == self.tab).unwrap_or_default();
        self.tab = tabs[(index + 1) % tabs.len()];
    }

    pub fn switch_to(&mut self, tab: UiTab) {
        self.tab = tab;
    }

    fn get_active_screen(&self) -> &dyn Screen {
        match self.tab {
            UiTab::Gallery => &self.gallery_panel,
            UiTab::WorldCup => &self.world_cup_panel,
        }
    }

    fn get_active_screen_mut(&mut self) -> &mut dyn Screen {
        match self.tab {
            UiTab::Gallery => &mut self.gallery_panel,
            UiTab::WorldCup => &mut self.world_cup_panel,
        }
    }

    pub fn handle_key_events(
        &mut self,
        key_event: crossterm::event::KeyEvent,
        world_cup: &WorldCup,
    ) -> Option<UiCallback> {
        if !self.popup_messages.is_empty() {
            return match key_event.code {
                UiKey::CLOSE_POPUP => Some(UiCallback::CloseUiPopup),
                _ => None,
            };
        }

        match key_event.code {
            UiKey::NEXT_TAB => Some(UiCallback::NextTab),
            _ => self
                .get_active_screen_mut()
                .handle_key_events(key_event, world_cup),
        }
    }

    pub fn update(&mut self, world_cup: &WorldCup) -> AppResult<()> {
        self.gallery_panel.update(world_cup)?;
        self.world_cup_panel.update(world_cup)?;
        Ok(())
    }

    /// Renders the user interface widgets.
    pub fn render(&mut self, frame: &mut Frame, world_cup: &WorldCup) {
        let split = Layout::vertical([
            Constraint::Length(3), // tabs
            Constraint::Min(6),    // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

        let titles = UiTab::iter().map(|tab| format!(" {tab} ")).collect_vec();
        let selected = UiTab::iter()
            .position(|t| t == self.tab)
            .unwrap_or_default();
        frame.render_widget(
            Tabs::new(titles)
                .block(default_block().title(" Artcup "))
                .highlight_style(UiStyle::HIGHLIGHT)
                .select(selected),
            split[0],
        );

        if let Err(err) = self.get_active_screen_mut().render(frame, world_cup, split[1]) {
            log::error!("Render error\n{err}");
        }

        self.render_footer(frame, split[2]);

        let area = frame.area();
        if let Some(popup) = self.popup_messages.first() {
            if let Err(err) = popup.render(frame, area) {
                log::error!("Popup render error\n{err}");
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let mut spans = vec![
            " Esc ".to_string(),
            " Quit ".to_string(),
            format!(" {} ", UiKey::NEXT_TAB),
            " Next tab ".to_string(),
        ];
        if self.popup_messages.is_empty() {
            spans.extend(self.get_active_screen().footer_spans());
        } else {
            spans.extend([
                format!(" {} ", UiKey::CLOSE_POPUP),
                " Close popup ".to_string(),
            ]);
        }

        let styles = [
            Style::default().bg(Color::Gray).fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ];

        frame.render_widget(
            Line::from(
                spans
                    .into_iter()
                    .enumerate()
                    .map(|(idx, content)| Span::styled(content, styles[idx % 2]))
                    .collect_vec(),
            )
            .left_aligned(),
            area,
        );
    }
}
