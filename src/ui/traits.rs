use super::ui_callback::UiCallback;
use crate::types::AppResult;
use crate::world_cup::WorldCup;
use core::fmt::Debug;
use ratatui::{prelude::Rect, Frame};

pub trait Screen {
    fn update(&mut self, _world_cup: &WorldCup) -> AppResult<()>;
    fn render(&mut self, _frame: &mut Frame, _world_cup: &WorldCup, _area: Rect) -> AppResult<()>;

    fn handle_key_events(
        &mut self,
        key_event: crossterm::event::KeyEvent,
        world_cup: &WorldCup,
    ) -> Option<UiCallback>;

    fn footer_spans(&self) -> Vec<String> {
        vec![]
    }
}

impl Debug for dyn Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Screen")
    }
}

pub trait SplitPanel {
    fn index(&self) -> Option<usize>;
    fn max_index(&self) -> usize;
    fn set_index(&mut self, index: usize);
    fn next_index(&mut self) {
        if let Some(current_index) = self.index() {
            self.set_index((current_index + 1) % self.max_index().max(1));
        }
    }
    fn previous_index(&mut self) {
        if let Some(current_index) = self.index() {
            let max_index = self.max_index().max(1);
            self.set_index((current_index + max_index - 1) % max_index);
        }
    }
}
