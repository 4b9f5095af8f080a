use super::bracket_lines::{self, COL_WIDTH};
use super::constants::{UiKey, UiStyle, CARD_HEIGHT};
use super::traits::Screen;
use super::ui_callback::UiCallback;
use super::widgets::{default_block, exhibition_lines};
use crate::catalog::Exhibition;
use crate::tournament::{BracketPhase, PendingTransition};
use crate::types::{AppResult, SystemTimeTick, Tick};
use crate::world_cup::WorldCup;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};
use ratatui::Frame;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, Default, Display, PartialEq)]
pub enum WorldCupView {
    #[default]
    Duel,
    Bracket,
}

impl WorldCupView {
    fn next(&self) -> Self {
        match self {
            Self::Duel => Self::Bracket,
            Self::Bracket => Self::Duel,
        }
    }
}

#[derive(Debug, Default)]
pub struct WorldCupPanel {
    view: WorldCupView,
    phase: BracketPhase,
}

impl WorldCupPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> WorldCupView {
        self.view
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.next();
    }

    fn render_empty(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) {
        let entrants = world_cup.entrants().len();
        let size = entrants.min(world_cup.controller.config().bracket_size);
        let (hint, style) = if size < 2 {
            (
                "Not enough exhibitions for this theme, change it in the gallery.".to_string(),
                UiStyle::WARNING,
            )
        } else {
            (
                format!("Press {} to start.", UiKey::START_WORLD_CUP),
                UiStyle::DEFAULT,
            )
        };

        let lines = vec![
            Line::from(Span::styled("Exhibition World Cup", UiStyle::HEADER)),
            Line::from(""),
            Line::from(format!(
                "{size} exhibitions will compete, theme: {}.",
                world_cup.theme().unwrap_or("All")
            )),
            Line::from(""),
            Line::from(Span::styled(hint, style)),
        ];

        let height = lines.len() as u16 + 2;
        let split = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

        frame.render_widget(default_block(), area);
        frame.render_widget(Paragraph::new(lines).centered(), split[1]);
    }

    fn render_progress(&self, frame: &mut Frame, world_cup: &WorldCup, header: String, area: Rect) {
        let split = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
        frame.render_widget(
            Paragraph::new(header).centered().block(default_block()),
            split[0],
        );

        let progress = world_cup.controller.progress();
        frame.render_widget(
            Gauge::default()
                .block(default_block().title("Progress"))
                .gauge_style(UiStyle::HIGHLIGHT)
                .ratio((progress / 100.0).clamp(0.0, 1.0))
                .label(format!("{progress:.0}%")),
            split[1],
        );
    }

    fn render_card(
        &self,
        frame: &mut Frame,
        exhibition: &Exhibition,
        title: String,
        border_style: Style,
        area: Rect,
    ) {
        frame.render_widget(
            default_block().title(title).border_style(border_style),
            area,
        );
        frame.render_widget(
            Paragraph::new(exhibition_lines(exhibition)).wrap(Wrap { trim: true }),
            area.inner(Margin::new(2, 1)),
        );
    }

    fn render_duel(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) {
        let Some(current) = world_cup.controller.current_match() else {
            return;
        };

        let split = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Fill(1),
        ])
        .split(area);

        self.render_card(
            frame,
            &current.slot_a,
            format!(" {} / {} ", UiKey::PICK_LEFT, UiKey::PICK_LEFT_ALTERNATIVE),
            UiStyle::DEFAULT,
            split[0],
        );

        let vs_split = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(split[1]);
        frame.render_widget(
            Paragraph::new(Span::styled("VS", UiStyle::HIGHLIGHT)).centered(),
            vs_split[1],
        );

        self.render_card(
            frame,
            &current.slot_b,
            format!(" {} / {} ", UiKey::PICK_RIGHT, UiKey::PICK_RIGHT_ALTERNATIVE),
            UiStyle::DEFAULT,
            split[2],
        );
    }

    fn render_bracket(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) {
        frame.render_widget(default_block().title("Bracket"), area);
        let inner = area.inner(Margin::new(1, 1));

        let offset = bracket_lines::current_match_line(&world_cup.controller)
            .map(|line| line.saturating_sub(inner.height as usize / 2))
            .unwrap_or_default() as u16;

        let columns = bracket_lines::get_bracket_lines(&world_cup.controller);
        let split = Layout::horizontal(
            [Constraint::Length(COL_WIDTH as u16 + 6)].repeat(columns.len()),
        )
        .split(inner);

        for (lines, column_area) in columns.into_iter().zip(split.iter()) {
            frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), *column_area);
        }
    }

    fn render_in_progress(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) {
        let controller = &world_cup.controller;
        let split = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area);

        let round = controller.current_round_number();
        let header = match controller.match_position_in_round() {
            Some((position, len)) => {
                format!("{} - Match {position} / {len}", controller.round_label(round))
            }
            None => controller.round_label(round),
        };
        self.render_progress(frame, world_cup, header, split[0]);

        match self.view {
            WorldCupView::Duel => self.render_duel(frame, world_cup, split[1]),
            WorldCupView::Bracket => self.render_bracket(frame, world_cup, split[1]),
        }
    }

    fn render_transition(
        &self,
        frame: &mut Frame,
        world_cup: &WorldCup,
        pending: &PendingTransition,
        area: Rect,
    ) {
        let split = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .split(area);

        let label = world_cup.controller.round_label(pending.target_round);
        self.render_progress(frame, world_cup, label.clone(), split[0]);

        let remaining = pending.fires_at.saturating_sub(Tick::now());
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(format!("{label} starting!"), UiStyle::HIGHLIGHT)),
                Line::from(Span::styled(remaining.formatted(), UiStyle::UNSELECTABLE)),
            ])
            .centered()
            .block(default_block()),
            split[1],
        );

        self.render_bracket(frame, world_cup, split[2]);
    }

    fn render_champion(&self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) {
        let Some(champion) = world_cup.controller.champion() else {
            return;
        };

        let split = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
        let left_split = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Fill(1),
        ])
        .split(split[0]);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Champion", UiStyle::CHAMPION)),
                Line::from(format!(
                    "after {} rounds",
                    world_cup.controller.total_rounds()
                )),
            ])
            .centered()
            .block(default_block().border_style(UiStyle::CHAMPION)),
            left_split[0],
        );

        self.render_card(
            frame,
            champion,
            format!(" {} ", champion.id),
            UiStyle::CHAMPION,
            left_split[1],
        );

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(champion.ask_prompt(), UiStyle::HIGHLIGHT)),
                Line::from(""),
                Line::from(format!(
                    "Press {} to ask the curator, {} to play again.",
                    UiKey::ASK_CURATOR,
                    UiKey::RESTART_WORLD_CUP
                )),
            ])
            .centered()
            .wrap(Wrap { trim: true })
            .block(default_block()),
            left_split[2],
        );

        self.render_bracket(frame, world_cup, split[1]);
    }
}

impl Screen for WorldCupPanel {
    fn update(&mut self, world_cup: &WorldCup) -> AppResult<()> {
        self.phase = world_cup.controller.phase();
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, world_cup: &WorldCup, area: Rect) -> AppResult<()> {
        match world_cup.controller.phase() {
            BracketPhase::Empty => self.render_empty(frame, world_cup, area),
            BracketPhase::InProgress => self.render_in_progress(frame, world_cup, area),
            BracketPhase::RoundTransition(pending) => {
                self.render_transition(frame, world_cup, &pending, area)
            }
            BracketPhase::Complete => self.render_champion(frame, world_cup, area),
        }
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key_event: crossterm::event::KeyEvent,
        world_cup: &WorldCup,
    ) -> Option<UiCallback> {
        let controller = &world_cup.controller;
        match key_event.code {
            UiKey::PICK_LEFT | UiKey::PICK_LEFT_ALTERNATIVE => {
                let exhibition_id = controller.current_match()?.slot_a.id;
                Some(UiCallback::SelectWinner { exhibition_id })
            }
            UiKey::PICK_RIGHT | UiKey::PICK_RIGHT_ALTERNATIVE => {
                let exhibition_id = controller.current_match()?.slot_b.id;
                Some(UiCallback::SelectWinner { exhibition_id })
            }
            UiKey::CYCLE_VIEW if !controller.is_empty() => Some(UiCallback::ToggleBracketView),
            UiKey::START_WORLD_CUP if controller.is_empty() => Some(UiCallback::StartWorldCup),
            UiKey::RESTART_WORLD_CUP if !controller.is_empty() => {
                Some(UiCallback::RestartWorldCup)
            }
            UiKey::ASK_CURATOR => {
                let exhibition_id = controller.champion()?.id;
                Some(UiCallback::AskCurator { exhibition_id })
            }
            UiKey::GO_TO_EXHIBITION => {
                let exhibition_id = controller.champion()?.id;
                Some(UiCallback::GoToExhibition { exhibition_id })
            }
            _ => None,
        }
    }

    fn footer_spans(&self) -> Vec<String> {
        match self.phase {
            BracketPhase::Empty => vec![
                format!(" {} ", UiKey::START_WORLD_CUP),
                " Start world cup ".to_string(),
            ],
            BracketPhase::InProgress | BracketPhase::RoundTransition(_) => vec![
                format!(" {}/{} ", UiKey::PICK_LEFT, UiKey::PICK_LEFT_ALTERNATIVE),
                " Pick left ".to_string(),
                format!(" {}/{} ", UiKey::PICK_RIGHT, UiKey::PICK_RIGHT_ALTERNATIVE),
                " Pick right ".to_string(),
                format!(" {} ", UiKey::CYCLE_VIEW),
                format!(" {} view ", self.view.next()),
                format!(" {} ", UiKey::RESTART_WORLD_CUP),
                " Restart ".to_string(),
            ],
            BracketPhase::Complete => vec![
                format!(" {} ", UiKey::RESTART_WORLD_CUP),
                " Play again ".to_string(),
                format!(" {} ", UiKey::ASK_CURATOR),
                " Ask curator ".to_string(),
                format!(" {} ", UiKey::GO_TO_EXHIBITION),
                " Go to gallery ".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{WorldCupPanel, WorldCupView};
    use crate::catalog::Catalog;
    use crate::tournament::TournamentConfig;
    use crate::types::AppResult;
    use crate::ui::traits::Screen;
    use crate::ui::ui_callback::UiCallback;
    use crate::world_cup::WorldCup;
    use crossterm::event::{KeyCode, KeyEvent};

    fn press(panel: &mut WorldCupPanel, world_cup: &WorldCup, code: KeyCode) -> Option<UiCallback> {
        panel.handle_key_events(KeyEvent::from(code), world_cup)
    }

    #[test]
    fn test_key_bindings() -> AppResult<()> {
        let catalog = Catalog::embedded()?;
        let pool = catalog.exhibitions().to_vec();
        let mut world_cup = WorldCup::new(catalog, pool, TournamentConfig::default());
        let mut panel = WorldCupPanel::new();

        assert_eq!(press(&mut panel, &world_cup, KeyCode::Left), None);
        assert_eq!(
            press(&mut panel, &world_cup, KeyCode::Char('s')),
            Some(UiCallback::StartWorldCup)
        );
        assert_eq!(press(&mut panel, &world_cup, KeyCode::Char('r')), None);

        world_cup.start(0)?;
        let current = world_cup
            .controller
            .current_match()
            .cloned()
            .expect("A match should be played");
        for code in [KeyCode::Left, KeyCode::Char('1')] {
            assert_eq!(
                press(&mut panel, &world_cup, code),
                Some(UiCallback::SelectWinner {
                    exhibition_id: current.slot_a.id
                })
            );
        }
        for code in [KeyCode::Right, KeyCode::Char('2')] {
            assert_eq!(
                press(&mut panel, &world_cup, code),
                Some(UiCallback::SelectWinner {
                    exhibition_id: current.slot_b.id
                })
            );
        }
        assert_eq!(press(&mut panel, &world_cup, KeyCode::Char('a')), None);
        assert_eq!(
            press(&mut panel, &world_cup, KeyCode::Char('r')),
            Some(UiCallback::RestartWorldCup)
        );

        assert_eq!(panel.view(), WorldCupView::Duel);
        panel.toggle_view();
        assert_eq!(panel.view(), WorldCupView::Bracket);
        Ok(())
    }
}
