use super::constants::{UiKey, UiStyle};
use super::widgets::{default_block, popup_rect};
use crate::types::{AppResult, SystemTimeTick, Tick};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;
use strum_macros::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum PopupMessage {
    Error { message: String, tick: Tick },
    Ok { message: String, tick: Tick },
}

impl PopupMessage {
    pub fn message(&self) -> &str {
        match self {
            PopupMessage::Error { message, .. } | PopupMessage::Ok { message, .. } => message,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) -> AppResult<()> {
        let rect = popup_rect(area);

        let split = Layout::vertical([
            Constraint::Length(3), //header
            Constraint::Min(3),    //message
            Constraint::Length(1), //hint
        ])
        .split(rect.inner(Margin {
            vertical: 1,
            horizontal: 1,
        }));

        let (header, style) = match self {
            PopupMessage::Error { tick, .. } => {
                (format!("Error: {}", tick.formatted_as_time()), UiStyle::ERROR)
            }
            PopupMessage::Ok { tick, .. } => {
                (format!("Message: {}", tick.formatted_as_time()), UiStyle::OK)
            }
        };

        frame.render_widget(Clear, rect);
        frame.render_widget(default_block().border_style(style), rect);
        frame.render_widget(
            Paragraph::new(header)
                .block(default_block().border_style(style))
                .centered(),
            split[0],
        );
        frame.render_widget(
            Paragraph::new(self.message().to_string())
                .centered()
                .wrap(Wrap { trim: true }),
            split[1].inner(Margin {
                horizontal: 1,
                vertical: 0,
            }),
        );
        frame.render_widget(
            Paragraph::new(format!("Press {} to close", UiKey::CLOSE_POPUP))
                .style(UiStyle::UNSELECTABLE)
                .centered(),
            split[2],
        );

        Ok(())
    }
}
