use super::constants::{UiStyle, POPUP_HEIGHT, POPUP_WIDTH};
use crate::catalog::Exhibition;
use crate::types::{SystemTimeTick, Tick};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

pub fn default_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub fn popup_rect(area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(POPUP_WIDTH) / 2;
    let y = area.y + area.height.saturating_sub(POPUP_HEIGHT) / 2;
    Rect::new(
        x,
        y,
        POPUP_WIDTH.min(area.width),
        POPUP_HEIGHT.min(area.height),
    )
}

pub fn selectable_list<'a>(options: Vec<(String, Style)>) -> List<'a> {
    let items: Vec<ListItem> = options
        .into_iter()
        .map(|(text, style)| ListItem::new(Span::styled(format!(" {text}"), style)))
        .collect();

    List::new(items).highlight_style(UiStyle::SELECTED)
}

/// Lines describing an exhibition, as shown in the gallery and on the
/// world cup cards.
pub fn exhibition_lines(exhibition: &Exhibition) -> Vec<Line<'static>> {
    let today = Tick::now().as_local_date();
    let (status, status_style) = if exhibition.is_running_on(today) {
        ("Running now", UiStyle::OK)
    } else if today < exhibition.start {
        ("Coming soon", UiStyle::WARNING)
    } else {
        ("Closed", UiStyle::UNSELECTABLE)
    };

    let cost_style = if exhibition.is_free() {
        UiStyle::OK
    } else {
        UiStyle::DEFAULT
    };

    let mut lines = vec![
        Line::from(Span::styled(exhibition.short_title(), UiStyle::HEADER)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Location  "),
            Span::raw(exhibition.location.clone()),
        ]),
        Line::from(vec![
            Span::raw("Dates     "),
            Span::raw(exhibition.period()),
            Span::raw("  "),
            Span::styled(status, status_style),
        ]),
        Line::from(vec![
            Span::raw("Cost      "),
            Span::styled(exhibition.cost.clone(), cost_style),
        ]),
        Line::from(vec![
            Span::raw("Theme     "),
            Span::raw(exhibition.theme.clone().unwrap_or_else(|| "-".to_string())),
        ]),
    ];

    if !exhibition.link.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("Link      "),
            Span::styled(exhibition.link.clone(), UiStyle::UNSELECTABLE),
        ]));
    }

    lines.push(Line::from(""));
    lines.extend(
        exhibition
            .description
            .lines()
            .map(|l| Line::from(l.trim().to_string())),
    );

    lines
}
