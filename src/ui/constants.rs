use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};

pub const LEFT_PANEL_WIDTH: u16 = 36;
pub const CARD_HEIGHT: u16 = 14;
pub const POPUP_WIDTH: u16 = 48;
pub const POPUP_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Copy)]
pub struct UiKey;

impl UiKey {
    pub const NEXT_TAB: KeyCode = KeyCode::Tab;
    pub const PICK_LEFT: KeyCode = KeyCode::Left;
    pub const PICK_LEFT_ALTERNATIVE: KeyCode = KeyCode::Char('1');
    pub const PICK_RIGHT: KeyCode = KeyCode::Right;
    pub const PICK_RIGHT_ALTERNATIVE: KeyCode = KeyCode::Char('2');
    pub const START_WORLD_CUP: KeyCode = KeyCode::Char('s');
    pub const RESTART_WORLD_CUP: KeyCode = KeyCode::Char('r');
    pub const CYCLE_VIEW: KeyCode = KeyCode::Char('v');
    pub const CYCLE_THEME: KeyCode = KeyCode::Char('f');
    pub const ASK_CURATOR: KeyCode = KeyCode::Char('a');
    pub const GO_TO_EXHIBITION: KeyCode = KeyCode::Char('g');
    pub const CLOSE_POPUP: KeyCode = KeyCode::Enter;
}

const DEFAULT_STYLE: Style = Style {
    fg: None,
    bg: None,
    underline_color: None,
    add_modifier: Modifier::empty(),
    sub_modifier: Modifier::empty(),
};

pub struct UiStyle;

impl UiStyle {
    pub const DEFAULT: Style = DEFAULT_STYLE;
    pub const SELECTED: Style = DEFAULT_STYLE.bg(Color::Rgb(70, 70, 86));
    pub const UNSELECTABLE: Style = DEFAULT_STYLE.fg(Color::DarkGray);
    pub const ERROR: Style = DEFAULT_STYLE.fg(Color::Red);
    pub const HEADER: Style = DEFAULT_STYLE.fg(Color::LightBlue);
    pub const HIGHLIGHT: Style = DEFAULT_STYLE.fg(Color::Rgb(118, 213, 192));
    pub const OK: Style = DEFAULT_STYLE.fg(Color::Green);
    pub const WARNING: Style = DEFAULT_STYLE.fg(Color::Yellow);
    pub const CHAMPION: Style = DEFAULT_STYLE
        .fg(Color::Rgb(255, 215, 0))
        .add_modifier(Modifier::BOLD);
}
