mod bracket_lines;
mod constants;
pub mod gallery_panel;
pub mod popup_message;
pub(crate) mod traits;
pub mod ui;
pub mod ui_callback;
pub mod utils;
pub mod widgets;
pub mod world_cup_panel;
