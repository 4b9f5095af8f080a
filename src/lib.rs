pub mod app;
pub mod args;
pub mod catalog;
pub mod crossterm_event_handler;
pub mod store;
pub mod tick_event_handler;
pub mod tournament;
pub mod tui;
pub mod types;
pub mod ui;
pub mod world_cup;

