use crate::types::AppResult;
use crate::ui::ui::Ui;
use crate::world_cup::WorldCup;
use crossterm::cursor::{Hide, Show};
use crossterm::event::KeyEvent;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;

#[derive(Clone, Copy, Debug)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

#[derive(Debug)]
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> AppResult<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        let mut tui = Self { terminal };
        tui.init()?;
        Ok(tui)
    }

    fn init(&mut self) -> AppResult<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            SetTitle("Artcup"),
            Clear(ClearType::All),
            Hide
        )?;

        // Leave the alternate screen before printing the panic message.
        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            if let Err(e) = Self::reset() {
                eprintln!("Failed to reset the terminal: {e}");
            }
            panic_hook(panic);
        }));

        Ok(())
    }

    fn reset() -> AppResult<()> {
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, Clear(ClearType::All), Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, ui: &mut Ui, world_cup: &WorldCup) -> AppResult<()> {
        self.terminal.draw(|frame| ui.render(frame, world_cup))?;
        Ok(())
    }

    pub fn resize(&mut self, size: (u16, u16)) -> AppResult<()> {
        self.terminal.resize(Rect::new(0, 0, size.0, size.1))?;
        Ok(())
    }

    pub fn exit(&mut self) -> AppResult<()> {
        crossterm::execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            Clear(ClearType::All),
            Show
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}
