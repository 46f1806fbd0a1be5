use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use lifeboard_tui::BoardWidget;

use crate::app::state::App;
use crate::controller::Edit;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char(' ') => self.controller.toggle_play()?,
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(self.size.grown())?,
            KeyCode::Char('-') => self.resize(self.size.shrunk())?,
            KeyCode::Char('r') => self.reset_board()?,
            _ => {}
        }
        Ok(())
    }

    /// Left button down starts a drag, dragging paints, release ends it.
    /// Dragging off the board counts as the pointer leaving.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> anyhow::Result<()> {
        let hovered = self.cell_under(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = hovered {
                    self.dragging = true;
                    self.controller.begin_drag()?;
                    self.controller.hover(Edit::alive(index))?;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => match hovered {
                Some(index) => self.controller.hover(Edit::alive(index))?,
                None => self.finish_drag()?,
            },
            MouseEventKind::Up(MouseButton::Left) if self.dragging => self.finish_drag()?,
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn finish_drag(&mut self) -> anyhow::Result<()> {
        self.dragging = false;
        self.controller.end_drag()?;
        Ok(())
    }

    fn cell_under(&self, column: u16, row: u16) -> Option<u32> {
        let frame = self.latest.as_ref()?;
        BoardWidget::screen_to_cell(column, row, self.last_board_rect, &frame.grid)
    }
}
