use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use lifeboard_core::Grid;

const ALIVE: &str = "█";
const DEAD: &str = "·";

/// Draws one grid snapshot inside a bordered block, one terminal cell per
/// board cell. Anything that does not fit is cut off.
pub struct BoardWidget<'a> {
    grid: &'a Grid,
    generation: u64,
}

impl<'a> BoardWidget<'a> {
    pub fn new(grid: &'a Grid, generation: u64) -> Self {
        Self { grid, generation }
    }

    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Maps a terminal position to the board cell under it.
    pub fn screen_to_cell(column: u16, row: u16, area: Rect, grid: &Grid) -> Option<u32> {
        let inner = Self::inner_area(area);
        if column < inner.left() || column >= inner.right() {
            return None;
        }
        if row < inner.top() || row >= inner.bottom() {
            return None;
        }
        grid.index_of(u32::from(column - inner.x), u32::from(row - inner.y))
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(
                "Board {}x{} (Generation: {})",
                self.grid.width(),
                self.grid.height(),
                self.generation
            ))
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::inner_area(area);
        let cols = u32::from(inner.width).min(self.grid.width());
        let rows = u32::from(inner.height).min(self.grid.height());

        for (y, row) in self.grid.rows().take(rows as usize).enumerate() {
            for (x, &value) in row.iter().take(cols as usize).enumerate() {
                let cell = &mut buf[(inner.x + x as u16, inner.y + y as u16)];
                if value == 1 {
                    cell.set_symbol(ALIVE);
                    cell.set_fg(Color::Rgb(100, 255, 100));
                } else {
                    cell.set_symbol(DEAD);
                    cell.set_fg(Color::Rgb(60, 60, 60));
                }
            }
        }
    }
}
