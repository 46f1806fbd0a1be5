use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use lifeboard_core::BoardSize;

/// One-line summary under the board.
pub struct StatusLine {
    pub size: Option<BoardSize>,
    pub is_playing: bool,
    /// Label of the play/pause control, as published by the controller.
    pub play_label: &'static str,
    pub generation: u64,
    pub population: usize,
}

impl StatusLine {
    pub fn text(&self) -> String {
        let size = match self.size {
            Some(s) => format!("{}x{}", s.width(), s.height()),
            None => "-".to_string(),
        };
        let state = if self.is_playing { "Playing" } else { "Paused" };
        format!(
            "{state} | size {size} | gen {} | alive {} | [space] {} [+/-] size [r] reset [q] quit",
            self.generation,
            self.population,
            self.play_label
        )
    }
}

impl Widget for StatusLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.is_playing {
            Color::Green
        } else {
            Color::Yellow
        };
        Paragraph::new(Line::from(Span::styled(self.text(), Style::default().fg(color))))
            .render(area, buf);
    }
}
