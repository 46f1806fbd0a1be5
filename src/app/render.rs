use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;

use crate::app::state::App;
use lifeboard_tui::{BoardWidget, StatusLine};

impl App {
    pub fn draw(&mut self, f: &mut ratatui::Frame) {
        let [board_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());
        self.last_board_rect = board_area;

        match &self.latest {
            Some(frame) => {
                f.render_widget(BoardWidget::new(&frame.grid, frame.generation), board_area)
            }
            None => f.render_widget(Paragraph::new("Waiting for board..."), board_area),
        }

        let population = self.latest.as_ref().map_or(0, |frame| frame.population());
        f.render_widget(
            StatusLine {
                size: self.status.size,
                is_playing: self.status.is_playing,
                play_label: self.status.play_label(),
                generation: self.status.generation,
                population,
            },
            status_area,
        );
    }
}
