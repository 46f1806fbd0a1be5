use anyhow::Result;
use ratatui::layout::Rect;

use crate::controller::{Controller, ControllerHandle, ControllerTask, Frame, FrameReceiver, Status};
use lifeboard_core::config::LifeConfig;
use lifeboard_core::BoardSize;

pub struct App {
    pub running: bool,
    pub config: LifeConfig,
    pub size: BoardSize,
    pub controller: ControllerHandle,
    pub frames: FrameReceiver,
    pub task: Option<ControllerTask>,
    /// Most recent frame; replaced on every emission.
    pub latest: Option<Frame>,
    pub status: Status,
    pub dragging: bool,
    // Layout tracking
    pub last_board_rect: Rect,
}

impl App {
    /// Spawns the controller and asks it for the configured board.
    /// Must be called inside a tokio runtime.
    pub fn new(config: LifeConfig) -> Result<Self> {
        let size = BoardSize::new(config.board.width, config.board.height)?;
        let (controller, frames, task) = Controller::spawn(&config.playback);

        let mut app = Self {
            running: true,
            config,
            size,
            controller,
            frames,
            task: Some(task),
            latest: None,
            status: Status::default(),
            dragging: false,
            last_board_rect: Rect::default(),
        };
        app.reset_board()?;
        Ok(app)
    }

    /// Recreates the board at the current size with the configured pattern.
    /// A drag in progress ends here; its pending edits go with the old board.
    pub fn reset_board(&mut self) -> Result<()> {
        let board = &self.config.board;
        let cells = board
            .pattern
            .seed_cells(self.size.width(), self.size.height(), board.seed);
        self.controller.choose_size_with(self.size, cells)?;
        if self.dragging {
            self.finish_drag()?;
        }
        Ok(())
    }

    pub fn resize(&mut self, size: BoardSize) -> Result<()> {
        if size == self.size {
            return Ok(());
        }
        self.size = size;
        self.reset_board()
    }

    /// Pulls everything the controller has emitted since the last call.
    /// Only the newest frame is kept for drawing.
    pub fn drain_frames(&mut self) -> usize {
        let mut received = 0;
        while let Ok(frame) = self.frames.try_recv() {
            self.latest = Some(frame);
            received += 1;
        }
        self.status = self.controller.status();
        received
    }

    /// Ends the controller session and waits for it to finish.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.running = false;
        let _ = self.controller.shutdown();
        if let Some(task) = self.task.take() {
            task.await??;
        }
        Ok(())
    }
}
