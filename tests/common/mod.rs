use std::time::Duration;

use lifeboard_core::config::PlaybackConfig;
use lifeboard_core::{BoardSize, Grid};
use lifeboard_lib::controller::{
    Controller, ControllerHandle, ControllerTask, Frame, FrameCause, FrameReceiver,
};

/// A running controller plus its frame stream, for driving from tests.
#[allow(dead_code)]
pub struct Harness {
    pub handle: ControllerHandle,
    pub frames: FrameReceiver,
    pub task: ControllerTask,
}

#[allow(dead_code)]
impl Harness {
    pub fn start(tick_ms: u64, window_ms: u64) -> Self {
        let playback = PlaybackConfig {
            tick_interval_ms: tick_ms,
            coalesce_window_ms: window_ms,
            start_playing: false,
        };
        let (handle, frames, task) = Controller::spawn(&playback);
        Self {
            handle,
            frames,
            task,
        }
    }

    /// Chooses a board with the given live cells and returns its first frame.
    pub async fn board(&mut self, width: u32, height: u32, alive: &[u32]) -> Frame {
        let size = BoardSize::new(width, height).expect("valid test board");
        self.handle
            .choose_size_with(size, cells(width, height, alive))
            .expect("controller running");
        let frame = self.next_frame().await;
        assert_eq!(frame.cause, FrameCause::Resized);
        frame
    }

    pub async fn next_frame(&mut self) -> Frame {
        tokio::time::timeout(Duration::from_secs(60), self.frames.recv())
            .await
            .expect("timed out waiting for a frame")
            .expect("controller closed the frame stream")
    }

    pub async fn next_tick(&mut self) -> Frame {
        loop {
            let frame = self.next_frame().await;
            if frame.cause == FrameCause::Ticked {
                return frame;
            }
        }
    }

    /// Asserts nothing is emitted for `wait`.
    pub async fn assert_quiet(&mut self, wait: Duration) {
        if let Ok(frame) = tokio::time::timeout(wait, self.frames.recv()).await {
            panic!("expected no frame, got {:?}", frame.map(|f| f.cause));
        }
    }

    pub async fn paint(&mut self, edits: &[(u32, u8)]) {
        use lifeboard_lib::controller::Edit;
        self.handle.begin_drag().unwrap();
        for &(index, value) in edits {
            self.handle.hover(Edit::new(index, value)).unwrap();
        }
        self.handle.end_drag().unwrap();
    }
}

#[allow(dead_code)]
pub fn cells(width: u32, height: u32, alive: &[u32]) -> Vec<u8> {
    let mut cells = vec![0u8; (width * height) as usize];
    for &i in alive {
        cells[i as usize] = 1;
    }
    cells
}

#[allow(dead_code)]
pub fn alive_indices(grid: &Grid) -> Vec<u32> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 1)
        .map(|(i, _)| i as u32)
        .collect()
}
