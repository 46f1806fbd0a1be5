pub mod headless;
pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lifeboard_tui::{MouseCapture, Tui};

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let frame_rate = Duration::from_millis(16);

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        if tui.mouse() == MouseCapture::Off {
            tracing::warn!("Mouse capture is off, drag painting is unavailable");
        }
        if self.config.playback.start_playing {
            tracing::info!("Starting in play mode");
        }

        while self.running && !shutdown.load(Ordering::SeqCst) {
            self.drain_frames();

            tui.draw(|f| self.draw(f))?;

            // Poll in short slices so the controller task keeps the runtime
            if event::poll(Duration::from_millis(1))? {
                while event::poll(Duration::ZERO)? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key)?;
                        }
                        Event::Mouse(mouse) => {
                            self.handle_mouse(mouse)?;
                        }
                        _ => {}
                    }
                }
            }

            if let Some(task) = &self.task {
                if task.is_finished() {
                    tracing::warn!("Controller task ended unexpectedly");
                    break;
                }
            }

            tokio::time::sleep(frame_rate).await;
        }

        self.shutdown().await
    }
}
