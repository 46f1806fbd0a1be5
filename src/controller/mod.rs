//! Playback controller.
//!
//! One task owns the automaton for the current board size. Size changes,
//! drag edits, play/pause toggles and timer firings all arrive as messages
//! and are handled one at a time by [`Controller::run`], so an edit batch
//! and a tick never interleave on the grid.

pub mod coalescer;
pub mod signal;
pub mod timer;

pub use coalescer::EditCoalescer;
pub use signal::{Edit, Frame, FrameCause, Signal, Status};
pub use timer::{TickTimer, TimerToken};

use std::sync::Arc;
use std::time::Duration;

use lifeboard_core::config::PlaybackConfig;
use lifeboard_core::{Automaton, BoardSize, EngineError};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Engine failure that is not an expected stale-index race
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// The controller task has already stopped
    #[error("Controller is closed")]
    Closed,
}

pub type FrameReceiver = mpsc::UnboundedReceiver<Frame>;
pub type ControllerTask = JoinHandle<Result<(), ControllerError>>;

/// Cloneable input side of a running controller.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    tx: mpsc::UnboundedSender<Signal>,
    status: watch::Receiver<Status>,
}

impl ControllerHandle {
    pub fn send(&self, signal: Signal) -> Result<(), ControllerError> {
        self.tx.send(signal).map_err(|_| ControllerError::Closed)
    }

    /// Starts a fresh all-dead board.
    pub fn choose_size(&self, size: BoardSize) -> Result<(), ControllerError> {
        self.send(Signal::SizeChosen {
            size,
            initial: None,
        })
    }

    /// Starts a fresh board holding `cells`, validated here so the engine
    /// never sees a malformed pattern.
    pub fn choose_size_with(&self, size: BoardSize, cells: Vec<u8>) -> Result<(), ControllerError> {
        if cells.len() != size.cell_count() {
            return Err(EngineError::LengthMismatch {
                expected: size.cell_count(),
                actual: cells.len(),
            }
            .into());
        }
        if let Some(&bad) = cells.iter().find(|&&c| c > 1) {
            return Err(EngineError::InvalidCellValue(bad).into());
        }
        self.send(Signal::SizeChosen {
            size,
            initial: Some(cells),
        })
    }

    pub fn begin_drag(&self) -> Result<(), ControllerError> {
        self.send(Signal::DragBegin)
    }

    pub fn hover(&self, edit: Edit) -> Result<(), ControllerError> {
        self.send(Signal::CellHovered(edit))
    }

    pub fn end_drag(&self) -> Result<(), ControllerError> {
        self.send(Signal::DragEnd)
    }

    pub fn toggle_play(&self) -> Result<(), ControllerError> {
        self.send(Signal::TogglePlay)
    }

    /// Asks the controller to end its session. Pending edits are dropped.
    pub fn shutdown(&self) -> Result<(), ControllerError> {
        self.send(Signal::Shutdown)
    }

    pub fn status(&self) -> Status {
        *self.status.borrow()
    }
}

/// The engine for the current size, tagged with its epoch.
struct Session {
    automaton: Automaton,
    epoch: u64,
}

enum Flow {
    Continue,
    Stop,
}

pub struct Controller {
    signals: mpsc::UnboundedReceiver<Signal>,
    frames: mpsc::UnboundedSender<Frame>,
    status: watch::Sender<Status>,
    ticks_tx: mpsc::UnboundedSender<TimerToken>,
    ticks_rx: mpsc::UnboundedReceiver<TimerToken>,
    session: Option<Session>,
    timer: Option<TickTimer>,
    coalescer: EditCoalescer,
    interval: Duration,
    is_playing: bool,
    epochs: u64,
    timer_tokens: TimerToken,
}

impl Controller {
    pub fn new(playback: &PlaybackConfig) -> (Self, ControllerHandle, FrameReceiver) {
        let (tx, signals) = mpsc::unbounded_channel();
        let (frames, frame_rx) = mpsc::unbounded_channel();
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        let (status, status_rx) = watch::channel(Status {
            is_playing: playback.start_playing,
            ..Status::default()
        });

        let controller = Self {
            signals,
            frames,
            status,
            ticks_tx,
            ticks_rx,
            session: None,
            timer: None,
            coalescer: EditCoalescer::new(playback.coalesce_window()),
            interval: playback.tick_interval(),
            is_playing: playback.start_playing,
            epochs: 0,
            timer_tokens: 0,
        };
        let handle = ControllerHandle {
            tx,
            status: status_rx,
        };
        (controller, handle, frame_rx)
    }

    /// Builds a controller and runs it on the current tokio runtime.
    pub fn spawn(playback: &PlaybackConfig) -> (ControllerHandle, FrameReceiver, ControllerTask) {
        let (controller, handle, frames) = Self::new(playback);
        let task = tokio::spawn(controller.run());
        (handle, frames, task)
    }

    /// Processes messages until shutdown, until every handle is dropped, or
    /// until the frame consumer goes away. Timer and pending edits are
    /// released on every exit path.
    pub async fn run(mut self) -> Result<(), ControllerError> {
        let result = loop {
            let deadline = self.coalescer.deadline();
            let step = tokio::select! {
                biased;
                signal = self.signals.recv() => match signal {
                    Some(Signal::Shutdown) | None => Ok(Flow::Stop),
                    Some(signal) => self.handle_signal(signal),
                },
                Some(token) = self.ticks_rx.recv() => self.on_timer(token),
                _ = wait_until(deadline) => self.flush_due(),
            };
            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break Ok(()),
                Err(e) => {
                    tracing::error!("Controller stopped: {}", e);
                    break Err(e);
                }
            }
        };
        self.teardown();
        result
    }

    fn handle_signal(&mut self, signal: Signal) -> Result<Flow, ControllerError> {
        match signal {
            Signal::SizeChosen { size, initial } => self.replace_engine(size, initial),
            Signal::DragBegin => {
                self.coalescer.begin();
                Ok(Flow::Continue)
            }
            Signal::CellHovered(edit) => {
                if self.session.is_some() {
                    self.coalescer.push(edit, Instant::now());
                }
                Ok(Flow::Continue)
            }
            Signal::DragEnd => match self.coalescer.end() {
                Some(batch) => self.apply_batch(batch),
                None => Ok(Flow::Continue),
            },
            Signal::TogglePlay => {
                self.is_playing = !self.is_playing;
                tracing::info!(playing = self.is_playing, "Playback toggled");
                if self.is_playing {
                    self.restart_timer();
                } else {
                    self.timer = None;
                }
                self.publish_status();
                Ok(Flow::Continue)
            }
            Signal::Shutdown => Ok(Flow::Stop),
        }
    }

    fn replace_engine(
        &mut self,
        size: BoardSize,
        initial: Option<Vec<u8>>,
    ) -> Result<Flow, ControllerError> {
        self.timer = None;
        let dropped = self.coalescer.discard();
        if dropped > 0 {
            tracing::debug!(dropped, "Discarded pending edits for replaced board");
        }
        self.session = None;

        let automaton = Automaton::new(size.width(), size.height(), initial.as_deref())?;
        self.epochs += 1;
        self.session = Some(Session {
            automaton,
            epoch: self.epochs,
        });
        tracing::info!(
            width = size.width(),
            height = size.height(),
            epoch = self.epochs,
            "Board created"
        );

        if self.is_playing {
            self.restart_timer();
        }
        self.publish_status();
        Ok(self.emit(FrameCause::Resized))
    }

    fn apply_batch(&mut self, batch: Vec<Edit>) -> Result<Flow, ControllerError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(Flow::Continue);
        };

        let mut applied = 0usize;
        for edit in &batch {
            match session.automaton.set_cell(edit.index, edit.value) {
                Ok(()) => applied += 1,
                Err(e) if e.is_stale_index() => {
                    tracing::debug!(
                        index = edit.index,
                        "Dropped edit for a cell that no longer exists"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        tracing::debug!(applied, total = batch.len(), "Applied edit batch");

        if applied == 0 {
            return Ok(Flow::Continue);
        }
        Ok(self.emit(FrameCause::Edited))
    }

    fn on_timer(&mut self, token: TimerToken) -> Result<Flow, ControllerError> {
        let current = self.timer.as_ref().map(TickTimer::token);
        if current != Some(token) {
            tracing::trace!(token, "Ignored firing from a cancelled timer");
            return Ok(Flow::Continue);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(Flow::Continue);
        };
        if !session.automaton.is_alive() {
            return Ok(Flow::Continue);
        }

        session.automaton.tick();
        self.publish_status();
        Ok(self.emit(FrameCause::Ticked))
    }

    fn flush_due(&mut self) -> Result<Flow, ControllerError> {
        match self.coalescer.flush_due(Instant::now()) {
            Some(batch) => self.apply_batch(batch),
            None => Ok(Flow::Continue),
        }
    }

    /// Cancels any running timer before starting its replacement, so at most
    /// one is ever live.
    fn restart_timer(&mut self) {
        self.timer = None;
        if self.session.is_none() {
            return;
        }
        self.timer_tokens += 1;
        self.timer = Some(TickTimer::start(
            self.interval,
            self.timer_tokens,
            self.ticks_tx.clone(),
        ));
    }

    fn emit(&mut self, cause: FrameCause) -> Flow {
        let Some(session) = self.session.as_ref() else {
            return Flow::Continue;
        };
        let frame = Frame {
            grid: Arc::new(session.automaton.grid().clone()),
            generation: session.automaton.generation(),
            epoch: session.epoch,
            cause,
        };
        if self.frames.send(frame).is_err() {
            tracing::info!("Frame consumer disconnected");
            return Flow::Stop;
        }
        Flow::Continue
    }

    fn publish_status(&self) {
        let (size, generation, epoch) = match &self.session {
            Some(s) => (
                Some(s.automaton.grid().size()),
                s.automaton.generation(),
                s.epoch,
            ),
            None => (None, 0, 0),
        };
        self.status.send_replace(Status {
            size,
            is_playing: self.is_playing,
            generation,
            epoch,
        });
    }

    fn teardown(&mut self) {
        self.timer = None;
        let dropped = self.coalescer.discard();
        self.session = None;
        tracing::info!(dropped_edits = dropped, "Controller session ended");
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
