//! The UI event channel.
//!
//! Everything that can change state arrives here as a discrete event:
//! key presses from the reader thread, ticks, and gateway completions from
//! the worker. Events are processed to completion, one at a time, on the
//! main loop. That serialization is what makes lock-free reducers safe.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::Product;
use crate::gateway::Echo;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The shared product store changed (collection or busy flag).
    StoreChanged,
    /// An id-uniqueness check came back from the gateway.
    IdCheckResolved { id: String, exists: bool },
    /// Create finished; `None` means the gateway fell back after a
    /// transport failure.
    CreateFinished { result: Option<Echo> },
    /// Update finished; same contract as create.
    UpdateFinished { result: Option<Echo> },
    /// Delete finished.
    DeleteFinished { product: Product, ok: bool },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input reader thread and return the channel pair.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Short poll timeout so ticks stay on schedule.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(_) => false,
                        };
                        if !forwarded {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone the sender for the worker side.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
