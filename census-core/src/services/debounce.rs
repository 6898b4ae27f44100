//! Debounced input - delayed commit of a rapidly-changing value
//!
//! The caller pushes raw values as they are typed; the committed value is
//! observable through a watch channel and only changes after the input has
//! been quiet for the whole window. Every update supersedes the pending one,
//! so a commit fires exactly once per quiet period, carrying the last value.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default quiescence window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Commits the most recent value after a quiet period
pub struct Debouncer {
    input: mpsc::UnboundedSender<String>,
    committed: watch::Receiver<String>,
    handle: JoinHandle<()>,
}

impl Debouncer {
    /// Spawn the debounce loop
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(window: Duration) -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (commit_tx, commit_rx) = watch::channel(String::new());

        let handle = tokio::spawn(run_debounce_loop(input_rx, commit_tx, window));

        Self {
            input: input_tx,
            committed: commit_rx,
            handle,
        }
    }

    /// Push a raw value, restarting the quiescence window
    pub fn update(&self, value: impl Into<String>) {
        // The receiver lives as long as the loop task; a send can only
        // fail after drop, where nothing should commit anyway
        let _ = self.input.send(value.into());
    }

    /// Observe committed values
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.committed.clone()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        // Cancels any pending commit
        self.handle.abort();
    }
}

async fn run_debounce_loop(
    mut input: mpsc::UnboundedReceiver<String>,
    committed: watch::Sender<String>,
    window: Duration,
) {
    let mut pending: Option<String> = None;

    loop {
        // The sleep is re-armed on every pass, so each received value
        // restarts the window from scratch
        tokio::select! {
            value = input.recv() => {
                match value {
                    Some(v) => pending = Some(v),
                    None => break,
                }
            }
            _ = tokio::time::sleep(window), if pending.is_some() => {
                if let Some(v) = pending.take() {
                    let _ = committed.send(v);
                }
            }
        }
    }
}
