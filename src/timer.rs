//! Rest countdown between sets.
//!
//! A [`RestTimer`] counts down from `D` seconds, emitting one tick per second
//! and a final [`Tick::Finished`]. It can be cancelled early through its
//! [`CancellationToken`], which ends the countdown with [`Tick::Cancelled`].
//! Dropping the receiving side also stops the countdown task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

pub const MIN_REST_SECONDS: u32 = 15;
pub const MAX_REST_SECONDS: u32 = 180;
pub const DEFAULT_REST_SECONDS: u32 = 60;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds left, counting down to 1.
    Remaining(u32),
    Finished,
    Cancelled,
}

/// Clamp a requested rest duration into the range the rest slider offers.
pub fn clamp_rest_seconds(seconds: u32) -> u32 {
    seconds.clamp(MIN_REST_SECONDS, MAX_REST_SECONDS)
}

pub struct RestTimer {
    ticks: mpsc::Receiver<Tick>,
    cancel: CancellationToken,
}

impl RestTimer {
    /// Spawn a countdown of `seconds` on the current tokio runtime.
    pub fn start(seconds: u32) -> Self {
        let (tx, rx) = mpsc::channel(8);
        let cancel = CancellationToken::new();
        tokio::spawn(run(seconds, tx, cancel.clone()));

        Self { ticks: rx, cancel }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Next tick, or `None` once the countdown has ended.
    pub async fn next(&mut self) -> Option<Tick> {
        self.ticks.recv().await
    }

    pub fn into_stream(self) -> ReceiverStream<Tick> {
        ReceiverStream::new(self.ticks)
    }
}

async fn run(seconds: u32, tx: mpsc::Sender<Tick>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(TICK);

    // The first interval tick fires immediately, so `seconds` is shown at once
    // and each later value one second after the previous one.
    for remaining in (1..=seconds).rev() {
        if !wait_for_tick(&mut interval, &cancel).await {
            let _ = tx.send(Tick::Cancelled).await;
            return;
        }
        if tx.send(Tick::Remaining(remaining)).await.is_err() {
            return;
        }
    }

    let last = if wait_for_tick(&mut interval, &cancel).await {
        Tick::Finished
    } else {
        Tick::Cancelled
    };
    let _ = tx.send(last).await;
}

/// Wait for the next interval tick. Returns `false` if cancelled first.
async fn wait_for_tick(interval: &mut tokio::time::Interval, cancel: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        _ = interval.tick() => true,
    }
}
