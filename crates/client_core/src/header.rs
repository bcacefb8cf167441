//! Scroll-driven visibility of the fixed navigation header.

use std::sync::{Arc, Mutex};

use futures::{Stream, StreamExt};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

/// Offsets below this always reveal the header.
pub const TOP_REVEAL_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub last_known_offset: u32,
    pub header_visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_known_offset: 0,
            header_visible: true,
        }
    }
}

impl ScrollState {
    /// Folds one scroll notification into the state and returns the new visibility.
    pub fn observe(&mut self, offset: u32) -> bool {
        self.header_visible = if offset < TOP_REVEAL_THRESHOLD {
            true
        } else {
            offset <= self.last_known_offset
        };
        self.last_known_offset = offset;
        self.header_visible
    }
}

pub struct HeaderVisibilityController {
    state: Arc<watch::Sender<ScrollState>>,
    subscription: Mutex<Option<JoinHandle<()>>>,
}

impl HeaderVisibilityController {
    pub fn new() -> Arc<Self> {
        let (state, _) = watch::channel(ScrollState::default());
        Arc::new(Self {
            state: Arc::new(state),
            subscription: Mutex::new(None),
        })
    }

    pub fn observe(&self, offset: u32) -> bool {
        apply_offset(&self.state, offset)
    }

    pub fn state(&self) -> ScrollState {
        *self.state.borrow()
    }

    pub fn watch(&self) -> watch::Receiver<ScrollState> {
        self.state.subscribe()
    }

    /// Starts consuming `source`, replacing any running subscription.
    pub fn start<S>(&self, source: S)
    where
        S: Stream<Item = u32> + Send + 'static,
    {
        let state = self.state.clone();
        let task = tokio::spawn(async move {
            let mut source = Box::pin(source);
            while let Some(offset) = source.next().await {
                apply_offset(&state, offset);
            }
            debug!("scroll source ended");
        });

        let mut subscription = lock_subscription(&self.subscription);
        if let Some(previous) = subscription.replace(task) {
            previous.abort();
        }
    }

    pub fn stop(&self) {
        if let Some(task) = lock_subscription(&self.subscription).take() {
            task.abort();
            debug!("scroll subscription stopped");
        }
    }

    pub fn is_subscribed(&self) -> bool {
        lock_subscription(&self.subscription)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for HeaderVisibilityController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn apply_offset(state: &watch::Sender<ScrollState>, offset: u32) -> bool {
    let mut visible = true;
    state.send_if_modified(|current| {
        let before = *current;
        visible = current.observe(offset);
        *current != before
    });
    visible
}

fn lock_subscription(
    subscription: &Mutex<Option<JoinHandle<()>>>,
) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
    subscription
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sending half of an injectable scroll source.
#[derive(Clone)]
pub struct ScrollFeed {
    tx: mpsc::UnboundedSender<u32>,
}

impl ScrollFeed {
    /// Returns `false` once the consuming subscription is gone.
    pub fn push(&self, offset: u32) -> bool {
        self.tx.send(offset).is_ok()
    }
}

pub fn scroll_feed() -> (ScrollFeed, UnboundedReceiverStream<u32>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ScrollFeed { tx }, UnboundedReceiverStream::new(rx))
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
