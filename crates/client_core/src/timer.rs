use std::{future::Future, time::Duration};

use tokio::task::JoinHandle;

/// A one-shot action that runs after a delay unless cancelled first.
///
/// Dropping the handle cancels the action, so an owner going away never
/// leaves a callback behind.
pub struct DelayedAction {
    handle: Option<JoinHandle<()>>,
}

impl DelayedAction {
    pub fn schedule<F>(delay: Duration, action: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use super::*;

    fn flagging_action(flag: &Arc<AtomicBool>) -> impl Future<Output = ()> + Send + 'static {
        let flag = flag.clone();
        async move {
            flag.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn runs_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let action = DelayedAction::schedule(Duration::from_secs(5), flagging_action(&fired));

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(action.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(!action.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_cancels_the_action() {
        let fired = Arc::new(AtomicBool::new(false));
        let action = DelayedAction::schedule(Duration::from_secs(5), flagging_action(&fired));
        drop(action);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let fired = Arc::new(AtomicBool::new(false));
        let mut action = DelayedAction::schedule(Duration::from_secs(1), flagging_action(&fired));
        action.cancel();
        action.cancel();
        assert!(!action.is_pending());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
