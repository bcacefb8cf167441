//! Runtime bridge between UI command queue and backend event intake.

use std::{thread, time::Duration};

use client_core::{
    rsvp_controller_from_settings, scroll_feed, HeaderVisibilityController, Settings,
};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tokio::{sync::watch, task::JoinHandle};

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

/// Pause before re-offering a value the UI queue had no room for.
const FULL_QUEUE_RETRY: Duration = Duration::from_millis(16);

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let controller = match rsvp_controller_from_settings(&settings) {
                Ok(controller) => controller,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                        "backend worker startup failure: {err}"
                    )));
                    tracing::error!("failed to build rsvp transport: {err}");
                    return;
                }
            };

            let header = HeaderVisibilityController::new();
            let (feed, source) = scroll_feed();
            header.start(source);

            let forwarders = [
                forward_changes(controller.subscribe(), ui_tx.clone(), UiEvent::Rsvp),
                forward_changes(header.watch(), ui_tx.clone(), UiEvent::Header),
            ];
            let _ = ui_tx.try_send(UiEvent::BackendReady);

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::UpdateField(update) => {
                        controller.update_field(update).await;
                    }
                    BackendCommand::Submit => {
                        let controller = controller.clone();
                        tokio::spawn(async move {
                            controller.submit().await;
                        });
                    }
                    BackendCommand::Scrolled { offset } => {
                        if !feed.push(offset) {
                            tracing::warn!("scroll subscription is gone; dropping offset {offset}");
                        }
                    }
                }
            }

            tracing::info!("ui command queue closed; shutting backend down");
            header.stop();
            controller.shutdown().await;
            for task in forwarders {
                task.abort();
            }
        });
    });
}

fn forward_changes<T, F>(
    mut rx: watch::Receiver<T>,
    ui_tx: Sender<UiEvent>,
    wrap: F,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> UiEvent + Send + 'static,
{
    tokio::spawn(async move {
        let mut value = rx.borrow_and_update().clone();
        loop {
            match ui_tx.try_send(wrap(value.clone())) {
                Ok(()) => {
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
                // Retry with whatever is newest once the UI has drained a little.
                Err(TrySendError::Full(_)) => tokio::time::sleep(FULL_QUEUE_RETRY).await,
                Err(TrySendError::Disconnected(_)) => break,
            }
            value = rx.borrow_and_update().clone();
        }
    })
}
