//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut Option<String>,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::trace!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = Some("La page est occupée, veuillez réessayer.".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some(
                "Le service d'envoi des réponses est indisponible. Veuillez relancer l'application."
                    .to_string(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::FieldUpdate;

    use super::*;

    #[test]
    fn full_queue_sets_retry_status() {
        let (tx, _rx) = bounded(1);
        let mut status = None;
        dispatch_backend_command(&tx, BackendCommand::Submit, &mut status);
        assert!(status.is_none());

        dispatch_backend_command(
            &tx,
            BackendCommand::UpdateField(FieldUpdate::Name("Jane".into())),
            &mut status,
        );
        assert!(status.is_some_and(|message| message.contains("réessayer")));
    }

    #[test]
    fn disconnected_backend_sets_status() {
        let (tx, rx) = bounded(4);
        drop(rx);
        let mut status = None;
        dispatch_backend_command(&tx, BackendCommand::Scrolled { offset: 12 }, &mut status);
        assert!(status.is_some_and(|message| message.contains("indisponible")));
    }
}
