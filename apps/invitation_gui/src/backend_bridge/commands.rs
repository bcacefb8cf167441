//! Backend commands queued from UI to backend worker.

use shared::domain::FieldUpdate;

pub enum BackendCommand {
    UpdateField(FieldUpdate),
    Submit,
    Scrolled { offset: u32 },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::UpdateField(_) => "update_field",
            BackendCommand::Submit => "submit",
            BackendCommand::Scrolled { .. } => "scrolled",
        }
    }
}
