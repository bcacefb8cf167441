use shared::{
    domain::RequiredField,
    error::{ErrorKind, UserFacingError},
};
use thiserror::Error;

const VALIDATION_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires";
const TRANSPORT_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi de votre réponse. Veuillez réessayer.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {missing:?}")]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("submission endpoint is not set")]
    Missing,
    #[error("submission endpoint still contains the placeholder marker")]
    Placeholder,
    #[error("submission endpoint '{url}' is not a valid URL: {reason}")]
    Invalid { url: String, reason: String },
    #[error("submission endpoint scheme '{scheme}' is not http or https")]
    UnsupportedScheme { scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to connect to submission endpoint: {0}")]
    Connect(String),
    #[error("submission request timed out")]
    Timeout,
    #[error("submission endpoint rejected the response with status {status}")]
    Rejected { status: u16 },
    #[error("submission request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Rejected {
                status: status.as_u16(),
            }
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsvpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl RsvpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RsvpError::Validation(_) => ErrorKind::Validation,
            RsvpError::Configuration(_) => ErrorKind::Configuration,
            RsvpError::Transport(_) => ErrorKind::Transport,
        }
    }

    pub fn user_facing(&self) -> UserFacingError {
        let message = match self {
            RsvpError::Validation(_) => VALIDATION_MESSAGE.to_string(),
            RsvpError::Configuration(err) => format!(
                "L'adresse d'envoi des réponses n'est pas configurée ({err}). Veuillez définir la variable RSVP_ENDPOINT_URL."
            ),
            RsvpError::Transport(TransportError::Timeout) => {
                "Le serveur met trop de temps à répondre. Veuillez réessayer.".to_string()
            }
            RsvpError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
        };
        UserFacingError::new(self.kind(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_points_at_the_setting() {
        let err = RsvpError::from(ConfigurationError::Placeholder).user_facing();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("RSVP_ENDPOINT_URL"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn transport_failures_are_retry_eligible() {
        let err = RsvpError::from(TransportError::Connect("refused".into())).user_facing();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert!(err.is_retryable());
    }
}
