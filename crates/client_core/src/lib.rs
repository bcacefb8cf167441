//! Client-side controllers for the invitation page: header visibility driven by
//! scroll position, and the RSVP form's validate/submit/report cycle.

use std::sync::Arc;

pub mod config;
pub mod endpoint;
pub mod error;
pub mod header;
pub mod navigation;
pub mod rsvp;
pub mod timer;
pub mod transport;

pub use config::{load_settings, Settings};
pub use endpoint::{Endpoint, PLACEHOLDER_MARKER};
pub use error::{ConfigurationError, RsvpError, TransportError, ValidationError};
pub use header::{scroll_feed, HeaderVisibilityController, ScrollFeed, ScrollState};
pub use navigation::{scroll_target, NavigationMenu, ScrollRequest, SectionLayout};
pub use rsvp::{RsvpController, RsvpPhase, RsvpSnapshot, SubmitOutcome, SUCCESS_DISPLAY_WINDOW};
pub use transport::{DeliveryMode, HttpRsvpTransport, RsvpTransport};

/// Builds an RSVP controller wired to the HTTP relay described by `settings`.
pub fn rsvp_controller_from_settings(
    settings: &Settings,
) -> Result<Arc<RsvpController>, TransportError> {
    let transport = HttpRsvpTransport::new(settings.delivery_mode, settings.request_timeout)?;
    let endpoint = Endpoint::parse(settings.rsvp_endpoint_url.as_deref());
    Ok(RsvpController::new(endpoint, Arc::new(transport)))
}
