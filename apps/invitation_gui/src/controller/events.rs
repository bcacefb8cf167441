//! Backend-to-UI events.

use client_core::{RsvpSnapshot, ScrollState};

pub enum UiEvent {
    BackendReady,
    BackendFailed(String),
    Rsvp(RsvpSnapshot),
    Header(ScrollState),
}
