//! UI layer: app shell, page sections and palette.

pub mod app;
pub mod sections;
pub mod theme;

pub use app::InvitationApp;
