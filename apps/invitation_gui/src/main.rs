mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{load_settings, DeliveryMode};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::{site::SiteContent, theme::Theme};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Parser, Debug)]
#[command(about = "Desktop rendition of the wedding invitation page")]
struct Args {
    /// Overrides the configured relay URL.
    #[arg(long)]
    endpoint: Option<String>,
    /// Treat non-2xx relay answers as failures.
    #[arg(long)]
    confirm_delivery: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = args.endpoint {
        settings.rsvp_endpoint_url = Some(endpoint);
    }
    if args.confirm_delivery {
        settings.delivery_mode = DeliveryMode::Confirmed;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let content = SiteContent::default();
    let title = content.couple;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::InvitationApp::new(
                cmd_tx,
                ui_rx,
                content,
                &Theme::default(),
            )))
        }),
    )
    .map_err(|err| anyhow!("invitation window failed: {err}"))
}
