use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, navigation::HEADER_CLEARANCE, rsvp_controller_from_settings, DeliveryMode,
    Endpoint, HttpRsvpTransport, SubmitOutcome,
};
use shared::{
    domain::{Attendance, FieldUpdate, GuestCount, RsvpForm, SectionAnchor},
    protocol::RsvpPayload,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Send or inspect wedding RSVP responses")]
struct Cli {
    /// Overrides the configured relay URL.
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Treat non-2xx relay answers as failures.
    #[arg(long, global = true)]
    confirm_delivery: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        attending: Attendance,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        guests: Option<GuestCount>,
        #[arg(long)]
        dietary: Option<String>,
        /// Print the JSON body instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },
    CheckConfig,
    Sections,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = cli.endpoint {
        settings.rsvp_endpoint_url = Some(endpoint);
    }
    if cli.confirm_delivery {
        settings.delivery_mode = DeliveryMode::Confirmed;
    }

    match cli.command {
        Command::Submit {
            name,
            attending,
            email,
            guests,
            dietary,
            dry_run,
        } => {
            let mut updates = vec![
                FieldUpdate::Name(name),
                FieldUpdate::Email(email),
                FieldUpdate::Attending(attending),
            ];
            updates.extend(guests.map(FieldUpdate::GuestCount));
            updates.extend(dietary.map(FieldUpdate::DietaryNotes));

            if dry_run {
                let mut form = RsvpForm::default();
                updates.into_iter().for_each(|update| form.apply(update));
                println!(
                    "{}",
                    serde_json::to_string_pretty(&RsvpPayload::from(&form))?
                );
                return Ok(());
            }

            let controller = rsvp_controller_from_settings(&settings)
                .context("failed to build RSVP transport")?;
            for update in updates {
                controller.update_field(update).await;
            }

            match controller.submit().await {
                SubmitOutcome::Accepted => {
                    info!(mode = ?settings.delivery_mode, "rsvp accepted");
                    println!("Merci ! Votre réponse a bien été envoyée.");
                }
                SubmitOutcome::Ignored => bail!("a submission is already in progress"),
                SubmitOutcome::Rejected(err) => {
                    warn!(missing = ?err.missing, "rsvp rejected before sending");
                    bail!("{} ({err})", error_text(&controller.snapshot()))
                }
                SubmitOutcome::Failed(err) => {
                    warn!(kind = ?err.kind(), "rsvp not delivered");
                    bail!("{} ({err})", error_text(&controller.snapshot()))
                }
            }
            controller.shutdown().await;
        }
        Command::CheckConfig => {
            let transport =
                HttpRsvpTransport::new(settings.delivery_mode, settings.request_timeout)
                    .context("failed to build HTTP client")?;
            info!("http client ready");
            println!("delivery mode: {:?}", transport.mode());
            match settings.request_timeout {
                Some(timeout) => println!("request timeout: {}s", timeout.as_secs()),
                None => println!("request timeout: none"),
            }
            match Endpoint::parse(settings.rsvp_endpoint_url.as_deref()) {
                Ok(endpoint) => println!("endpoint: {endpoint}"),
                Err(err) => {
                    warn!("endpoint check failed: {err}");
                    bail!("endpoint not configured: {err}")
                }
            }
        }
        Command::Sections => {
            for anchor in SectionAnchor::ALL {
                println!("#{:<9} {}", anchor.id(), anchor.label());
            }
            println!("scroll clearance: {HEADER_CLEARANCE}px");
        }
    }

    Ok(())
}

fn error_text(snapshot: &client_core::RsvpSnapshot) -> String {
    snapshot
        .error
        .as_ref()
        .map(|error| error.message.clone())
        .unwrap_or_else(|| "submission failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_config_accepts_global_overrides() {
        let cli = Cli::try_parse_from([
            "rsvp_cli",
            "check-config",
            "--endpoint",
            "https://relay.example/exec",
            "--confirm-delivery",
        ])
        .expect("parse");
        assert!(matches!(cli.command, Command::CheckConfig));
        assert_eq!(cli.endpoint.as_deref(), Some("https://relay.example/exec"));
        assert!(cli.confirm_delivery);
    }

    #[test]
    fn submit_parses_wire_values() {
        let cli = Cli::try_parse_from([
            "rsvp_cli", "submit", "--name", "Jane Doe", "--attending", "no", "--guests", "3",
        ])
        .expect("parse");
        match cli.command {
            Command::Submit {
                attending, guests, ..
            } => {
                assert_eq!(attending, Attendance::No);
                assert_eq!(guests.map(GuestCount::get), Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
