//! Static page sections. The RSVP form lives in `app.rs` since it owns state.

use eframe::egui;
use shared::site::{format_date_fr, EventCard, SiteContent};

use super::theme::Palette;

pub const CONTENT_WIDTH: f32 = 760.0;
const SECTION_GAP: f32 = 56.0;

pub fn card_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(24))
}

pub fn heading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(34.0)
                .italics()
                .color(palette.primary_text),
        );
    });
    ui.add_space(16.0);
}

fn body(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(egui::RichText::new(text).size(17.0).color(palette.text_main));
}

/// Returns `true` when the call-to-action was clicked.
pub fn hero(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) -> bool {
    let mut respond = false;
    egui::Frame::new()
        .fill(palette.primary_text)
        .inner_margin(egui::Margin::symmetric(16, 96))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("♥").size(40.0).color(palette.text_hero));
                ui.label(
                    egui::RichText::new(content.couple)
                        .size(64.0)
                        .italics()
                        .color(palette.text_hero),
                );
                ui.label(
                    egui::RichText::new(content.tagline)
                        .size(26.0)
                        .color(palette.text_hero),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(format_date_fr(content.wedding_date))
                        .size(22.0)
                        .color(palette.text_hero),
                );
                ui.add_space(24.0);
                let cta = egui::Button::new(
                    egui::RichText::new("Répondre")
                        .size(22.0)
                        .color(palette.primary_text),
                )
                .fill(palette.primary_bg)
                .corner_radius(egui::CornerRadius::same(24));
                respond = ui.add(cta).clicked();
            });
        });
    respond
}

pub fn story(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) {
    ui.add_space(SECTION_GAP);
    centered_column(ui, |ui| {
        card_frame(egui::Color32::WHITE).show(ui, |ui| {
            heading(ui, "Notre Histoire", palette);
            for paragraph in content.story {
                body(ui, paragraph, palette);
                ui.add_space(8.0);
            }
        });
    });
}

pub fn details(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) {
    ui.add_space(SECTION_GAP);
    centered_column(ui, |ui| {
        heading(ui, "Programme", palette);
        ui.columns(content.events.len().max(1), |columns| {
            for (column, event) in columns.iter_mut().zip(&content.events) {
                event_card(column, event, palette);
            }
        });
    });
}

fn event_card(ui: &mut egui::Ui, event: &EventCard, palette: &Palette) {
    card_frame(palette.background_card).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            egui::RichText::new(event.title)
                .size(28.0)
                .italics()
                .color(palette.primary_text),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🕒").color(palette.icon));
            ui.label(egui::RichText::new(event.time).strong());
        });
        body(ui, event.caption, palette);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("📍").color(palette.icon));
            ui.label(egui::RichText::new(event.venue).strong());
        });
        for line in event.address {
            body(ui, line, palette);
        }
    });
}

pub fn registry(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) {
    ui.add_space(SECTION_GAP);
    egui::Frame::new()
        .fill(palette.background_light)
        .inner_margin(egui::Margin::symmetric(16, 40))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            centered_column(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("🎁").size(36.0).color(palette.icon));
                });
                heading(ui, "Liste de Mariage", palette);
                body(ui, content.registry_blurb, palette);
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.hyperlink_to(
                        egui::RichText::new("Notre liste de mariage")
                            .size(20.0)
                            .color(palette.primary_text),
                        content.registry_url,
                    );
                });
            });
        });
}

pub fn travel(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) {
    ui.add_space(SECTION_GAP);
    centered_column(ui, |ui| {
        heading(ui, "Hébergement & Transport", palette);
        card_frame(egui::Color32::WHITE).show(ui, |ui| {
            subheading(ui, "Où dormir ?", palette);
            body(ui, content.lodging, palette);
            ui.add_space(16.0);
            subheading(ui, "Comment s'y rendre ?", palette);
            for paragraph in content.getting_there {
                body(ui, paragraph, palette);
            }
        });
    });
    ui.add_space(SECTION_GAP);
}

pub fn footer(ui: &mut egui::Ui, content: &SiteContent, palette: &Palette) {
    egui::Frame::new()
        .fill(palette.footer_bg)
        .inner_margin(egui::Margin::symmetric(16, 40))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("♥").size(26.0).color(egui::Color32::WHITE));
                ui.label(
                    egui::RichText::new(content.couple)
                        .size(26.0)
                        .italics()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new(format_date_fr(content.wedding_date))
                        .size(18.0)
                        .color(palette.text_light),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(content.closing_line)
                        .size(18.0)
                        .color(palette.text_light),
                );
            });
        });
}

fn subheading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(
        egui::RichText::new(text)
            .size(24.0)
            .italics()
            .color(palette.primary_text),
    );
    ui.add_space(6.0);
}

/// Runs `add_contents` in a column capped at [`CONTENT_WIDTH`] and centred horizontally.
pub fn centered_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    let width = ui.available_width().min(CONTENT_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui);
        });
    });
}
