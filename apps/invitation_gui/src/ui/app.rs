use std::time::Duration;

use client_core::{NavigationMenu, RsvpPhase, RsvpSnapshot, ScrollRequest, SectionLayout};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{Attendance, FieldUpdate, GuestCount, RsvpForm, SectionAnchor},
    site::{format_date_fr, SiteContent},
    theme::Theme,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

use super::sections::{self, card_frame, centered_column};
use super::theme::{self, Palette};

/// Below this width the nav collapses into a toggle.
const COMPACT_NAV_WIDTH: f32 = 700.0;

pub struct InvitationApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    content: SiteContent,
    palette: Palette,
    theme_applied: bool,
    backend_ready: bool,
    status: Option<String>,
    /// Local echo of the form; the backend snapshot is authoritative once it leaves editing.
    draft: RsvpForm,
    rsvp: Option<RsvpSnapshot>,
    header_visible: bool,
    layout: SectionLayout,
    menu: NavigationMenu,
    pending_scroll: Option<ScrollRequest>,
    last_reported_offset: Option<u32>,
}

impl InvitationApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        content: SiteContent,
        theme: &Theme,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            content,
            palette: Palette::from(theme),
            theme_applied: false,
            backend_ready: false,
            status: Some("Chargement...".to_string()),
            draft: RsvpForm::default(),
            rsvp: None,
            header_visible: true,
            layout: SectionLayout::default(),
            menu: NavigationMenu::default(),
            pending_scroll: None,
            last_reported_offset: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BackendReady => {
                    self.backend_ready = true;
                    self.status = None;
                }
                UiEvent::BackendFailed(message) => {
                    tracing::error!("{message}");
                    self.backend_ready = false;
                    self.status = Some(message);
                }
                UiEvent::Rsvp(snapshot) => self.accept_snapshot(snapshot),
                UiEvent::Header(state) => self.header_visible = state.header_visible,
            }
        }
    }

    fn accept_snapshot(&mut self, snapshot: RsvpSnapshot) {
        let was_editable = self
            .rsvp
            .as_ref()
            .is_some_and(|previous| previous.inputs_enabled());
        // While both sides are editable the draft is ahead of the backend; otherwise adopt its form.
        if !was_editable || !snapshot.inputs_enabled() {
            self.draft = snapshot.form.clone();
        }
        self.rsvp = Some(snapshot);
    }

    fn edit(&mut self, update: FieldUpdate) {
        self.draft.apply(update.clone());
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::UpdateField(update),
            &mut self.status,
        );
    }

    fn go_to(&mut self, anchor: SectionAnchor) {
        match self.menu.navigate(&self.layout, anchor) {
            Some(request) => self.pending_scroll = Some(request),
            None => tracing::debug!(section = anchor.id(), "section not laid out yet"),
        }
    }

    fn inputs_enabled(&self) -> bool {
        self.backend_ready
            && self
                .rsvp
                .as_ref()
                .is_some_and(|snapshot| snapshot.inputs_enabled())
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        if !self.header_visible {
            return;
        }
        let palette = self.palette;
        let mut clicked = None;
        egui::TopBottomPanel::top("site_header")
            .frame(
                egui::Frame::new()
                    .fill(palette.background_nav)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                let compact = ui.available_width() < COMPACT_NAV_WIDTH;
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(self.content.couple)
                            .size(24.0)
                            .italics()
                            .color(palette.primary_text),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if compact {
                            if ui.button("☰").clicked() {
                                self.menu.toggle();
                            }
                        } else {
                            for anchor in SectionAnchor::ALL.iter().rev() {
                                if nav_link(ui, anchor.label(), &palette).clicked() {
                                    clicked = Some(*anchor);
                                }
                            }
                        }
                    });
                });
                if compact && self.menu.is_open() {
                    ui.separator();
                    for anchor in SectionAnchor::ALL {
                        if nav_link(ui, anchor.label(), &palette).clicked() {
                            clicked = Some(anchor);
                        }
                    }
                }
            });
        if let Some(anchor) = clicked {
            self.go_to(anchor);
        }
    }

    fn show_status(&self, ctx: &egui::Context) {
        let Some(status) = &self.status else {
            return;
        };
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::new()
                    .fill(self.palette.background_light)
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(status).small());
            });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.background_main))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("invitation_page")
                    .auto_shrink([false, false]);
                if let Some(request) = self.pending_scroll.take() {
                    area = area.vertical_scroll_offset(request.offset as f32);
                }
                let output = area.show(ui, |ui| self.page_contents(ui));

                let offset = output.state.offset.y.max(0.0).round() as u32;
                if self.last_reported_offset != Some(offset) {
                    self.last_reported_offset = Some(offset);
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::Scrolled { offset },
                        &mut self.status,
                    );
                }
            });
    }

    fn page_contents(&mut self, ui: &mut egui::Ui) {
        let origin = ui.min_rect().top();
        let palette = self.palette;
        let mark = |layout: &mut SectionLayout, ui: &egui::Ui, anchor: SectionAnchor| {
            layout.record(anchor, (ui.cursor().top() - origin).max(0.0) as u32);
        };

        mark(&mut self.layout, ui, SectionAnchor::Home);
        if sections::hero(ui, &self.content, &palette) {
            self.go_to(SectionAnchor::Rsvp);
        }
        mark(&mut self.layout, ui, SectionAnchor::Story);
        sections::story(ui, &self.content, &palette);
        mark(&mut self.layout, ui, SectionAnchor::Details);
        sections::details(ui, &self.content, &palette);
        mark(&mut self.layout, ui, SectionAnchor::Rsvp);
        self.show_rsvp(ui);
        mark(&mut self.layout, ui, SectionAnchor::Registry);
        sections::registry(ui, &self.content, &palette);
        mark(&mut self.layout, ui, SectionAnchor::Travel);
        sections::travel(ui, &self.content, &palette);
        sections::footer(ui, &self.content, &palette);
    }

    fn show_rsvp(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        let enabled = self.inputs_enabled();
        let phase = self.rsvp.as_ref().map(|snapshot| snapshot.phase);
        let error = self.rsvp.as_ref().and_then(|snapshot| snapshot.error.clone());
        let mut updates = Vec::new();
        let mut submit = false;

        ui.add_space(56.0);
        centered_column(ui, |ui| {
            card_frame(palette.background_light).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                sections::heading(ui, "RSVP", &palette);

                if phase == Some(RsvpPhase::Succeeded) {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Merci !")
                                .size(30.0)
                                .italics()
                                .color(palette.primary_text),
                        );
                        ui.label("Votre réponse a bien été enregistrée.");
                    });
                    return;
                }

                ui.vertical_centered(|ui| {
                    ui.label(format!(
                        "Merci de répondre avant le {}",
                        format_date_fr(self.content.rsvp_deadline)
                    ));
                });
                ui.add_space(12.0);

                if let Some(error) = &error {
                    egui::Frame::new()
                        .fill(palette.error_bg)
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.label(egui::RichText::new(&error.message).color(palette.error_text));
                        });
                }
                ui.add_space(8.0);

                ui.add_enabled_ui(enabled, |ui| {
                    form_fields(ui, &self.draft, &mut updates);
                });

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if phase == Some(RsvpPhase::Submitting) {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Envoi en cours...");
                        });
                    } else {
                        let button = egui::Button::new(
                            egui::RichText::new("Envoyer ma réponse")
                                .size(18.0)
                                .color(palette.text_hero),
                        )
                        .fill(palette.primary_text)
                        .corner_radius(egui::CornerRadius::same(20));
                        submit = ui.add_enabled(enabled, button).clicked();
                    }
                });
            });
        });

        for update in updates {
            self.edit(update);
        }
        if submit {
            dispatch_backend_command(&self.cmd_tx, BackendCommand::Submit, &mut self.status);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            theme::apply(ctx, &self.palette);
            self.theme_applied = true;
        }
    }
}

fn form_fields(ui: &mut egui::Ui, draft: &RsvpForm, updates: &mut Vec<FieldUpdate>) {
    ui.label("Nom complet *");
    let mut name = draft.name.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut name).desired_width(f32::INFINITY))
        .changed()
    {
        updates.push(FieldUpdate::Name(name));
    }

    ui.label("Email");
    let mut email = draft.email.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut email).desired_width(f32::INFINITY))
        .changed()
    {
        updates.push(FieldUpdate::Email(email));
    }

    ui.label("Serez-vous présent(e) ? *");
    let mut attending = draft.attending;
    egui::ComboBox::from_id_salt("rsvp_attending")
        .width(ui.available_width())
        .selected_text(attendance_label(attending))
        .show_ui(ui, |ui| {
            for option in [Attendance::Yes, Attendance::No] {
                ui.selectable_value(&mut attending, option, attendance_label(option));
            }
        });
    if attending != draft.attending {
        updates.push(FieldUpdate::Attending(attending));
    }

    if !draft.shows_guest_details() {
        return;
    }

    ui.label("Nombre de personnes");
    let mut guests = draft.guest_count;
    egui::ComboBox::from_id_salt("rsvp_guests")
        .width(ui.available_width())
        .selected_text(guest_label(guests))
        .show_ui(ui, |ui| {
            for option in GuestCount::all() {
                ui.selectable_value(&mut guests, option, guest_label(option));
            }
        });
    if guests != draft.guest_count {
        updates.push(FieldUpdate::GuestCount(guests));
    }

    ui.label("Restrictions alimentaires");
    let mut notes = draft.dietary_notes.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut notes)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Végétarien, allergies, etc."),
        )
        .changed()
    {
        updates.push(FieldUpdate::DietaryNotes(notes));
    }
}

fn attendance_label(attending: Attendance) -> &'static str {
    match attending {
        Attendance::Unset => "Sélectionnez...",
        Attendance::Yes => "Oui, avec plaisir !",
        Attendance::No => "Non, malheureusement",
    }
}

fn guest_label(count: GuestCount) -> String {
    match count.get() {
        1 => "1 personne".to_string(),
        n => format!("{n} personnes"),
    }
}

fn nav_link(ui: &mut egui::Ui, label: &str, palette: &Palette) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).color(palette.primary_text))
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::NONE),
    )
}

impl eframe::App for InvitationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_status(ctx);
        self.show_page(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    fn app() -> (InvitationApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let app = InvitationApp::new(cmd_tx, ui_rx, SiteContent::default(), &Theme::default());
        (app, cmd_rx, ui_tx)
    }

    fn snapshot(phase: RsvpPhase, form: RsvpForm) -> RsvpSnapshot {
        RsvpSnapshot {
            phase,
            form,
            error: None,
        }
    }

    #[test]
    fn local_edits_survive_stale_editing_snapshots() {
        let (mut app, cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::Rsvp(snapshot(RsvpPhase::Editing, RsvpForm::default())))
            .unwrap();
        app.process_ui_events();

        app.edit(FieldUpdate::Name("Jane".into()));
        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(BackendCommand::UpdateField(FieldUpdate::Name(_)))
        ));

        ui_tx
            .send(UiEvent::Rsvp(snapshot(RsvpPhase::Editing, RsvpForm::default())))
            .unwrap();
        app.process_ui_events();
        assert_eq!(app.draft.name, "Jane");
    }

    #[test]
    fn success_resets_the_draft() {
        let (mut app, _cmd_rx, ui_tx) = app();
        app.draft.name = "Jane".into();
        ui_tx
            .send(UiEvent::Rsvp(snapshot(RsvpPhase::Succeeded, RsvpForm::default())))
            .unwrap();
        app.process_ui_events();
        assert!(app.draft.name.is_empty());
        assert!(!app.inputs_enabled());
    }

    #[test]
    fn header_events_toggle_visibility() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::Header(client_core::ScrollState {
                last_known_offset: 300,
                header_visible: false,
            }))
            .unwrap();
        app.process_ui_events();
        assert!(!app.header_visible);
    }

    #[test]
    fn navigation_waits_for_layout() {
        let (mut app, _cmd_rx, _ui_tx) = app();
        app.go_to(SectionAnchor::Travel);
        assert!(app.pending_scroll.is_none());

        app.layout.record(SectionAnchor::Travel, 2_000);
        app.go_to(SectionAnchor::Travel);
        assert_eq!(app.pending_scroll.map(|request| request.offset), Some(1_920));
    }
}
