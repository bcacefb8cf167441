use eframe::egui;
use shared::theme::{Rgb, Theme, ThemeRole};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background_main: egui::Color32,
    pub background_light: egui::Color32,
    pub background_nav: egui::Color32,
    pub background_card: egui::Color32,
    pub primary_text: egui::Color32,
    pub primary_text_hover: egui::Color32,
    pub primary_bg: egui::Color32,
    pub primary_bg_hover: egui::Color32,
    pub icon: egui::Color32,
    pub text_main: egui::Color32,
    pub text_hero: egui::Color32,
    pub text_light: egui::Color32,
    pub footer_bg: egui::Color32,
    pub border: egui::Color32,
    pub error_bg: egui::Color32,
    pub error_text: egui::Color32,
}

fn color(theme: &Theme, role: ThemeRole) -> egui::Color32 {
    let Rgb(r, g, b) = theme.color(role);
    egui::Color32::from_rgb(r, g, b)
}

impl From<&Theme> for Palette {
    fn from(theme: &Theme) -> Self {
        Self {
            background_main: color(theme, ThemeRole::BackgroundMain),
            background_light: color(theme, ThemeRole::BackgroundLight),
            background_nav: color(theme, ThemeRole::BackgroundNav),
            background_card: color(theme, ThemeRole::BackgroundCard),
            primary_text: color(theme, ThemeRole::PrimaryText),
            primary_text_hover: color(theme, ThemeRole::PrimaryTextHover),
            primary_bg: color(theme, ThemeRole::PrimaryBg),
            primary_bg_hover: color(theme, ThemeRole::PrimaryBgHover),
            icon: color(theme, ThemeRole::PrimaryIcon),
            text_main: color(theme, ThemeRole::TextMain),
            text_hero: color(theme, ThemeRole::TextHero),
            text_light: color(theme, ThemeRole::TextLight),
            footer_bg: color(theme, ThemeRole::FooterBg),
            border: color(theme, ThemeRole::Border),
            error_bg: egui::Color32::from_rgb(254, 242, 242),
            error_text: egui::Color32::from_rgb(185, 28, 28),
        }
    }
}

pub fn apply(ctx: &egui::Context, palette: &Palette) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = palette.background_main;
    style.visuals.window_fill = palette.background_light;
    style.visuals.override_text_color = Some(palette.text_main);
    style.visuals.hyperlink_color = palette.primary_text_hover;

    style.visuals.widgets.inactive.weak_bg_fill = palette.primary_bg;
    style.visuals.widgets.inactive.bg_fill = palette.primary_bg;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    style.visuals.widgets.hovered.weak_bg_fill = palette.primary_bg_hover;
    style.visuals.widgets.hovered.bg_fill = palette.primary_bg_hover;
    style.visuals.widgets.active.weak_bg_fill = palette.primary_bg_hover;
    style.visuals.selection.bg_fill = palette.primary_bg_hover;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, palette.primary_text);
    style.visuals.extreme_bg_color = egui::Color32::WHITE;

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
