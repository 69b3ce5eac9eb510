//! Pink festival palette and style setup.

use eframe::egui;
use game_core::Outcome;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(255, 240, 245);
pub const CARD: egui::Color32 = egui::Color32::from_rgb(255, 250, 252);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 107, 157);
pub const ACCENT_SOFT: egui::Color32 = egui::Color32::from_rgb(255, 166, 193);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(74, 44, 58);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(150, 120, 135);

pub const NODE_IDLE: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
pub const NODE_SELECTABLE: egui::Color32 = egui::Color32::from_rgb(255, 214, 228);
pub const NODE_CURRENT: egui::Color32 = ACCENT;
pub const NODE_USED: egui::Color32 = egui::Color32::from_rgb(224, 195, 252);
pub const ARROW: egui::Color32 = egui::Color32::from_rgb(214, 84, 132);

pub const CARD_ROUNDING: u8 = 16;

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(TEXT);
    visuals.window_fill = CARD;
    visuals.panel_fill = BACKGROUND;
    visuals.extreme_bg_color = egui::Color32::WHITE;
    visuals.faint_bg_color = egui::Color32::from_rgb(254, 214, 227);
    visuals.selection.bg_fill = ACCENT_SOFT;
    visuals.hyperlink_color = ACCENT;
    visuals.window_corner_radius = egui::CornerRadius::same(CARD_ROUNDING);
    visuals.widgets.inactive.bg_fill = NODE_SELECTABLE;
    visuals.widgets.inactive.weak_bg_fill = NODE_SELECTABLE;
    visuals.widgets.hovered.bg_fill = ACCENT_SOFT;
    visuals.widgets.hovered.weak_bg_fill = ACCENT_SOFT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.weak_bg_fill = ACCENT;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, ACCENT_SOFT);
    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.interact_size = egui::vec2(40.0, 32.0);
    for font in style.text_styles.values_mut() {
        font.size *= 1.15;
    }
    ctx.set_style(style);
}

/// Card frame shared by the entry, roster and summary screens.
pub fn card() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD)
        .corner_radius(egui::CornerRadius::same(CARD_ROUNDING))
        .stroke(egui::Stroke::new(1.0, ACCENT_SOFT))
        .inner_margin(egui::Margin::symmetric(28, 24))
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .color(egui::Color32::WHITE)
            .strong(),
    )
    .fill(ACCENT)
    .corner_radius(egui::CornerRadius::same(10))
}

/// Accent used for an outcome's label on the board and in the summary.
pub fn outcome_color(outcome: Outcome) -> egui::Color32 {
    match outcome {
        Outcome::BackDo => egui::Color32::from_rgb(120, 120, 140),
        Outcome::Do => egui::Color32::from_rgb(232, 93, 117),
        Outcome::Gae => egui::Color32::from_rgb(240, 140, 80),
        Outcome::Geol => egui::Color32::from_rgb(86, 170, 120),
        Outcome::Yut => egui::Color32::from_rgb(80, 140, 220),
        Outcome::Mo => egui::Color32::from_rgb(150, 90, 210),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_outcome_gets_a_distinct_color() {
        let colors: Vec<_> = Outcome::ALL.iter().map(|o| outcome_color(*o)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
