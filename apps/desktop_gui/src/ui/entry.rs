use eframe::egui;

use crate::{controller::events::UiAction, ui::theme};

pub fn show(ui: &mut egui::Ui, title: &str, subtitle: &str, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.22);
        theme::card().show(ui, |ui| {
            ui.set_width(420.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("🎍").size(56.0));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(title).size(34.0).strong().color(theme::ACCENT));
                ui.label(egui::RichText::new(subtitle).size(20.0).color(theme::MUTED));
                ui.add_space(24.0);
                if ui
                    .add(theme::primary_button("시작하기").min_size(egui::vec2(200.0, 48.0)))
                    .clicked()
                {
                    actions.push(UiAction::Start);
                }
            });
        });
    });
}
