use eframe::egui;
use game_core::summary::{Summary, EMPTY_MARKER};

use crate::{controller::events::UiAction, ui::theme};

pub fn show(ui: &mut egui::Ui, summary: &Summary, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(egui::RichText::new("🎉 게임 결과 🎉").size(30.0).strong().color(theme::ACCENT));
        ui.add_space(12.0);

        theme::card().show(ui, |ui| {
            ui.set_width(520.0);
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 140.0).max(200.0))
                .show(ui, |ui| {
                    for category in &summary.categories {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(category.outcome.label())
                                    .size(20.0)
                                    .strong()
                                    .color(theme::outcome_color(category.outcome)),
                            );
                            ui.label(
                                egui::RichText::new(format!("{}개", category.count()))
                                    .color(theme::MUTED),
                            );
                        });
                        if category.pairs.is_empty() {
                            ui.label(egui::RichText::new(EMPTY_MARKER).color(theme::MUTED));
                        } else {
                            for pair in &category.pairs {
                                ui.label(format!("{} → {}", pair.from, pair.to));
                            }
                        }
                        ui.separator();
                    }
                });

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("총 연결 수").strong());
                ui.label(
                    egui::RichText::new(summary.total_edges.to_string())
                        .strong()
                        .color(theme::ACCENT),
                );
            });
        });

        ui.add_space(16.0);
        if ui
            .add(theme::primary_button("새 게임 시작").min_size(egui::vec2(200.0, 48.0)))
            .clicked()
        {
            actions.push(UiAction::Restart);
        }
    });
}
