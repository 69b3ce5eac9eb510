//! Two-step roster form: participant count, then one name per seat.

use eframe::egui;
use game_core::roster::{placeholder_name, RosterForm, RosterStep, MAX_PARTICIPANTS, MIN_PARTICIPANTS};

use crate::{controller::events::UiAction, ui::theme};

pub fn show(ui: &mut egui::Ui, form: &RosterForm, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        theme::card().show(ui, |ui| {
            ui.set_width(460.0);
            match form.step() {
                RosterStep::Count => count_step(ui, form, actions),
                RosterStep::Names => names_step(ui, form, actions),
            }
        });
    });
}

fn count_step(ui: &mut egui::Ui, form: &RosterForm, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.heading("몇 명이 참여하나요?");
        ui.label(
            egui::RichText::new(format!("{MIN_PARTICIPANTS}명 ~ {MAX_PARTICIPANTS}명"))
                .color(theme::MUTED),
        );
        ui.add_space(16.0);

        let mut count = i64::from(form.count());
        let response = ui.add(
            egui::DragValue::new(&mut count)
                .range(i64::from(MIN_PARTICIPANTS)..=i64::from(MAX_PARTICIPANTS))
                .speed(0.1)
                .suffix(" 명"),
        );
        if response.changed() {
            actions.push(UiAction::SetCount(count));
        }

        ui.add_space(20.0);
        let submit = ui.add(theme::primary_button("다음").min_size(egui::vec2(160.0, 44.0)));
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submit.clicked() || enter {
            actions.push(UiAction::SubmitCount);
        }
    });
}

fn names_step(ui: &mut egui::Ui, form: &RosterForm, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.heading("플레이어 이름을 입력하세요");
    });
    ui.add_space(12.0);

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - 80.0).max(160.0))
        .show(ui, |ui| {
            egui::Grid::new("roster_names")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (index, name) in form.names().iter().enumerate() {
                        ui.label(egui::RichText::new(format!("{}.", index + 1)).color(theme::MUTED));
                        let mut draft = name.clone();
                        let edit = egui::TextEdit::singleline(&mut draft)
                            .id_salt(("roster_name", index))
                            .hint_text(placeholder_name(index))
                            .desired_width(320.0);
                        if ui.add(edit).changed() {
                            actions.push(UiAction::SetName { index, value: draft });
                        }
                        ui.end_row();
                    }
                });
        });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        if ui
            .add(theme::primary_button("게임 시작").min_size(egui::vec2(180.0, 44.0)))
            .clicked()
        {
            actions.push(UiAction::SubmitNames);
        }
    });
}
