//! Circle board: seats, nomination arrows, and the outcome modal.

use std::f32::consts::PI;

use eframe::egui;
use game_core::{
    geometry::{arrow_for_seats, hit_test, node_positions, Point, Viewport},
    Outcome, ParticipantId, TurnEngine, TurnState,
};

use crate::{controller::events::UiAction, ui::theme};

const MAX_NODE_RADIUS: f32 = 36.0;
const MIN_NODE_RADIUS: f32 = 14.0;
const ARROW_WIDTH: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    Current,
    Used,
    Selectable,
    Idle,
}

pub fn node_style(engine: &TurnEngine, id: ParticipantId) -> NodeStyle {
    if engine.cursor() == Some(id) {
        return NodeStyle::Current;
    }
    let used = engine.first_selector() == Some(id)
        || engine.participant(id).is_some_and(|p| p.nominated);
    if used {
        NodeStyle::Used
    } else if engine.is_selectable(id) {
        NodeStyle::Selectable
    } else {
        NodeStyle::Idle
    }
}

/// Seat radius that keeps neighbouring discs from overlapping on crowded boards.
pub fn node_radius(total: usize, viewport: &Viewport) -> f32 {
    if total < 2 {
        return MAX_NODE_RADIUS;
    }
    let gap = viewport.radius() * (PI / total as f32).sin();
    (gap * 0.8).clamp(MIN_NODE_RADIUS, MAX_NODE_RADIUS)
}

fn accepts_clicks(engine: &TurnEngine) -> bool {
    matches!(
        engine.state(),
        TurnState::AwaitingFirstSelection | TurnState::AwaitingNomination { .. }
    )
}

fn pos(point: Point) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}

pub fn show(ui: &mut egui::Ui, engine: &TurnEngine, actions: &mut Vec<UiAction>) {
    let nominated = engine.edges().len();
    let needed = engine.participants().len().saturating_sub(1);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(engine.instruction()).size(22.0).strong());
        ui.label(
            egui::RichText::new(format!("지목 {nominated} / {needed}")).color(theme::MUTED),
        );
    });

    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
    let rect = response.rect;
    let viewport = Viewport::with_origin(rect.left(), rect.top(), rect.width(), rect.height());
    let participants = engine.participants();
    let total = participants.len();
    let radius = node_radius(total, &viewport);
    let seat_of = |id: ParticipantId| participants.iter().position(|p| p.id == id);

    for edge in engine.edges() {
        let (Some(from), Some(to)) = (seat_of(edge.from), seat_of(edge.to)) else {
            continue;
        };
        paint_arrow(&painter, from, to, total, &viewport, radius, Some(edge.outcome));
    }
    if let Some(pending) = engine.pending() {
        if let (Some(from), Some(to)) = (seat_of(pending.from), seat_of(pending.to)) {
            paint_arrow(&painter, from, to, total, &viewport, radius, None);
        }
    }

    let hovered = response
        .hover_pos()
        .and_then(|p| hit_test(Point::new(p.x, p.y), total, &viewport, radius));
    let clickable = accepts_clicks(engine);

    for (seat, (participant, center)) in participants
        .iter()
        .zip(node_positions(total, &viewport))
        .enumerate()
    {
        let style = node_style(engine, participant.id);
        let fill = match style {
            NodeStyle::Current => theme::NODE_CURRENT,
            NodeStyle::Used => theme::NODE_USED,
            NodeStyle::Selectable => theme::NODE_SELECTABLE,
            NodeStyle::Idle => theme::NODE_IDLE,
        };
        let highlight = clickable
            && hovered == Some(seat)
            && matches!(style, NodeStyle::Selectable | NodeStyle::Idle);
        let stroke = if highlight {
            egui::Stroke::new(3.0, theme::ACCENT)
        } else {
            egui::Stroke::new(1.5, theme::ACCENT_SOFT)
        };
        painter.circle(pos(center), radius, fill, stroke);

        let text_color = if style == NodeStyle::Current {
            egui::Color32::WHITE
        } else {
            theme::TEXT
        };
        painter.text(
            pos(center),
            egui::Align2::CENTER_CENTER,
            &participant.name,
            egui::FontId::proportional((radius * 0.45).clamp(10.0, 16.0)),
            text_color,
        );
    }

    if clickable {
        if let Some(seat) = response
            .interact_pointer_pos()
            .filter(|_| response.clicked())
            .and_then(|p| hit_test(Point::new(p.x, p.y), total, &viewport, radius))
        {
            actions.push(UiAction::Select(participants[seat].id));
        }
    }

    if let Some(pending) = engine.pending() {
        outcome_modal(ui.ctx(), engine, pending.from, pending.to, actions);
    }
}

fn paint_arrow(
    painter: &egui::Painter,
    from: usize,
    to: usize,
    total: usize,
    viewport: &Viewport,
    node_radius: f32,
    outcome: Option<Outcome>,
) {
    let path = arrow_for_seats(from, to, total, viewport);
    let color = if outcome.is_some() {
        theme::ARROW
    } else {
        theme::ACCENT_SOFT
    };
    let stroke = egui::Stroke::new(ARROW_WIDTH, color);
    painter.add(egui::epaint::QuadraticBezierShape::from_points_stroke(
        [pos(path.start), pos(path.control), pos(path.end)],
        false,
        egui::Color32::TRANSPARENT,
        stroke,
    ));
    let head = path.arrowhead(node_radius, 12.0, 6.0).map(pos);
    painter.add(egui::Shape::convex_polygon(
        head.to_vec(),
        color,
        egui::Stroke::NONE,
    ));

    if let Some(outcome) = outcome {
        let anchor = pos(path.label_anchor());
        let galley = painter.layout_no_wrap(
            outcome.label().to_string(),
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
        let badge = egui::Rect::from_center_size(anchor, galley.size() + egui::vec2(12.0, 6.0));
        painter.rect_filled(badge, egui::CornerRadius::same(8), theme::outcome_color(outcome));
        painter.galley(badge.center() - galley.size() / 2.0, galley, egui::Color32::WHITE);
    }
}

fn outcome_modal(
    ctx: &egui::Context,
    engine: &TurnEngine,
    from: ParticipantId,
    to: ParticipantId,
    actions: &mut Vec<UiAction>,
) {
    let name = |id| engine.participant(id).map(|p| p.name.as_str()).unwrap_or("?");
    let modal = egui::Modal::new(egui::Id::new("outcome_modal")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.vertical_centered(|ui| {
            ui.heading("결과를 선택하세요");
            ui.label(
                egui::RichText::new(format!("{} → {}", name(from), name(to))).color(theme::MUTED),
            );
        });
        ui.add_space(12.0);
        egui::Grid::new("outcome_buttons")
            .num_columns(3)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                for (index, outcome) in Outcome::ALL.iter().enumerate() {
                    let button = egui::Button::new(
                        egui::RichText::new(outcome.label())
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(theme::outcome_color(*outcome))
                    .min_size(egui::vec2(104.0, 52.0));
                    if ui.add(button).clicked() {
                        actions.push(UiAction::Classify(*outcome));
                    }
                    if index % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("뒤로").clicked() {
                actions.push(UiAction::CancelClassification);
            }
        });
    });
    if modal.should_close() && !actions.iter().any(|a| matches!(a, UiAction::Classify(_))) {
        actions.push(UiAction::CancelClassification);
    }
}

#[cfg(test)]
mod tests {
    use game_core::domain::participants_from_names;

    use super::*;

    fn engine(names: &[&str]) -> TurnEngine {
        TurnEngine::new(participants_from_names(names.iter().copied()))
    }

    #[test]
    fn every_seat_is_idle_before_the_first_pick() {
        let engine = engine(&["A", "B", "C"]);
        for participant in engine.participants() {
            assert_eq!(node_style(&engine, participant.id), NodeStyle::Idle);
        }
        assert!(accepts_clicks(&engine));
    }

    #[test]
    fn styles_follow_the_turn() {
        let mut engine = engine(&["A", "B", "C", "D"]);
        engine.select(ParticipantId(0)).expect("first");
        engine.select(ParticipantId(1)).expect("nominate");
        assert!(!accepts_clicks(&engine));
        engine.classify(Outcome::Gae).expect("classify");

        assert_eq!(node_style(&engine, ParticipantId(0)), NodeStyle::Used);
        assert_eq!(node_style(&engine, ParticipantId(1)), NodeStyle::Current);
        assert_eq!(node_style(&engine, ParticipantId(2)), NodeStyle::Selectable);
        assert_eq!(node_style(&engine, ParticipantId(3)), NodeStyle::Selectable);
    }

    #[test]
    fn node_radius_shrinks_on_crowded_boards() {
        let viewport = Viewport::new(800.0, 800.0);
        assert_eq!(node_radius(3, &viewport), MAX_NODE_RADIUS);
        let crowded = node_radius(30, &viewport);
        assert!(crowded < MAX_NODE_RADIUS);
        assert!(crowded >= MIN_NODE_RADIUS);
    }

    #[test]
    fn neighbouring_seats_do_not_overlap_at_max_roster() {
        let viewport = Viewport::new(900.0, 900.0);
        let radius = node_radius(30, &viewport);
        let seats = node_positions(30, &viewport);
        assert!(seats[0].distance(seats[1]) > radius * 2.0);
    }
}
