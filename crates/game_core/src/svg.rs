//! Standalone SVG rendering of a board: seats, arrows, and outcome labels.

use std::fmt::Write as _;

use crate::{
    domain::{Edge, Participant, ParticipantId},
    geometry::{arrow_for_seats, node_positions, Viewport},
};

pub const ARROW_COLOR: &str = "#ff6b9d";
pub const NODE_RADIUS: f32 = 36.0;

pub fn render_board(
    participants: &[Participant],
    edges: &[Edge],
    current: Option<ParticipantId>,
    viewport: &Viewport,
) -> String {
    let total = participants.len();
    let positions = node_positions(total, viewport);
    let seat_of = |id: ParticipantId| participants.iter().position(|p| p.id == id);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}">"#,
        w = viewport.width,
        h = viewport.height,
        x = viewport.left,
        y = viewport.top,
    );
    let _ = writeln!(
        out,
        r#"  <defs><marker id="arrowhead" markerWidth="10" markerHeight="10" refX="9" refY="3" orient="auto"><polygon points="0 0, 10 3, 0 6" fill="{ARROW_COLOR}"/></marker></defs>"#
    );

    for edge in edges {
        let (Some(from), Some(to)) = (seat_of(edge.from), seat_of(edge.to)) else {
            continue;
        };
        let arrow = arrow_for_seats(from, to, total, viewport);
        let label = arrow.label_anchor();
        let _ = writeln!(
            out,
            r#"  <g class="connection"><path d="{}" stroke="{ARROW_COLOR}" stroke-width="3" fill="none" marker-end="url(#arrowhead)"/><text x="{}" y="{}" text-anchor="middle">{}</text></g>"#,
            arrow.svg_path(),
            label.x,
            label.y,
            edge.outcome.label(),
        );
    }

    for (participant, pos) in participants.iter().zip(&positions) {
        let class = if Some(participant.id) == current {
            "player current"
        } else if participant.nominated {
            "player selected"
        } else {
            "player"
        };
        let _ = writeln!(
            out,
            r#"  <g class="{class}"><circle cx="{}" cy="{}" r="{NODE_RADIUS}"/><text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle">{}</text></g>"#,
            pos.x,
            pos.y,
            pos.x,
            pos.y,
            escape_xml(&participant.name),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
