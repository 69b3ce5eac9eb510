//! End-of-game aggregation: edges grouped by outcome.

use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::{find_participant, Edge, Outcome, Participant};

pub const EMPTY_MARKER: &str = "없음";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPair {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub outcome: Outcome,
    pub pairs: Vec<NamedPair>,
}

impl CategorySummary {
    pub fn count(&self) -> usize {
        self.pairs.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_edges: usize,
    pub categories: Vec<CategorySummary>,
}

impl Summary {
    /// Groups `edges` into all six categories, preserving edge order inside each one.
    /// Edges that reference a key missing from `participants` are left out of the listing
    /// and of `total_edges`.
    pub fn build(participants: &[Participant], edges: &[Edge]) -> Self {
        let mut categories: Vec<CategorySummary> = Outcome::ALL
            .into_iter()
            .map(|outcome| CategorySummary {
                outcome,
                pairs: Vec::new(),
            })
            .collect();

        let mut listed = 0;
        for edge in edges {
            let (Some(from), Some(to)) = (
                find_participant(participants, edge.from),
                find_participant(participants, edge.to),
            ) else {
                tracing::warn!(from = %edge.from, to = %edge.to, "edge references unknown participant");
                continue;
            };
            categories[edge.outcome.position()].pairs.push(NamedPair {
                from: from.name.clone(),
                to: to.name.clone(),
            });
            listed += 1;
        }

        Self {
            total_edges: listed,
            categories,
        }
    }

    pub fn category(&self, outcome: Outcome) -> &CategorySummary {
        &self.categories[outcome.position()]
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.category(outcome).count()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for category in &self.categories {
            let _ = writeln!(out, "[{}] {}", category.outcome, category.count());
            if category.pairs.is_empty() {
                let _ = writeln!(out, "  {EMPTY_MARKER}");
            }
            for pair in &category.pairs {
                let _ = writeln!(out, "  {} → {}", pair.from, pair.to);
            }
        }
        let _ = writeln!(out, "총 연결 수: {}", self.total_edges);
        out
    }
}
