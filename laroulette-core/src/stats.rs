use crate::models::{Attributes, Color, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryStats {
    pub total: usize,
    pub red: usize,
    pub black: usize,
    /// 0 et 00
    pub green: usize,
}

pub fn compute_stats(history: &[Outcome]) -> HistoryStats {
    let mut stats = HistoryStats {
        total: history.len(),
        ..HistoryStats::default()
    };
    for outcome in history {
        match outcome.color() {
            Color::Red => stats.red += 1,
            Color::Black => stats.black += 1,
            Color::Green => stats.green += 1,
        }
    }
    stats
}

/// Ligne du tableau détaillé. `position` commence à 1 pour la plus ancienne sortie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRow {
    pub position: usize,
    pub outcome: Outcome,
    pub attributes: Attributes,
}

/// Les `last` dernières sorties, dans l'ordre chronologique.
pub fn detail_rows(history: &[Outcome], last: usize) -> Vec<DetailRow> {
    let start = history.len().saturating_sub(last);
    history[start..]
        .iter()
        .enumerate()
        .map(|(i, &outcome)| DetailRow {
            position: start + i + 1,
            outcome,
            attributes: outcome.attributes(),
        })
        .collect()
}
