//! Move list projection for the history panel

use crate::rules::{MoveRecord, Square};

/// One row of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based move number
    pub number: usize,
    pub from: Square,
    pub to: Square,
    pub selected: bool,
}

impl HistoryRow {
    pub fn label(&self) -> String {
        format!("{}. {} → {}", self.number, self.from, self.to)
    }
}

/// Everything the history panel needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
    /// Prev/Next are only offered while reviewing
    pub show_controls: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl HistoryView {
    pub fn new(history: &[MoveRecord], cursor: Option<usize>) -> Self {
        let rows = history
            .iter()
            .enumerate()
            .map(|(i, record)| HistoryRow {
                number: i + 1,
                from: record.from,
                to: record.to,
                selected: cursor == Some(i),
            })
            .collect();

        Self {
            rows,
            show_controls: cursor.is_some(),
            prev_enabled: cursor.is_some_and(|i| i > 0),
            next_enabled: cursor.is_some_and(|i| i + 1 < history.len()),
        }
    }
}
