//! One guess attempt: a fixed-width sequence of cells

use super::Cell;
use crate::core::Feedback;

/// Lifecycle of a row; only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowStatus {
    Pending,
    Active,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    status: RowStatus,
    feedback: Option<Feedback>,
}

impl Row {
    /// A pending row of `width` empty, disabled cells
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width],
            status: RowStatus::Pending,
            feedback: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> RowStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == RowStatus::Active
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Feedback computed when the row was locked
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// True when every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The letters in cell order; empty cells are skipped
    #[must_use]
    pub fn letters(&self) -> String {
        self.cells.iter().filter_map(Cell::value).collect()
    }

    /// Where input focus belongs in this row
    ///
    /// The first empty cell, or the last filled cell when the row is full.
    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.cells
            .iter()
            .position(Cell::is_empty)
            .or_else(|| self.cells.iter().rposition(|c| !c.is_empty()))
            .unwrap_or(0)
    }

    /// Pending -> Active; enables every cell
    pub(crate) fn activate(&mut self) -> bool {
        if self.status != RowStatus::Pending {
            return false;
        }
        self.status = RowStatus::Active;
        self.set_enabled(true);
        true
    }

    /// Active -> Locked; disables every cell and records the feedback
    pub(crate) fn lock(&mut self, feedback: Feedback) -> bool {
        if self.status != RowStatus::Active {
            return false;
        }
        self.status = RowStatus::Locked;
        self.feedback = Some(feedback);
        self.set_enabled(false);
        true
    }

    fn set_enabled(&mut self, enabled: bool) {
        for cell in &mut self.cells {
            cell.set_enabled(enabled);
        }
    }
}
