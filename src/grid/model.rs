//! The whole board: one row per allowed guess

use super::{Row, RowStatus};

/// Address of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub cell: usize,
}

impl CellRef {
    #[must_use]
    pub const fn new(row: usize, cell: usize) -> Self {
        Self { row, cell }
    }
}

/// Ordered rows of equal width
///
/// At most one row is active; every row before it is locked and every row
/// after it is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    width: usize,
}

impl Grid {
    /// Create `rows` rows of `width` empty cells with row 0 active
    #[must_use]
    pub fn new(rows: usize, width: usize) -> Self {
        let mut rows: Vec<Row> = (0..rows).map(|_| Row::new(width)).collect();
        if let Some(first) = rows.first_mut() {
            first.activate();
        }
        Self { rows, width }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Index of the row currently accepting input
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.rows.iter().position(Row::is_active)
    }

    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.active_index().and_then(|i| self.rows.get(i))
    }

    /// Borrow the active row mutably, but only if `index` names it
    pub(crate) fn active_row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index).filter(|row| row.is_active())
    }

    /// The single focus-placement rule: first empty cell of the active row,
    /// or its last filled cell when full
    #[must_use]
    pub fn focus_target(&self) -> Option<CellRef> {
        let row = self.active_index()?;
        Some(CellRef::new(row, self.rows[row].focus_index()))
    }

    /// Number of rows that have been locked in
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status() == RowStatus::Locked)
            .count()
    }
}
