//! Structural state of the board
//!
//! Rows, cells, per-cell values and per-row status. Cells are written by the
//! input controller; row status is changed only by row progression.

mod cell;
mod model;
mod row;

pub use cell::{Cell, CellWrite};
pub use model::{CellRef, Grid};
pub use row::{Row, RowStatus};
