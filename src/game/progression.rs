//! Row progression: lock an accepted guess, score it, move on

use crate::core::{Feedback, Word};
use crate::grid::{Grid, Row};
use tracing::{debug, info};

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Solved on guess number `guesses` (1-based)
    Won { guesses: usize },
    /// Every row used without a match
    Lost { answer: Word },
}

impl Outcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Everything that changed when a row was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub locked: usize,
    pub feedback: Feedback,
    /// The row activated next, if the session continues
    pub next: Option<usize>,
    pub outcome: Option<Outcome>,
}

/// Applies accepted guesses to the grid
pub struct RowProgression;

impl RowProgression {
    /// Lock `row` and decide what happens next
    ///
    /// Returns `None` when `row` is not the active row or does not form a
    /// word; the grid is left untouched in that case.
    pub fn accept(grid: &mut Grid, row: usize, target: &Word) -> Option<Advance> {
        let active = grid.active_row_mut(row)?;
        if !active.is_complete() {
            return None;
        }
        let guess = Word::new(active.letters()).ok()?;
        let feedback = Feedback::calculate(&guess, target);

        if !grid.row_mut(row)?.lock(feedback.clone()) {
            return None;
        }
        debug!(row, %feedback, "Row locked");

        if feedback.is_perfect() {
            info!(guesses = row + 1, "Solved");
            return Some(Advance {
                locked: row,
                feedback,
                next: None,
                outcome: Some(Outcome::Won { guesses: row + 1 }),
            });
        }

        let next = row + 1;
        if grid.row_mut(next).is_some_and(Row::activate) {
            return Some(Advance {
                locked: row,
                feedback,
                next: Some(next),
                outcome: None,
            });
        }

        info!(answer = %target, "Out of guesses");
        Some(Advance {
            locked: row,
            feedback,
            next: None,
            outcome: Some(Outcome::Lost {
                answer: target.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};
    use crate::grid::{CellRef, RowStatus};

    fn fill(grid: &mut Grid, row: usize, letters: &str) {
        let active = grid.active_row_mut(row).unwrap();
        for (i, ch) in letters.chars().enumerate() {
            active.cell_mut(i).unwrap().write(ch);
        }
    }

    fn target(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn accepted_guess_locks_and_activates_next() {
        let mut grid = Grid::new(3, 5);
        fill(&mut grid, 0, "slate");

        let advance = RowProgression::accept(&mut grid, 0, &target("crane")).unwrap();
        assert_eq!(advance.locked, 0);
        assert_eq!(advance.next, Some(1));
        assert_eq!(advance.outcome, None);

        let locked = grid.row(0).unwrap();
        assert_eq!(locked.status(), RowStatus::Locked);
        assert!(locked.cells().iter().all(|c| !c.is_enabled()));
        assert_eq!(locked.feedback(), Some(&advance.feedback));

        assert_eq!(grid.active_index(), Some(1));
        assert_eq!(grid.focus_target(), Some(CellRef::new(1, 0)));
        assert_eq!(grid.row(2).unwrap().status(), RowStatus::Pending);
    }

    #[test]
    fn duplicate_letters_scored_against_remaining_counts() {
        let mut grid = Grid::new(6, 5);
        fill(&mut grid, 0, "lolly");

        let advance = RowProgression::accept(&mut grid, 0, &target("alloy")).unwrap();
        assert_eq!(
            advance.feedback.letters(),
            &[Present, Present, Correct, Absent, Correct]
        );
    }

    #[test]
    fn correct_guess_wins_on_any_row() {
        for rows in 1..=4 {
            let mut grid = Grid::new(rows, 5);
            let answer = target("crane");

            for row in 0..rows - 1 {
                fill(&mut grid, row, "slate");
                RowProgression::accept(&mut grid, row, &answer).unwrap();
            }
            fill(&mut grid, rows - 1, "crane");
            let advance = RowProgression::accept(&mut grid, rows - 1, &answer).unwrap();

            assert_eq!(advance.outcome, Some(Outcome::Won { guesses: rows }));
            assert_eq!(advance.next, None);
        }
    }

    #[test]
    fn win_leaves_later_rows_pending() {
        let mut grid = Grid::new(6, 5);
        fill(&mut grid, 0, "crane");
        RowProgression::accept(&mut grid, 0, &target("crane")).unwrap();

        assert_eq!(grid.active_index(), None);
        assert!(
            grid.rows()[1..]
                .iter()
                .all(|r| r.status() == RowStatus::Pending)
        );
    }

    #[test]
    fn last_row_miss_loses() {
        let mut grid = Grid::new(2, 5);
        let answer = target("crane");
        fill(&mut grid, 0, "slate");
        RowProgression::accept(&mut grid, 0, &answer).unwrap();
        fill(&mut grid, 1, "irate");
        let advance = RowProgression::accept(&mut grid, 1, &answer).unwrap();

        assert_eq!(advance.outcome, Some(Outcome::Lost { answer }));
        assert_eq!(grid.locked_count(), 2);
        assert_eq!(grid.active_index(), None);
    }

    #[test]
    fn inactive_or_incomplete_rows_are_refused() {
        let mut grid = Grid::new(2, 5);
        let answer = target("crane");

        assert!(RowProgression::accept(&mut grid, 1, &answer).is_none());
        assert!(RowProgression::accept(&mut grid, 0, &answer).is_none());
        assert_eq!(grid.active_index(), Some(0));
    }
}
