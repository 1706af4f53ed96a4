//! Single-letter input slot

/// One letter slot in a row
///
/// Holds at most one uppercase ASCII letter. Only writable while enabled,
/// which is exactly while its row is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    value: Option<char>,
    enabled: bool,
}

/// What a write attempt did to the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWrite {
    /// The letter was stored (uppercased)
    Filled(char),
    /// Not a letter; the cell was cleared instead
    Rejected,
    /// The cell is disabled; nothing changed
    Disabled,
}

impl Cell {
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        self.value
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Store `ch` if it is a single ASCII letter, otherwise clear the cell
    pub fn write(&mut self, ch: char) -> CellWrite {
        if !self.enabled {
            return CellWrite::Disabled;
        }
        if ch.is_ascii_alphabetic() {
            let letter = ch.to_ascii_uppercase();
            self.value = Some(letter);
            CellWrite::Filled(letter)
        } else {
            self.value = None;
            CellWrite::Rejected
        }
    }

    /// Empty the cell; returns false if it is disabled
    pub fn clear(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.value = None;
        true
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_cell() -> Cell {
        let mut cell = Cell::default();
        cell.set_enabled(true);
        cell
    }

    #[test]
    fn write_letter_is_uppercased() {
        let mut cell = enabled_cell();
        assert_eq!(cell.write('q'), CellWrite::Filled('Q'));
        assert_eq!(cell.value(), Some('Q'));
    }

    #[test]
    fn write_non_letter_clears() {
        let mut cell = enabled_cell();
        cell.write('a');

        for ch in ['7', '!', ' ', 'é'] {
            assert_eq!(cell.write(ch), CellWrite::Rejected);
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn disabled_cell_ignores_writes() {
        let mut cell = enabled_cell();
        cell.write('a');
        cell.set_enabled(false);

        assert_eq!(cell.write('b'), CellWrite::Disabled);
        assert!(!cell.clear());
        assert_eq!(cell.value(), Some('A'));
    }
}
