//! Per-cell state
//!
//! A cell carries no coordinates and no rendering handle; its position is its
//! index in the owning [`Grid`](super::Grid).

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub alive: bool,
    /// Consecutive generations this cell has been alive, 0 while dead
    pub age: u32,
}

impl Cell {
    pub fn alive() -> Self {
        Self {
            alive: true,
            age: 0,
        }
    }

    pub fn dead() -> Self {
        Self::default()
    }

    /// Successor of this cell given whether it lives in the next generation
    pub(crate) fn advance(self, alive_next: bool) -> Self {
        if alive_next {
            Self {
                alive: true,
                age: self.age.saturating_add(1),
            }
        } else {
            Self::dead()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_ages_living_cells() {
        let cell = Cell::alive().advance(true).advance(true);
        assert!(cell.alive);
        assert_eq!(cell.age, 2);
    }

    #[test]
    fn test_advance_resets_age_on_death() {
        let cell = Cell::alive().advance(true).advance(false);
        assert_eq!(cell, Cell::dead());
    }
}
