use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell along `direction`, forwards or backwards.
    /// Returns `None` when stepping back past row/column zero.
    pub fn step(&self, direction: Direction, forward: bool) -> Option<Self> {
        let (row, col) = match (direction, forward) {
            (Direction::Across, true) => (Some(self.row), self.col.checked_add(1)),
            (Direction::Across, false) => (Some(self.row), self.col.checked_sub(1)),
            (Direction::Down, true) => (self.row.checked_add(1), Some(self.col)),
            (Direction::Down, false) => (self.row.checked_sub(1), Some(self.col)),
        };
        Some(Self::new(row?, col?))
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// Orientation of a word, and the direction the cursor advances while typing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }

    /// Single-letter suffix used in clue labels ("1A", "4D").
    pub fn suffix(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "across" => Ok(Direction::Across),
            "down" => Ok(Direction::Down),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_zero() {
        let origin = CellPosition::new(0, 0);
        assert_eq!(origin.step(Direction::Across, false), None);
        assert_eq!(origin.step(Direction::Down, false), None);
        assert_eq!(origin.step(Direction::Across, true), Some(CellPosition::new(0, 1)));
        assert_eq!(origin.step(Direction::Down, true), Some(CellPosition::new(1, 0)));
    }

    #[test]
    fn direction_parsing_is_exact() {
        assert_eq!("across".parse::<Direction>(), Ok(Direction::Across));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert!("Across".parse::<Direction>().is_err());
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn positions_order_row_major() {
        let mut positions = vec![
            CellPosition::new(1, 0),
            CellPosition::new(0, 2),
            CellPosition::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![CellPosition::new(0, 1), CellPosition::new(0, 2), CellPosition::new(1, 0)]
        );
        assert_eq!(CellPosition::new(2, 4).to_string(), "R3C5");
    }
}
