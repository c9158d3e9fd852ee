use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CELLS: usize = 9;

/// Ai maximizes the score, Human minimizes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Player::Human => 'O',
            Player::Ai => 'X',
        }
    }

    pub const fn is_maximizing(self) -> bool { matches!(self, Player::Ai) }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Player::Ai),
            'O' | 'o' => Some(Player::Human),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Ai => write!(f, "AI"),
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ai" | "x" => Ok(Player::Ai),
            "human" | "o" => Ok(Player::Human),
            other => Err(Error::InvalidPlayer { input: other.to_string() }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool { self == Cell::Empty }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            d if d.is_ascii_digit() => Some(Cell::Empty),
            other => Player::from_symbol(other).map(Cell::Marked),
        }
    }
}

/// Row-major 3x3 board:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self { Self::default() }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[Cell; CELLS] { &self.cells }

    /// Out-of-range indices read as `None`.
    pub fn get(&self, pos: usize) -> Option<Cell> { self.cells.get(pos).copied() }

    pub fn is_full(&self) -> bool { self.cells.iter().all(|c| !c.is_empty()) }

    pub fn marks(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Marked(player)).count()
    }

    /// Checked placement used by drivers; search uses `mark`/`unmark`.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<()> {
        match self.cells.get(pos).copied() {
            None => Err(Error::InvalidPosition { position: pos }),
            Some(Cell::Marked(_)) => Err(Error::Occupied { position: pos }),
            Some(Cell::Empty) => {
                self.mark(pos, player);
                Ok(())
            }
        }
    }

    /// Unchecked: `pos` must be below 9. Meant for make/unmake in search and perft;
    /// drivers go through `place`.
    pub fn mark(&mut self, pos: usize, player: Player) {
        debug_assert!(self.cells[pos].is_empty(), "marking occupied cell {pos}");
        self.cells[pos] = Cell::Marked(player);
    }

    /// Unchecked counterpart of `mark`.
    pub fn unmark(&mut self, pos: usize) { self.cells[pos] = Cell::Empty; }

    /// Compact single-line form, e.g. `XX_OO____`.
    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|c| match c {
            Cell::Empty => '_',
            Cell::Marked(p) => p.symbol(),
        }).collect()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Accepts `X`/`O` marks and `.`, `_`, `-` or a digit for empty cells.
    /// Whitespace and `/` row separators are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != '/').collect();
        if chars.len() != CELLS {
            return Err(Error::InvalidBoardLength { got: chars.len(), context: s.to_string() });
        }
        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    // Empty cells show their index so a human can pick a move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, cells) in self.cells.chunks(3).enumerate() {
            for (c, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", r * 3 + c)?,
                    Cell::Marked(p) => write!(f, "{}", p.symbol())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_row_separators_and_digits() {
        let a: Board = "XX_/OO_/___".parse().unwrap();
        let b: Board = "XX2 OO5 678".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(0), Some(Cell::Marked(Player::Ai)));
        assert_eq!(a.get(3), Some(Cell::Marked(Player::Human)));
        assert_eq!(a.marks(Player::Ai), 2);
        assert_eq!(a.to_compact(), "XX_OO____");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!("XX_".parse::<Board>(), Err(Error::InvalidBoardLength { got: 3, .. })));
        assert!(matches!(
            "XXQ______".parse::<Board>(),
            Err(Error::InvalidCellCharacter { character: 'Q', position: 2, .. })
        ));
    }

    #[test]
    fn place_checks_bounds_and_occupancy() {
        let mut b = Board::new();
        b.place(4, Player::Ai).unwrap();
        assert_eq!(b.place(4, Player::Human), Err(Error::Occupied { position: 4 }));
        assert_eq!(b.place(9, Player::Human), Err(Error::InvalidPosition { position: 9 }));
        b.unmark(4);
        assert_eq!(b, Board::new());
    }

    #[test]
    #[should_panic]
    fn mark_out_of_range_panics() {
        Board::new().mark(9, Player::Ai);
    }

    #[test]
    fn display_shows_indices_for_empty_cells() {
        let b: Board = "X_O/___/__X".parse().unwrap();
        assert_eq!(b.to_string(), "X1O\n345\n67X\n");
    }

    #[test]
    fn player_parsing_and_opponent() {
        assert_eq!("AI".parse::<Player>().unwrap(), Player::Ai);
        assert_eq!("o".parse::<Player>().unwrap(), Player::Human);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::Ai.opponent(), Player::Human);
        assert!(Player::Ai.is_maximizing());
        assert!(!Player::Human.is_maximizing());
    }
}
