use std::str::FromStr;

use super::types::Mark;

pub const BOARD_CELLS: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// Rows top to bottom, columns left to right, then both diagonals.
/// Scans over this table stop at the first match, so the order is observable.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board stored row-major: 0-2 top row, 3-5 middle, 6-8 bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics unless `cells` holds exactly nine marks.
    pub fn from_cells(cells: &[Mark]) -> Self {
        assert_eq!(
            cells.len(),
            BOARD_CELLS,
            "a board has exactly {} cells, got {}",
            BOARD_CELLS,
            cells.len()
        );
        let mut board = Self::new();
        board.cells.copy_from_slice(cells);
        board
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn empty_among(&self, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|&i| self.is_empty_at(i))
            .collect()
    }
}

/// Parses nine cells written as `X`, `O` and `_` (or `.`), ignoring whitespace and `|`.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = Vec::with_capacity(BOARD_CELLS);
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' => Mark::Empty,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            marks.push(mark);
        }
        if marks.len() != BOARD_CELLS {
            return Err(format!(
                "Board needs {} cells, got {}",
                BOARD_CELLS,
                marks.len()
            ));
        }
        Ok(Self::from_cells(&marks))
    }
}
