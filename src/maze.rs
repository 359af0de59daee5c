//! The wall grid the demo draws as cubes.

/// Width and height of the built-in layout.
pub const LAYOUT_SIZE: usize = 20;

#[rustfmt::skip]
const LAYOUT: [u8; LAYOUT_SIZE * LAYOUT_SIZE] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1,
    1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1,
    1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1,
    1, 0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1,
    1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1,
    1, 0, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1,
    1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1,
    1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

/// Row-major grid of wall cells centered on the world origin in the XZ plane.
///
/// Row `i` runs along +Z, column `j` along +X.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Maze {
    /// `cells.len()` must equal `width * height`; extra cells are ignored and
    /// missing ones are open floor.
    pub fn new(width: usize, height: usize, cells: &[u8]) -> Self {
        let cells = (0..width * height)
            .map(|i| cells.get(i).is_some_and(|&c| c != 0))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// `(row, col)` of every wall cell.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| wall)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// World-space center of a cell.
    pub fn cell_center(&self, row: usize, col: usize, cell_size: f32) -> (f32, f32) {
        let x = cell_size * (col as f32 + 0.5) - cell_size * self.width as f32 / 2.0;
        let z = cell_size * (row as f32 + 0.5) - cell_size * self.height as f32 / 2.0;
        (x, z)
    }

    /// Cell containing world position `(x, z)`, or `None` outside the grid.
    pub fn cell_at(&self, x: f32, z: f32, cell_size: f32) -> Option<(usize, usize)> {
        let col = ((x + cell_size * self.width as f32 / 2.0) / cell_size).floor();
        let row = ((z + cell_size * self.height as f32 / 2.0) / cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new(LAYOUT_SIZE, LAYOUT_SIZE, &LAYOUT)
    }
}
