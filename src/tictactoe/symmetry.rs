//! D4 symmetry group operations for board canonicalization

use super::board::{BoardState, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [Self::identity(); 8];
        for (i, rotation) in [0, 90, 180, 270].into_iter().enumerate() {
            transforms[2 * i] = D4Transform {
                rotation,
                reflection: false,
            };
            transforms[2 * i + 1] = D4Transform {
                rotation,
                reflection: true,
            };
        }
        transforms
    }

    /// Apply transform to a position (0-8)
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        // Reflect across the vertical axis before rotating
        if self.reflection {
            col = 2 - col;
        }

        // Clockwise quarter turns
        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }

    /// Apply transform to an array of cells
    pub fn apply_to_cells(&self, cells: &[Cell; 9]) -> [Cell; 9] {
        let mut transformed = [Cell::Empty; 9];
        for (idx, &cell) in cells.iter().enumerate() {
            transformed[self.transform_position(idx)] = cell;
        }
        transformed
    }
}

impl BoardState {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        BoardState {
            cells: t.apply_to_cells(&self.cells),
            to_move: self.to_move,
        }
    }

    /// Get the canonical (lexicographically minimal label) form under D4 symmetry
    pub fn canonical(&self) -> Self {
        let mut best = *self;
        let mut best_label = self.label();
        for transform in D4Transform::all() {
            let candidate = self.transform(&transform);
            let label = candidate.label();
            if label < best_label {
                best_label = label;
                best = candidate;
            }
        }
        best
    }
}
