use std::fmt::{Display, Formatter};

/// Offset of a single cell as (row, col); rows grow downwards.
pub type Offset = (isize, isize);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Move every channel towards 255 by `amount` (0.0..=1.0).
    pub fn lighten(self, amount: f32) -> Self {
        let up = |c: u8| (c as f32 + (255. - c as f32) * amount).round().min(255.) as u8;
        Self::new(up(self.r), up(self.g), up(self.b))
    }

    /// Move every channel towards 0 by `amount` (0.0..=1.0).
    pub fn darken(self, amount: f32) -> Self {
        let down = |c: u8| (c as f32 - c as f32 * amount).round().max(0.) as u8;
        Self::new(down(self.r), down(self.g), down(self.b))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I,
        PieceType::O,
        PieceType::T,
        PieceType::S,
        PieceType::Z,
        PieceType::J,
        PieceType::L,
    ];

    pub fn shape(self) -> &'static Shape {
        shape_for(self)
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Clockwise quarter turns away from the spawn orientation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rotation(u8);

impl Rotation {
    pub const R0: Rotation = Rotation(0);
    pub const R90: Rotation = Rotation(1);
    pub const R180: Rotation = Rotation(2);
    pub const R270: Rotation = Rotation(3);

    pub fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    pub fn clockwise(self) -> Self {
        Self::new(self.0 + 1)
    }

    pub fn quarter_turns(self) -> u8 {
        self.0
    }
}

/// Immutable template of a piece at orientation 0.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceType,
    pub cells: [Offset; 4],
    /// Pivot in half-cell units, so (1, 3) is the point (0.5, 1.5).
    pub pivot2: Offset,
    pub color: Rgb,
}

static I: Shape = Shape {
    kind: PieceType::I,
    cells: [(0, 0), (0, 1), (0, 2), (0, 3)],
    pivot2: (1, 3),
    color: Rgb::new(0, 255, 255),
};

static O: Shape = Shape {
    kind: PieceType::O,
    cells: [(0, 0), (0, 1), (1, 0), (1, 1)],
    pivot2: (1, 1),
    color: Rgb::new(255, 255, 0),
};

static T: Shape = Shape {
    kind: PieceType::T,
    cells: [(0, 0), (0, 1), (0, 2), (1, 1)],
    pivot2: (2, 2),
    color: Rgb::new(128, 0, 128),
};

static S: Shape = Shape {
    kind: PieceType::S,
    cells: [(0, 1), (0, 2), (1, 0), (1, 1)],
    pivot2: (2, 2),
    color: Rgb::new(0, 255, 0),
};

static Z: Shape = Shape {
    kind: PieceType::Z,
    cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
    pivot2: (2, 2),
    color: Rgb::new(255, 0, 0),
};

static J: Shape = Shape {
    kind: PieceType::J,
    cells: [(0, 0), (1, 0), (1, 1), (1, 2)],
    pivot2: (2, 2),
    color: Rgb::new(0, 0, 255),
};

static L: Shape = Shape {
    kind: PieceType::L,
    cells: [(0, 2), (1, 0), (1, 1), (1, 2)],
    pivot2: (2, 2),
    color: Rgb::new(255, 165, 0),
};

pub fn shape_for(kind: PieceType) -> &'static Shape {
    match kind {
        PieceType::I => &I,
        PieceType::O => &O,
        PieceType::T => &T,
        PieceType::S => &S,
        PieceType::Z => &Z,
        PieceType::J => &J,
        PieceType::L => &L,
    }
}

// one clockwise quarter turn around the doubled pivot; exact because both
// pivot coordinates share parity
fn quarter_turn((row, col): Offset, (pr, pc): Offset) -> Offset {
    let (dr, dc) = (2 * row - pr, 2 * col - pc);
    ((pr + dc) / 2, (pc - dr) / 2)
}

pub fn rotated_offsets(shape: &Shape, rotation: Rotation) -> [Offset; 4] {
    let mut cells = shape.cells;
    for _ in 0..rotation.quarter_turns() {
        cells = cells.map(|cell| quarter_turn(cell, shape.pivot2));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: [Offset; 4]) -> [Offset; 4] {
        cells.sort();
        cells
    }

    #[test]
    fn test_four_turns_restore_every_shape() {
        for kind in PieceType::ALL {
            let shape = shape_for(kind);
            let mut cells = shape.cells;
            for _ in 0..4 {
                cells = cells.map(|cell| quarter_turn(cell, shape.pivot2));
            }
            assert_eq!(cells, shape.cells, "{}", kind);
            assert_eq!(rotated_offsets(shape, Rotation::new(4)), shape.cells);
        }
    }

    #[test]
    fn test_pivot_parity_keeps_rotation_on_grid() {
        for kind in PieceType::ALL {
            let (pr, pc) = shape_for(kind).pivot2;
            assert_eq!((pr - pc).rem_euclid(2), 0, "{}", kind);
        }
    }

    #[test]
    fn test_t_rotates_clockwise() {
        // stem points down at spawn, points left after a clockwise turn
        let cells = rotated_offsets(shape_for(PieceType::T), Rotation::R90);
        assert_eq!(sorted(cells), [(0, 2), (1, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_i_turns_vertical_around_half_cell_pivot() {
        let cells = rotated_offsets(shape_for(PieceType::I), Rotation::R90);
        assert_eq!(sorted(cells), [(-1, 2), (0, 2), (1, 2), (2, 2)]);

        let back = rotated_offsets(shape_for(PieceType::I), Rotation::R180);
        assert_eq!(sorted(back), [(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_o_is_rotation_invariant() {
        let shape = shape_for(PieceType::O);
        for turns in 0..4 {
            assert_eq!(
                sorted(rotated_offsets(shape, Rotation::new(turns))),
                sorted(shape.cells)
            );
        }
    }

    #[test]
    fn test_pivot_cell_is_fixed() {
        // T, S, Z, J, L pivot on an occupied cell
        for kind in [PieceType::T, PieceType::S, PieceType::Z, PieceType::J, PieceType::L] {
            let shape = shape_for(kind);
            let pivot = (shape.pivot2.0 / 2, shape.pivot2.1 / 2);
            for turns in 0..4 {
                assert!(rotated_offsets(shape, Rotation::new(turns)).contains(&pivot));
            }
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Rotation::R270.clockwise(), Rotation::R0);
        assert_eq!(Rotation::new(6), Rotation::R180);
    }

    #[test]
    fn test_color_shading() {
        let base = Rgb::new(100, 200, 0);
        assert_eq!(base.lighten(0.4), Rgb::new(162, 222, 102));
        assert_eq!(base.darken(0.4), Rgb::new(60, 120, 0));
        assert_eq!(Rgb::WHITE.lighten(1.0), Rgb::WHITE);
    }
}
