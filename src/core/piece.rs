use crate::core::board::Board;
use crate::core::shapes::{rotated_offsets, shape_for, Offset, PieceType, Rotation, Shape};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PiecePhase {
    Spawning,
    Falling,
    Locking,
    Locked,
}

/// The falling piece: shape, orientation and where its offsets are anchored.
#[derive(Clone, Debug)]
pub struct ActivePiece {
    shape: &'static Shape,
    rotation: Rotation,
    position: Offset,
    phase: PiecePhase,
}

impl ActivePiece {
    /// Places a new piece at `position`; `None` when its cells are blocked.
    pub fn spawn(kind: PieceType, position: Offset, board: &Board) -> Option<Self> {
        let mut piece = Self {
            shape: shape_for(kind),
            rotation: Rotation::R0,
            position,
            phase: PiecePhase::Spawning,
        };

        if !board.can_place(&piece.cells()) {
            return None;
        }

        piece.phase = PiecePhase::Falling;
        Some(piece)
    }

    /// Top-center spawn anchor for a board of `width` columns.
    pub fn spawn_position(width: usize) -> Offset {
        (0, width as isize / 2 - 2)
    }

    pub fn kind(&self) -> PieceType {
        self.shape.kind
    }

    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn phase(&self) -> PiecePhase {
        self.phase
    }

    pub fn cells(&self) -> [Offset; 4] {
        self.cells_at(self.rotation, self.position)
    }

    fn cells_at(&self, rotation: Rotation, (row, col): Offset) -> [Offset; 4] {
        rotated_offsets(self.shape, rotation).map(|(r, c)| (r + row, c + col))
    }

    pub fn try_move(&mut self, board: &Board, d_row: isize, d_col: isize) -> bool {
        if self.phase != PiecePhase::Falling {
            return false;
        }

        let position = (self.position.0 + d_row, self.position.1 + d_col);
        if !board.can_place(&self.cells_at(self.rotation, position)) {
            return false;
        }

        self.position = position;
        true
    }

    /// Clockwise turn in place; rejected outright when blocked.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        if self.phase != PiecePhase::Falling {
            return false;
        }

        let rotation = self.rotation.clockwise();
        if !board.can_place(&self.cells_at(rotation, self.position)) {
            return false;
        }

        self.rotation = rotation;
        true
    }

    /// One row down; a blocked piece enters `Locking`.
    pub fn gravity(&mut self, board: &Board) -> bool {
        if self.try_move(board, 1, 0) {
            return true;
        }

        if self.phase == PiecePhase::Falling {
            self.phase = PiecePhase::Locking;
        }
        false
    }

    /// Writes a `Locking` piece into the board and returns the cells it took.
    pub fn lock(&mut self, board: &mut Board) -> Option<[Offset; 4]> {
        if self.phase != PiecePhase::Locking {
            return None;
        }

        let cells = self.cells();
        board.lock_cells(&cells, self.shape.color);
        self.phase = PiecePhase::Locked;
        Some(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::tests::board_from;

    fn spawn(kind: PieceType, board: &Board) -> ActivePiece {
        ActivePiece::spawn(kind, ActivePiece::spawn_position(board.width()), board)
            .expect("spawn area is free")
    }

    #[test]
    fn test_spawn_is_top_center_and_falling() {
        let board = Board::new(10, 20);
        let piece = spawn(PieceType::I, &board);
        assert_eq!(piece.phase(), PiecePhase::Falling);
        assert_eq!(piece.cells(), [(0, 3), (0, 4), (0, 5), (0, 6)]);
    }

    #[test]
    fn test_spawn_blocked() {
        let mut board = Board::new(10, 20);
        board.lock_cells(&[(0, 4)], shape_for(PieceType::Z).color);
        assert!(ActivePiece::spawn(PieceType::I, (0, 3), &board).is_none());
        assert!(ActivePiece::spawn(PieceType::J, (0, 3), &board).is_some());
    }

    #[test]
    fn test_move_blocked_by_walls_and_stack() {
        let board = board_from(&[
            "......",
            "......",
            "......",
            "#.....",
        ]);
        let mut piece = ActivePiece::spawn(PieceType::O, (0, 0), &board).unwrap();
        assert!(!piece.try_move(&board, 0, -1));
        assert!(piece.try_move(&board, 1, 0));
        assert!(!piece.try_move(&board, 1, 0));
        assert_eq!(piece.position(), (1, 0));
        assert!(piece.try_move(&board, 0, 4));
        assert!(!piece.try_move(&board, 0, 1));
        assert_eq!(piece.position(), (1, 4));
    }

    #[test]
    fn test_rotation_at_wall_is_rejected() {
        let board = Board::new(10, 20);
        let mut piece = spawn(PieceType::I, &board);
        for _ in 0..3 {
            assert!(piece.try_move(&board, 1, 0));
        }
        assert!(piece.try_rotate(&board));
        // vertical I sits in column 2 of its frame; push it against the left wall
        while piece.try_move(&board, 0, -1) {}
        assert_eq!(piece.cells().map(|(_, col)| col), [0; 4]);

        let before = (piece.position(), piece.rotation());
        assert!(!piece.try_rotate(&board));
        assert_eq!((piece.position(), piece.rotation()), before);
    }

    #[test]
    fn test_rotation_blocked_by_stack() {
        let mut board = Board::new(10, 20);
        let mut piece = ActivePiece::spawn(PieceType::T, (5, 3), &board).unwrap();
        // clockwise T needs (5, 5) and (7, 5)
        board.lock_cells(&[(7, 5)], shape_for(PieceType::L).color);
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece.rotation(), Rotation::R0);
        assert_eq!(piece.position(), (5, 3));
    }

    #[test]
    fn test_i_cannot_turn_on_spawn_row() {
        let board = Board::new(10, 20);
        let mut piece = spawn(PieceType::I, &board);
        assert!(!piece.try_rotate(&board));
        assert!(piece.try_move(&board, 1, 0));
        assert!(piece.try_rotate(&board));
    }

    #[test]
    fn test_gravity_lands_then_locks() {
        let mut board = Board::new(4, 3);
        let mut piece = ActivePiece::spawn(PieceType::O, (0, 1), &board).unwrap();
        assert!(piece.lock(&mut board).is_none());

        assert!(piece.gravity(&board));
        assert!(!piece.gravity(&board));
        assert_eq!(piece.phase(), PiecePhase::Locking);
        assert!(!piece.try_move(&board, 0, 1));
        assert!(!piece.try_rotate(&board));

        let cells = piece.lock(&mut board).unwrap();
        assert_eq!(cells, [(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(piece.phase(), PiecePhase::Locked);
        assert!(cells.iter().all(|&(row, col)| board.is_occupied(row, col)));
        assert_eq!(board.get(2, 2).and_then(|cell| cell.color()), Some(shape_for(PieceType::O).color));
        assert!(piece.lock(&mut board).is_none());
    }
}
