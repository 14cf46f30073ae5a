use std::time::Duration;

use array2d::Array2D;
use bevy::prelude::Resource;
use bevy::time::{Timer, TimerMode};

use crate::core::board::{Board, Cell};
use crate::core::generator::PieceGenerator;
use crate::core::lines::LineFlash;
use crate::core::piece::ActivePiece;
use crate::core::rules::Rules;
use crate::core::scoring::Progress;
use crate::core::shapes::{PieceType, Rgb};
use crate::core::timing::{AutoShift, Shift};

/// Player input sampled for one step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    /// Horizontal direction currently held.
    pub shift: Option<Shift>,
    /// Rotate key went down this step.
    pub rotate: bool,
    /// Soft-drop key is held.
    pub soft_drop: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Spawned(PieceType),
    Locked(PieceType),
    LinesCleared { rows: Vec<usize> },
    LevelUp(u32),
    GameOver,
}

#[derive(Clone, Debug)]
enum Phase {
    Falling(ActivePiece),
    Flashing(LineFlash),
    GameOver,
}

/// Whole state of one game: board, falling piece, timers and progress.
#[derive(Resource, Clone, Debug)]
pub struct Game {
    rules: Rules,
    board: Board,
    phase: Phase,
    generator: PieceGenerator,
    progress: Progress,
    soft_drop: bool,
    fall_timer: Timer,
    auto_shift: AutoShift,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default(), PieceGenerator::new())
    }
}

impl Game {
    pub fn new(rules: Rules, generator: PieceGenerator) -> Self {
        let board = Board::new(rules.board_width, rules.board_height);
        Self::with_board(rules, generator, board)
    }

    /// Starts on a prepared board; spawns the first piece right away.
    pub fn with_board(rules: Rules, generator: PieceGenerator, board: Board) -> Self {
        let mut game = Self {
            fall_timer: Timer::new(rules.fall_interval(0), TimerMode::Repeating),
            auto_shift: AutoShift::new(rules.shift_delay, rules.shift_interval),
            rules,
            board,
            phase: Phase::GameOver,
            generator,
            progress: Progress::default(),
            soft_drop: false,
        };
        game.spawn(&mut Vec::new());
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Gravity interval currently in force, soft drop included.
    pub fn fall_interval(&self) -> Duration {
        let interval = self.rules.fall_interval(self.progress.level);
        if self.soft_drop {
            interval.min(self.rules.soft_drop_interval())
        } else {
            interval
        }
    }

    pub fn active_piece(&self) -> Option<&ActivePiece> {
        match &self.phase {
            Phase::Falling(piece) => Some(piece),
            _ => None,
        }
    }

    pub fn next_piece(&self) -> PieceType {
        self.generator.preview()
    }

    /// Rows blinking before removal.
    pub fn flashing_rows(&self) -> Option<&[usize]> {
        match &self.phase {
            Phase::Flashing(flash) => Some(flash.rows()),
            _ => None,
        }
    }

    pub fn is_clearing(&self) -> bool {
        matches!(self.phase, Phase::Flashing(_))
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Advances the game by `delta`; the only way time moves.
    pub fn update(&mut self, delta: Duration, controls: Controls) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match &mut self.phase {
            Phase::GameOver => {}
            Phase::Flashing(flash) => {
                let finished = flash.tick(delta);
                if finished {
                    self.finish_clear(&mut events);
                }
            }
            Phase::Falling(_) => {
                self.set_soft_drop(controls.soft_drop);
                self.handle_input(delta, controls);

                if self.fall_timer.tick(delta).just_finished() {
                    self.apply_gravity(&mut events);
                }
            }
        }

        events
    }

    fn set_soft_drop(&mut self, soft_drop: bool) {
        if self.soft_drop != soft_drop {
            self.soft_drop = soft_drop;
            let interval = self.fall_interval();
            self.fall_timer.set_duration(interval);
        }
    }

    fn handle_input(&mut self, delta: Duration, controls: Controls) {
        let Phase::Falling(piece) = &mut self.phase else {
            return;
        };

        if let Some(shift) = self.auto_shift.update(controls.shift, delta) {
            piece.try_move(&self.board, 0, shift.d_col());
        }

        if controls.rotate {
            piece.try_rotate(&self.board);
        }
    }

    fn apply_gravity(&mut self, events: &mut Vec<GameEvent>) {
        let Phase::Falling(piece) = &mut self.phase else {
            return;
        };

        if piece.gravity(&self.board) {
            return;
        }

        let kind = piece.kind();
        if piece.lock(&mut self.board).is_none() {
            return;
        }
        events.push(GameEvent::Locked(kind));

        match LineFlash::detect(&self.board, &self.rules) {
            Some(flash) => {
                let rows = flash.rows().to_vec();
                let level_up = self.progress.record_clear(rows.len() as u32, &self.rules);
                events.push(GameEvent::LinesCleared { rows });

                if let Some(level) = level_up {
                    let interval = self.fall_interval();
                    self.fall_timer.set_duration(interval);
                    events.push(GameEvent::LevelUp(level));
                }
                self.auto_shift.release();
                self.phase = Phase::Flashing(flash);
            }
            None => self.spawn(events),
        }
    }

    fn finish_clear(&mut self, events: &mut Vec<GameEvent>) {
        let phase = std::mem::replace(&mut self.phase, Phase::GameOver);
        if let Phase::Flashing(flash) = phase {
            flash.finish(&mut self.board);
        }
        self.spawn(events);
    }

    fn spawn(&mut self, events: &mut Vec<GameEvent>) {
        let kind = self.generator.next().unwrap_or(PieceType::T);
        let position = ActivePiece::spawn_position(self.board.width());

        self.fall_timer.reset();
        self.phase = match ActivePiece::spawn(kind, position, &self.board) {
            Some(piece) => {
                events.push(GameEvent::Spawned(kind));
                Phase::Falling(piece)
            }
            None => {
                events.push(GameEvent::GameOver);
                Phase::GameOver
            }
        };
    }

    /// Colors to draw for every board cell: settled blocks, the falling
    /// piece, and white rows while a clear blinks.
    pub fn display_cells(&self) -> Array2D<Cell> {
        let mut cells = Array2D::filled_with(Cell::Empty, self.board.height(), self.board.width());

        for ((row, col), color) in self.board.filled_cells() {
            cells[(row as usize, col as usize)] = Cell::Filled(color);
        }

        match &self.phase {
            Phase::Falling(piece) => {
                let color = piece.shape().color;
                for (row, col) in piece.cells() {
                    if let Some(cell) = cells.get_mut(row as usize, col as usize) {
                        *cell = Cell::Filled(color);
                    }
                }
            }
            Phase::Flashing(flash) if flash.is_lit() => {
                for &row in flash.rows() {
                    for col in 0..self.board.width() {
                        cells[(row, col)] = Cell::Filled(Rgb::WHITE);
                    }
                }
            }
            _ => {}
        }

        cells
    }
}
