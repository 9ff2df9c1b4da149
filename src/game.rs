use crate::{Board, CellState, GameError, Position};
use rand::Rng;
use tracing::debug;

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Flag,
    Reveal,
}

/// One round: the board plus cursor, counters and move number.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    cursor: Position,
    mines_count: u32,
    empty_count: u32,
    flag_count: u32,
    move_number: u32,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        mines_count: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let board = Board::new(width, height, mines_count, rng)?;
        debug!(width, height, mines_count, "created board");
        Ok(Self::from_board(board))
    }

    /// Starts a round on a prepared board.
    pub fn from_board(board: Board) -> Self {
        let mines_count = board.mines_count();
        Self {
            cursor: Position::default(),
            mines_count,
            empty_count: board.total_cells() - mines_count,
            flag_count: 0,
            move_number: 0,
            board,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn mines_count(&self) -> u32 {
        self.mines_count
    }

    pub fn empty_count(&self) -> u32 {
        self.empty_count
    }

    pub fn flag_count(&self) -> u32 {
        self.flag_count
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Mines not yet accounted for by a flag, never below zero.
    pub fn mines_remaining(&self) -> u32 {
        self.mines_count.saturating_sub(self.flag_count)
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        self.board.count_adjacent_mines(pos)
    }

    /// Applies a player action at the cursor.
    pub fn perform_action<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) {
        match action {
            Action::Move(direction) => self.move_cursor(direction),
            Action::Flag => self.toggle_flag(self.cursor),
            Action::Reveal => self.reveal(self.cursor, rng),
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let last_column = self.board.columns() as i32 - 1;
        let last_row = self.board.rows() as i32 - 1;

        match direction {
            Direction::Left if self.cursor.x > 0 => self.cursor.x -= 1,
            Direction::Right if self.cursor.x < last_column => self.cursor.x += 1,
            Direction::Up if self.cursor.y > 0 => self.cursor.y -= 1,
            Direction::Down if self.cursor.y < last_row => self.cursor.y += 1,
            _ => {}
        }
    }

    /// Uncovers `pos`, cascading through zero-count regions.
    ///
    /// On the first reveal of a round a mine under `pos` is moved elsewhere
    /// first. Flagged cells are left alone, and `move_number` advances once
    /// per call however many cells the cascade opens.
    pub fn reveal<R: Rng + ?Sized>(&mut self, pos: Position, rng: &mut R) {
        let Some(cell) = self.board.get(pos) else {
            return;
        };
        if cell.state == CellState::Flagged {
            return;
        }

        if cell.is_mine && self.move_number == 0 && self.empty_count > 0 {
            if let Some(to) = self.board.relocate_mine(pos, rng) {
                debug!(from = ?pos, ?to, "moved mine away from first reveal");
            }
        }

        self.cascade(pos);
        self.move_number += 1;
    }

    fn cascade(&mut self, start: Position) {
        let mut pending = vec![start];

        while let Some(pos) = pending.pop() {
            let Some(cell) = self.board.get_mut(pos) else {
                continue;
            };
            if pos != start && cell.state != CellState::Covered {
                continue;
            }
            cell.state = CellState::Uncovered;
            let is_mine = cell.is_mine;

            if is_mine || self.board.count_adjacent_mines(pos) > 0 {
                continue;
            }

            let board = &self.board;
            pending.extend(board.neighbors(pos).filter(|&neighbor| {
                board
                    .get(neighbor)
                    .is_some_and(|cell| cell.state == CellState::Covered)
            }));
        }
    }

    /// Toggles a flag on a covered cell; uncovered cells are ignored.
    pub fn toggle_flag(&mut self, pos: Position) {
        let Some(cell) = self.board.get_mut(pos) else {
            return;
        };

        match cell.state {
            CellState::Covered => {
                cell.state = CellState::Flagged;
                self.flag_count += 1;
            }
            CellState::Flagged => {
                cell.state = CellState::Covered;
                self.flag_count -= 1;
            }
            CellState::Uncovered => {}
        }
    }

    pub fn evaluate(&self) -> GameState {
        let mut uncovered = 0;

        for cell in self.board.cells() {
            if cell.state == CellState::Uncovered {
                if cell.is_mine {
                    return GameState::Lost;
                }
                uncovered += 1;
            }
        }

        if uncovered == self.empty_count && self.empty_count > 0 {
            GameState::Won
        } else {
            GameState::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn game_with_mines(width: u32, height: u32, mines: &[Position]) -> Game {
        Game::from_board(Board::with_mines(width, height, mines).unwrap())
    }

    fn state_at(game: &Game, x: i32, y: i32) -> CellState {
        game.board().get(Position::new(x, y)).unwrap().state
    }

    #[test]
    fn test_new_game_counters() {
        let game = Game::new(16, 30, 99, &mut rng()).unwrap();
        assert_eq!(game.mines_count(), 99);
        assert_eq!(game.empty_count(), 16 * 30 - 99);
        assert_eq!(game.flag_count(), 0);
        assert_eq!(game.move_number(), 0);
        assert_eq!(game.cursor(), Position::new(0, 0));
        assert_eq!(game.evaluate(), GameState::Playing);
    }

    #[test]
    fn test_single_empty_cell_wins_in_one_move() {
        let mut rng = rng();
        let mut game = Game::new(1, 1, 0, &mut rng).unwrap();
        assert_eq!(game.empty_count(), 1);

        game.reveal(Position::new(0, 0), &mut rng);
        assert_eq!(game.evaluate(), GameState::Won);
    }

    #[test]
    fn test_all_mines_never_wins() {
        let mut rng = rng();
        let mut game = Game::new(2, 2, 4, &mut rng).unwrap();
        assert_eq!(game.empty_count(), 0);
        assert_eq!(game.evaluate(), GameState::Playing);

        game.reveal(Position::new(1, 1), &mut rng);
        assert_eq!(game.evaluate(), GameState::Lost);
        assert_eq!(game.board().mines_count(), 4);
    }

    #[test]
    fn test_first_reveal_relocates_mine() {
        let mut rng = rng();
        let mut game = game_with_mines(3, 3, &[Position::new(1, 1)]);

        game.reveal(Position::new(1, 1), &mut rng);
        assert_ne!(game.evaluate(), GameState::Lost);
        assert!(!game.board().get(Position::new(1, 1)).unwrap().is_mine);
        assert_eq!(game.board().mines_count(), 1);
        assert_eq!(game.move_number(), 1);
    }

    #[test]
    fn test_second_reveal_can_lose() {
        let mut rng = rng();
        let mut game = game_with_mines(1, 3, &[Position::new(2, 0)]);

        game.reveal(Position::new(1, 0), &mut rng);
        assert_eq!(game.evaluate(), GameState::Playing);

        game.reveal(Position::new(2, 0), &mut rng);
        assert_eq!(game.evaluate(), GameState::Lost);
    }

    #[test]
    fn test_cascade_stops_at_numbers() {
        // . . . .
        // . . . .
        // . . 1 1
        // . . 1 *
        let mut rng = rng();
        let mut game = game_with_mines(4, 4, &[Position::new(3, 3)]);

        game.reveal(Position::new(0, 0), &mut rng);
        assert_eq!(state_at(&game, 2, 2), CellState::Uncovered);
        assert_eq!(state_at(&game, 3, 2), CellState::Uncovered);
        assert_eq!(state_at(&game, 3, 3), CellState::Covered);
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.evaluate(), GameState::Won);
    }

    #[test]
    fn test_cascade_does_not_cross_numbers() {
        // . 1 * 1 .
        // . 1 1 1 .
        // . . . . .
        // . . . . .
        let mut rng = rng();
        let mut game = game_with_mines(4, 5, &[Position::new(2, 0)]);

        game.reveal(Position::new(0, 0), &mut rng);
        // The region wraps around below the mine, so the right side opens too.
        assert_eq!(state_at(&game, 4, 0), CellState::Uncovered);
        assert_eq!(state_at(&game, 2, 0), CellState::Covered);

        // Behind a wall of numbers the cascade cannot reach.
        let mut walled = game_with_mines(
            3,
            5,
            &[Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
        );
        walled.reveal(Position::new(0, 0), &mut rng);
        assert_eq!(state_at(&walled, 1, 1), CellState::Uncovered);
        assert_eq!(state_at(&walled, 3, 1), CellState::Covered);
        assert_eq!(state_at(&walled, 4, 1), CellState::Covered);
    }

    #[test]
    fn test_cascade_skips_flags() {
        let mut rng = rng();
        let mut game = game_with_mines(3, 3, &[]);
        game.toggle_flag(Position::new(2, 2));

        game.reveal(Position::new(0, 0), &mut rng);
        assert_eq!(state_at(&game, 2, 2), CellState::Flagged);
        assert_eq!(state_at(&game, 2, 1), CellState::Uncovered);
        assert_eq!(game.evaluate(), GameState::Playing);
    }

    #[test]
    fn test_reveal_ignores_flagged_cell() {
        let mut rng = rng();
        let mut game = game_with_mines(2, 2, &[Position::new(1, 1)]);
        game.toggle_flag(Position::new(0, 0));

        game.reveal(Position::new(0, 0), &mut rng);
        assert_eq!(state_at(&game, 0, 0), CellState::Flagged);
        assert_eq!(game.move_number(), 0);
    }

    #[test]
    fn test_toggle_flag_twice_restores() {
        let mut game = game_with_mines(2, 2, &[Position::new(1, 1)]);
        let pos = Position::new(1, 1);

        game.toggle_flag(pos);
        assert_eq!(game.flag_count(), 1);
        assert_eq!(game.mines_remaining(), 0);

        game.toggle_flag(pos);
        assert_eq!(game.flag_count(), 0);
        assert_eq!(state_at(&game, 1, 1), CellState::Covered);
    }

    #[test]
    fn test_flag_ignored_on_uncovered_cell() {
        let mut rng = rng();
        let mut game = game_with_mines(1, 2, &[Position::new(1, 0)]);
        game.reveal(Position::new(0, 0), &mut rng);

        game.toggle_flag(Position::new(0, 0));
        assert_eq!(game.flag_count(), 0);
        assert_eq!(state_at(&game, 0, 0), CellState::Uncovered);
    }

    #[test]
    fn test_mines_remaining_never_negative() {
        let mut game = game_with_mines(2, 2, &[Position::new(0, 0)]);
        game.toggle_flag(Position::new(0, 0));
        game.toggle_flag(Position::new(1, 0));
        assert_eq!(game.flag_count(), 2);
        assert_eq!(game.mines_remaining(), 0);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        // Two rows of five columns.
        let mut game = game_with_mines(2, 5, &[]);

        game.move_cursor(Direction::Left);
        game.move_cursor(Direction::Up);
        assert_eq!(game.cursor(), Position::new(0, 0));

        for _ in 0..10 {
            game.move_cursor(Direction::Right);
            game.move_cursor(Direction::Down);
        }
        assert_eq!(game.cursor(), Position::new(4, 1));
    }

    #[test]
    fn test_perform_action_uses_cursor() {
        let mut rng = rng();
        let mut game = game_with_mines(1, 3, &[Position::new(0, 0)]);

        game.perform_action(Action::Move(Direction::Right), &mut rng);
        game.perform_action(Action::Move(Direction::Right), &mut rng);
        game.perform_action(Action::Flag, &mut rng);
        assert_eq!(state_at(&game, 2, 0), CellState::Flagged);

        game.perform_action(Action::Flag, &mut rng);
        game.perform_action(Action::Reveal, &mut rng);
        assert_eq!(state_at(&game, 2, 0), CellState::Uncovered);
        assert_eq!(state_at(&game, 1, 0), CellState::Uncovered);
        assert_eq!(game.evaluate(), GameState::Won);
    }
}
