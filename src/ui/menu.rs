use super::render::Screen;
use crate::{Action, Difficulty, Direction};

const TITLE: &str = "Console Minesweeper v1.0";
const HEADER_ROWS: u16 = 4;
const MARKER: &str = "-> ";

/// Difficulty picker. Up and down move the marker without wrapping.
#[derive(Debug, Clone, Default)]
pub struct DifficultyMenu {
    selected: usize,
}

impl DifficultyMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Difficulty {
        Difficulty::ALL[self.selected]
    }

    /// Applies one action; returns `true` when the choice is confirmed.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Move(Direction::Up) => self.selected = self.selected.saturating_sub(1),
            Action::Move(Direction::Down) => {
                self.selected = (self.selected + 1).min(Difficulty::ALL.len() - 1)
            }
            Action::Reveal => return true,
            _ => {}
        }
        false
    }

    pub fn render(&self) -> Screen {
        let mut screen = Screen::default();
        screen.push_text(TITLE);
        screen.push_text("W/S to choose, Enter to confirm");
        screen.push_text("");
        screen.push_text("Enter difficulty:");

        for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
            let marker = if index == self.selected { MARKER } else { "   " };
            screen.push_text(format!("{marker}{}", difficulty.label()));
        }

        screen.cursor = Some((MARKER.len() as u16, HEADER_ROWS + self.selected as u16));
        screen
    }
}
