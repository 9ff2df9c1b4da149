use crate::{Action, Direction};
use crossterm::event::KeyCode;
use std::collections::HashMap;

/// Key to action table. Letter bindings are case-insensitive.
#[derive(Debug, Clone)]
pub struct KeyMap {
    letters: HashMap<char, Action>,
    reveal: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        let letters = [
            ('w', Action::Move(Direction::Up)),
            ('a', Action::Move(Direction::Left)),
            ('s', Action::Move(Direction::Down)),
            ('d', Action::Move(Direction::Right)),
            ('f', Action::Flag),
        ]
        .into_iter()
        .collect();

        Self {
            letters,
            reveal: KeyCode::Enter,
        }
    }
}

impl KeyMap {
    pub fn bind(&mut self, key: char, action: Action) {
        self.letters.insert(key.to_ascii_lowercase(), action);
    }

    pub fn set_reveal_key(&mut self, key: KeyCode) {
        self.reveal = key;
    }

    /// The action for a key press, or `None` if the key is unbound.
    pub fn action_for(&self, code: KeyCode) -> Option<Action> {
        if code == self.reveal {
            return Some(Action::Reveal);
        }

        match code {
            KeyCode::Char(c) => self.letters.get(&c.to_ascii_lowercase()).copied(),
            KeyCode::Up => Some(Action::Move(Direction::Up)),
            KeyCode::Down => Some(Action::Move(Direction::Down)),
            KeyCode::Left => Some(Action::Move(Direction::Left)),
            KeyCode::Right => Some(Action::Move(Direction::Right)),
            _ => None,
        }
    }
}
