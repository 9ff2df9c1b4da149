use crate::{Game, GameError};
use clap::ValueEnum;
use rand::Rng;
use std::num::IntErrorKind;

/// Largest width or height accepted for a custom board.
pub const MAX_DIMENSION: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
        Difficulty::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
            Difficulty::Custom => "Custom",
        }
    }

    /// Fixed board settings, or `None` for a custom board.
    pub fn preset(self) -> Option<Settings> {
        match self {
            Difficulty::Beginner => Some(Settings::BEGINNER),
            Difficulty::Intermediate => Some(Settings::INTERMEDIATE),
            Difficulty::Expert => Some(Settings::EXPERT),
            Difficulty::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub mines: u32,
}

impl Settings {
    pub const BEGINNER: Settings = Settings {
        width: 10,
        height: 10,
        mines: 10,
    };
    pub const INTERMEDIATE: Settings = Settings {
        width: 16,
        height: 16,
        mines: 40,
    };
    pub const EXPERT: Settings = Settings {
        width: 16,
        height: 30,
        mines: 99,
    };

    /// Validates player-chosen settings.
    pub fn custom(width: u32, height: u32, mines: u32) -> Result<Self, GameError> {
        check_range("Width", width, 1, MAX_DIMENSION)?;
        check_range("Height", height, 1, MAX_DIMENSION)?;
        check_range("Mines", mines, 1, width * height)?;
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub fn new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Game, GameError> {
        Game::new(self.width, self.height, self.mines, rng)
    }
}

pub fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32, GameError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(GameError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Parses one line of player input as a bounded setting.
pub fn parse_setting(field: &'static str, input: &str, min: u32, max: u32) -> Result<u32, GameError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(value) => check_range(field, value, min, max),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Err(GameError::NumberTooLarge {
            field,
            input: trimmed.to_string(),
            min,
            max,
        }),
        Err(_) => Err(GameError::InvalidNumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Beginner.preset(), Some(Settings::BEGINNER));
        assert_eq!(Difficulty::Expert.preset().map(|s| s.height), Some(30));
        assert_eq!(Difficulty::Custom.preset(), None);
    }

    #[test]
    fn test_custom_bounds() {
        assert!(Settings::custom(1, 1, 1).is_ok());
        assert!(Settings::custom(100, 100, 10_000).is_ok());
        assert!(matches!(
            Settings::custom(0, 5, 1),
            Err(GameError::OutOfRange { field: "Width", .. })
        ));
        assert!(matches!(
            Settings::custom(5, 101, 1),
            Err(GameError::OutOfRange { field: "Height", .. })
        ));
        assert!(matches!(
            Settings::custom(3, 3, 10),
            Err(GameError::OutOfRange { field: "Mines", max: 9, .. })
        ));
        assert!(Settings::custom(3, 3, 0).is_err());
    }

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("Width", " 42 ", 1, 100).unwrap(), 42);
        assert!(matches!(
            parse_setting("Width", "abc", 1, 100),
            Err(GameError::InvalidNumber(s)) if s == "abc"
        ));
        assert!(matches!(
            parse_setting("Width", "-3", 1, 100),
            Err(GameError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_setting("Width", "0", 1, 100),
            Err(GameError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_setting("Width", "99999999999", 1, 100),
            Err(GameError::NumberTooLarge { field: "Width", max: 100, .. })
        ));
        assert_eq!(
            parse_setting("Width", "99999999999", 1, 100)
                .unwrap_err()
                .to_string(),
            "Width must be between 1 and 100, got 99999999999"
        );
    }
}
