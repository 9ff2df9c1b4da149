use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle { fg: None, bg: None };

    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    pub const fn on(self, color: Color) -> Self {
        Self {
            fg: self.fg,
            bg: Some(color),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// Colours for mines, flags and the neighbour counts 1 through 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub counts: [CellStyle; 8],
    pub mine: CellStyle,
    pub flag: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            counts: [
                CellStyle::fg(Color::Blue),
                CellStyle::fg(Color::Green),
                CellStyle::fg(Color::Red),
                CellStyle::fg(Color::Blue),
                CellStyle::fg(Color::Red),
                CellStyle::fg(Color::Cyan),
                CellStyle::fg(Color::Black).on(Color::White),
                CellStyle::PLAIN,
            ],
            mine: CellStyle::fg(Color::Red),
            flag: CellStyle::fg(Color::Red),
        }
    }
}

impl Palette {
    pub fn count(&self, count: u8) -> CellStyle {
        match count {
            1..=8 => self.counts[usize::from(count - 1)],
            _ => CellStyle::PLAIN,
        }
    }
}
