use super::palette::{CellStyle, Palette};
use crate::{CellState, Game, GameState, Position};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const BORDER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: CellStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::PLAIN)
    }

    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A full frame of styled lines plus where the terminal cursor should rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Vec<Span>>,
    /// `(column, row)` of the visible cursor; hidden when `None`.
    pub cursor: Option<(u16, u16)>,
}

impl Screen {
    pub fn push_line(&mut self, spans: Vec<Span>) {
        self.lines.push(spans);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.lines.push(vec![Span::plain(text)]);
    }

    /// The frame without colours, one string per line.
    pub fn text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }

    /// Clears the terminal and draws the frame.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Hide, MoveTo(0, 0), Clear(ClearType::All))?;

        for (row, line) in self.lines.iter().enumerate() {
            queue!(out, MoveTo(0, row as u16))?;
            for span in line {
                if let Some(fg) = span.style.fg {
                    queue!(out, SetForegroundColor(fg))?;
                }
                if let Some(bg) = span.style.bg {
                    queue!(out, SetBackgroundColor(bg))?;
                }
                queue!(out, Print(&span.text))?;
                if !span.style.is_plain() {
                    queue!(out, ResetColor)?;
                }
            }
        }

        if let Some((column, row)) = self.cursor {
            queue!(out, MoveTo(column, row), Show)?;
        }
        out.flush()
    }
}

fn cell_spans(game: &Game, pos: Position, palette: &Palette) -> Vec<Span> {
    let Some(cell) = game.board().get(pos) else {
        return vec![Span::plain("  ")];
    };

    match cell.state {
        CellState::Covered => vec![Span::plain("- ")],
        CellState::Flagged => vec![Span::styled("P ", palette.flag)],
        CellState::Uncovered if cell.is_mine => vec![Span::styled("X ", palette.mine)],
        CellState::Uncovered => match game.count_adjacent_mines(pos) {
            0 => vec![Span::plain("  ")],
            n => vec![
                Span::styled(n.to_string(), palette.count(n)),
                Span::plain(" "),
            ],
        },
    }
}

/// Lays out the bordered board and the status line below it.
///
/// While `status` is `Playing` the status line counts the mines left and the
/// cursor sits on the selected cell; otherwise it shows the round result.
pub fn render_game(game: &Game, status: GameState, palette: &Palette) -> Screen {
    let board = game.board();
    let border = BORDER
        .to_string()
        .repeat(2 * board.columns() as usize + 3);
    let mut screen = Screen::default();

    screen.push_text(border.clone());
    for y in 0..board.rows() as i32 {
        let mut line = vec![Span::plain(format!("{BORDER} "))];
        for x in 0..board.columns() as i32 {
            line.extend(cell_spans(game, Position::new(x, y), palette));
        }
        line.push(Span::plain(BORDER.to_string()));
        screen.push_line(line);
    }
    screen.push_text(border);
    screen.push_text("");

    match status {
        GameState::Playing => {
            screen.push_text(format!("Mines remaining: {}", game.mines_remaining()));
            let cursor = game.cursor();
            screen.cursor = Some((cursor.x as u16 * 2 + 2, cursor.y as u16 + 1));
        }
        GameState::Won => screen.push_text("YOU WIN !!!"),
        GameState::Lost => screen.push_text("YOU LOSE"),
    }

    screen
}

/// Row for prompts shown under a rendered board, one blank line below the
/// status line.
pub fn footer_row(game: &Game) -> u16 {
    game.board().rows() as u16 + 5
}
