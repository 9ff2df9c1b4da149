use super::terminal::KeySource;
use crate::settings::{parse_setting, MAX_DIMENSION};
use crate::{GameError, Settings};
use crossterm::{
    cursor::{MoveLeft, MoveTo, Show},
    event::KeyCode,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use tracing::debug;

/// Shows `prompt` at `row` and collects typed characters until Enter.
pub fn read_line<K, W>(keys: &mut K, out: &mut W, prompt: &str, row: u16) -> Result<String, GameError>
where
    K: KeySource,
    W: Write,
{
    queue!(
        out,
        MoveTo(0, row),
        Clear(ClearType::CurrentLine),
        Print(prompt),
        Show
    )?;
    out.flush()?;

    let mut input = String::new();
    loop {
        match keys.next_key()? {
            KeyCode::Enter => return Ok(input),
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    queue!(out, MoveLeft(1), Print(' '), MoveLeft(1))?;
                }
            }
            KeyCode::Char(c) if !c.is_control() => {
                input.push(c);
                queue!(out, Print(c))?;
            }
            _ => {}
        }
        out.flush()?;
    }
}

/// Asks until the answer parses and falls in `min..=max`. The reason for a
/// rejected answer is shown on the line below the prompt.
fn prompt_number<K, W>(
    keys: &mut K,
    out: &mut W,
    field: &'static str,
    label: &str,
    max: u32,
    row: u16,
) -> Result<u32, GameError>
where
    K: KeySource,
    W: Write,
{
    let prompt = format!("Enter {label} (1-{max}): ");
    loop {
        let answer = read_line(keys, out, &prompt, row)?;
        match parse_setting(field, &answer, 1, max) {
            Ok(value) => {
                queue!(out, MoveTo(0, row + 1), Clear(ClearType::CurrentLine))?;
                return Ok(value);
            }
            Err(err) => {
                debug!(%err, "rejected custom setting");
                queue!(
                    out,
                    MoveTo(0, row + 1),
                    Clear(ClearType::CurrentLine),
                    Print(&err)
                )?;
            }
        }
    }
}

/// Asks for width, height and mine count of a custom board.
pub fn prompt_custom<K, W>(keys: &mut K, out: &mut W) -> Result<Settings, GameError>
where
    K: KeySource,
    W: Write,
{
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;

    let width = prompt_number(keys, out, "Width", "width", MAX_DIMENSION, 0)?;
    let height = prompt_number(keys, out, "Height", "height", MAX_DIMENSION, 2)?;
    let mines = prompt_number(keys, out, "Mines", "# of mines", width * height, 4)?;

    Settings::custom(width, height, mines)
}

/// Only an answer starting with `y` or `Y` means yes.
pub fn prompt_play_again<K, W>(keys: &mut K, out: &mut W, row: u16) -> Result<bool, GameError>
where
    K: KeySource,
    W: Write,
{
    let answer = read_line(keys, out, "Play again? (y/n): ", row)?;
    Ok(matches!(answer.trim_start().chars().next(), Some('y' | 'Y')))
}
