use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::collections::VecDeque;
use std::io;

/// Blocking source of key presses.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<KeyCode>;
}

/// Reads key presses from the terminal; needs an active [`TerminalSession`].
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyCode> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(result) = filter_key(key) {
                    return result;
                }
            }
        }
    }
}

/// Keeps plain key presses. Ctrl-C becomes an `Interrupted` error since raw
/// mode no longer raises SIGINT; any other Ctrl chord and key releases are
/// dropped.
pub fn filter_key(key: KeyEvent) -> Option<io::Result<KeyCode>> {
    match key {
        KeyEvent {
            kind: KeyEventKind::Press,
            code,
            modifiers,
            ..
        } if modifiers.contains(KeyModifiers::CONTROL) => match code {
            KeyCode::Char('c' | 'C') => Some(Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "interrupted by Ctrl-C",
            ))),
            _ => None,
        },
        KeyEvent {
            kind: KeyEventKind::Press,
            code,
            ..
        } => Some(Ok(code)),
        _ => None,
    }
}

/// Replays a fixed key sequence. Fails with `UnexpectedEof` once exhausted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyCode>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Each character becomes a key press; `\n` becomes Enter.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(|c| match c {
            '\n' => KeyCode::Enter,
            c => KeyCode::Char(c),
        }))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyCode> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}

/// Raw mode on the alternate screen, restored when dropped.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
