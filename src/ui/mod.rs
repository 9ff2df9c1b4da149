//! Terminal front end: key handling, drawing and the round loop.

mod app;
mod keymap;
mod menu;
mod palette;
mod prompt;
mod render;
mod terminal;

pub use app::App;
pub use keymap::KeyMap;
pub use menu::DifficultyMenu;
pub use palette::{CellStyle, Palette};
pub use prompt::{prompt_custom, prompt_play_again, read_line};
pub use render::{footer_row, render_game, Screen, Span};
pub use terminal::{filter_key, KeySource, ScriptedKeys, TerminalKeys, TerminalSession};
