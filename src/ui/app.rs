use super::keymap::KeyMap;
use super::menu::DifficultyMenu;
use super::palette::Palette;
use super::prompt::{prompt_custom, prompt_play_again};
use super::render::{footer_row, render_game};
use super::terminal::KeySource;
use crate::{Difficulty, Game, GameError, GameState, Settings};
use rand::Rng;
use std::io::Write;
use tracing::{info, trace};

/// Drives rounds against a key source and an output stream.
pub struct App<K, W, R> {
    keys: K,
    out: W,
    rng: R,
    keymap: KeyMap,
    palette: Palette,
    difficulty: Option<Difficulty>,
}

impl<K, W, R> App<K, W, R>
where
    K: KeySource,
    W: Write,
    R: Rng,
{
    pub fn new(keys: K, out: W, rng: R) -> Self {
        Self {
            keys,
            out,
            rng,
            keymap: KeyMap::default(),
            palette: Palette::default(),
            difficulty: None,
        }
    }

    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Skips the difficulty menu when set.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Plays rounds until the player declines another; returns how many were played.
    pub fn run(&mut self) -> Result<u32, GameError> {
        let mut rounds = 0;

        loop {
            let settings = self.select_settings()?;
            let mut game = settings.new_game(&mut self.rng)?;
            self.play_round(&mut game)?;
            rounds += 1;

            if !prompt_play_again(&mut self.keys, &mut self.out, footer_row(&game))? {
                info!(rounds, "player quit");
                return Ok(rounds);
            }
        }
    }

    pub fn select_settings(&mut self) -> Result<Settings, GameError> {
        let difficulty = match self.difficulty {
            Some(difficulty) => difficulty,
            None => self.select_difficulty()?,
        };

        match difficulty.preset() {
            Some(settings) => Ok(settings),
            None => prompt_custom(&mut self.keys, &mut self.out),
        }
    }

    fn select_difficulty(&mut self) -> Result<Difficulty, GameError> {
        let mut menu = DifficultyMenu::new();

        loop {
            menu.render().draw(&mut self.out)?;
            let key = self.keys.next_key()?;
            if let Some(action) = self.keymap.action_for(key) {
                if menu.handle(action) {
                    return Ok(menu.selected());
                }
            }
        }
    }

    /// Draw, read a key, apply it; repeat until the board is won or lost,
    /// then draw the final board once more.
    pub fn play_round(&mut self, game: &mut Game) -> Result<GameState, GameError> {
        info!(
            rows = game.board().rows(),
            columns = game.board().columns(),
            mines = game.mines_count(),
            "round started"
        );

        while game.evaluate() == GameState::Playing {
            render_game(game, GameState::Playing, &self.palette).draw(&mut self.out)?;

            let key = self.keys.next_key()?;
            if let Some(action) = self.keymap.action_for(key) {
                trace!(?action, "applying action");
                game.perform_action(action, &mut self.rng);
            }
        }

        let result = game.evaluate();
        render_game(game, result, &self.palette).draw(&mut self.out)?;
        info!(?result, moves = game.move_number(), "round finished");
        Ok(result)
    }
}
