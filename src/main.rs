//! Terminal 2048 runner (default binary).
//!
//! Blocking, turn-based loop: wait for a key, apply it to the game, redraw.
//! Uses crossterm for input and a framebuffer-based renderer.

mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use log::info;

use term_2048::core::{diagnostics, Diagnostic, DiagnosticReport, Game};
use term_2048::input;
use term_2048::term::{BoardView, TerminalPresenter, TextPanel};
use term_2048::types::InputEvent;

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    let mut presenter = TerminalPresenter::new(BoardView::default());
    presenter.enter()?;

    let result = run(&config, &mut presenter);

    // Always try to restore terminal state.
    let _ = presenter.exit();

    let game = result?;
    println!("Game Finished!");
    print!("{}", game.board());
    println!("Score: {}", game.score());
    Ok(())
}

fn run(config: &Config, presenter: &mut TerminalPresenter) -> Result<Game> {
    let seed = config.seed();
    info!("seed {seed}, board {0}x{0}", config.size);

    let mut game = Game::new(config.size, seed).with_turn_pause(config.turn_pause());
    game.present(presenter)?;

    loop {
        let Some(event) = input::next_event()? else {
            continue;
        };

        match event {
            InputEvent::Quit => return Ok(game),
            InputEvent::Move(direction) => {
                game.swipe(direction, presenter)?;
            }
            InputEvent::Swap => {
                game.swap(presenter)?;
            }
            InputEvent::Diagnostics => {
                diagnostics_menu(config, presenter)?;
                game.present(presenter)?;
            }
        }

        if game.lost() {
            // The lost status carries the play-again prompt.
            game.present(presenter)?;
            if !input::is_yes(input::read_key_press()?) {
                return Ok(game);
            }
            game.restart();
            game.present(presenter)?;
        }
    }
}

fn diagnostics_menu(config: &Config, presenter: &mut TerminalPresenter) -> Result<()> {
    let mut last: Option<DiagnosticReport> = None;

    loop {
        presenter.show_panel(&TextPanel::diagnostics_menu(last.as_ref()))?;

        let key = input::read_key_press()?;
        if input::should_quit(key) {
            return Ok(());
        }
        match input::menu_digit(key) {
            Some(0) => return Ok(()),
            Some(n) => {
                if let Some(diagnostic) = Diagnostic::from_number(n) {
                    let report =
                        diagnostics::run(diagnostic, rand::random(), config.turn_pause(), presenter)?;
                    last = Some(report);
                }
            }
            None => {}
        }
    }
}
