//! Guess Game entry point
//!
//! Reads settings, loads the highscore table and runs the menu loop on stdin/stdout.

use std::io;

use guess_game::menu::Menu;
use guess_game::{Prompter, Settings};

const GOODBYE: &str = "\nExiting... Bye!";

fn main() {
    env_logger::init();
    log::info!("Guess Game starting...");

    // Saves are atomic, so exiting from the handler never leaves a torn file
    if let Err(e) = ctrlc::set_handler(|| {
        println!("{GOODBYE}");
        std::process::exit(0);
    }) {
        log::warn!("Could not install interrupt handler: {}", e);
    }

    let settings = Settings::from_env();
    let prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let mut menu = Menu::new(prompter, &settings);

    if menu.run().is_err() {
        println!("{GOODBYE}");
    }
    log::info!("Guess Game exiting");
}
