//! Menu loop
//!
//! Wires difficulty selection, the round engine and the highscore store
//! together. All text goes through the prompter so the whole loop can be
//! driven from scripted input.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{SECRET_MAX, SECRET_MIN};
use crate::difficulty::Difficulty;
use crate::highscores::{HighScoreStore, HighScores};
use crate::prompt::{Aborted, Prompter};
use crate::round::{GuessOutcome, Round, RoundResult};
use crate::settings::Settings;

const BANNER_WIDTH: usize = 52;
const RETURN_PROMPT: &str = "Press Enter to return to menu...";

/// The interactive game session
pub struct Menu<R, W> {
    prompter: Prompter<R, W>,
    store: HighScoreStore,
    scores: HighScores,
    rng: Pcg32,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session and load the highscore table
    pub fn new(prompter: Prompter<R, W>, settings: &Settings) -> Self {
        Self::with_rng(prompter, settings, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Create a session whose secrets come from a fixed seed
    pub fn seeded(prompter: Prompter<R, W>, settings: &Settings, seed: u64) -> Self {
        Self::with_rng(prompter, settings, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(prompter: Prompter<R, W>, settings: &Settings, rng: Pcg32) -> Self {
        let store = HighScoreStore::new(settings.highscore_path.clone());
        let scores = store.load();
        Self {
            prompter,
            store,
            scores,
            rng,
            clear_screen: settings.clear_screen,
        }
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run until the player picks Exit
    pub fn run(&mut self) -> Result<(), Aborted> {
        loop {
            self.clear();
            self.banner();
            self.prompter.say("Menu:");
            self.prompter.say("  1) Play");
            self.prompter.say("  2) Instructions");
            self.prompter.say("  3) High Scores");
            self.prompter.say("  4) Reset High Scores");
            self.prompter.say("  5) Exit\n");

            let choice = self
                .prompter
                .choice("Select an option (1-5): ", &["1", "2", "3", "4", "5"])?;
            match choice {
                "1" => self.play()?,
                "2" => {
                    self.clear();
                    self.instructions();
                    self.prompter.pause(RETURN_PROMPT)?;
                }
                "3" => {
                    self.clear();
                    self.show_highscores();
                    self.prompter.pause(RETURN_PROMPT)?;
                }
                "4" => self.reset_highscores()?,
                _ => {
                    self.prompter.say("\nThanks for playing. Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    fn clear(&mut self) {
        if self.clear_screen {
            let _ = write!(self.prompter.output(), "\x1b[2J\x1b[H");
        }
    }

    fn banner(&mut self) {
        let rule = "=".repeat(BANNER_WIDTH);
        self.prompter.say(&rule);
        self.prompter.say(format!(
            "{:^width$}",
            format!("NUMBER GUESSING GAME ({SECRET_MIN} - {SECRET_MAX})"),
            width = BANNER_WIDTH
        ));
        self.prompter.say(&rule);
    }

    fn instructions(&mut self) {
        self.banner();
        let lines = [
            "How to Play:",
            "  • The computer thinks of a number between 1 and 100.",
            "  • You guess the number. After each guess you'll see:",
            "      - \"Too High\" if your guess is bigger than the secret",
            "      - \"Too Low\"  if your guess is smaller than the secret",
            "  • Keep guessing until you find the correct number!",
            "  • On Normal/Hard you have a limited number of attempts.",
            "  • Your best (fewest attempts) per difficulty is saved.\n",
            "Controls:",
            "  • Enter integers only (1–100).",
            "  • Use the menu to Play, see High Scores, or Exit.\n",
        ];
        for line in lines {
            self.prompter.say(line);
        }
    }

    /// Ask the player for a difficulty
    pub fn choose_difficulty(&mut self) -> Result<Difficulty, Aborted> {
        self.prompter.say("\nChoose Difficulty:");
        for d in Difficulty::ALL {
            self.prompter.say(format!(
                "  {}) {:6}  - Max Attempts: {}",
                d.key(),
                d.name(),
                d.budget_label()
            ));
        }
        let keys = Difficulty::ALL.map(|d| d.key());
        let key = self.prompter.choice("Your choice (E/N/H): ", &keys)?;
        // `choice` only returns one of `keys`
        Ok(Difficulty::from_key(key).unwrap_or_default())
    }

    fn play(&mut self) -> Result<(), Aborted> {
        self.clear();
        self.banner();
        let difficulty = self.choose_difficulty()?;
        self.prompter
            .say(format!("\nDifficulty selected: {difficulty}\n"));

        let mut round = Round::with_rng(difficulty.max_attempts(), &mut self.rng);
        if let RoundResult::Won { attempts } = self.play_round(&mut round)? {
            if self.store.update(&mut self.scores, difficulty, attempts) {
                self.prompter
                    .say(format!("New {difficulty} record: {attempts} attempt(s)!"));
            } else {
                let best = self
                    .scores
                    .get(difficulty)
                    .map_or_else(|| "—".to_string(), |b| b.to_string());
                self.prompter
                    .say(format!("Best {difficulty} so far: {best} attempt(s)."));
            }
        }
        self.prompter.pause(RETURN_PROMPT)
    }

    /// Drive `round` to its conclusion
    pub fn play_round(&mut self, round: &mut Round) -> Result<RoundResult, Aborted> {
        loop {
            if let Some(remaining) = round.remaining() {
                if round.check_exhausted() {
                    return Ok(self.announce_exhausted(round));
                }
                self.prompter.say(format!("\nAttempts remaining: {remaining}"));
            }

            let prompt = format!("Enter your guess ({SECRET_MIN}-{SECRET_MAX}): ");
            let guess = self.prompter.integer(&prompt, SECRET_MIN, SECRET_MAX)?;
            match round.submit_guess(guess) {
                GuessOutcome::Continue {
                    direction,
                    proximity,
                } => {
                    self.prompter.say(direction.as_str());
                    self.prompter.say(proximity.as_str());
                }
                GuessOutcome::Won { attempts } => {
                    self.prompter
                        .say(format!("Correct! You got it in {attempts} attempt(s).\n"));
                    return Ok(RoundResult::Won { attempts });
                }
                GuessOutcome::Exhausted => return Ok(self.announce_exhausted(round)),
            }
        }
    }

    fn announce_exhausted(&mut self, round: &Round) -> RoundResult {
        self.prompter.say("\nOut of attempts! Better luck next time.");
        if let Some(secret) = round.reveal_secret() {
            self.prompter.say(format!("The secret number was: {secret}\n"));
        }
        RoundResult::Forfeited
    }

    fn show_highscores(&mut self) {
        self.banner();
        self.prompter.say("High Scores (fewest attempts):\n");
        for (difficulty, best) in self.scores.iter() {
            let best = best.map_or_else(|| "—".to_string(), |b| b.to_string());
            self.prompter.say(format!("  {:6} : {best}", difficulty.name()));
        }
        self.prompter.say("");
    }

    fn reset_highscores(&mut self) -> Result<(), Aborted> {
        self.prompter.say("\nThis will erase all saved highscores.");
        match self.prompter.choice("Are you sure? (Y/N): ", &["Y", "N"])? {
            "Y" => {
                if self.store.reset() {
                    self.prompter.say("Highscores reset.\n");
                } else {
                    self.prompter
                        .say("Could not delete highscore file (permission issue).");
                }
                self.scores = self.store.load();
            }
            _ => self.prompter.say("Canceled.\n"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Cursor;

    type TestMenu = Menu<Cursor<Vec<u8>>, Vec<u8>>;

    const SEED: u64 = 12345;

    fn settings(dir: &tempfile::TempDir) -> Settings {
        Settings {
            highscore_path: dir.path().join("guess_highscore.json"),
            clear_screen: false,
        }
    }

    fn menu(input: String, settings: &Settings) -> TestMenu {
        let prompter = Prompter::new(Cursor::new(input.into_bytes()), Vec::new());
        Menu::seeded(prompter, settings, SEED)
    }

    fn output(menu: TestMenu) -> String {
        String::from_utf8(menu.into_prompter().into_output()).unwrap()
    }

    /// First secret a seeded menu will draw
    fn first_secret() -> u32 {
        Pcg32::seed_from_u64(SEED).random_range(SECRET_MIN..=SECRET_MAX)
    }

    fn wrong_guess(secret: u32) -> u32 {
        if secret == SECRET_MAX { SECRET_MIN } else { SECRET_MAX }
    }

    #[test]
    fn test_win_sets_record_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir);
        let secret = first_secret();
        let input = format!("1\nE\n{}\n{}\n\n5\n", wrong_guess(secret), secret);

        let mut m = menu(input, &settings);
        assert_eq!(m.run(), Ok(()));
        assert_eq!(m.scores().get(Difficulty::Easy), Some(2));

        let out = output(m);
        assert!(out.contains("Correct! You got it in 2 attempt(s)."));
        assert!(out.contains("New Easy record: 2 attempt(s)!"));
        assert!(out.contains("Thanks for playing. Goodbye!"));

        let stored = HighScoreStore::new(&settings.highscore_path).load();
        assert_eq!(stored.get(Difficulty::Easy), Some(2));
    }

    #[test]
    fn test_hard_round_exhausts_after_seven_guesses() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir);
        let secret = first_secret();
        let wrong = wrong_guess(secret);
        let guesses: String = (0..7).map(|_| format!("{wrong}\n")).collect();
        let input = format!("1\nh\n{guesses}\n5\n");

        let mut m = menu(input, &settings);
        assert_eq!(m.run(), Ok(()));
        assert!(m.scores().is_empty());

        let out = output(m);
        assert_eq!(out.matches("Enter your guess").count(), 7);
        assert!(out.contains("Attempts remaining: 1"));
        assert!(out.contains("Out of attempts!"));
        assert!(out.contains(&format!("The secret number was: {secret}")));
        assert!(!settings.highscore_path.exists());
    }

    #[test]
    fn test_worse_result_reports_existing_best() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir);
        std::fs::write(&settings.highscore_path, r#"{"Normal": 1}"#).unwrap();
        let secret = first_secret();
        let input = format!("1\nN\n{}\n{}\n\n5\n", wrong_guess(secret), secret);

        let mut m = menu(input, &settings);
        assert_eq!(m.run(), Ok(()));
        assert_eq!(m.scores().get(Difficulty::Normal), Some(1));
        assert!(output(m).contains("Best Normal so far: 1 attempt(s)."));
    }

    #[test]
    fn test_reset_confirm_and_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir);
        std::fs::write(&settings.highscore_path, r#"{"Easy": 3}"#).unwrap();

        let mut m = menu("4\nn\n4\ny\n3\n\n5\n".to_string(), &settings);
        assert_eq!(m.scores().get(Difficulty::Easy), Some(3));
        assert_eq!(m.run(), Ok(()));
        assert!(m.scores().is_empty());
        assert!(!settings.highscore_path.exists());

        let out = output(m);
        assert!(out.contains("Canceled."));
        assert!(out.contains("Highscores reset."));
        assert!(out.contains("  Easy   : —"));
    }

    #[test]
    fn test_end_of_input_aborts_mid_round() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir);
        let mut m = menu("1\nE\n".to_string(), &settings);
        assert_eq!(m.run(), Err(Aborted));
        assert!(!settings.highscore_path.exists());
    }

    #[test]
    fn test_instructions_and_difficulty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(&dir);
        let secret = first_secret();
        let input = format!("2\n\n1\nE\n{secret}\n\n5\n");

        let mut m = menu(input, &settings);
        assert_eq!(m.run(), Ok(()));
        let out = output(m);
        assert!(out.contains("How to Play:"));
        assert!(out.contains("E) Easy    - Max Attempts: ∞"));
        assert!(out.contains("H) Hard    - Max Attempts: 7"));
        assert!(out.contains("New Easy record: 1 attempt(s)!"));
    }
}
