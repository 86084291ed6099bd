//! TUI application state and logic

use crate::core::{GAME_LENGTH, WORD_LENGTH, Word};
use crate::env::{EnvError, Environment, Phase, WordleEnv};
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub env: WordleEnv<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[k - 1]` counts games won on guess `k`
    pub guess_distribution: [usize; GAME_LENGTH],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        Self::from_env(WordleEnv::new(bank))
    }

    #[must_use]
    pub fn with_seed(bank: &'a WordBank, seed: u64) -> Self {
        Self::from_env(WordleEnv::with_seed(bank, seed))
    }

    fn from_env(mut env: WordleEnv<'a>) -> Self {
        env.reset();
        Self {
            env,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the hidden word in {GAME_LENGTH} tries. Type and press Enter."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Append a letter to the current guess
    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the typed guess to the environment
    pub fn submit_guess(&mut self) {
        let word = match Word::new(&self.input_buffer) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&format!("Invalid guess: {err}"), MessageStyle::Error);
                return;
            }
        };

        match self.env.step_word(&word) {
            Ok(step) => {
                self.input_buffer.clear();
                if step.terminal {
                    self.finish_game();
                }
            }
            Err(EnvError::InvalidWord { word }) => {
                self.add_message(
                    &format!("{} is not in the word list", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let Some(session) = self.env.session() else {
            return;
        };
        let turns = session.guesses().len();
        let hidden = session.hidden_word().text().to_uppercase();
        let won = session.phase() == Phase::Won;

        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            self.stats.guess_distribution[turns - 1] += 1;

            let celebration = match turns {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(&format!("Out of guesses! The word was {hidden}"), MessageStyle::Error);
        }

        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        self.env.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Char('n')) if ctrl => self.new_game(),
            (InputMode::GameOver, KeyCode::Enter | KeyCode::Char('n')) => self.new_game(),
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::Guessing, KeyCode::Char(c)) => self.push_char(c),
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guessing, KeyCode::Enter) => self.submit_guess(),
            _ => {}
        }
    }

    #[must_use]
    pub fn turns_remaining(&self) -> usize {
        self.env
            .session()
            .map_or(GAME_LENGTH, |session| session.turns_remaining())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored before an
/// event-loop error is returned.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn bank() -> WordBank {
        WordBank::from_lines(["abase"]).unwrap()
    }

    fn type_word(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn push_char_limits_and_lowercases() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        type_word(&mut app, "AB1asex");
        assert_eq!(app.input_buffer, "abase");
    }

    #[test]
    fn short_guess_is_rejected_without_turn() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        type_word(&mut app, "aba");
        app.submit_guess();

        assert_eq!(app.turns_remaining(), GAME_LENGTH);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.input_buffer, "aba");
    }

    #[test]
    fn unknown_word_is_rejected_without_turn() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        type_word(&mut app, "zzzzz");
        app.submit_guess();

        assert_eq!(app.turns_remaining(), GAME_LENGTH);
        assert!(app.messages.last().unwrap().text.contains("ZZZZZ"));
    }

    #[test]
    fn winning_guess_updates_stats() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        type_word(&mut app, "abase");
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[0], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_reveals_hidden_word() {
        let bank = WordBank::from_lines(["abase", "fuzzy"]).unwrap();
        let mut app = App::with_seed(&bank, 0);
        let hidden = *app.env.session().unwrap().hidden_word();
        let wrong = if hidden.text() == "abase" { "fuzzy" } else { "abase" };

        for _ in 0..GAME_LENGTH {
            type_word(&mut app, wrong);
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains(&hidden.text().to_uppercase()))
        );
    }

    #[test]
    fn new_game_resets_episode() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        type_word(&mut app, "abase");
        app.submit_guess();
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.turns_remaining(), GAME_LENGTH);
        assert_eq!(app.stats.total_games, 1);
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn keys_play_a_game() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        for c in "abasx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::GameOver);

        // Plain 'n' is a letter while guessing, a new game after game over
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_buffer, "n");
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::with_seed(&bank, 0);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn event_loop_stops_on_quit() {
        let bank = bank();
        let app = App::with_seed(&bank, 0);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut keys = vec![Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))];

        let res = run_app(&mut terminal, app, || Ok(keys.remove(0)));
        assert!(res.is_ok());
    }

    #[test]
    fn event_loop_returns_read_errors() {
        let bank = bank();
        let app = App::with_seed(&bank, 0);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        let res = run_app(&mut terminal, app, || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        });
        let err = res.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn messages_are_capped() {
        let bank = bank();
        let mut app = App::with_seed(&bank, 0);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
