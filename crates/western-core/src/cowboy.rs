//! The cowboy himself.

use crate::console::Console;
use crate::constants::{
    ALIVE_MESSAGE, BANG_MESSAGE, COWBOY_DEFAULT_AGE, COWBOY_DEFAULT_AVAILABLE_BULLETS,
    COWBOY_SHOOT_THRESHOLD_EXAMPLE, HOWDY_MESSAGE, RIP_MESSAGE, SO_LONG_MESSAGE,
};
use std::fmt;
use tracing::{debug, trace};

/// A cowboy with an age and a stock of bullets.
///
/// Every cowboy speaks through a borrowed [`Console`]: construction greets,
/// shooting bangs, and dropping the cowboy prints his epitaph.
pub struct Cowboy<'c> {
    age: i32,
    available_bullets: i32,
    console: &'c dyn Console,
}

impl<'c> Cowboy<'c> {
    /// Creates a cowboy with the default age and bullets. Says "I am alive!".
    pub fn new(console: &'c dyn Console) -> Self {
        debug!("A cowboy is born");
        console.say(ALIVE_MESSAGE);
        Self {
            age: COWBOY_DEFAULT_AGE,
            available_bullets: COWBOY_DEFAULT_AVAILABLE_BULLETS,
            console,
        }
    }

    /// Creates a cowboy with the given number of bullets. Says "Howdy!".
    ///
    /// Any count is accepted, including zero and negative ones.
    pub fn with_bullets(console: &'c dyn Console, available_bullets: i32) -> Self {
        debug!(available_bullets, "A cowboy rides in");
        console.say(HOWDY_MESSAGE);
        Self {
            age: COWBOY_DEFAULT_AGE,
            available_bullets,
            console,
        }
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn available_bullets(&self) -> i32 {
        self.available_bullets
    }

    /// Ages the cowboy by one year and fires 26 bangs.
    ///
    /// The target only shows up in logs.
    pub fn shoot(&mut self, target_name: &str) {
        self.age += 1;

        let arbitrary_number = 5 + (7 * 3);
        debug!(target_name, age = self.age, "Shooting");

        self.print_bangs(arbitrary_number);

        if arbitrary_number > COWBOY_SHOOT_THRESHOLD_EXAMPLE {
            return;
        }

        // Unreachable while `arbitrary_number` stays above the threshold.
        match self.age {
            COWBOY_DEFAULT_AGE => self.age -= 1,
            _ => self.age += 1,
        }
    }

    pub(crate) fn print_bangs(&self, number_of_bangs_to_print: i32) {
        print_bangs(self.console, number_of_bangs_to_print);
    }
}

impl fmt::Debug for Cowboy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cowboy")
            .field("age", &self.age)
            .field("available_bullets", &self.available_bullets)
            .finish_non_exhaustive()
    }
}

impl Drop for Cowboy<'_> {
    fn drop(&mut self) {
        trace!(age = self.age, "A cowboy falls");
        self.console.say(RIP_MESSAGE);
    }
}

/// Says "Bang!" once per requested bang. Nothing happens for `n <= 0`.
pub fn print_bangs(console: &dyn Console, number_of_bangs_to_print: i32) {
    for _ in 0..number_of_bangs_to_print {
        console.say(BANG_MESSAGE);
    }
}

#[allow(clippy::too_many_arguments)]
pub fn some_very_long_method(
    console: &dyn Console,
    _param1: i32,
    _param2: i32,
    _param3: i32,
    _param4: i32,
    _param5: i32,
    _param6: i32,
    _param7: i32,
    _param8: i32,
    _param9: i32,
    _param10: i32,
) {
    console.say(SO_LONG_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_cowboy_is_alive() {
        let console = RecordingConsole::new();
        {
            let cowboy = Cowboy::new(&console);
            assert_eq!(cowboy.age(), 45);
            assert_eq!(cowboy.available_bullets(), 2);
            assert_eq!(console.lines(), vec!["I am alive!"]);
        }
        assert_eq!(console.lines(), vec!["I am alive!", "RIP"]);
    }

    #[test]
    fn bullets_are_taken_as_given() {
        let console = RecordingConsole::new();
        for bullets in [-7, 0, 2, i32::MAX] {
            let cowboy = Cowboy::with_bullets(&console, bullets);
            assert_eq!(cowboy.available_bullets(), bullets);
            assert_eq!(cowboy.age(), 45);
        }
        assert_eq!(console.count("Howdy!"), 4);
        assert_eq!(console.count("RIP"), 4);
    }

    #[test]
    fn private_print_bangs_uses_own_console() {
        let console = RecordingConsole::new();
        let cowboy = Cowboy::new(&console);
        cowboy.print_bangs(3);
        assert_eq!(console.count("Bang!"), 3);
    }

    #[test]
    fn shoot_ages_by_exactly_one() {
        let console = RecordingConsole::new();
        let mut cowboy = Cowboy::new(&console);
        cowboy.shoot("yourself");
        assert_eq!(cowboy.age(), 46);
        cowboy.shoot("");
        assert_eq!(cowboy.age(), 47);
        assert_eq!(console.count("Bang!"), 52);
    }

    #[test]
    fn long_method_says_so_long() {
        let console = RecordingConsole::new();
        some_very_long_method(&console, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
        assert_eq!(console.lines(), vec!["So long..."]);
    }
}
