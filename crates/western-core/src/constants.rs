//! Fixed values shared by every cowboy.

pub const COWBOY_DEFAULT_AGE: i32 = 45;
pub const COWBOY_DEFAULT_AVAILABLE_BULLETS: i32 = 2;
pub const COWBOY_SHOOT_THRESHOLD_EXAMPLE: i32 = 10;

pub const ALIVE_MESSAGE: &str = "I am alive!";
pub const HOWDY_MESSAGE: &str = "Howdy!";
pub const RIP_MESSAGE: &str = "RIP";
pub const BANG_MESSAGE: &str = "Bang!";
pub const SO_LONG_MESSAGE: &str = "So long...";
