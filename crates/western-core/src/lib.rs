//! Western Core
//!
//! A `Cowboy` that ages every time it shoots and says goodbye when it goes
//! out of scope, plus the fixed showdown that drives it. All output flows
//! through the [`Console`] seam so it can be printed or recorded.

pub mod console;
pub mod constants;
pub mod cowboy;
pub mod error;
pub mod hand;
pub mod showdown;

pub use console::{Console, RecordingConsole, StdoutConsole};
pub use cowboy::{print_bangs, some_very_long_method, Cowboy};
pub use error::{Result, WesternError};
pub use hand::ShootingHand;
pub use showdown::run_showdown;
