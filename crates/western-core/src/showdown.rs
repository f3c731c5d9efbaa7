use crate::console::Console;
use crate::cowboy::Cowboy;
use tracing::debug;

/// Runs the fixed showdown: Amy and Angus ride in, Amy shoots, both fall.
///
/// Returns Amy's age right after the shot. Angus falls before Amy because
/// locals drop in reverse order of declaration.
pub fn run_showdown(console: &dyn Console) -> i32 {
    let mut amy = Cowboy::new(console);
    let _angus = Cowboy::with_bullets(console, 2);

    let current_cowboy = &mut amy;
    current_cowboy.shoot("yourself");

    let final_age = amy.age();
    debug!(final_age, "Showdown finished");
    final_age
}
