//! Run command implementation.

use crate::{config::CliConfig, Result};
use clap::Args;
use tracing::{debug, info};
use western_core::{run_showdown, Console, StdoutConsole};

/// Arguments for the run command
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {}

pub fn run_command(_args: RunArgs, config: &CliConfig) -> Result<()> {
    let console = StdoutConsole::new();
    run_with_console(&console, config)
}

/// Run the showdown against any console, honoring the showdown settings
pub fn run_with_console(console: &dyn Console, config: &CliConfig) -> Result<()> {
    debug!("Starting showdown");
    let final_age = run_showdown(console);

    if config.showdown.announce {
        info!("Amy is now {} years old", final_age);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use western_core::RecordingConsole;

    #[test]
    fn announce_does_not_change_output() {
        let quiet = RecordingConsole::new();
        run_with_console(&quiet, &CliConfig::default()).unwrap();

        let mut config = CliConfig::default();
        config.showdown.announce = true;
        let loud = RecordingConsole::new();
        run_with_console(&loud, &config).unwrap();

        assert_eq!(quiet.lines(), loud.lines());
        assert_eq!(loud.len(), 30);
    }
}
