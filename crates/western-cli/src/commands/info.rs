//! Information command implementation

use crate::{config::CliConfig, Result};
use clap::Args;
use console::style;
use std::io::Write;
use western_core::constants::{
    COWBOY_DEFAULT_AGE, COWBOY_DEFAULT_AVAILABLE_BULLETS, COWBOY_SHOOT_THRESHOLD_EXAMPLE,
};

/// Arguments for the info command
#[derive(Debug, Clone, Default, Args)]
pub struct InfoArgs {
    /// Also show the cowboy defaults and the active configuration
    #[arg(long)]
    pub all: bool,
}

/// Execute the info command
pub fn info_command(args: InfoArgs, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_info(&mut out, &args, config)
}

/// Write the info report to any writer; a failed write is a `CliError::Io`
pub fn write_info(out: &mut impl Write, args: &InfoArgs, config: &CliConfig) -> Result<()> {
    writeln!(out, "{}", style("western").cyan().bold())?;
    writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{}", style("Two cowboys ride in, one shoots, both fall").dim())?;
    writeln!(out)?;

    if args.all {
        write_defaults(out)?;
        write_config(out, config)?;
    }

    writeln!(out, "Use {} for help", style("western --help").green())?;
    Ok(())
}

fn write_defaults(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", style("Cowboy Defaults").yellow().bold())?;
    writeln!(out, "  Age: {}", COWBOY_DEFAULT_AGE)?;
    writeln!(out, "  Bullets: {}", COWBOY_DEFAULT_AVAILABLE_BULLETS)?;
    writeln!(out, "  Shoot threshold: {}", COWBOY_SHOOT_THRESHOLD_EXAMPLE)?;
    writeln!(out)?;
    Ok(())
}

fn write_config(out: &mut impl Write, config: &CliConfig) -> Result<()> {
    writeln!(out, "{}", style("Configuration").green().bold())?;
    writeln!(out, "  Log level: {}", config.logging.level.as_filter())?;
    writeln!(out, "  Log format: {:?}", config.logging.format)?;
    writeln!(out, "  Announce: {}", config.showdown.announce)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn all_includes_defaults_and_config() {
        let mut out = Vec::new();
        write_info(&mut out, &InfoArgs { all: true }, &CliConfig::default()).unwrap();

        let text = console::strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string();
        assert!(text.contains("Version: "));
        assert!(text.contains("Age: 45"));
        assert!(text.contains("Log level: warn"));
    }

    #[test]
    fn closed_pipe_is_an_io_error() {
        let err = write_info(&mut ClosedPipe, &InfoArgs::default(), &CliConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
