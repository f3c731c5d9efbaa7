//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::Diagnostic;
use thiserror::Error;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// Rich diagnostics for errors that carry source text
#[derive(Error, Debug, Diagnostic)]
pub enum WesternDiagnostic {
    #[error("Invalid configuration file {path}: {message}")]
    #[diagnostic(
        code(western::config),
        help("Check western.toml against the [logging] and [showdown] tables")
    )]
    ConfigError {
        path: String,
        #[source_code]
        src: String,
        #[label("error occurred here")]
        err_span: Option<miette::SourceSpan>,
        message: String,
    },
}

/// Convert a CLI error into a rich diagnostic when it carries source text
pub fn to_diagnostic(error: &CliError) -> Option<WesternDiagnostic> {
    match error {
        CliError::ConfigParse {
            path,
            src,
            span,
            message,
        } => Some(WesternDiagnostic::ConfigError {
            path: path.display().to_string(),
            src: src.clone(),
            err_span: span.clone().map(miette::SourceSpan::from),
            message: message.clone(),
        }),
        _ => None,
    }
}

/// Render a CLI error through miette if it has a rich form.
///
/// Returns `false` when the caller should report the error itself.
pub fn render_cli_error(error: &CliError) -> bool {
    match to_diagnostic(error) {
        Some(diagnostic) => {
            eprintln!("{:?}", miette::Report::new(diagnostic));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_errors_become_diagnostics() {
        let error = CliError::ConfigParse {
            path: PathBuf::from("western.toml"),
            src: "level = 3".to_string(),
            span: Some(8..9),
            message: "invalid type".to_string(),
        };

        let diagnostic = to_diagnostic(&error).unwrap();
        assert_eq!(
            diagnostic.code().map(|c| c.to_string()),
            Some("western::config".to_string())
        );
        assert_eq!(diagnostic.labels().map(|l| l.count()), Some(1));
    }

    #[test]
    fn plain_errors_stay_plain() {
        let error = CliError::InvalidInput("nope".to_string());
        assert!(to_diagnostic(&error).is_none());
    }
}
