//! `lectern check` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::commands::split::report_diagnostics;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to the annotated lecture markdown file.
    input: PathBuf,

    /// Print diagnostics as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, or a validation
    /// error when any structure warning or malformed directive was
    /// found, so CI can fail on imperfect directive usage.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let document = std::fs::read_to_string(&self.input).map_err(|source| CliError::Read {
            path: self.input.clone(),
            source,
        })?;

        let result = lectern_splitter::split(&document);
        let diagnostics = &result.diagnostics;

        if self.json {
            // Diagnostics only; the streams are not check's business
            let json = serde_json::to_string_pretty(diagnostics)?;
            output.stdout(&json);
        } else {
            report_diagnostics(output, &result);
        }

        if diagnostics.is_clean() {
            if !self.json {
                output.success(&format!("{}: no directive problems", self.input.display()));
            }
            Ok(())
        } else {
            let count =
                diagnostics.structure_warnings.len() + diagnostics.malformed_directives.len();
            Err(CliError::Validation(format!(
                "{count} directive problem(s) in {}",
                self.input.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str, json: bool) -> Result<(), CliError> {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lecture.md");
        std::fs::write(&input, content).unwrap();
        CheckArgs { input, json }.execute(&Output::new())
    }

    #[test]
    fn test_clean_document_passes() {
        let doc = "a\n<!-- SLIDE-ONLY -->\nb\n<!-- ALL -->\nc";
        assert!(check(doc, false).is_ok());
    }

    #[test]
    fn test_anomalies_fail() {
        let result = check("<!-- ALL -->\nfoo", false);
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_malformed_fails() {
        let result = check("<!-- SLIDE-OLNY -->\nfoo", true);
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_missing_input() {
        let result = CheckArgs {
            input: PathBuf::from("/nonexistent/lecture.md"),
            json: false,
        }
        .execute(&Output::new());
        assert!(matches!(result, Err(CliError::Read { .. })));
    }
}
