//! `lectern split` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lectern_splitter::SplitResult;

use crate::config::Config;
use crate::error::CliError;
use crate::front_matter::{FrontMatter, extract_title};
use crate::output::Output;

/// Arguments for the split command.
#[derive(Args)]
pub(crate) struct SplitArgs {
    /// Path to the annotated lecture markdown file.
    input: PathBuf,

    /// Output directory (default: next to the input file).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Deck theme written into the slides front matter (overrides config).
    #[arg(long)]
    theme: Option<String>,

    /// Do not prepend YAML front matter to the slides file.
    #[arg(long)]
    no_front_matter: bool,

    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SplitArgs {
    /// Execute the split command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the config is
    /// invalid, or an output file cannot be written. Directive
    /// anomalies are warnings, never errors.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), &self.input)?;

        let document = std::fs::read_to_string(&self.input).map_err(|source| CliError::Read {
            path: self.input.clone(),
            source,
        })?;

        output.info(&format!("Splitting {}...", self.input.display()));
        let result = lectern_splitter::split(&document);
        tracing::info!(
            slides_bytes = result.slides.len(),
            notes_bytes = result.notes.len(),
            "split complete"
        );
        report_diagnostics(output, &result);

        let slides_text = if self.no_front_matter {
            result.slides.clone()
        } else {
            let header = FrontMatter {
                marp: true,
                title: extract_title(&result.slides),
                theme: self.theme.clone().or_else(|| config.slides.theme.clone()),
                paginate: config.slides.paginate,
            }
            .render()?;
            format!("{header}{}", result.slides)
        };

        let out_dir = self.resolve_out_dir(&config);
        let stem = self
            .input
            .file_stem()
            .map_or_else(|| "lecture".to_owned(), |s| s.to_string_lossy().into_owned());
        std::fs::create_dir_all(&out_dir).map_err(|source| CliError::Write {
            path: out_dir.clone(),
            source,
        })?;

        let slides_path = out_dir.join(format!("{stem}.slides.md"));
        let notes_path = out_dir.join(format!("{stem}.notes.md"));
        write_file(&slides_path, &slides_text)?;
        write_file(&notes_path, &result.notes)?;

        output.success(&format!(
            "Wrote {} and {}",
            slides_path.display(),
            notes_path.display()
        ));
        Ok(())
    }

    /// CLI flag wins over config; config paths are relative to the
    /// input file's directory.
    fn resolve_out_dir(&self, config: &Config) -> PathBuf {
        let input_dir = self
            .input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        match (&self.out_dir, &config.output.dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => {
                if dir.is_absolute() {
                    dir.clone()
                } else {
                    input_dir.join(dir)
                }
            }
            (None, None) => input_dir,
        }
    }
}

/// Print structure warnings and malformed-directive suggestions.
pub(crate) fn report_diagnostics(output: &Output, result: &SplitResult) {
    for warning in &result.diagnostics.structure_warnings {
        output.warning(&format!("warning: {warning}"));
    }
    for malformed in &result.diagnostics.malformed_directives {
        output.warning(&format!(
            "warning: line {}: {} is not a directive, did you mean {}?",
            malformed.line, malformed.raw_text, malformed.suggested_correction
        ));
    }
}

fn write_file(path: &Path, text: &str) -> Result<(), CliError> {
    // Keep a trailing newline for downstream tooling
    let text = if text.is_empty() || text.ends_with('\n') {
        text.to_owned()
    } else {
        format!("{text}\n")
    };
    std::fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
