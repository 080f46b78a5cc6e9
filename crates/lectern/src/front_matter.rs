//! YAML front matter for the slides output.
//!
//! The external deck renderer reads a `---` delimited YAML header ahead
//! of the slides markdown. The splitter never sees this; it is attached
//! by the CLI after splitting.

use serde::Serialize;

/// Front-matter header for a generated slides file.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FrontMatter {
    /// Marks the file for the Marp toolchain.
    pub marp: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub paginate: bool,
}

impl FrontMatter {
    /// Render the `---` delimited header, ready to prepend.
    pub(crate) fn render(&self) -> Result<String, serde_yaml::Error> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{yaml}---\n\n"))
    }
}

/// Extract a title from the first `#` heading, if any.
pub(crate) fn extract_title(markdown: &str) -> Option<String> {
    markdown.lines().find_map(|line| {
        let trimmed = line.trim_start();
        trimmed
            .strip_prefix("# ")
            .map(|title| title.trim().to_owned())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_minimal() {
        let fm = FrontMatter {
            marp: true,
            title: None,
            theme: None,
            paginate: true,
        };
        assert_eq!(fm.render().unwrap(), "---\nmarp: true\npaginate: true\n---\n\n");
    }

    #[test]
    fn test_render_full() {
        let fm = FrontMatter {
            marp: true,
            title: Some("Sorting Algorithms".to_owned()),
            theme: Some("gaia".to_owned()),
            paginate: false,
        };
        let rendered = fm.render().unwrap();
        assert!(rendered.starts_with("---\n"));
        assert!(rendered.contains("title: Sorting Algorithms\n"));
        assert!(rendered.contains("theme: gaia\n"));
        assert!(rendered.ends_with("---\n\n"));
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("intro\n# Graphs\n## Subheading"),
            Some("Graphs".to_owned())
        );
        assert_eq!(extract_title("## only h2\nbody"), None);
        assert_eq!(extract_title(""), None);
    }
}
