//! Rendering of the paired output artifacts.
//!
//! One module per artifact, like one format module per output file type.
//! Both renderers walk [`crate::SectionRegistry::iter`] and
//! [`crate::Section::iter`] independently; because that enumeration is the
//! single source of ordering, the aggregate and field names in the two
//! artifacts always correspond byte for byte.

pub mod header;
pub mod implementation;

use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;

use crate::error::Error;

/// Notice stamped at the top of both artifacts.
pub(crate) const GENERATED_FILE_BANNER: &str = indoc! {"
    // This file is automatically generated by xcresgen.
    // Do not edit it manually, as your changes will be overwritten.
"};

/// The rendered artifact pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Declaration text (`.h`).
    pub header: String,
    /// Definition text (`.m`).
    pub implementation: String,
}

impl Artifacts {
    /// Writes the pair as `<output_path>.h` and `<output_path>.m`.
    pub fn write_to<P: AsRef<Path>>(&self, output_path: P) -> Result<(), Error> {
        let output_path = output_path.as_ref();
        fs::write(appended_extension(output_path, "h"), &self.header)?;
        fs::write(appended_extension(output_path, "m"), &self.implementation)?;
        Ok(())
    }
}

// Appends, rather than replaces, the extension: `out/R` becomes `out/R.h`.
fn appended_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

/// Accumulates lines at a tracked indentation depth, four spaces per level.
pub(crate) struct CodeBuilder {
    buffer: String,
    depth: usize,
}

impl CodeBuilder {
    pub(crate) fn new() -> Self {
        CodeBuilder {
            buffer: String::new(),
            depth: 0,
        }
    }

    /// Appends raw text without indentation or a trailing newline.
    pub(crate) fn raw(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Appends one line at the current indentation depth.
    pub(crate) fn line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str("    ");
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    /// Runs `body` one indentation level deeper.
    pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    pub(crate) fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_builder_indentation() {
        let mut builder = CodeBuilder::new();
        builder.line("a {");
        builder.indented(|b| {
            b.line("b {");
            b.indented(|c| c.line("c"));
            b.line("}");
        });
        builder.line("}");

        assert_eq!(builder.finish(), "a {\n    b {\n        c\n    }\n}\n");
    }

    #[test]
    fn test_appended_extension() {
        assert_eq!(
            appended_extension(Path::new("out/R"), "h"),
            PathBuf::from("out/R.h")
        );
        assert_eq!(
            appended_extension(Path::new("R.generated"), "m"),
            PathBuf::from("R.generated.m")
        );
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("Resources");

        let artifacts = Artifacts {
            header: "header text\n".to_string(),
            implementation: "impl text\n".to_string(),
        };
        artifacts.write_to(&base).unwrap();

        let header = std::fs::read_to_string(dir.path().join("Resources.h")).unwrap();
        let implementation = std::fs::read_to_string(dir.path().join("Resources.m")).unwrap();
        assert_eq!(header, "header text\n");
        assert_eq!(implementation, "impl text\n");
    }
}
