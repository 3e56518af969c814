//! Source text acquisition.
//!
//! The scanner works on one in-memory string. This module gets that string
//! from disk, or asks the user which file to read.

use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ClextError, Result};

/// Prompt shown when no path is given on the command line.
pub const PATH_PROMPT: &str = "Enter source file path: ";

/// Reads the file at `path` as newline-terminated lines.
///
/// Invalid UTF-8 is replaced rather than rejected, since the scanner only
/// cares about ASCII structure.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ClextError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!(path = %path.display(), "source is not valid UTF-8; invalid bytes replaced");
            text
        }
    };

    debug!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(terminate_lines(text))
}

/// Ensures the last line ends with a newline, as a line-by-line reader
/// that re-appends `\n` would produce.
pub fn terminate_lines(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Prompts on `output` and reads the first whitespace-delimited word from
/// `input` as a path.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{PATH_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ClextError::MissingPath);
        }
        if let Some(word) = line.split_whitespace().next() {
            return Ok(PathBuf::from(word));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_terminate_lines() {
        assert_eq!(terminate_lines(String::new()), "");
        assert_eq!(terminate_lines("a\nb".to_string()), "a\nb\n");
        assert_eq!(terminate_lines("a\nb\n".to_string()), "a\nb\n");
    }

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prog.c");
        std::fs::write(&path, "int x;").unwrap();

        assert_eq!(read_source(&path).unwrap(), "int x;\n");
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.c");
        std::fs::write(&path, b"char c = '\xe9';\n").unwrap();

        let text = read_source(&path).unwrap();
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_read_missing_source() {
        let err = read_source(Path::new("/nonexistent/prog.c")).unwrap_err();
        assert!(matches!(err, ClextError::SourceUnreadable { .. }));
        assert_eq!(err.to_string(), "Unable to open source file '/nonexistent/prog.c'");
    }

    #[test]
    fn test_prompt_for_path() {
        let mut input = Cursor::new("\n   main.c extra\n");
        let mut output = Vec::new();

        let path = prompt_for_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("main.c"));
        assert_eq!(String::from_utf8(output).unwrap(), PATH_PROMPT);
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut input = Cursor::new("  \n");
        let mut output = Vec::new();

        let err = prompt_for_path(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, ClextError::MissingPath));
    }
}
