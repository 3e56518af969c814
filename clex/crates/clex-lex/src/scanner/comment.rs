//! Comment regions.
//!
//! Comment text is consumed and discarded; it never reaches the buffer.
//! An unterminated comment simply swallows the rest of the input.

use super::core::{ScanMode, Scanner};

impl<'a> Scanner<'a> {
    /// Enters a comment if the cursor sits on `/*` or `//`.
    ///
    /// The pending buffer is flushed first, so `a/*x*/b` yields `a` and `b`.
    pub(super) fn try_open_comment(&mut self) -> bool {
        let mode = if self.cursor.starts_with("/*") {
            ScanMode::BlockComment
        } else if self.cursor.starts_with("//") {
            ScanMode::LineComment
        } else {
            return false;
        };

        self.flush();
        self.enter(mode);
        self.cursor.advance_n(2);
        true
    }

    /// Consumes one character of a comment, or a two-character marker.
    ///
    /// Openers still count inside a comment. `/*` inside a line comment
    /// stops the newline from ending it, and `//` inside a block comment
    /// keeps discarding text after the `*/` until the end of that line.
    pub(super) fn scan_comment_char(&mut self, c: char) {
        let in_block = matches!(self.mode, ScanMode::BlockComment | ScanMode::BlockAndLineComment);
        let in_line = matches!(self.mode, ScanMode::LineComment | ScanMode::BlockAndLineComment);

        let (block, line, width) = if self.cursor.starts_with("/*") {
            (true, in_line, 2)
        } else if in_block && self.cursor.starts_with("*/") {
            (false, in_line, 2)
        } else if self.cursor.starts_with("//") {
            (in_block, true, 2)
        } else if !in_block && c == '\n' {
            (false, false, 1)
        } else {
            (in_block, in_line, 1)
        };

        self.cursor.advance_n(width);
        let mode = comment_mode(block, line);
        if mode != self.mode {
            self.enter(mode);
        }
    }
}

fn comment_mode(block: bool, line: bool) -> ScanMode {
    match (block, line) {
        (true, true) => ScanMode::BlockAndLineComment,
        (true, false) => ScanMode::BlockComment,
        (false, true) => ScanMode::LineComment,
        (false, false) => ScanMode::Normal,
    }
}
