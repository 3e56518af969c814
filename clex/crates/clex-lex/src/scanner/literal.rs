//! String and character literal regions.
//!
//! Inside a literal every character is collected verbatim. A quote counts
//! as a boundary unless the character right before it is a backslash; runs
//! of backslashes are not counted, so `"a\\"` stays open after its last
//! quote.

use super::core::{ScanMode, Scanner};
use crate::token::TokenCategory;

impl<'a> Scanner<'a> {
    /// True if the character under the cursor follows a backslash.
    fn is_escaped(&self) -> bool {
        self.cursor.previous_char() == Some('\\')
    }

    /// Opens a literal if `c` is an unescaped quote.
    pub(super) fn try_open_literal(&mut self, c: char) -> bool {
        let mode = match c {
            '"' => ScanMode::StringLiteral,
            '\'' => ScanMode::CharLiteral,
            _ => return false,
        };
        if self.is_escaped() {
            return false;
        }

        self.flush();
        self.buffer.push(c);
        self.enter(mode);
        self.cursor.advance();
        true
    }

    /// Collects one literal character, closing the literal on its quote.
    pub(super) fn scan_literal_char(&mut self, c: char) {
        let (quote, category) = match self.mode {
            ScanMode::StringLiteral => ('"', TokenCategory::StringLiteral),
            _ => ('\'', TokenCategory::CharLiteral),
        };
        let closes = c == quote && !self.is_escaped();

        self.buffer.push(c);
        self.cursor.advance();

        if closes {
            let lexeme = std::mem::take(&mut self.buffer);
            self.emit(category, lexeme);
            self.enter(ScanMode::Normal);
        }
    }
}
