//! Operator recognition.
//!
//! Operators are matched eagerly: once a character starts an operator the
//! scanner keeps extending it while the longer text is still an operator,
//! up to the longest operator in the tables.

use super::core::Scanner;
use crate::token::TokenCategory;

impl<'a> Scanner<'a> {
    /// Emits an operator starting at `c`, if `c` starts one.
    pub(super) fn try_scan_operator(&mut self, c: char) -> bool {
        let mut op = String::from(c);
        if !self.tables.is_operator(&op) {
            return false;
        }

        self.flush();
        self.cursor.advance();

        let max_len = self.tables.max_operator_len();
        let mut len = 1;
        while len < max_len && !self.cursor.is_at_end() {
            op.push(self.cursor.current_char());
            if !self.tables.is_operator(&op) {
                op.pop();
                break;
            }
            self.cursor.advance();
            len += 1;
        }

        let category = if self.tables.is_arithmetic(&op) {
            TokenCategory::Arithmetic
        } else {
            TokenCategory::Comparator
        };
        self.emit(category, op);
        true
    }
}
