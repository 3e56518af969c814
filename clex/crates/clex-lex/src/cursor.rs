//! Character cursor for traversing source text.
//!
//! The scanner never indexes the source directly. It looks at the current
//! character, peeks one ahead, and asks for the character just consumed
//! when it needs to check for an escaping backslash.

/// A cursor over source text, one character at a time.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// assert_eq!(cursor.previous_char(), Some('i'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// The character immediately before `position`, if any.
    previous: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            previous: None,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead, or `'\0'` past the end.
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Returns the character consumed by the last [`advance`](Self::advance).
    #[inline]
    pub fn previous_char(&self) -> Option<char> {
        self.previous
    }

    /// Consumes one character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.previous = Some(c);
        }
    }

    /// Consumes up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the unconsumed input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Current byte offset into the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed part of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
