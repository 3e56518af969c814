//! Scanner module.
//!
//! The scanner is split by concern:
//! - `core` - Scanner struct, mode dispatch, buffer flushing
//! - `comment` - Line and block comment regions
//! - `literal` - String and character literal regions
//! - `operator` - Operator recognition with lookahead

mod comment;
mod core;
mod literal;
mod operator;

pub use self::core::{tokenize, tokenize_c, ScanMode, Scanner};
