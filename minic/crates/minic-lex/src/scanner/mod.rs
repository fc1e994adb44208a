//! Scanner module.
//!
//! The scanner is split into one file per lexeme family, each adding an
//! `impl Scanner` block that advances the shared cursor:
//! - `core` - Scanner struct and dispatch loop
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Numeric constant scanning
//! - `char_constant` - Character constant scanning
//! - `operator` - Longest-match operator scanning
//! - `comment` - Line and block comment scanning

mod char_constant;
mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Scanner;
