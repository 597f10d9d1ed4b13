//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - `|` line comments
//! - `string` - String literals
//! - `number` - Integer, hexadecimal, decimal and exponent literals
//! - `identifier` - Identifiers (dots allowed)
//! - `punctuation` - Single-character punctuation

mod comment;
mod core;
mod identifier;
mod number;
mod punctuation;
mod string;

pub use self::core::Lexer;
