//! bcc-drv - Lexer Driver
//!
//! Reads one bc source file, runs it through [`bcc_lex::Lexer`] and writes
//! every token to an output stream, either as the token's display form or as
//! JSON lines. Tokens are written as they are produced, so everything lexed
//! before an error still reaches the output.

pub mod config;
pub mod error;

use std::io::{Read, Write};
use std::path::Path;

use bcc_lex::{Lexer, Token};
use serde::Serialize;

pub use config::{Config, OutputConfig, OutputFormat, CONFIG_FILE_NAME, DEFAULT_SOURCE};
pub use error::{DriverError, Result};

/// A single driver run over one source file.
#[derive(Debug, Clone)]
pub struct Session {
    /// Settings after command-line overrides.
    pub config: Config,
}

/// What a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tokens written, not counting the end-of-file sentinel.
    pub tokens: usize,
}

/// JSON shape of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    code: i32,
    text: &'a str,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            code: token.kind.code(),
            text: &token.text,
        }
    }
}

impl Session {
    /// Creates a session for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the configured source file and lexes it into `out`.
    ///
    /// The whole file is read up front, so a file that cannot be read is a
    /// [`DriverError::Read`] and never reaches the lexer.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let source = read_source(&self.config.source)?;
        tracing::debug!(path = %self.config.source.display(), bytes = source.len(), "lexing");

        let summary = self.emit(source.as_slice(), out)?;
        tracing::info!(tokens = summary.tokens, "lexing finished");
        Ok(summary)
    }

    /// Lexes `source` and writes each token to `out` in the configured format.
    ///
    /// Stops at the first lexical error; tokens before it have already been
    /// written.
    pub fn emit<R: Read, W: Write>(&self, source: R, out: &mut W) -> Result<RunSummary> {
        let output = &self.config.output;
        let mut lexer = Lexer::new(source);
        let mut summary = RunSummary::default();

        loop {
            let token = lexer.next_token()?;
            if token.is_eof() {
                if output.include_eof {
                    write_token(out, &token, output.format)?;
                }
                break;
            }
            write_token(out, &token, output.format)?;
            summary.tokens += 1;
        }

        out.flush()?;
        Ok(summary)
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes one token followed by a newline.
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", token)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &TokenRecord::from(token))?;
            writeln!(out)?;
        },
    }
    Ok(())
}
