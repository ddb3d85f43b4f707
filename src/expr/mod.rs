//! Expression compilation: text in `x` to a callable numeric function.
//!
//! [`compile`] runs a small recursive-descent parser over a closed grammar
//! (numbers, `x`, `+ - * / ^`, unary minus, parentheses, named real
//! functions) and returns a [`CompiledFn`]. Compilation happens once per
//! expression; evaluation is a cheap tree walk with pure-function semantics
//! over `x` and never panics, returning NaN/∞ for out-of-domain input.
//!
//! Supported vocabulary:
//! - operators : `+ - * / ^ ( )`, unary minus, argument comma
//! - variable  : `x`
//! - constants : `pi`, `e`
//! - functions : `sin cos tan asin acos atan sinh cosh tanh`
//!               `exp log log2 log10 sqrt cbrt abs` (arity 1), `pow` (arity 2)
//!
//! An empty (or all-whitespace) expression compiles to the constant zero
//! function.

mod ast;
mod lexer;
mod parser;

use ast::Ast;
use thiserror::Error;

/// Why an expression failed to compile.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at byte {pos}")]
    UnexpectedChar { pos: usize, ch: char },

    #[error("malformed number literal '{lexeme}'")]
    BadNumber { lexeme: String },

    #[error("unexpected token '{got}'")]
    UnexpectedToken { got: String },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },

    #[error("{name} takes {expected} argument(s), got {got}")]
    WrongArity { name: &'static str, expected: usize, got: usize },
}

/// A compiled expression: a pure function `ℝ → ℝ`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFn {
    ast: Ast,
}

impl CompiledFn {
    /// Evaluates the expression at `x`. Total: domain errors come back as
    /// NaN or ±∞, never as a panic.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.ast.eval(x)
    }
}

/// Compiles `text` into a [`CompiledFn`].
///
/// # Errors
/// Returns a [`ParseError`] describing the first offending character, token,
/// identifier, or arity mismatch.
pub fn compile(text: &str) -> Result<CompiledFn, ParseError> {
    if text.trim().is_empty() {
        return Ok(CompiledFn { ast: Ast::Num(0.0) });
    }
    let tokens = lexer::tokenize(text)?;
    let ast = parser::parse(&tokens)?;
    Ok(CompiledFn { ast })
}
