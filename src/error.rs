//! Errors produced by the individual stages of the truth table pipeline.
//!
//! Each stage has its own error type. `EngineError` wraps all of them so that
//! `generate_table` can propagate a stage failure verbatim using `?`.

use crate::Variable;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The input contains a character which is not a variable, operator, parenthesis or whitespace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexError {
    pub character: char,
    /// Index of the offending character (in characters, not bytes).
    pub position: usize,
}

/// The token sequence does not form a valid formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub reason: String,
    /// Character position of the offending token. Premature end of input is reported
    /// one past the last token.
    pub position: usize,
}

/// The expression references a variable that is not covered by the assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvalError {
    pub variable: Variable,
}

/// The formula references more distinct variables than allowed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TooManyVariablesError {
    pub count: usize,
    pub limit: usize,
}

/// Any failure of `generate_table`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
    TooManyVariables(TooManyVariablesError),
}

impl LexError {
    pub fn new(character: char, position: usize) -> LexError {
        LexError {
            character,
            position,
        }
    }
}

impl ParseError {
    pub fn new<S: Into<String>>(reason: S, position: usize) -> ParseError {
        ParseError {
            reason: reason.into(),
            position,
        }
    }
}

impl EvalError {
    pub fn new(variable: Variable) -> EvalError {
        EvalError { variable }
    }
}

impl TooManyVariablesError {
    pub fn new(count: usize, limit: usize) -> TooManyVariablesError {
        TooManyVariablesError { count, limit }
    }
}

impl EngineError {
    /// Character position of the problem in the input, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            EngineError::Lex(e) => Some(e.position),
            EngineError::Parse(e) => Some(e.position),
            EngineError::Eval(_) | EngineError::TooManyVariables(_) => None,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unexpected character {:?} at position {}.",
            self.character, self.position
        )
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at position {})", self.reason, self.position)
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Variable {} is not assigned.", self.variable)
    }
}

impl Display for TooManyVariablesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Formula has {} variables, but at most {} are allowed.",
            self.count, self.limit
        )
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Lex(e) => write!(f, "Lexical error: {}", e),
            EngineError::Parse(e) => write!(f, "Parse error: {}", e),
            EngineError::Eval(e) => write!(f, "Evaluation error: {}", e),
            EngineError::TooManyVariables(e) => write!(f, "{}", e),
        }
    }
}

impl Error for LexError {}
impl Error for ParseError {}
impl Error for EvalError {}
impl Error for TooManyVariablesError {}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Lex(e) => Some(e),
            EngineError::Parse(e) => Some(e),
            EngineError::Eval(e) => Some(e),
            EngineError::TooManyVariables(e) => Some(e),
        }
    }
}

impl From<LexError> for EngineError {
    fn from(value: LexError) -> Self {
        EngineError::Lex(value)
    }
}

impl From<ParseError> for EngineError {
    fn from(value: ParseError) -> Self {
        EngineError::Parse(value)
    }
}

impl From<EvalError> for EngineError {
    fn from(value: EvalError) -> Self {
        EngineError::Eval(value)
    }
}

impl From<TooManyVariablesError> for EngineError {
    fn from(value: TooManyVariablesError) -> Self {
        EngineError::TooManyVariables(value)
    }
}
