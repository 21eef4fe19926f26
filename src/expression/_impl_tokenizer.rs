use super::{BinaryOp, Token};
use crate::{LexError, Variable};
use std::fmt::{Display, Error, Formatter};

impl Token {
    /// Map a single input character to its token. Whitespace and unknown characters
    /// produce `None`.
    pub fn from_char(c: char) -> Option<Token> {
        let token = match c {
            '∧' | '&' => Token::Operator(BinaryOp::And),
            '∨' | '|' => Token::Operator(BinaryOp::Or),
            '⊕' | '^' => Token::Operator(BinaryOp::Xor),
            '△' => Token::Operator(BinaryOp::SymDiff),
            '~' | '!' | '¬' => Token::Not,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c => Token::Variable(Variable::try_from_char(c)?),
        };
        Some(token)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Token::Variable(var) => write!(f, "{}", var),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Not => write!(f, "~"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Turn a raw expression string into a sequence of tokens, each paired with the index
/// of its character in `input`.
///
/// Whitespace is skipped. Any other character that is not a variable, operator or
/// parenthesis results in a `LexError`.
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut output = Vec::new();
    for (position, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        match Token::from_char(c) {
            Some(token) => output.push((token, position)),
            None => return Err(LexError::new(c, position)),
        }
    }
    Ok(output)
}
