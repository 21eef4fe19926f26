//! Expressions are simple structures that represent propositional formulas explicitly.
//!
//! They can be parsed from a string representation (using `TryFrom` or `FromStr`) and
//! evaluated in an `Assignment`:
//!
//! ```rust
//! use std::convert::TryFrom;
//! use tgent::*;
//!
//! let formula = Expression::try_from("~(A ∧ B) ⊕ C").unwrap();
//! let assignment = Assignment::from_values(&[
//!     (Variable::new('A'), true),
//!     (Variable::new('B'), true),
//!     (Variable::new('C'), false),
//! ]);
//! assert!(!formula.eval_in(&assignment).unwrap());
//! ```

use crate::Variable;

/// **(internal)** Character-level tokenizer for expressions.
mod _impl_tokenizer;

/// **(internal)** Shunting-yard parser for token sequences.
mod _impl_parser;

/// **(internal)** Implements expression evaluation and some utility methods.
mod _impl_expression;

pub use _impl_parser::parse;
pub use _impl_tokenizer::tokenize;

/// Binary connectives of the expression language.
///
/// `Xor` and `SymDiff` denote the same truth function, they only differ in notation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    SymDiff,
}

/// Tokens that can appear in an expression string. Each token corresponds to exactly
/// one (non-whitespace) character of the input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Variable(Variable), // 'A'..='Z'
    Operator(BinaryOp), // '∧', '∨', '⊕', '△'
    Not,                // '~'
    LParen,             // '('
    RParen,             // ')'
}

/// Recursive type for the expression tree.
///
/// Evaluation, printing, comparison and dropping walk the tree with an explicit stack,
/// so arbitrarily deep trees are safe. The derived `Clone` and `Debug` are recursive.
#[derive(Clone, Debug)]
pub enum Expression {
    Variable(Variable),
    Negation(Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
}
