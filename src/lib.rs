//! # T-Gen-T
//!
//! This crate computes full truth tables of propositional formulas over single-letter
//! variables (`A` to `Z`). A formula is processed by a small pipeline:
//!
//!  - [`tokenize`] turns the raw string into a sequence of typed `Token`s.
//!  - [`parse`] builds an [`Expression`] tree in a single shunting-yard pass and
//!    collects the sorted [`VariableSet`] of the formula.
//!  - [`evaluate`] reduces an `Expression` to a single `bool` under an [`Assignment`].
//!  - [`generate_table`] drives the whole pipeline and enumerates every assignment.
//!
//! Operators (from the loosest to the tightest binding) are `∨` (or), `⊕`/`△` (xor and
//! symmetric difference, which denote the same function) and `∧` (and). The prefix
//! negation `~` binds tighter than any binary operator and all binary operators are left
//! associative. ASCII aliases `|`, `^`, `&` and `!` are also accepted.
//!
//! ```rust
//! use tgent::*;
//!
//! let table = generate_table("~A ∨ B").unwrap();
//! assert_eq!(2, table.variables().len());
//! assert_eq!(vec![true, true, false, true], table.results());
//!
//! let (expression, variables) = parse(&tokenize("A ⊕ (B ∧ C)").unwrap()).unwrap();
//! assert_eq!("(A ⊕ (B ∧ C))", expression.to_string());
//! assert_eq!(3, variables.len());
//! ```
//!

pub mod error;
pub mod expression;

/// **(internal)** Implementation of the `Variable`.
mod _impl_variable;

/// **(internal)** Implementation of the `VariableSet`.
mod _impl_variable_set;

/// **(internal)** Implementation of the `Assignment`.
mod _impl_assignment;

/// **(internal)** Implementation of the `AssignmentIterator`.
mod _impl_assignment_iterator;

/// **(internal)** Implementation of the `TruthTable` and `TruthTableRow`.
mod _impl_truth_table;

/// **(internal)** Implementation of the `TruthTableBuilder`.
mod _impl_truth_table_builder;


/// Several basic utility methods for testing truth tables.
#[cfg(test)]
mod _test_util;

pub use error::{EngineError, EvalError, LexError, ParseError, TooManyVariablesError};
pub use expression::{parse, tokenize, BinaryOp, Expression, Token};
use std::sync::Arc;

/// The largest number of distinct variables a formula can reference (one per letter).
pub const MAX_VARIABLES: usize = 26;

/// A propositional variable, identified by a single uppercase ASCII letter.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(char);

/// Ordered set of distinct variables, sorted ascending by their letter.
///
/// The position of a variable in the set is its *ordinal*. In a `TruthTable`, the variable
/// with ordinal `0` is the most significant bit of the row index.
///
/// The variables are kept behind a shared pointer: cloning a set (for example, into every
/// `Assignment` of a `TruthTable`) does not copy them.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct VariableSet(Arc<Vec<Variable>>);

/// Exactly describes one assignment of boolean values to the variables of a `VariableSet`.
///
/// Values are stored in the order of the variable set, so `values[i]` belongs to the
/// variable with ordinal `i`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Assignment {
    variables: VariableSet,
    values: Vec<bool>,
}

/// Exhaustively iterates over all assignments of a `VariableSet` in ascending binary order
/// (the first assignment is all-false, the last is all-true).
///
/// Be aware of the exponential number of iterations!
#[derive(Clone)]
pub struct AssignmentIterator {
    next_assignment: Option<Assignment>,
}

/// One row of a `TruthTable`: the input assignment and the value of the formula under it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TruthTableRow {
    assignment: Assignment,
    result: bool,
}

/// The full enumeration of a formula: its variables and exactly `2^n` rows in ascending
/// binary order of their assignments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    variables: VariableSet,
    rows: Vec<TruthTableRow>,
}

/// Used to configure and run truth table generation.
///
/// At the moment, the only option is the upper bound on the number of variables, which
/// a caller can use to refuse formulas whose table would be too large to be useful.
#[derive(Clone, Debug)]
pub struct TruthTableBuilder {
    max_variables: usize,
}

/// Tokenize, parse and fully enumerate the given formula.
///
/// This is the same as `TruthTableBuilder::default().build(expression)`.
pub fn generate_table(expression: &str) -> Result<TruthTable, EngineError> {
    TruthTableBuilder::default().build(expression)
}

/// Evaluate the `expression` in the given `assignment`.
///
/// Fails with an `EvalError` if the expression references a variable which the
/// assignment does not cover.
pub fn evaluate(expression: &Expression, assignment: &Assignment) -> Result<bool, EvalError> {
    expression.eval_in(assignment)
}
