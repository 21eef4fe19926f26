//!
//! Parsing is an operator precedence (shunting-yard) pass over the token sequence which
//! keeps its state in two explicit stacks: finished operands and pending operators. This
//! way, the nesting depth of a formula is limited only by available memory, not by the
//! call stack.
//!
//! Binary operators are ordered by precedence: `∨` (1), then `⊕`/`△` (2), then `∧` (3).
//! A pending binary operator is reduced once an operator of the same or lower precedence
//! follows, hence all binary operators are left associative. Prefix negation binds
//! tighter than any binary operator and is reduced as soon as its operand is complete.
//!
//! Every variable the parser meets is recorded, and once the whole tree is built, the
//! recorded variables form the sorted `VariableSet` of the formula.

use super::{BinaryOp, Expression, Token};
use crate::{ParseError, Variable, VariableSet};
use fxhash::FxHashSet;
use log::debug;

/// Parse a sequence of positioned tokens (as produced by `tokenize`) into an `Expression`
/// together with the set of variables it references.
///
/// Fails with `ParseError` if the sequence is empty, the parentheses are unbalanced, an
/// operator lacks one of its operands, or two operands are not separated by an operator.
pub fn parse(tokens: &[(Token, usize)]) -> Result<(Expression, VariableSet), ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::new("Expected formula, found nothing.", 0));
    }

    let mut parser = Parser::new(tokens);
    for (token, position) in tokens.iter().cloned() {
        if parser.expect_operand {
            parser.operand_token(token, position)?;
        } else {
            parser.operator_token(token, position)?;
        }
    }
    let expression = parser.finish()?;

    let variables: VariableSet = parser.variables.into_iter().collect();
    if variables.is_empty() {
        // Every terminal is a variable, so a tree without variables cannot really be built.
        return Err(ParseError::new("Formula has no variables.", 0));
    }
    debug!(
        "parse(tokens = {}) => {}, variables = {}",
        tokens.len(),
        expression,
        variables
    );
    Ok((expression, variables))
}

/// **(internal)** An operator which still waits for (some of) its operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Pending {
    Not,
    Binary(BinaryOp),
    /// An open parenthesis and its position.
    Group(usize),
}

/// **(internal)** State of the shunting-yard pass, including the encountered variables.
struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    operands: Vec<Expression>,
    operators: Vec<Pending>,
    /// True at the start and after an operator or `(`, false after a complete operand.
    expect_operand: bool,
    variables: FxHashSet<Variable>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [(Token, usize)]) -> Parser<'a> {
        Parser {
            tokens,
            operands: Vec::new(),
            operators: Vec::new(),
            expect_operand: true,
            variables: FxHashSet::default(),
        }
    }

    /// Position reported for errors at the end of input: one past the last token.
    fn end_position(&self) -> usize {
        self.tokens.last().map(|(_, p)| p + 1).unwrap_or(0)
    }

    /// **(internal)** Handle a token in a place where an operand must start.
    fn operand_token(&mut self, token: Token, position: usize) -> Result<(), ParseError> {
        match token {
            Token::Variable(var) => {
                self.variables.insert(var);
                self.operands.push(Expression::Variable(var));
                self.operand_complete();
            }
            Token::Not => self.operators.push(Pending::Not),
            Token::LParen => self.operators.push(Pending::Group(position)),
            Token::Operator(_) | Token::RParen => {
                return Err(ParseError::new(
                    format!("Expected variable or (...), found '{}'.", token),
                    position,
                ));
            }
        }
        Ok(())
    }

    /// **(internal)** Handle a token which follows a complete operand.
    fn operator_token(&mut self, token: Token, position: usize) -> Result<(), ParseError> {
        match token {
            Token::Operator(op) => {
                while let Some(Pending::Binary(top)) = self.operators.last().cloned() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    self.operators.pop();
                    self.reduce(Pending::Binary(top));
                }
                self.operators.push(Pending::Binary(op));
                self.expect_operand = true;
            }
            Token::RParen => {
                loop {
                    match self.operators.pop() {
                        Some(Pending::Group(_)) => break,
                        Some(pending) => self.reduce(pending),
                        None => {
                            return Err(ParseError::new(
                                "Unexpected ')' without a matching '('.",
                                position,
                            ));
                        }
                    }
                }
                self.operand_complete();
            }
            Token::Variable(_) | Token::Not | Token::LParen => {
                let in_group = self
                    .operators
                    .iter()
                    .any(|p| matches!(p, Pending::Group(_)));
                let reason = if in_group {
                    format!("Expected operator or ')', found '{}'.", token)
                } else {
                    format!("Expected operator, found '{}'.", token)
                };
                return Err(ParseError::new(reason, position));
            }
        }
        Ok(())
    }

    /// **(internal)** An operand has been pushed: apply the negations directly in front of it.
    fn operand_complete(&mut self) {
        while self.operators.last() == Some(&Pending::Not) {
            self.operators.pop();
            self.reduce(Pending::Not);
        }
        self.expect_operand = false;
    }

    /// **(internal)** Replace the top operand(s) with the application of `pending`.
    fn reduce(&mut self, pending: Pending) {
        match pending {
            Pending::Not => match self.operands.pop() {
                Some(inner) => self.operands.push(Expression::negation(inner)),
                None => unreachable!("Negation reduced without an operand."),
            },
            Pending::Binary(op) => match (self.operands.pop(), self.operands.pop()) {
                (Some(right), Some(left)) => {
                    self.operands.push(Expression::binary(op, left, right))
                }
                _ => unreachable!("Operator {} reduced without two operands.", op),
            },
            Pending::Group(_) => unreachable!("Parenthesis reduced as an operator."),
        }
    }

    /// **(internal)** Reduce everything that is still pending once the input is exhausted.
    fn finish(&mut self) -> Result<Expression, ParseError> {
        if self.expect_operand {
            return Err(ParseError::new(
                "Expected variable or (...), found end of input.",
                self.end_position(),
            ));
        }
        while let Some(pending) = self.operators.pop() {
            if let Pending::Group(open_position) = pending {
                return Err(ParseError::new(
                    format!("Expected ')' closing '(' at position {}.", open_position),
                    self.end_position(),
                ));
            }
            self.reduce(pending);
        }
        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(expression), true) => Ok(expression),
            _ => unreachable!("Parsing finished with an unbalanced operand stack."),
        }
    }
}
