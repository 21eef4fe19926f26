use super::BinaryOp::*;
use super::{parse, tokenize, BinaryOp, Expression};
use crate::{Assignment, EngineError, EvalError, Variable, VariableSet};
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};
use std::mem;
use std::str::FromStr;

impl BinaryOp {
    /// Precedence of the loosest binding operator (`∨`).
    pub const MIN_PRECEDENCE: u8 = 1;
    /// Precedence of the tightest binding operator (`∧`).
    pub const MAX_PRECEDENCE: u8 = 3;

    /// Binding strength of this operator, higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Or => 1,
            Xor | SymDiff => 2,
            And => 3,
        }
    }

    /// Apply the truth function of this operator.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            And => left && right,
            Or => left || right,
            Xor | SymDiff => left != right,
        }
    }

    /// The canonical glyph of this operator.
    pub fn glyph(self) -> char {
        match self {
            And => '∧',
            Or => '∨',
            Xor => '⊕',
            SymDiff => '△',
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.glyph())
    }
}

impl Expression {
    pub fn var(variable: Variable) -> Expression {
        Expression::Variable(variable)
    }

    pub fn negation(inner: Expression) -> Expression {
        Expression::Negation(Box::new(inner))
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// Evaluate this expression in the given `Assignment`.
    ///
    /// Both operands of a binary operator are always evaluated, hence a variable missing
    /// from the assignment is reported even if it would not affect the result. Operands
    /// are visited from left to right, so the first missing variable is the one reported.
    pub fn eval_in(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        let mut work = vec![EvalStep::Visit(self)];
        let mut values: Vec<bool> = Vec::new();
        while let Some(step) = work.pop() {
            match step {
                EvalStep::Visit(Expression::Variable(var)) => {
                    let value = assignment.get(*var).ok_or_else(|| EvalError::new(*var))?;
                    values.push(value);
                }
                EvalStep::Visit(Expression::Negation(inner)) => {
                    work.push(EvalStep::Negate);
                    work.push(EvalStep::Visit(inner));
                }
                EvalStep::Visit(Expression::Binary(op, l, r)) => {
                    work.push(EvalStep::Apply(*op));
                    work.push(EvalStep::Visit(r));
                    work.push(EvalStep::Visit(l));
                }
                EvalStep::Negate => match values.last_mut() {
                    Some(value) => *value = !*value,
                    None => unreachable!("Negation evaluated without an operand."),
                },
                EvalStep::Apply(op) => match (values.pop(), values.last_mut()) {
                    (Some(right), Some(left)) => *left = op.apply(*left, right),
                    _ => unreachable!("Operator {} evaluated without two operands.", op),
                },
            }
        }
        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("Evaluation finished without a value."),
        }
    }

    /// The set of variables that appear in this expression.
    pub fn support_set(&self) -> VariableSet {
        let mut variables = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expression::Variable(var) => variables.push(*var),
                Expression::Negation(inner) => stack.push(inner),
                Expression::Binary(_, l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        variables.into_iter().collect()
    }

    /// **(internal)** Move the children of this node to `output`, leaving cheap leaves behind.
    fn detach_children(&mut self, output: &mut Vec<Expression>) {
        match self {
            Expression::Variable(_) => {}
            Expression::Negation(inner) => detach(inner, output),
            Expression::Binary(_, l, r) => {
                detach(l, output);
                detach(r, output);
            }
        }
    }
}

/// **(internal)** Leaves are dropped in place, everything else is moved to `output`.
fn detach(child: &mut Expression, output: &mut Vec<Expression>) {
    if !matches!(child, Expression::Variable(_)) {
        output.push(mem::replace(child, LEAF));
    }
}

/// **(internal)** Placeholder node used when a subtree is taken out of its parent.
const LEAF: Expression = Expression::Variable(Variable('A'));

/// **(internal)** One unit of work of the iterative evaluation.
enum EvalStep<'a> {
    Visit(&'a Expression),
    Negate,
    Apply(BinaryOp),
}

/// Children are detached into a heap allocated stack before the node itself is freed,
/// so dropping a deep tree does not recurse.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Expression::Variable(a), Expression::Variable(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Expression::Negation(a), Expression::Negation(b)) => stack.push((&**a, &**b)),
                (Expression::Binary(op_a, l_a, r_a), Expression::Binary(op_b, l_b, r_b)) => {
                    if op_a != op_b {
                        return false;
                    }
                    stack.push((&**r_a, &**r_b));
                    stack.push((&**l_a, &**l_b));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expression {}

impl TryFrom<&str> for Expression {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let tokens = tokenize(value)?;
        let (expression, _) = parse(&tokens)?;
        Ok(expression)
    }
}

impl FromStr for Expression {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::try_from(s)
    }
}

/// **(internal)** One piece of the iterative printing of an expression.
enum Piece<'a> {
    Node(&'a Expression),
    Operator(BinaryOp),
    Close,
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Node(Expression::Variable(var)) => write!(f, "{}", var)?,
                Piece::Node(Expression::Negation(inner)) => {
                    write!(f, "~")?;
                    stack.push(Piece::Node(inner));
                }
                Piece::Node(Expression::Binary(op, l, r)) => {
                    write!(f, "(")?;
                    stack.push(Piece::Close);
                    stack.push(Piece::Node(r));
                    stack.push(Piece::Operator(*op));
                    stack.push(Piece::Node(l));
                }
                Piece::Operator(op) => write!(f, " {} ", op)?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
